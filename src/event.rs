/// One observation from the listener or a session, sent over the event
/// channel to the printer.
///
/// `seq` is the value the connection counter had when the connection was
/// accepted. Every session carries one; only the counting output style
/// renders it.
#[derive(Debug, PartialEq, Clone)]
pub enum TapEvent {
    Listening { port: u16 },
    Opened { seq: u64 },
    Data { seq: u64, text: String },
    Closed { seq: u64 },
}
