use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::sync::mpsc::UnboundedSender;

use crate::event::TapEvent;

/// Read one connection until the peer hangs up, emitting a `Data` event per
/// chunk and a final `Closed` event.
///
/// Chunk boundaries are whatever the transport delivers; nothing here frames
/// or reassembles the byte stream. Bytes are decoded as UTF-8 with
/// replacement characters for anything invalid.
pub async fn read_session(
    mut stream: TcpStream,
    seq: u64,
    tx: UnboundedSender<TapEvent>,
) -> tokio::io::Result<()> {
    let mut read_buffer = BytesMut::with_capacity(64 * 1024);

    // repeat until nothing to read
    loop {
        read_buffer.reserve(1024);
        if stream.read_buf(&mut read_buffer).await? == 0 {
            break;
        }

        let chunk = read_buffer.split().freeze();
        let text = String::from_utf8_lossy(&chunk).into_owned();
        if tx.send(TapEvent::Data { seq, text }).is_err() {
            return Ok(()); // printer is gone, nothing left to log to
        }
    }

    let _ = tx.send(TapEvent::Closed { seq });

    Ok(())
}
