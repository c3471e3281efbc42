use tokio::sync::mpsc::UnboundedReceiver;

use crate::event::TapEvent;

const SEPARATOR: &str = "------------------------------------";

/// How events turn into console lines. `Plain` announces connections
/// anonymously; `Counted` numbers them and frames each notice with a
/// separator line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeStyle {
    Plain,
    Counted,
}

impl NoticeStyle {
    /// Append the console lines for `event` to `dst`.
    pub fn render(&self, event: &TapEvent, dst: &mut String) {
        match (self, event) {
            (_, TapEvent::Listening { .. }) => {
                dst.push_str("server is listening...\n");
            }
            (NoticeStyle::Plain, TapEvent::Opened { .. }) => {
                dst.push_str("client connected\n");
            }
            (NoticeStyle::Counted, TapEvent::Opened { seq }) => {
                dst.push_str("\n\n");
                dst.push_str(&format!("client connected at : {seq}\n"));
                dst.push_str(SEPARATOR);
                dst.push('\n');
            }
            // received bytes go out verbatim, one line per chunk
            (_, TapEvent::Data { text, .. }) => {
                dst.push_str(text);
                dst.push('\n');
            }
            (NoticeStyle::Plain, TapEvent::Closed { .. }) => {
                dst.push_str("client goodbye\n");
            }
            (NoticeStyle::Counted, TapEvent::Closed { seq }) => {
                dst.push_str(SEPARATOR);
                dst.push('\n');
                dst.push_str(&format!("client goodbye {seq}\n"));
            }
        }
    }
}

/// Drain the event channel and print each notice to stdout. Returns once
/// every sender is gone.
pub async fn print_events(style: NoticeStyle, mut rx: UnboundedReceiver<TapEvent>) {
    let mut out = String::new();
    while let Some(event) = rx.recv().await {
        out.clear();
        style.render(&event, &mut out);
        print!("{out}");
    }
}

// =================== UNIT TESTS ========================
