pub mod event;
pub mod notice;
pub mod server;
pub mod session;

pub use event::TapEvent;
pub use notice::{NoticeStyle, print_events};
pub use server::Server;
