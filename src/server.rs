use std::net::{Ipv4Addr, SocketAddr};

use log::warn;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task;

use crate::event::TapEvent;
use crate::session::read_session;

// listen(2) backlog
const PEND_CLIENTS: i32 = 64;

/// The listening socket plus the connection counter it owns. The counter is
/// only ever touched from the accept loop, so it stays a plain integer.
pub struct Server {
    listener: TcpListener,
    count: u64,
}

impl Server {
    /// Bind `port` on all interfaces and start listening. Failure here is
    /// fatal to the caller; there is no retry or fallback port.
    pub fn bind(port: u16) -> tokio::io::Result<Server> {
        let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;
        socket.set_nonblocking(true)?;
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        socket.bind(&addr.into())?;
        socket.listen(PEND_CLIENTS)?;

        let listener = TcpListener::from_std(socket.into())?;

        Ok(Server { listener, count: 0 })
    }

    /// Actual bound address, for callers that bound port 0.
    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Announce the listener, then accept connections forever. Each
    /// connection is numbered with the next counter value and read in its
    /// own task. Must run inside a `LocalSet`.
    pub async fn serve(mut self, tx: UnboundedSender<TapEvent>) -> tokio::io::Result<()> {
        let port = self.listener.local_addr()?.port();
        let _ = tx.send(TapEvent::Listening { port });

        loop {
            let (stream, _) = self.listener.accept().await?;

            self.count += 1;
            let seq = self.count;
            let _ = tx.send(TapEvent::Opened { seq });

            let tx_clone = tx.clone();
            task::spawn_local(async move {
                if let Err(e) = read_session(stream, seq, tx_clone).await {
                    match e.kind() {
                        std::io::ErrorKind::ConnectionReset => {}
                        _ => warn!("error handling connection: {:?}", e),
                    }
                }
            });
        }
    }
}
