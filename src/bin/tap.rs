use socktap::{NoticeStyle, Server, print_events};
use tokio::task;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

const PORT: u16 = 4040;

#[tokio::main(flavor = "current_thread")]
async fn main() -> tokio::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server = Server::bind(PORT)?;
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

    let local = task::LocalSet::new();
    local
        .run_until(async move {
            task::spawn_local(print_events(NoticeStyle::Plain, rx));
            server.serve(tx).await
        })
        .await
}
