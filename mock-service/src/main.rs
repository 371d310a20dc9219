use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    FmtSubscriber::builder()
        .with_env_filter("mock_service=debug")
        .init();

    let addr: SocketAddr = "0.0.0.0:3000".parse().unwrap();
    info!("mock search service listening on {addr}");
    mock_service::run(addr).await;
}
