use axum::Router;
use fetchpix_bench::TrafficConfig;
use std::net::SocketAddr;
use std::sync::OnceLock;

#[allow(unused)]
pub fn init_tracing() {
    static ONCE: OnceLock<()> = OnceLock::new();
    ONCE.get_or_init(|| {
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter("fetchpix_bench=debug,mock_service=debug,balter=debug")
            .init();
    });
}

/// Serves `router` on an ephemeral local port and returns its address.
#[allow(unused)]
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

#[allow(unused)]
pub fn config_for(addr: SocketAddr) -> TrafficConfig {
    TrafficConfig {
        base_url: format!("http://{addr}/"),
        ..Default::default()
    }
}
