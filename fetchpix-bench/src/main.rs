use anyhow::Result;
use balter::prelude::*;
use fetchpix_bench::{traffic, Session, TrafficConfig};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_env_filter("fetchpix_bench=info,balter=info")
        .init();

    let config = TrafficConfig::from_env()?;
    info!(
        base_url = %config.base_url,
        tps = config.tps.get(),
        duration = %humantime::format_duration(config.duration),
        "starting search traffic"
    );

    let session = traffic::install(Session::new(&config)?);
    session.on_start();

    traffic::search_traffic()
        .tps(config.tps.into())
        .duration(config.duration)
        .await;

    session.on_stop();
    info!("run complete");
    Ok(())
}
