mod utils;
#[allow(unused)]
use utils::*;

// Balter-driven smoke run; slow, so gated like the rest of the framework
// integration suite: `cargo test -p fetchpix-bench-tests --features integration`
#[cfg(feature = "integration")]
mod tests {
    use super::*;

    use balter::prelude::*;
    use fetchpix_bench::{traffic, Session, VOCABULARY};
    use mock_service::RequestLog;
    use std::num::NonZeroU32;
    use std::time::Duration;

    #[tokio::test]
    async fn balter_drives_the_search_sweep() {
        init_tracing();
        let log = RequestLog::new();
        let addr = spawn(mock_service::router(log.clone())).await;

        let session = traffic::install(Session::new(&config_for(addr)).unwrap());
        session.on_start();

        traffic::search_traffic()
            .tps(NonZeroU32::new(50).unwrap().into())
            .duration(Duration::from_secs(5))
            .await;

        session.on_stop();

        let records = log.records();
        assert!(!records.is_empty());
        assert!(records.iter().any(|r| r.query.is_none()));
        for word in VOCABULARY {
            assert!(records.iter().any(|r| r.query.as_deref() == Some(word)));
        }
    }
}
