//! Run configuration, sourced from environment variables.
use crate::error::TrafficError;
use std::env;
use std::num::NonZeroU32;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://fetchpix.one/";

/// User-agent applied to every request of a session.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

const DEFAULT_TPS: u32 = 10;
const DEFAULT_DURATION: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct TrafficConfig {
    pub base_url: String,
    pub user_agent: String,
    pub tps: NonZeroU32,
    pub duration: Duration,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            tps: NonZeroU32::new(DEFAULT_TPS).unwrap(),
            duration: DEFAULT_DURATION,
        }
    }
}

impl TrafficConfig {
    /// Reads `FETCHPIX_BASE_URL`, `FETCHPIX_USER_AGENT`, `FETCHPIX_TPS` and
    /// `FETCHPIX_DURATION` (e.g. `90s`, `5m`), falling back to the defaults
    /// above for anything unset.
    pub fn from_env() -> Result<Self, TrafficError> {
        let mut config = Self::default();

        if let Ok(value) = env::var("FETCHPIX_BASE_URL") {
            config.base_url = value;
        }
        if let Ok(value) = env::var("FETCHPIX_USER_AGENT") {
            config.user_agent = value;
        }
        if let Ok(value) = env::var("FETCHPIX_TPS") {
            config.tps = value.parse().map_err(|_| TrafficError::InvalidConfig {
                var: "FETCHPIX_TPS",
                value: value.clone(),
            })?;
        }
        if let Ok(value) = env::var("FETCHPIX_DURATION") {
            config.duration =
                humantime::parse_duration(&value).map_err(|_| TrafficError::InvalidConfig {
                    var: "FETCHPIX_DURATION",
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }
}
