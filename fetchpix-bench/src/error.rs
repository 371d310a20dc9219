use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("user-agent is not a valid header value")]
    InvalidUserAgent,

    #[error("invalid value for {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },
}
