//! One simulated user's HTTP session.
//!
//! The session owns a `reqwest` client and the header state applied to every
//! outgoing request. The start and stop hooks both set the user-agent header;
//! the duplicate set on stop is kept deliberately, matching the behavior this
//! traffic profile was captured from.
use crate::config::TrafficConfig;
use crate::error::TrafficError;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use std::sync::RwLock;

pub struct Session {
    client: Client,
    base_url: Url,
    user_agent: HeaderValue,
    headers: RwLock<HeaderMap>,
}

impl Session {
    /// Validates the base URL and user-agent up front so the start/stop hooks
    /// cannot fail.
    pub fn new(config: &TrafficConfig) -> Result<Self, TrafficError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|err| TrafficError::InvalidBaseUrl(err.to_string()))?;
        if config.user_agent.is_empty() {
            return Err(TrafficError::InvalidUserAgent);
        }
        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| TrafficError::InvalidUserAgent)?;
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url,
            user_agent,
            headers: RwLock::new(HeaderMap::new()),
        })
    }

    /// Session-start hook: set the user-agent on the outgoing-request headers.
    pub fn on_start(&self) {
        self.set_user_agent();
    }

    /// Session-stop hook: sets the same header again.
    pub fn on_stop(&self) {
        self.set_user_agent();
    }

    fn set_user_agent(&self) {
        let mut headers = self.headers.write().unwrap();
        headers.insert(header::USER_AGENT, self.user_agent.clone());
    }

    /// Current user-agent header value, if one has been set.
    pub fn user_agent(&self) -> Option<String> {
        self.headers
            .read()
            .unwrap()
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    fn request_headers(&self) -> HeaderMap {
        self.headers.read().unwrap().clone()
    }

    /// GET the site root. Response status is not inspected.
    pub async fn fetch_front_page(&self) -> Result<(), TrafficError> {
        self.client
            .get(self.base_url.clone())
            .headers(self.request_headers())
            .send()
            .await?;
        Ok(())
    }

    /// GET the site root with `q=<word>`. Response status is not inspected.
    pub async fn fetch_search(&self, word: &str) -> Result<(), TrafficError> {
        self.client
            .get(self.base_url.clone())
            .query(&[("q", word)])
            .headers(self.request_headers())
            .send()
            .await?;
        Ok(())
    }
}
