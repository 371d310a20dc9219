//! Local stand-in for the fetchpix site, so load runs and tests do not have
//! to hit the real thing. Serves a tiny search page and records every request
//! it sees.
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::Html,
    routing::get,
    Router,
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use lazy_static::lazy_static;
use serde::Deserialize;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    pub path: &'static str,
    pub query: Option<String>,
    pub user_agent: Option<String>,
}

/// Shared, cloneable log of every request the service handled, in arrival
/// order.
#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<RequestRecord>>>);

impl RequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<RequestRecord> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }

    fn push(&self, record: RequestRecord) {
        self.0.lock().unwrap().push(record);
    }
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

pub fn router(log: RequestLog) -> Router {
    Router::new()
        .route("/", get(search))
        .route("/limited", get(limited))
        .with_state(log)
}

/// Same routes, but every response is a 500. For exercising the error path.
pub fn failing_router(log: RequestLog) -> Router {
    Router::new().route("/", get(always_error)).with_state(log)
}

pub async fn run(addr: SocketAddr) {
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, router(RequestLog::new()))
        .await
        .unwrap();
}

fn record(log: &RequestLog, path: &'static str, params: &SearchParams, headers: &HeaderMap) {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    debug!(path, query = ?params.q, "request");
    log.push(RequestRecord {
        path,
        query: params.q.clone(),
        user_agent,
    });
}

fn page(query: Option<&str>) -> Html<String> {
    match query {
        Some(q) => Html(format!(
            "<html><body><h1>fetchpix</h1><p>results for {q}</p></body></html>"
        )),
        None => Html("<html><body><h1>fetchpix</h1></body></html>".to_string()),
    }
}

async fn search(
    State(log): State<RequestLog>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> Html<String> {
    record(&log, "/", &params, &headers);
    page(params.q.as_deref())
}

lazy_static! {
    static ref LIMITED: Arc<DefaultDirectRateLimiter> = Arc::new(RateLimiter::direct(
        Quota::per_second(NonZeroU32::new(500).unwrap())
    ));
}

async fn limited(
    State(log): State<RequestLog>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> Result<Html<String>, StatusCode> {
    record(&log, "/limited", &params, &headers);
    match LIMITED.check() {
        Ok(_) => Ok(page(params.q.as_deref())),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

async fn always_error(
    State(log): State<RequestLog>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> StatusCode {
    record(&log, "/", &params, &headers);
    StatusCode::INTERNAL_SERVER_ERROR
}
