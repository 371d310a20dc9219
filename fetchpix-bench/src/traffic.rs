//! The traffic definition: one front-page request followed by one search per
//! vocabulary word, wired into balter as a scenario of metered transactions.
use crate::error::TrafficError;
use crate::report;
use crate::session::Session;
use balter::prelude::*;
use std::sync::OnceLock;

/// Search terms, issued in this order on every task invocation.
pub const VOCABULARY: [&str; 9] = [
    "cat", "dog", "bird", "fish", "monkey", "elephant", "tiger", "lion", "zebra",
];

static SESSION: OnceLock<Session> = OnceLock::new();

/// Installs the process-wide session driven by [`search_traffic`]. The first
/// call wins; later calls return the already-installed session.
pub fn install(session: Session) -> &'static Session {
    SESSION.get_or_init(|| session)
}

fn session() -> &'static Session {
    SESSION
        .get()
        .expect("no session installed; call traffic::install before running the scenario")
}

/// One task invocation: 10 GETs. Requests are independent; a failure is
/// handed to the error hook and the sweep moves on to the next word.
pub async fn run_task(session: &Session) {
    if let Err(err) = front_page(session).await {
        report::print_error(&err);
    }
    for word in VOCABULARY {
        if let Err(err) = search(session, word).await {
            report::print_error(&err);
        }
    }
}

#[scenario]
pub async fn search_traffic() {
    run_task(session()).await;
}

#[transaction]
async fn front_page(session: &Session) -> Result<(), TrafficError> {
    session.fetch_front_page().await
}

#[transaction]
async fn search(session: &Session, word: &str) -> Result<(), TrafficError> {
    session.fetch_search(word).await
}
