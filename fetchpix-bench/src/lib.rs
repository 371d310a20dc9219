//! Search-query load traffic for the fetchpix image search site.
//!
//! This crate defines the traffic a single simulated user generates: one
//! request to the front page followed by one search per word in a fixed
//! vocabulary. Pacing, concurrency, and run statistics are owned by
//! [balter](https://docs.rs/balter); this crate only describes the requests.
pub mod config;
pub mod error;
pub mod report;
pub mod session;
pub mod traffic;

pub use config::TrafficConfig;
pub use error::TrafficError;
pub use session::Session;
pub use traffic::{run_task, search_traffic, VOCABULARY};
