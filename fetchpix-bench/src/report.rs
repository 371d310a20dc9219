//! Error hook: failed requests are written to stdout and nothing else.
//! No retries, no classification; balter already counts the error.
use std::fmt::Display;

pub fn format_error<E: Display>(err: &E) -> String {
    format!("Error: {err}")
}

pub fn print_error<E: Display>(err: &E) {
    println!("{}", format_error(err));
}
