//! Core library for the Tally summation micro-benchmark.
//!
//! Most users run the `tally` binary from the `tally-cli` crate; it parses
//! the embedded TOML through [`config::Config`], feeds the bound to
//! [`sum::sum_below`], and prints the [`report`] line. This crate holds those
//! pieces plus the stderr [`log!`] facility and the top-level [`Error`]
//! funnel.

pub mod config;
pub mod error;
pub mod log;
pub mod report;
pub mod sum;

pub use error::Error;

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
