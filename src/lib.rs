#![doc(test(attr(deny(warnings))))]

//! Household Ledger turns dated income/expense rows into the monthly,
//! per-category, daily and weekday/week aggregates that reports and
//! dashboards draw from.
//!
//! Data flows one way: [`ledger::LedgerStore`] → [`core::services::FilterService`]
//! → [`core::services::SummaryService`] / [`core::services::SmoothingService`] /
//! [`core::services::MetricService`]. Every derived structure is recomputed
//! from scratch and owned by its caller.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod utils;

pub use errors::{LedgerError, Result};

/// Initializes global tracing; the startup log is emitted once per process.
pub fn init() {
    utils::init_tracing();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_repeatable() {
        super::init();
        super::init();
        super::utils::init_tracing();
    }
}
