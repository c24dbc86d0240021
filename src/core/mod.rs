//! Pure services over a [`crate::ledger::LedgerStore`].

pub mod services;
