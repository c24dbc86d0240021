//! Ledger entries, category labels, calendar buckets and the immutable store.

pub mod category;
pub mod entry;
pub mod period;
pub mod store;

pub use category::{Category, CategoryFilter, CategoryPolicy};
pub use entry::{LedgerEntry, RawRow};
pub use period::{bucket_month, bucket_week, bucket_weekday, PeriodKey, WeekKey, WeekdayKey};
pub use store::LedgerStore;
