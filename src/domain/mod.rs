//! Read-only value objects produced by the aggregation services and handed
//! to renderers in exactly this shape and order.

pub mod pivot;
pub mod series;
pub mod summary;

pub use pivot::HeatmapPivot;
pub use series::{DailyPoint, DailySeries, SmoothedPoint, SmoothedSeries};
pub use summary::{
    CategoryShare, CategoryStat, CategorySummary, CategoryTotal, LedgerTotals, MonthTotals,
    MonthlySummary,
};
