pub mod filter_service;
pub mod metric_service;
pub mod smoothing_service;
pub mod summary_service;

pub use filter_service::{DateRange, EntryVisibility, FilterService};
pub use metric_service::MetricService;
pub use smoothing_service::{SmoothingMode, SmoothingService};
pub use summary_service::SummaryService;
