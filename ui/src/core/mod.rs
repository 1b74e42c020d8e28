//! Platform-agnostic data handling: the report model, aggregation and the
//! read-only report source.

pub mod metrics;
pub mod report;
pub mod storage;

pub use metrics::{AggregateMetrics, Metric};
pub use report::{Report, ReportData, ReportStatus};
