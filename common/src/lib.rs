pub mod aggregate;
pub mod error;
pub mod filter;
pub mod job;
pub mod locator;
pub mod metric;

pub use aggregate::{aggregate, MetricSource};
pub use error::{Error, Result};
pub use filter::MetricFilter;
pub use job::{JobDetail, JobId, JobOverview, JobStatus, JobsOverview, TaskId, Vertex};
pub use locator::{locate, AmbiguousJob, JobSelection, Located, THROTTLE_PAUSE};
pub use metric::{AggregatedMetric, MetricDescriptor, MetricValue, MAX_METRICS_REQUEST};
