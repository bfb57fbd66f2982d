//! Summary handlers - role dashboards and club statistics.

mod summary_queries;

pub use summary_queries::SummaryQueries;
