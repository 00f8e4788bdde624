//! Terminal dashboard over the inventory analytics engine.

pub mod report;
pub mod seed;

pub use report::{DashboardReport, ReportRow};
pub use seed::demo_catalog;
