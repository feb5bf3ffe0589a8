mod report;

pub use report::{NewReport, Report, ReportStatus, DEFAULT_CATEGORY};
