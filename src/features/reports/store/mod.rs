//! Report storage abstraction.
//!
//! The store owns the id sequence and the newest-first ordering; callers hand
//! it already-validated [`NewReport`] values.

mod memory;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::reports::models::{NewReport, Report};

pub use memory::{seed_reports, InMemoryReportStore};

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// All reports, most recently created first
    async fn list(&self) -> Result<Vec<Report>>;

    /// Assign the next id, mark the report pending, stamp the current time and
    /// insert it at the front
    async fn create(&self, data: NewReport) -> Result<Report>;
}
