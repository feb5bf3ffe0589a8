//! Citizen report feed and submission.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/reports` | No | List all reports, newest first |
//! | POST | `/api/reports` | No | Submit a new report |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::ReportService;
pub use store::{InMemoryReportStore, ReportStore};
