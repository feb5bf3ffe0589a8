//! Report client: sign-in stub, report feed and the new-report form.
//!
//! All state lives in memory and is lost when the process exits.

pub mod api;
pub mod app;
pub mod auth;
pub mod device;
pub mod error;

pub use api::{HttpReportApi, ReportApi};
pub use app::{Notice, ReportForm, ReportaApp, Screen, LOCATION_PLACEHOLDER};
pub use auth::{AuthMode, Authenticator, Credentials, Session, StubAuthenticator};
pub use error::{ClientError, DeviceError};
