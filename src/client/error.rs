use thiserror::Error;

use crate::client::app::Screen;

/// Failures surfaced to the client user. None of them are retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got a response (server down, DNS, refused, ...)
    #[error("Could not connect to the server: {0}")]
    Connectivity(String),

    /// The server answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected response from the server: {0}")]
    Decode(String),

    #[error("'{action}' is not available on the {screen} screen")]
    Navigation { screen: Screen, action: &'static str },
}

/// Failures of device capabilities (camera, location)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    #[error("Permission denied")]
    PermissionDenied,

    #[error("Cancelled by user")]
    Cancelled,

    #[error("Device capability unavailable: {0}")]
    Unavailable(String),
}
