use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain `{message}` envelope used for confirmations and failures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    /// Field-level details, only present on validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: Option<Vec<String>>) -> Self {
        Self {
            message: message.into(),
            errors,
        }
    }
}
