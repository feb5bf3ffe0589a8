use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::client::error::ClientError;

/// Whether the login screen is signing in or creating an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Your voice, your community",
            AuthMode::Register => "Create your account",
        }
    }

    pub fn action_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::Register => "Sign up",
        }
    }

    pub fn switch_hint(self) -> &'static str {
        match self {
            AuthMode::Login => "No account yet? Sign up",
            AuthMode::Register => "Already have an account? Sign in",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Client-side session. Never sent to the report store.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub email: String,
    pub mode: AuthMode,
    pub started_at: DateTime<Utc>,
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<Session, ClientError>;
}

/// Accepts every submission. Stands in for a real identity provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubAuthenticator;

#[async_trait]
impl Authenticator for StubAuthenticator {
    async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<Session, ClientError> {
        tracing::debug!("Stub authentication ({:?}) for '{}'", mode, credentials.email);

        Ok(Session {
            email: credentials.email.clone(),
            mode,
            started_at: Utc::now(),
        })
    }
}
