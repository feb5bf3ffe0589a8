//! Screen flow of the report client: `Login -> Home -> NewReport -> Home`.

use std::sync::Arc;

use crate::client::api::ReportApi;
use crate::client::auth::{AuthMode, Authenticator, Credentials, Session};
use crate::client::device::{Camera, Position, PositionSource, ReverseGeocoder};
use crate::client::error::{ClientError, DeviceError};
use crate::features::reports::dtos::{CreateReportDto, ReportResponseDto};

/// Shown in the location field until a position has been resolved
pub const LOCATION_PLACEHOLDER: &str = "Get location...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
    NewReport,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Login => write!(f, "login"),
            Screen::Home => write!(f, "home"),
            Screen::NewReport => write!(f, "new report"),
        }
    }
}

/// User-facing alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn success(body: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            body: body.into(),
        }
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            body: body.into(),
        }
    }
}

impl From<&ClientError> for Notice {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Connectivity(_) => Notice::error("Could not connect to the server."),
            other => Notice::error(other.to_string()),
        }
    }
}

/// State of the new-report form
#[derive(Debug, Clone, PartialEq)]
pub struct ReportForm {
    pub title: String,
    pub summary: String,
    pub category: Option<String>,
    pub photo_url: Option<String>,
    pub location: String,
    pub position: Option<Position>,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            summary: String::new(),
            category: None,
            photo_url: None,
            location: LOCATION_PLACEHOLDER.to_string(),
            position: None,
        }
    }
}

impl ReportForm {
    /// Request body as submitted. Empty text is sent as-is so the server's
    /// required-field check decides.
    pub fn to_dto(&self) -> CreateReportDto {
        CreateReportDto {
            title: Some(self.title.clone()),
            summary: Some(self.summary.clone()),
            location: Some(self.location.clone()),
            photo_url: self.photo_url.clone(),
            latitude: self.position.map(|p| p.latitude),
            longitude: self.position.map(|p| p.longitude),
            category: self.category.clone(),
        }
    }
}

pub struct ReportaApp {
    api: Arc<dyn ReportApi>,
    authenticator: Arc<dyn Authenticator>,
    screen: Screen,
    auth_mode: AuthMode,
    session: Option<Session>,
    feed: Vec<ReportResponseDto>,
    loading: bool,
    form: Option<ReportForm>,
}

impl ReportaApp {
    pub fn new(api: Arc<dyn ReportApi>, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            api,
            authenticator,
            screen: Screen::Login,
            auth_mode: AuthMode::default(),
            session: None,
            feed: Vec::new(),
            loading: false,
            form: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn feed(&self) -> &[ReportResponseDto] {
        &self.feed
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> Option<&ReportForm> {
        self.form.as_ref()
    }

    fn expect_screen(&self, screen: Screen, action: &'static str) -> Result<(), ClientError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(ClientError::Navigation {
                screen: self.screen,
                action,
            })
        }
    }

    /// Editable form, only while on the new-report screen
    pub fn form_mut(&mut self) -> Result<&mut ReportForm, ClientError> {
        self.expect_screen(Screen::NewReport, "edit")?;
        self.form.as_mut().ok_or(ClientError::Navigation {
            screen: self.screen,
            action: "edit",
        })
    }

    pub fn toggle_auth_mode(&mut self) -> Result<AuthMode, ClientError> {
        self.expect_screen(Screen::Login, "toggle")?;
        self.auth_mode = self.auth_mode.toggled();
        Ok(self.auth_mode)
    }

    /// Sign in (or up), then enter the feed and load it
    pub async fn authenticate(&mut self, credentials: Credentials) -> Result<(), ClientError> {
        self.expect_screen(Screen::Login, "authenticate")?;

        let session = self
            .authenticator
            .authenticate(self.auth_mode, &credentials)
            .await?;
        tracing::info!("Signed in as '{}'", session.email);

        self.session = Some(session);
        self.screen = Screen::Home;
        self.refresh().await;
        Ok(())
    }

    /// Reload the feed. Failures are logged and keep the current feed.
    pub async fn refresh(&mut self) {
        self.loading = true;

        match self.api.list_reports().await {
            Ok(reports) => {
                tracing::debug!("Feed refreshed with {} reports", reports.len());
                self.feed = reports;
            }
            Err(e) => {
                tracing::warn!("Failed to refresh reports: {}", e);
            }
        }

        self.loading = false;
    }

    pub fn open_new_report(&mut self) -> Result<(), ClientError> {
        self.expect_screen(Screen::Home, "new report")?;
        self.form = Some(ReportForm::default());
        self.screen = Screen::NewReport;
        Ok(())
    }

    /// Discard the form and go back to the feed without contacting the server
    pub fn cancel_new_report(&mut self) -> Result<(), ClientError> {
        self.expect_screen(Screen::NewReport, "cancel")?;
        self.form = None;
        self.screen = Screen::Home;
        Ok(())
    }

    /// Attach a photo. A cancelled or failed capture leaves the form untouched.
    pub async fn capture_photo(&mut self, camera: &dyn Camera) -> Result<(), ClientError> {
        self.expect_screen(Screen::NewReport, "photo")?;

        match camera.capture().await {
            Ok(uri) => {
                self.form_mut()?.photo_url = Some(uri);
            }
            Err(e) => tracing::info!("Photo capture skipped: {}", e),
        }
        Ok(())
    }

    /// Resolve the current position to an address. On any failure the
    /// location keeps its previous value.
    pub async fn locate(
        &mut self,
        source: &dyn PositionSource,
        geocoder: &dyn ReverseGeocoder,
    ) -> Result<(), ClientError> {
        self.expect_screen(Screen::NewReport, "locate")?;

        let resolved = async {
            let position = source.current_position().await?;
            let place = geocoder
                .reverse(position)
                .await?
                .ok_or_else(|| DeviceError::Unavailable("no address found".to_string()))?;
            Ok::<_, DeviceError>((position, place))
        }
        .await;

        match resolved {
            Ok((position, place)) => {
                let form = self.form_mut()?;
                form.position = Some(position);
                form.location = place;
            }
            Err(e) => tracing::info!("Location lookup skipped: {}", e),
        }
        Ok(())
    }

    /// Send the form. On success the feed is reloaded and the app returns
    /// home; on failure it stays on the form with the form intact.
    pub async fn submit(&mut self) -> Result<Notice, ClientError> {
        self.expect_screen(Screen::NewReport, "submit")?;
        let dto = self
            .form
            .as_ref()
            .map(ReportForm::to_dto)
            .unwrap_or_default();

        let created = self.api.create_report(&dto).await.inspect_err(|e| {
            tracing::warn!("Report submission failed: {}", e);
        })?;
        tracing::info!("Report {} submitted", created.report.id);

        self.form = None;
        self.screen = Screen::Home;
        self.refresh().await;

        Ok(Notice::success(created.message))
    }
}
