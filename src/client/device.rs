//! Device capabilities used by the report form: photo capture and location.

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::error::DeviceError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

#[async_trait]
pub trait Camera: Send + Sync {
    /// Capture a photo and return its reference (URI or URL)
    async fn capture(&self) -> Result<String, DeviceError>;
}

#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn current_position(&self) -> Result<Position, DeviceError>;
}

#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Human-readable address for `position`, `None` when nothing matches
    async fn reverse(&self, position: Position) -> Result<Option<String>, DeviceError>;
}

/// Camera backed by a reference the user typed in. Empty means cancelled.
#[derive(Debug, Clone)]
pub struct ProvidedPhoto(pub Option<String>);

#[async_trait]
impl Camera for ProvidedPhoto {
    async fn capture(&self) -> Result<String, DeviceError> {
        self.0
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or(DeviceError::Cancelled)
    }
}

/// Position source backed by coordinates the user typed in. `None` behaves
/// like a denied location permission.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Option<Position>);

#[async_trait]
impl PositionSource for FixedPosition {
    async fn current_position(&self) -> Result<Position, DeviceError> {
        self.0.ok_or(DeviceError::PermissionDenied)
    }
}

/// Nominatim reverse geocoding response
#[derive(Debug, Deserialize)]
pub struct NominatimReverseResponse {
    pub display_name: Option<String>,
    pub address: Option<NominatimAddress>,
}

/// Nominatim address components
#[derive(Debug, Default, Deserialize)]
pub struct NominatimAddress {
    pub road: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
}

impl NominatimAddress {
    /// Get city, falling back to town or village
    pub fn get_city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .or(self.town.as_deref())
            .or(self.village.as_deref())
    }
}

impl NominatimReverseResponse {
    /// "street, city" when both are known, otherwise the best available name
    pub fn place_name(&self) -> Option<String> {
        let address = self.address.as_ref();
        let road = address.and_then(|a| a.road.as_deref());
        let city = address.and_then(|a| a.get_city());

        match (road, city) {
            (Some(road), Some(city)) => Some(format!("{}, {}", road, city)),
            (Some(part), None) | (None, Some(part)) => Some(part.to_string()),
            (None, None) => self.display_name.clone(),
        }
    }
}

/// Reverse geocoder using the Nominatim API
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>) -> Result<Self, DeviceError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                "Reporta/",
                env!("CARGO_PKG_VERSION"),
                " (citizen-report-client)"
            ))
            .build()
            .map_err(|e| DeviceError::Unavailable(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn reverse(&self, position: Position) -> Result<Option<String>, DeviceError> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&format=json&addressdetails=1",
            self.base_url,
            urlencoding::encode(&position.latitude.to_string()),
            urlencoding::encode(&position.longitude.to_string()),
        );

        tracing::debug!("Reverse geocoding: {:?} -> {}", position, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Nominatim request failed: {:?}", e);
            DeviceError::Unavailable(format!("Nominatim request failed: {}", e))
        })?;

        if !response.status().is_success() {
            tracing::warn!("Nominatim returned status: {}", response.status());
            return Ok(None);
        }

        let body: NominatimReverseResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Nominatim response: {:?}", e);
            DeviceError::Unavailable(format!("Failed to parse Nominatim response: {}", e))
        })?;

        Ok(body.place_name())
    }
}
