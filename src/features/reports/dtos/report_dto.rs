use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::AppError;
use crate::features::reports::models::{NewReport, Report, ReportStatus, DEFAULT_CATEGORY};

/// Response DTO for report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: i64,
    pub title: String,
    pub summary: String,
    /// Free-text address
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
    pub photo_url: String,
    pub status: ReportStatus,
    /// Creation time (RFC 3339, UTC)
    pub date: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            title: r.title,
            summary: r.summary,
            location: r.location,
            latitude: r.latitude,
            longitude: r.longitude,
            category: r.category,
            photo_url: r.photo_url,
            status: r.status,
            date: r.created_at,
        }
    }
}

/// Request DTO for submitting a report
///
/// Required fields are modelled as `Option` so that an absent field is reported
/// the same way as an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReportDto {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,

    #[validate(required, length(min = 1))]
    pub summary: Option<String>,

    #[validate(required, length(min = 1))]
    pub location: Option<String>,

    #[validate(required, length(min = 1))]
    pub photo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl TryFrom<CreateReportDto> for NewReport {
    type Error = AppError;

    fn try_from(dto: CreateReportDto) -> Result<Self, Self::Error> {
        if let Err(e) = dto.validate() {
            let mut fields: Vec<String> =
                e.field_errors().keys().map(|k| k.to_string()).collect();
            fields.sort();
            return Err(AppError::MissingField(fields));
        }

        let category = dto
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(NewReport {
            title: dto.title.unwrap_or_default(),
            summary: dto.summary.unwrap_or_default(),
            location: dto.location.unwrap_or_default(),
            photo_url: dto.photo_url.unwrap_or_default(),
            latitude: dto.latitude.unwrap_or(0.0),
            longitude: dto.longitude.unwrap_or(0.0),
            category,
        })
    }
}

/// Response DTO for a successful submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReportResponseDto {
    pub message: String,
    pub report: ReportResponseDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateReportDto {
        CreateReportDto {
            title: Some("Pothole".to_string()),
            summary: Some("deep".to_string()),
            location: Some("Main St".to_string()),
            photo_url: Some("http://x/img.jpg".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let new = NewReport::try_from(valid_dto()).unwrap();
        assert_eq!(new.latitude, 0.0);
        assert_eq!(new.longitude, 0.0);
        assert_eq!(new.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_explicit_values_kept() {
        let dto = CreateReportDto {
            latitude: Some(-34.6),
            longitude: Some(-58.38),
            category: Some("Lighting".to_string()),
            ..valid_dto()
        };
        let new = NewReport::try_from(dto).unwrap();
        assert_eq!(new.latitude, -34.6);
        assert_eq!(new.longitude, -58.38);
        assert_eq!(new.category, "Lighting");
    }

    #[test]
    fn test_blank_category_falls_back_to_default() {
        let dto = CreateReportDto {
            category: Some("  ".to_string()),
            ..valid_dto()
        };
        assert_eq!(NewReport::try_from(dto).unwrap().category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_empty_and_absent_fields_reported() {
        let dto = CreateReportDto {
            title: Some(String::new()),
            photo_url: None,
            ..valid_dto()
        };
        match NewReport::try_from(dto) {
            Err(AppError::MissingField(fields)) => {
                assert_eq!(fields, vec!["photo_url".to_string(), "title".to_string()]);
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_null_coordinates_deserialize_as_absent() {
        let dto: CreateReportDto = serde_json::from_value(serde_json::json!({
            "title": "t",
            "summary": "s",
            "location": "l",
            "photo_url": "p",
            "latitude": null
        }))
        .unwrap();
        assert_eq!(dto.latitude, None);
        assert_eq!(dto.longitude, None);
    }

    #[test]
    fn test_response_uses_date_field() {
        let report = Report {
            id: 7,
            title: "t".to_string(),
            summary: "s".to_string(),
            location: "l".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            category: DEFAULT_CATEGORY.to_string(),
            photo_url: "p".to_string(),
            status: ReportStatus::Pending,
            created_at: Utc::now(),
        };
        let body = serde_json::to_value(ReportResponseDto::from(report)).unwrap();
        assert!(body.get("date").is_some());
        assert!(body.get("created_at").is_none());
        assert_eq!(body["status"], "Pending");
    }
}
