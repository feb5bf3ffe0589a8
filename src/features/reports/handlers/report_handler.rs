use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{CreateReportDto, CreateReportResponseDto, ReportResponseDto};
use crate::features::reports::services::ReportService;
use crate::shared::types::MessageResponse;

pub const REPORT_CREATED_MESSAGE: &str = "Report submitted successfully.";

/// List all reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "All reports, most recent first", body = Vec<ReportResponseDto>)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<Vec<ReportResponseDto>>> {
    let reports = service.list().await?;
    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();
    Ok(Json(dtos))
}

/// Submit a new report
///
/// `title`, `summary`, `location` and `photo_url` are required and must be
/// non-empty. Missing coordinates default to 0 and a missing category to
/// "General".
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report created", body = CreateReportResponseDto),
        (status = 400, description = "Missing required fields", body = MessageResponse)
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<CreateReportResponseDto>)> {
    let report = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateReportResponseDto {
            message: REPORT_CREATED_MESSAGE.to_string(),
            report: report.into(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::MISSING_FIELDS_MESSAGE;
    use crate::features::reports::routes::routes;
    use crate::features::reports::store::InMemoryReportStore;
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;

    fn test_server() -> TestServer {
        let store = Arc::new(InMemoryReportStore::seeded());
        let service = Arc::new(ReportService::new(store));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_list_returns_seeds() {
        let server = test_server();

        let response = server.get("/api/reports").await;
        response.assert_status_ok();

        let reports: Vec<ReportResponseDto> = response.json();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].id, 1);
        assert_eq!(reports[1].id, 2);
    }

    #[tokio::test]
    async fn test_create_scenario() {
        let server = test_server();
        let before = Utc::now();

        let response = server
            .post("/api/reports")
            .json(&json!({
                "title": "Pothole",
                "summary": "deep",
                "location": "Main St",
                "photo_url": "http://x/img.jpg"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: CreateReportResponseDto = response.json();
        assert_eq!(body.message, REPORT_CREATED_MESSAGE);
        assert_eq!(body.report.id, 3);
        assert_eq!(body.report.title, "Pothole");
        assert_eq!(body.report.category, "General");
        assert_eq!(body.report.latitude, 0.0);
        assert_eq!(body.report.longitude, 0.0);
        assert_eq!(
            body.report.status,
            crate::features::reports::models::ReportStatus::Pending
        );
        assert!(body.report.date >= before);
    }

    #[tokio::test]
    async fn test_create_wire_shape() {
        let server = test_server();

        let response = server
            .post("/api/reports")
            .json(&json!({
                "title": "Flooded corner",
                "summary": "water everywhere",
                "location": "5th Ave",
                "photo_url": "http://x/flood.jpg",
                "latitude": -34.5,
                "longitude": -58.4,
                "category": "Drainage"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: serde_json::Value = response.json();
        let report = &body["report"];
        assert_eq!(report["status"], "Pending");
        assert_eq!(report["category"], "Drainage");
        assert_eq!(report["latitude"], -34.5);
        assert!(report["date"].is_string());
        assert!(report["id"].is_i64());
    }

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let server = test_server();

        let response = server
            .post("/api/reports")
            .json(&json!({ "title": "", "summary": "x", "location": "y", "photo_url": "z" }))
            .await;
        response.assert_status_bad_request();

        let body: MessageResponse = response.json();
        assert_eq!(body.message, MISSING_FIELDS_MESSAGE);
        assert_eq!(body.errors, Some(vec!["title".to_string()]));

        let reports: Vec<ReportResponseDto> = server.get("/api/reports").await.json();
        assert_eq!(reports.len(), 2);
    }

    #[tokio::test]
    async fn test_absent_photo_rejected() {
        let server = test_server();

        let response = server
            .post("/api/reports")
            .json(&json!({ "title": "t", "summary": "s", "location": "Get location..." }))
            .await;
        response.assert_status_bad_request();

        let body: MessageResponse = response.json();
        assert_eq!(body.errors, Some(vec!["photo_url".to_string()]));
    }

    #[tokio::test]
    async fn test_malformed_json_rejected() {
        let server = test_server();

        let response = server
            .post("/api/reports")
            .text("{not json")
            .content_type("application/json")
            .await;
        response.assert_status_bad_request();

        let body: MessageResponse = response.json();
        assert!(body.message.starts_with("Invalid JSON syntax"));
    }

    #[tokio::test]
    async fn test_list_after_valid_and_invalid_create() {
        let server = test_server();

        server
            .post("/api/reports")
            .json(&json!({
                "title": "Pothole",
                "summary": "deep",
                "location": "Main St",
                "photo_url": "http://x/img.jpg"
            }))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/api/reports")
            .json(&json!({ "title": "", "summary": "x", "location": "y", "photo_url": "z" }))
            .await
            .assert_status_bad_request();

        let reports: Vec<ReportResponseDto> = server.get("/api/reports").await.json();
        let ids: Vec<i64> = reports.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(reports[0].title, "Pothole");
    }
}
