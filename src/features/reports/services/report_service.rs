use std::sync::Arc;

use crate::core::error::Result;
use crate::features::reports::dtos::CreateReportDto;
use crate::features::reports::models::{NewReport, Report};
use crate::features::reports::store::ReportStore;

/// Service for report operations
pub struct ReportService {
    store: Arc<dyn ReportStore>,
}

impl ReportService {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }

    /// List all reports, newest first
    pub async fn list(&self) -> Result<Vec<Report>> {
        self.store.list().await
    }

    /// Validate a submission and store it as a pending report
    pub async fn create(&self, dto: CreateReportDto) -> Result<Report> {
        let data = NewReport::try_from(dto).inspect_err(|e| {
            tracing::info!("Rejected report submission: {}", e);
        })?;

        let report = self.store.create(data).await?;

        tracing::info!(
            "Created report: id={}, category={}",
            report.id,
            report.category
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::features::reports::models::ReportStatus;
    use crate::features::reports::store::InMemoryReportStore;
    use chrono::Utc;
    use fake::faker::address::en::StreetName;
    use fake::faker::lorem::en::{Sentence, Words};
    use fake::Fake;

    fn seeded_service() -> ReportService {
        ReportService::new(Arc::new(InMemoryReportStore::seeded()))
    }

    fn fake_dto() -> CreateReportDto {
        let title: Vec<String> = Words(1..4).fake();
        CreateReportDto {
            title: Some(title.join(" ")),
            summary: Some(Sentence(3..8).fake()),
            location: Some(StreetName().fake()),
            photo_url: Some("http://x/img.jpg".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_ids_strictly_increase() {
        let service = seeded_service();
        let mut last = service
            .list()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap();

        for _ in 0..10 {
            let report = service.create(fake_dto()).await.unwrap();
            assert!(report.id > last);
            last = report.id;
        }
    }

    #[tokio::test]
    async fn test_create_n_then_list() {
        let service = seeded_service();
        let n = 5;
        let mut created = Vec::new();
        for _ in 0..n {
            created.push(service.create(fake_dto()).await.unwrap().id);
        }

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), n + 2);

        created.reverse();
        let ids: Vec<i64> = listed.iter().map(|r| r.id).collect();
        assert_eq!(&ids[..n], created.as_slice());
        assert_eq!(&ids[n..], &[1, 2]);
    }

    #[tokio::test]
    async fn test_defaults_and_pending_status() {
        let service = seeded_service();
        let before = Utc::now();
        let report = service
            .create(CreateReportDto {
                title: Some("Pothole".to_string()),
                summary: Some("deep".to_string()),
                location: Some("Main St".to_string()),
                photo_url: Some("http://x/img.jpg".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(report.id, 3);
        assert_eq!(report.latitude, 0.0);
        assert_eq!(report.longitude, 0.0);
        assert_eq!(report.category, "General");
        assert_eq!(report.status, ReportStatus::Pending);
        assert!(report.created_at >= before);
        assert!(report.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_missing_field_leaves_store_unchanged() {
        let service = seeded_service();

        let cases = [
            CreateReportDto {
                title: None,
                ..fake_dto()
            },
            CreateReportDto {
                summary: Some(String::new()),
                ..fake_dto()
            },
            CreateReportDto {
                location: None,
                ..fake_dto()
            },
            CreateReportDto {
                photo_url: Some(String::new()),
                ..fake_dto()
            },
        ];

        for dto in cases {
            let err = service.create(dto).await.unwrap_err();
            assert!(matches!(err, AppError::MissingField(_)));
        }

        assert_eq!(service.list().await.unwrap().len(), 2);

        // The rejected submissions did not consume ids
        assert_eq!(service.create(fake_dto()).await.unwrap().id, 3);
    }
}
