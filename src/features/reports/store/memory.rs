use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::reports::models::{NewReport, Report, ReportStatus};
use crate::features::reports::store::ReportStore;

const SEED_PHOTO_POTHOLE: &str =
    "https://via.placeholder.com/400x200/5095e0/FFFFFF?text=POTHOLE+PHOTO";
const SEED_PHOTO_LIGHTING: &str =
    "https://via.placeholder.com/400x200/5095e0/FFFFFF?text=LIGHTING+PHOTO";

/// Demo reports loaded at startup, in list order
pub fn seed_reports(now: DateTime<Utc>) -> Vec<Report> {
    vec![
        Report {
            id: 1,
            title: "Dangerous Pothole".to_string(),
            summary: "Urgent repair needed on the main street.".to_string(),
            location: "Av. Libertador, Sector 5 (Lat: -34.6037, Lon: -58.3816)".to_string(),
            latitude: -34.6037,
            longitude: -58.3816,
            category: "Infrastructure".to_string(),
            photo_url: SEED_PHOTO_POTHOLE.to_string(),
            status: ReportStatus::Pending,
            created_at: now,
        },
        Report {
            id: 2,
            title: "Burnt-out Street Lamp".to_string(),
            summary: "The corner street light has been off for 3 days and affects safety."
                .to_string(),
            location: "Calle 10 & Mitre (Lat: -34.6137, Lon: -58.3916)".to_string(),
            latitude: -34.6137,
            longitude: -58.3916,
            category: "Street Lighting".to_string(),
            photo_url: SEED_PHOTO_LIGHTING.to_string(),
            status: ReportStatus::InProgress,
            created_at: now,
        },
    ]
}

struct Inner {
    reports: VecDeque<Report>,
    next_id: i64,
}

/// Process-lifetime report store
pub struct InMemoryReportStore {
    inner: RwLock<Inner>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self::with_reports(Vec::new())
    }

    /// Store preloaded with `reports` (given newest first). The sequence
    /// continues after the highest preloaded id.
    pub fn with_reports(reports: Vec<Report>) -> Self {
        let next_id = reports.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner {
                reports: reports.into(),
                next_id,
            }),
        }
    }

    /// Store preloaded with [`seed_reports`]
    pub fn seeded() -> Self {
        Self::with_reports(seed_reports(Utc::now()))
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.reports.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.reports.is_empty()
    }
}

impl Default for InMemoryReportStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn list(&self) -> Result<Vec<Report>> {
        let inner = self.inner.read().await;
        Ok(inner.reports.iter().cloned().collect())
    }

    async fn create(&self, data: NewReport) -> Result<Report> {
        let mut inner = self.inner.write().await;

        let report = Report {
            id: inner.next_id,
            title: data.title,
            summary: data.summary,
            location: data.location,
            latitude: data.latitude,
            longitude: data.longitude,
            category: data.category,
            photo_url: data.photo_url,
            status: ReportStatus::Pending,
            created_at: Utc::now(),
        };

        inner.next_id += 1;
        inner.reports.push_front(report.clone());

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_report(title: &str) -> NewReport {
        NewReport {
            title: title.to_string(),
            summary: "summary".to_string(),
            location: "somewhere".to_string(),
            photo_url: "http://x/img.jpg".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            category: "General".to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeded_store_lists_seeds_in_order() {
        let store = InMemoryReportStore::seeded();
        let ids: Vec<i64> = store.list().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_seeded_sequence_starts_at_three() {
        let store = InMemoryReportStore::seeded();
        let report = store.create(new_report("first")).await.unwrap();
        assert_eq!(report.id, 3);
        assert_eq!(report.status, ReportStatus::Pending);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = InMemoryReportStore::new();
        assert!(store.is_empty().await);
        assert!(store.list().await.unwrap().is_empty());
        assert_eq!(store.create(new_report("a")).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_create_inserts_at_front() {
        let store = InMemoryReportStore::seeded();
        store.create(new_report("a")).await.unwrap();
        store.create(new_report("b")).await.unwrap();

        let titles: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(
            titles,
            vec!["b", "a", "Dangerous Pothole", "Burnt-out Street Lamp"]
        );
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(InMemoryReportStore::seeded());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(new_report(&i.to_string())).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort();
        assert_eq!(ids, (3..19).collect::<Vec<i64>>());
        assert_eq!(store.len().await, 18);

        // List order still follows the sequence, newest first
        let listed: Vec<i64> = store.list().await.unwrap().iter().map(|r| r.id).collect();
        let mut expected: Vec<i64> = (3..19).rev().collect();
        expected.extend([1, 2]);
        assert_eq!(listed, expected);
    }
}
