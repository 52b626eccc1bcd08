//! Transport Service
//!
//! Bindings for `/api/transports`, including completion and status
//! endpoints.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde::Serialize;

use super::{CrudService, HttpClient, Resource};
use crate::error::ApiResult;
use crate::models::{EntityId, Transport, TransportPayload, TransportStatus};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompleteBody {
    completion_date: String,
}

#[derive(Serialize)]
struct StatusBody {
    status: TransportStatus,
}

#[derive(Clone)]
pub struct TransportService {
    resource: Resource,
}

impl TransportService {
    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: Resource::new(http, "/api/transports"),
        }
    }

    /// Scheduled for today (server's notion of today)
    pub async fn list_today(&self) -> ApiResult<Vec<Transport>> {
        self.resource.list_at("today").await
    }

    /// Mark completed at `at`. The body carries the full timestamp, the
    /// query parameter the ISO date the backend binds.
    pub async fn complete(&self, id: EntityId, at: DateTime<Local>) -> ApiResult<Transport> {
        let date = at.format("%Y-%m-%d").to_string();
        self.resource
            .http()
            .patch(
                &self.resource.path(format!("{}/complete", id)),
                &[("completionDate", date.as_str())],
                &CompleteBody {
                    completion_date: at.to_rfc3339(),
                },
            )
            .await
    }

    pub async fn update_status(&self, id: EntityId, status: TransportStatus) -> ApiResult<Transport> {
        self.resource
            .http()
            .patch(
                &self.resource.path(format!("{}/status", id)),
                &[("status", status.as_str())],
                &StatusBody { status },
            )
            .await
    }
}

#[async_trait(?Send)]
impl CrudService<Transport> for TransportService {
    type Payload = TransportPayload;

    async fn list(&self) -> ApiResult<Vec<Transport>> {
        self.resource.list().await
    }

    async fn get(&self, id: EntityId) -> ApiResult<Transport> {
        self.resource.get(id).await
    }

    async fn create(&self, payload: &TransportPayload) -> ApiResult<Transport> {
        self.resource.create(payload).await
    }

    async fn update(&self, id: EntityId, payload: &TransportPayload) -> ApiResult<Transport> {
        self.resource.update(id, payload).await
    }

    async fn delete(&self, id: EntityId) -> ApiResult<()> {
        self.resource.delete(id).await
    }

    async fn list_by_status(&self, status: TransportStatus) -> ApiResult<Vec<Transport>> {
        self.resource.list_at(format!("status/{}", status)).await
    }

    /// Completion goes through the completion endpoint so the date is stamped
    async fn transition(&self, id: EntityId, status: TransportStatus) -> ApiResult<Transport> {
        match status {
            TransportStatus::Completed => self.complete(id, Local::now()).await,
            other => self.update_status(id, other).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::client_replying;
    use chrono::TimeZone;
    use serde_json::json;

    #[tokio::test]
    async fn test_complete_stamps_date() {
        let (http, backend) = client_replying(json!({ "id": 8, "status": "COMPLETED" }));
        let service = TransportService::new(http);
        let at = Local.with_ymd_and_hms(2026, 10, 16, 14, 30, 0).unwrap();

        service.complete(8, at).await.unwrap();

        let call = &backend.calls()[0];
        assert_eq!(call.path, "/api/transports/8/complete");
        assert_eq!(call.query, vec![("completionDate".to_string(), "2026-10-16".to_string())]);
        let body = call.body.as_ref().unwrap();
        assert!(body["completionDate"].as_str().unwrap().starts_with("2026-10-16T14:30:00"));
    }

    #[tokio::test]
    async fn test_transition_routes_by_status() {
        let (http, backend) = client_replying(json!({ "id": 1 }));
        let service = TransportService::new(http);

        let _ = service.transition(1, TransportStatus::Completed).await;
        let _ = service.transition(1, TransportStatus::InProgress).await;

        let calls = backend.calls();
        assert_eq!(calls[0].path, "/api/transports/1/complete");
        assert_eq!(calls[1].path, "/api/transports/1/status");
        assert_eq!(calls[1].body, Some(json!({ "status": "IN_PROGRESS" })));
    }

    #[tokio::test]
    async fn test_today_and_delete_paths() {
        let (http, backend) = client_replying(json!([]));
        let service = TransportService::new(http);

        service.list_today().await.unwrap();
        service.delete(12).await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls[0].path, "/api/transports/today");
        assert_eq!(calls[1].path, "/api/transports/12");
    }
}
