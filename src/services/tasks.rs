//! Task Service
//!
//! Bindings for `/api/tasks`, including the assignment and status
//! endpoints.

use async_trait::async_trait;
use serde::Serialize;

use super::{CrudService, HttpClient, Resource};
use crate::error::ApiResult;
use crate::models::{EntityId, Task, TaskPayload, TaskPriority, TaskStatus};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignBody<'a> {
    assigned_to: &'a str,
}

#[derive(Serialize)]
struct StatusBody {
    status: TaskStatus,
}

#[derive(Clone)]
pub struct TaskService {
    resource: Resource,
}

impl TaskService {
    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: Resource::new(http, "/api/tasks"),
        }
    }

    pub async fn list_by_priority(&self, priority: TaskPriority) -> ApiResult<Vec<Task>> {
        self.resource.list_at(format!("priority/{}", priority)).await
    }

    pub async fn list_overdue(&self) -> ApiResult<Vec<Task>> {
        self.resource.list_at("overdue").await
    }

    pub async fn list_today(&self) -> ApiResult<Vec<Task>> {
        self.resource.list_at("today").await
    }

    pub async fn assign(&self, id: EntityId, assignee: &str) -> ApiResult<Task> {
        self.resource
            .http()
            .patch(
                &self.resource.path(format!("{}/assign", id)),
                &[("assignedTo", assignee)],
                &AssignBody { assigned_to: assignee },
            )
            .await
    }

    pub async fn update_status(&self, id: EntityId, status: TaskStatus) -> ApiResult<Task> {
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
impl CrudService<Task> for TaskService {
    type Payload = TaskPayload;

    async fn list(&self) -> ApiResult<Vec<Task>> {
        self.resource.list().await
    }

    async fn get(&self, id: EntityId) -> ApiResult<Task> {
        self.resource.get(id).await
    }

    async fn create(&self, payload: &TaskPayload) -> ApiResult<Task> {
        self.resource.create(payload).await
    }

    async fn update(&self, id: EntityId, payload: &TaskPayload) -> ApiResult<Task> {
        self.resource.update(id, payload).await
    }

    async fn delete(&self, id: EntityId) -> ApiResult<()> {
        self.resource.delete(id).await
    }

    async fn list_by_status(&self, status: TaskStatus) -> ApiResult<Vec<Task>> {
        self.resource.list_at(format!("status/{}", status)).await
    }

    async fn transition(&self, id: EntityId, status: TaskStatus) -> ApiResult<Task> {
        self.update_status(id, status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::client_replying;
    use crate::services::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_assign_sends_name() {
        let (http, backend) = client_replying(json!({ "id": 7, "assignedTo": "דנה" }));
        let service = TaskService::new(http);

        let task = service.assign(7, "דנה").await.unwrap();

        let call = &backend.calls()[0];
        assert_eq!(call.method, Method::Patch);
        assert_eq!(call.path, "/api/tasks/7/assign");
        assert_eq!(call.body, Some(json!({ "assignedTo": "דנה" })));
        assert_eq!(call.query, vec![("assignedTo".to_string(), "דנה".to_string())]);
        assert_eq!(task.assigned_to.as_deref(), Some("דנה"));
    }

    #[tokio::test]
    async fn test_transition_uses_status_endpoint() {
        let (http, backend) = client_replying(json!({ "id": 3, "status": "COMPLETED" }));
        let service = TaskService::new(http);

        let task = service.transition(3, TaskStatus::Completed).await.unwrap();

        let call = &backend.calls()[0];
        assert_eq!(call.path, "/api/tasks/3/status");
        assert_eq!(call.body, Some(json!({ "status": "COMPLETED" })));
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn test_filtered_listings() {
        let (http, backend) = client_replying(json!([]));
        let service = TaskService::new(http);

        let _ = service.list_by_priority(TaskPriority::High).await;
        let _ = service.list_overdue().await;
        let _ = service.list_today().await;
        let _ = service.list_by_status(TaskStatus::InProgress).await;

        let paths: Vec<String> = backend.calls().into_iter().map(|c| c.path).collect();
        assert_eq!(
            paths,
            vec![
                "/api/tasks/priority/HIGH",
                "/api/tasks/overdue",
                "/api/tasks/today",
                "/api/tasks/status/IN_PROGRESS",
            ]
        );
    }

    #[tokio::test]
    async fn test_create_posts_to_collection() {
        let (http, backend) = client_replying(json!({ "id": 42, "description": "איסוף" }));
        let service = TaskService::new(http);
        let payload = TaskPayload {
            task_type: Default::default(),
            description: "איסוף".to_string(),
            due_date: None,
            priority: Default::default(),
            status: Default::default(),
            assigned_to: None,
            notes: None,
            related_box: None,
            related_transport: None,
        };

        let created = service.create(&payload).await.unwrap();

        assert_eq!(created.id, 42);
        let call = &backend.calls()[0];
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.path, "/api/tasks");
    }
}
