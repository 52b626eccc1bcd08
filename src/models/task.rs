//! Task Entity
//!
//! Operational to-do, optionally tied to a box or a transport.

use serde::{Deserialize, Serialize};

use super::donation_box::BoxSummary;
use super::entity::{Entity, EntityId, EntityRef};
use super::meta::wire_enum;
use super::wire::opt_date;

wire_enum! {
    TaskType(Task, TaskType) {
        Collection => "COLLECTION",
        Transport => "TRANSPORT",
        Maintenance => "MAINTENANCE",
        Other => "OTHER",
    }
}

wire_enum! {
    TaskPriority(Task, Priority) {
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
        Urgent => "URGENT",
    }
}

wire_enum! {
    TaskStatus(Task, Status) {
        Pending => "PENDING",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
}

impl Default for TaskType {
    fn default() -> Self {
        TaskType::Collection
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    #[serde(default)]
    pub task_type: TaskType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "opt_date")]
    pub due_date: Option<String>,
    /// Computed by the backend; consumed as-is
    #[serde(default, alias = "isOverdue")]
    pub overdue: bool,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub related_box: Option<BoxSummary>,
    #[serde(default)]
    pub related_transport: Option<EntityRef>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "opt_date")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "opt_date")]
    pub updated_at: Option<String>,
}

impl Entity for Task {
    type Id = EntityId;
    type Status = TaskStatus;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }
}

/// Create/update body for a task
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub task_type: TaskType,
    pub description: String,
    pub due_date: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
    pub related_box: Option<EntityRef>,
    pub related_transport: Option<EntityRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Labeled;

    #[test]
    fn test_decode_task_with_nested_refs() {
        let json = r#"{
            "id": 11,
            "taskType": "MAINTENANCE",
            "description": "להחליף מנעול",
            "priority": "URGENT",
            "status": "IN_PROGRESS",
            "dueDate": "2026-10-20",
            "overdue": true,
            "relatedBox": { "id": 2, "locationName": "רחוב הרצל", "status": "ACTIVE" },
            "relatedTransport": { "id": 5, "status": "PLANNED", "quantity": "3 שקיות" }
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.task_type, TaskType::Maintenance);
        assert!(task.overdue);
        assert_eq!(task.related_box.as_ref().map(|b| b.id), Some(2));
        assert_eq!(task.related_transport, Some(EntityRef { id: 5 }));
        assert_eq!(task.priority.label(), "דחוף");
    }

    #[test]
    fn test_is_overdue_alias() {
        let task: Task = serde_json::from_str(r#"{"id":1,"isOverdue":true}"#).unwrap();
        assert!(task.overdue);
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_payload_serializes_null_refs() {
        let payload = TaskPayload {
            task_type: TaskType::Other,
            description: "x".to_string(),
            due_date: None,
            priority: TaskPriority::Low,
            status: TaskStatus::Pending,
            assigned_to: None,
            notes: None,
            related_box: None,
            related_transport: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["relatedBox"].is_null());
        assert!(value.get("relatedBox").is_some());
        assert_eq!(value["taskType"], "OTHER");
        assert!(value.get("overdue").is_none());
    }
}
