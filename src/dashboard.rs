//! Dashboard Aggregation
//!
//! Read-only summary derived from the three full lists. Recomputed from
//! scratch every time the lists are loaded.

use std::cmp::Reverse;

use chrono::NaiveDate;

use crate::format::{is_today, parse_wire_date};
use crate::models::{
    BoxStatus, DonationBox, EnumMeta, Labeled, Task, TaskStatus, TaskType, Transport, TransportStatus,
};

/// Rows shown in each "today" list
pub const TODAY_LIMIT: usize = 5;
/// Rows shown in the activity feed
pub const ACTIVITY_LIMIT: usize = 10;

const UNKNOWN: &str = "לא ידוע";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxCounts {
    pub total: usize,
    pub active: usize,
    pub maintenance: usize,
    pub inactive: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
    /// Tasks of type `MAINTENANCE`, whatever their status
    pub maintenance: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransportCounts {
    pub total: usize,
    pub planned: usize,
    pub in_progress: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Task,
    Transport,
}

/// One line of the merged "recent activity" feed
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    /// `task-{id}` or `transport-{id}`; unique across both kinds
    pub key: String,
    pub kind: ActivityKind,
    pub title: String,
    /// Raw `updatedAt`
    pub date: Option<String>,
    pub status: EnumMeta,
}

impl ActivityEntry {
    fn from_task(task: &Task) -> Self {
        Self {
            key: format!("task-{}", task.id),
            kind: ActivityKind::Task,
            title: task.description.clone(),
            date: task.updated_at.clone(),
            status: task.status.meta(),
        }
    }

    fn from_transport(transport: &Transport) -> Self {
        Self {
            key: format!("transport-{}", transport.id),
            kind: ActivityKind::Transport,
            title: transport_title(transport),
            date: transport.updated_at.clone(),
            status: transport.status.meta(),
        }
    }
}

/// "שינוע מ{source} ל{destination}"
pub fn transport_title(transport: &Transport) -> String {
    let source = transport.source_label().unwrap_or_else(|| UNKNOWN.to_string());
    let destination = transport.destination_label().unwrap_or_else(|| UNKNOWN.to_string());
    format!("שינוע מ{} ל{}", source, destination)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    pub boxes: BoxCounts,
    pub tasks: TaskCounts,
    pub transports: TransportCounts,
    pub today_tasks: Vec<Task>,
    pub today_transports: Vec<Transport>,
    pub recent_activity: Vec<ActivityEntry>,
}

fn count<T>(items: &[T], pred: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| pred(item)).count()
}

impl DashboardSummary {
    pub fn compute(boxes: &[DonationBox], tasks: &[Task], transports: &[Transport], today: NaiveDate) -> Self {
        let box_counts = BoxCounts {
            total: boxes.len(),
            active: count(boxes, |b| b.status == BoxStatus::Active),
            maintenance: count(boxes, |b| b.status == BoxStatus::Maintenance),
            inactive: count(boxes, |b| b.status == BoxStatus::Inactive),
        };
        let task_counts = TaskCounts {
            total: tasks.len(),
            pending: count(tasks, |t| t.status == TaskStatus::Pending),
            in_progress: count(tasks, |t| t.status == TaskStatus::InProgress),
            completed: count(tasks, |t| t.status == TaskStatus::Completed),
            overdue: count(tasks, |t| t.overdue),
            maintenance: count(tasks, |t| t.task_type == TaskType::Maintenance),
        };
        let transport_counts = TransportCounts {
            total: transports.len(),
            planned: count(transports, |t| t.status == TransportStatus::Planned),
            in_progress: count(transports, |t| t.status == TransportStatus::InProgress),
            completed: count(transports, |t| t.status == TransportStatus::Completed),
        };

        let today_tasks = tasks
            .iter()
            .filter(|t| is_today(t.due_date.as_deref(), today))
            .take(TODAY_LIMIT)
            .cloned()
            .collect();
        let today_transports = transports
            .iter()
            .filter(|t| is_today(t.scheduled_date.as_deref(), today))
            .take(TODAY_LIMIT)
            .cloned()
            .collect();

        Self {
            boxes: box_counts,
            tasks: task_counts,
            transports: transport_counts,
            today_tasks,
            today_transports,
            recent_activity: recent_activity(tasks, transports),
        }
    }
}

/// Newest first; entries without a readable timestamp go last
pub fn recent_activity(tasks: &[Task], transports: &[Transport]) -> Vec<ActivityEntry> {
    let mut entries: Vec<ActivityEntry> = tasks
        .iter()
        .map(ActivityEntry::from_task)
        .chain(transports.iter().map(ActivityEntry::from_transport))
        .collect();
    entries.sort_by_key(|entry| Reverse(entry.date.as_deref().and_then(parse_wire_date)));
    entries.truncate(ACTIVITY_LIMIT);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tasks(value: serde_json::Value) -> Vec<Task> {
        serde_json::from_value(value).unwrap()
    }

    fn transports(value: serde_json::Value) -> Vec<Transport> {
        serde_json::from_value(value).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_counts_by_status() {
        let boxes: Vec<DonationBox> = serde_json::from_value(json!([
            { "id": 1, "status": "ACTIVE" },
            { "id": 2, "status": "ACTIVE" },
            { "id": 3, "status": "INACTIVE" }
        ]))
        .unwrap();
        let task_list = tasks(json!([
            { "id": 1, "status": "PENDING", "taskType": "MAINTENANCE", "overdue": true },
            { "id": 2, "status": "COMPLETED", "taskType": "MAINTENANCE" },
            { "id": 3, "status": "IN_PROGRESS" }
        ]));
        let transport_list = transports(json!([{ "id": 1 }, { "id": 2, "status": "COMPLETED" }]));

        let summary = DashboardSummary::compute(&boxes, &task_list, &transport_list, day(2026, 10, 16));

        assert_eq!(summary.boxes, BoxCounts { total: 3, active: 2, maintenance: 0, inactive: 1 });
        assert_eq!(
            summary.tasks,
            TaskCounts { total: 3, pending: 1, in_progress: 1, completed: 1, overdue: 1, maintenance: 2 }
        );
        assert_eq!(summary.transports, TransportCounts { total: 2, planned: 1, in_progress: 0, completed: 1 });
    }

    #[test]
    fn test_today_lists_match_calendar_day_and_cap() {
        let task_list: Vec<Task> = (1..=7)
            .map(|id| {
                serde_json::from_value(json!({ "id": id, "dueDate": "2026-10-16" })).unwrap()
            })
            .chain(tasks(json!([{ "id": 8, "dueDate": "2026-10-17" }, { "id": 9 }])))
            .collect();
        let transport_list = transports(json!([
            { "id": 1, "scheduledDate": "2026-10-16T23:30:00" },
            { "id": 2, "scheduledDate": "2026-10-15" }
        ]));

        let summary = DashboardSummary::compute(&[], &task_list, &transport_list, day(2026, 10, 16));

        let ids: Vec<i64> = summary.today_tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(summary.today_transports.len(), 1);
        assert_eq!(summary.today_transports[0].id, 1);
    }

    #[test]
    fn test_activity_sorted_newest_first_and_capped() {
        let task_list: Vec<Task> = (1..=8)
            .map(|id| {
                serde_json::from_value(json!({
                    "id": id,
                    "description": format!("task {}", id),
                    "updatedAt": format!("2026-10-{:02}T10:00:00", id)
                }))
                .unwrap()
            })
            .collect();
        let transport_list = transports(json!([
            { "id": 1, "updatedAt": "2026-10-09T10:00:00" },
            { "id": 2, "updatedAt": "2026-10-12T08:00:00" },
            { "id": 3 },
            { "id": 4, "updatedAt": "2026-09-01T00:00:00" }
        ]));

        let feed = recent_activity(&task_list, &transport_list);

        assert_eq!(feed.len(), ACTIVITY_LIMIT);
        assert_eq!(feed[0].key, "transport-2");
        assert_eq!(feed[1].key, "transport-1");
        assert_eq!(feed[2].key, "task-8");
        let stamps: Vec<_> = feed.iter().map(|e| e.date.as_deref().and_then(parse_wire_date)).collect();
        assert!(stamps.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(feed.iter().all(|e| e.key != "transport-3"));
    }

    #[test]
    fn test_missing_timestamps_sort_last() {
        let task_list = tasks(json!([
            { "id": 1, "description": "no stamp" },
            { "id": 2, "description": "stamped", "updatedAt": "2026-01-01T00:00:00" }
        ]));
        let feed = recent_activity(&task_list, &[]);
        assert_eq!(feed[0].key, "task-2");
        assert_eq!(feed[1].key, "task-1");
    }

    #[test]
    fn test_transport_title_fallbacks() {
        let list = transports(json!([
            {
                "id": 1,
                "sourceBox": { "id": 1, "locationName": "מרכז" },
                "destinationType": "BOX",
                "destinationBox": { "id": 2, "locationName": "צפון" }
            },
            { "id": 2, "destinationType": "FAMILY" }
        ]));
        assert_eq!(transport_title(&list[0]), "שינוע ממרכז לצפון");
        assert_eq!(transport_title(&list[1]), "שינוע מלא ידוע ללא ידוע");
    }

    #[test]
    fn test_empty_inputs() {
        let summary = DashboardSummary::compute(&[], &[], &[], day(2026, 10, 16));
        assert_eq!(summary, DashboardSummary::default());
    }
}
