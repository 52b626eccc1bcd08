//! Tasks Page
//!
//! Form schema, filters and table layout for tasks.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{box_options, enum_options, project, EntityView, SelectField, StatusChip, TextAreaField, TextField};
use crate::context::AppContext;
use crate::crud::{EntityDescriptor, Messages};
use crate::format::{format_date, to_input_date};
use crate::models::{
    non_empty, DonationBox, EntityKind, EntityRef, Labeled, Task, TaskPayload, TaskPriority, TaskStatus, TaskType,
};
use crate::services::TaskService;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskForm {
    pub task_type: TaskType,
    pub description: String,
    pub due_date: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assigned_to: String,
    pub notes: String,
    pub related_box_id: String,
    /// Not editable; kept so a full-replace update does not drop the link
    pub related_transport_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    TaskType,
    Description,
    DueDate,
    Priority,
    Status,
    AssignedTo,
    Notes,
    RelatedBox,
}

pub struct TasksPage;

static MESSAGES: Messages = Messages {
    title: "ניהול משימות",
    add_label: "הוסף משימה חדשה",
    create_title: "הוספת משימה חדשה",
    edit_title: "עריכת משימה",
    search_placeholder: "חיפוש לפי תיאור או שם מבצע...",
    empty: "לא נמצאו משימות",
    load_error: "שגיאה בטעינת משימות",
    created: "המשימה נוצרה בהצלחה",
    updated: "המשימה עודכנה בהצלחה",
    save_error: "שגיאה בשמירת המשימה",
    delete_prompt: "האם אתה בטוח שברצונך למחוק משימה זו?",
    deleted: "המשימה נמחקה בהצלחה",
    delete_error: "שגיאה במחיקת המשימה",
    shortcut_done: "סטטוס המשימה עודכן בהצלחה",
    shortcut_error: "שגיאה בעדכון סטטוס המשימה",
    shortcut_label: "סמן כהושלם",
};

static TABS: [(Option<TaskStatus>, &str); 4] = [
    (None, "כל המשימות"),
    (Some(TaskStatus::Pending), "ממתינות"),
    (Some(TaskStatus::InProgress), "בביצוע"),
    (Some(TaskStatus::Completed), "הושלמו"),
];

fn any_box(_: &DonationBox) -> bool {
    true
}

fn id_text(reference: Option<i64>) -> String {
    reference.map(|id| id.to_string()).unwrap_or_default()
}

impl EntityDescriptor for TasksPage {
    type Entity = Task;
    type Form = TaskForm;
    type Field = TaskField;
    type Payload = TaskPayload;

    const KIND: EntityKind = EntityKind::Task;

    fn messages() -> &'static Messages {
        &MESSAGES
    }

    fn tabs() -> &'static [(Option<TaskStatus>, &'static str)] {
        &TABS
    }

    /// Any box may be linked to a task
    fn ref_filter() -> Option<fn(&DonationBox) -> bool> {
        Some(any_box)
    }

    fn blank_form() -> TaskForm {
        TaskForm::default()
    }

    fn form_from(task: &Task) -> TaskForm {
        TaskForm {
            task_type: task.task_type,
            description: task.description.clone(),
            due_date: to_input_date(task.due_date.as_deref()),
            priority: task.priority,
            status: task.status,
            assigned_to: task.assigned_to.clone().unwrap_or_default(),
            notes: task.notes.clone().unwrap_or_default(),
            related_box_id: id_text(task.related_box.as_ref().map(|b| b.id)),
            related_transport_id: id_text(task.related_transport.map(|t| t.id)),
        }
    }

    fn apply_field(form: &mut TaskForm, field: TaskField, value: &str) {
        match field {
            TaskField::TaskType => {
                if let Ok(parsed) = value.parse() {
                    form.task_type = parsed;
                }
            }
            TaskField::Description => form.description = value.to_string(),
            TaskField::DueDate => form.due_date = value.to_string(),
            TaskField::Priority => {
                if let Ok(parsed) = value.parse() {
                    form.priority = parsed;
                }
            }
            TaskField::Status => {
                if let Ok(parsed) = value.parse() {
                    form.status = parsed;
                }
            }
            TaskField::AssignedTo => form.assigned_to = value.to_string(),
            TaskField::Notes => form.notes = value.to_string(),
            TaskField::RelatedBox => form.related_box_id = value.to_string(),
        }
    }

    fn can_submit(form: &TaskForm) -> bool {
        !form.description.trim().is_empty()
    }

    fn build_payload(form: &TaskForm) -> TaskPayload {
        TaskPayload {
            task_type: form.task_type,
            description: form.description.clone(),
            due_date: non_empty(&form.due_date),
            priority: form.priority,
            status: form.status,
            assigned_to: non_empty(&form.assigned_to),
            notes: non_empty(&form.notes),
            related_box: EntityRef::parse(&form.related_box_id),
            related_transport: EntityRef::parse(&form.related_transport_id),
        }
    }

    fn search_fields(task: &Task) -> Vec<&str> {
        let mut fields = vec![task.description.as_str()];
        fields.extend(task.assigned_to.as_deref());
        fields
    }

    fn shortcut_status(task: &Task) -> Option<TaskStatus> {
        (task.status != TaskStatus::Completed).then_some(TaskStatus::Completed)
    }
}

impl EntityView for TasksPage {
    type Service = TaskService;

    fn service(ctx: &AppContext) -> Arc<TaskService> {
        ctx.tasks.clone()
    }

    fn headers() -> &'static [&'static str] {
        &["תיאור", "סוג", "עדיפות", "סטטוס", "תאריך יעד", "משויך ל", "ארגז קשור"]
    }

    fn row_cells(task: &Task) -> AnyView {
        let due_class = if task.overdue { "overdue" } else { "" };
        view! {
            <td>{task.description.clone()}</td>
            <td>{task.task_type.label()}</td>
            <td><StatusChip meta=task.priority.meta() /></td>
            <td><StatusChip meta=task.status.meta() /></td>
            <td class=due_class>{format_date(task.due_date.as_deref())}</td>
            <td>{task.assigned_to.clone().unwrap_or_else(|| "-".to_string())}</td>
            <td>{task.related_box.as_ref().map(|b| b.display_name()).unwrap_or_else(|| "-".to_string())}</td>
        }
        .into_any()
    }

    fn form_fields(
        form: Signal<TaskForm>,
        refs: Signal<Vec<DonationBox>>,
        refs_loading: Signal<bool>,
        on_change: Callback<(TaskField, String)>,
    ) -> AnyView {
        let set = move |field: TaskField| move |value: String| on_change.run((field, value));
        view! {
            <TextField
                label="תיאור"
                required=true
                value=project(form, |f| f.description.clone())
                on_input=set(TaskField::Description)
            />
            <SelectField
                label="סוג משימה"
                value=project(form, |f| f.task_type.as_str().to_string())
                options=Signal::derive(|| enum_options(TaskType::ALL))
                on_change=set(TaskField::TaskType)
            />
            <SelectField
                label="עדיפות"
                value=project(form, |f| f.priority.as_str().to_string())
                options=Signal::derive(|| enum_options(TaskPriority::ALL))
                on_change=set(TaskField::Priority)
            />
            <SelectField
                label="סטטוס"
                value=project(form, |f| f.status.as_str().to_string())
                options=Signal::derive(|| enum_options(TaskStatus::ALL))
                on_change=set(TaskField::Status)
            />
            <TextField
                label="תאריך יעד"
                input_type="date"
                value=project(form, |f| f.due_date.clone())
                on_input=set(TaskField::DueDate)
            />
            <TextField
                label="משויך ל"
                value=project(form, |f| f.assigned_to.clone())
                on_input=set(TaskField::AssignedTo)
            />
            <SelectField
                label="ארגז קשור"
                placeholder="ללא"
                value=project(form, |f| f.related_box_id.clone())
                options=Signal::derive(move || refs.with(|boxes| box_options(boxes)))
                disabled=refs_loading
                on_change=set(TaskField::RelatedBox)
            />
            <TextAreaField label="הערות" value=project(form, |f| f.notes.clone()) on_input=set(TaskField::Notes) />
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud::filter_rows;

    fn task(json: serde_json::Value) -> Task {
        serde_json::from_value(json).unwrap()
    }

    fn sample() -> Task {
        task(serde_json::json!({
            "id": 12,
            "taskType": "MAINTENANCE",
            "description": "להחליף מנעול",
            "priority": "HIGH",
            "status": "IN_PROGRESS",
            "dueDate": "2026-10-20",
            "assignedTo": "Dana",
            "notes": "דחוף לפני שבת",
            "relatedBox": { "id": 3, "locationName": "מרכז" },
            "relatedTransport": { "id": 8 }
        }))
    }

    #[test]
    fn test_edit_round_trip_preserves_fields() {
        let original = sample();
        let payload = TasksPage::build_payload(&TasksPage::form_from(&original));
        assert_eq!(
            payload,
            TaskPayload {
                task_type: TaskType::Maintenance,
                description: "להחליף מנעול".to_string(),
                due_date: Some("2026-10-20".to_string()),
                priority: TaskPriority::High,
                status: TaskStatus::InProgress,
                assigned_to: Some("Dana".to_string()),
                notes: Some("דחוף לפני שבת".to_string()),
                related_box: Some(EntityRef { id: 3 }),
                related_transport: Some(EntityRef { id: 8 }),
            }
        );
    }

    #[test]
    fn test_description_required() {
        let mut form = TasksPage::blank_form();
        assert!(!TasksPage::can_submit(&form));
        TasksPage::apply_field(&mut form, TaskField::Description, "   ");
        assert!(!TasksPage::can_submit(&form));
        TasksPage::apply_field(&mut form, TaskField::Description, "איסוף");
        assert!(TasksPage::can_submit(&form));
    }

    #[test]
    fn test_blank_selects_become_null() {
        let mut form = TasksPage::blank_form();
        TasksPage::apply_field(&mut form, TaskField::Description, "x");
        TasksPage::apply_field(&mut form, TaskField::RelatedBox, "");
        TasksPage::apply_field(&mut form, TaskField::Priority, "NOT_A_PRIORITY");
        let payload = TasksPage::build_payload(&form);
        assert_eq!(payload.related_box, None);
        assert_eq!(payload.priority, TaskPriority::Medium);
        assert_eq!(payload.due_date, None);
    }

    #[test]
    fn test_search_matches_description_or_assignee() {
        let items = vec![
            task(serde_json::json!({ "id": 1, "description": "Collect box", "assignedTo": "Yossi" })),
            task(serde_json::json!({ "id": 2, "description": "Fix lid", "assignedTo": "DANA" })),
            task(serde_json::json!({ "id": 3, "description": "dana's errand" })),
        ];
        let ids = |rows: Vec<Task>| rows.into_iter().map(|t| t.id).collect::<Vec<_>>();

        assert_eq!(ids(filter_rows::<TasksPage>(&items, "dana", 0)), vec![2, 3]);
        assert_eq!(ids(filter_rows::<TasksPage>(&items, "", 0)), vec![1, 2, 3]);
        assert!(filter_rows::<TasksPage>(&items, "nobody", 0).is_empty());
        assert!(filter_rows::<TasksPage>(&[], "dana", 0).is_empty());
    }

    #[test]
    fn test_tab_intersects_with_search() {
        let items = vec![
            task(serde_json::json!({ "id": 1, "description": "a", "status": "PENDING" })),
            task(serde_json::json!({ "id": 2, "description": "a", "status": "COMPLETED" })),
            task(serde_json::json!({ "id": 3, "description": "b", "status": "COMPLETED" })),
        ];
        let completed = filter_rows::<TasksPage>(&items, "A", 3);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, 2);
    }

    #[test]
    fn test_shortcut_offered_until_completed() {
        let mut t = sample();
        assert_eq!(TasksPage::shortcut_status(&t), Some(TaskStatus::Completed));
        t.status = TaskStatus::Cancelled;
        assert_eq!(TasksPage::shortcut_status(&t), Some(TaskStatus::Completed));
        t.status = TaskStatus::Completed;
        assert_eq!(TasksPage::shortcut_status(&t), None);
    }
}
