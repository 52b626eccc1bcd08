//! Page Reducer
//!
//! Pure `(state, action) -> state`. No I/O; the controller performs the
//! calls and feeds their outcome back in as actions.

use super::descriptor::EntityDescriptor;
use super::state::{Notification, PageAction, PageState, Severity};

fn notify<D: EntityDescriptor>(state: &mut PageState<D>, message: &str, severity: Severity) {
    state.notification_seq += 1;
    state.notification = Some(Notification {
        id: state.notification_seq,
        message: message.to_string(),
        severity,
    });
}

pub fn reduce<D: EntityDescriptor>(mut state: PageState<D>, action: PageAction<D>) -> PageState<D> {
    let messages = D::messages();
    match action {
        PageAction::FetchStarted { request } => {
            state.latest_request = state.latest_request.max(request);
            state.loading = true;
        }
        PageAction::FetchSucceeded { request, items } => {
            // Only the newest issued request may overwrite the list
            if request == state.latest_request {
                state.items = items;
                state.loading = false;
            }
        }
        PageAction::FetchFailed { request } => {
            if request == state.latest_request {
                state.loading = false;
                notify(&mut state, messages.load_error, Severity::Error);
            }
        }
        PageAction::RefsStarted => state.refs_loading = true,
        PageAction::RefsLoaded(refs) => {
            state.refs = refs;
            state.refs_loading = false;
        }
        PageAction::RefsFailed => state.refs_loading = false,
        PageAction::OpenCreate => {
            state.editing = None;
            state.form = D::blank_form();
            state.saving = false;
            state.dialog_open = true;
        }
        PageAction::OpenEdit(entity) => {
            state.form = D::form_from(&entity);
            state.editing = Some(entity);
            state.saving = false;
            state.dialog_open = true;
        }
        PageAction::CloseDialog => {
            state.dialog_open = false;
            state.saving = false;
        }
        PageAction::FieldChanged(field, value) => D::apply_field(&mut state.form, field, &value),
        PageAction::SaveStarted => state.saving = true,
        PageAction::SaveSucceeded { created } => {
            state.saving = false;
            state.dialog_open = false;
            let message = if created { messages.created } else { messages.updated };
            notify(&mut state, message, Severity::Success);
        }
        PageAction::SaveFailed => {
            state.saving = false;
            notify(&mut state, messages.save_error, Severity::Error);
        }
        PageAction::DeleteSucceeded => notify(&mut state, messages.deleted, Severity::Success),
        PageAction::DeleteFailed => notify(&mut state, messages.delete_error, Severity::Error),
        PageAction::ShortcutSucceeded => notify(&mut state, messages.shortcut_done, Severity::Success),
        PageAction::ShortcutFailed => notify(&mut state, messages.shortcut_error, Severity::Error),
        PageAction::SearchChanged(term) => state.search_term = term,
        PageAction::TabChanged(tab) => state.active_tab = tab,
        PageAction::DismissNotification(id) => {
            if state.notification.as_ref().map(|n| n.id) == Some(id) {
                state.notification = None;
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DonationBox, Task, TaskStatus};
    use crate::pages::tasks::{TaskField, TasksPage};

    fn task(id: i64, description: &str, status: TaskStatus) -> Task {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "description": description,
            "status": status,
        }))
        .unwrap()
    }

    fn apply(state: PageState<TasksPage>, actions: Vec<PageAction<TasksPage>>) -> PageState<TasksPage> {
        actions.into_iter().fold(state, reduce)
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let state = apply(
            PageState::new(),
            vec![
                PageAction::FetchStarted { request: 1 },
                PageAction::FetchStarted { request: 2 },
                PageAction::FetchSucceeded { request: 2, items: vec![task(2, "new", TaskStatus::Pending)] },
                // Older request resolves last
                PageAction::FetchSucceeded { request: 1, items: vec![task(1, "old", TaskStatus::Pending)] },
            ],
        );
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, 2);
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_fetch_keeps_loading_flag() {
        let state = apply(
            PageState::new(),
            vec![
                PageAction::FetchStarted { request: 1 },
                PageAction::FetchStarted { request: 2 },
                PageAction::FetchSucceeded { request: 1, items: vec![] },
            ],
        );
        assert!(state.loading);
    }

    #[test]
    fn test_reference_boxes_lock_while_loading() {
        let boxes: Vec<DonationBox> = serde_json::from_value(serde_json::json!([{ "id": 4 }])).unwrap();

        let state = reduce(PageState::<TasksPage>::new(), PageAction::RefsStarted);
        assert!(state.refs_loading);

        let loaded = reduce(state.clone(), PageAction::RefsLoaded(boxes));
        assert!(!loaded.refs_loading);
        assert_eq!(loaded.refs.len(), 1);

        let failed = reduce(reduce(loaded, PageAction::RefsStarted), PageAction::RefsFailed);
        assert!(!failed.refs_loading);
        // Previously loaded boxes stay selectable
        assert_eq!(failed.refs.len(), 1);
        assert!(failed.notification.is_none());
    }

    #[test]
    fn test_failed_fetch_keeps_items() {
        let state = apply(
            PageState::new(),
            vec![
                PageAction::FetchStarted { request: 1 },
                PageAction::FetchSucceeded { request: 1, items: vec![task(1, "a", TaskStatus::Pending)] },
                PageAction::FetchStarted { request: 2 },
                PageAction::FetchFailed { request: 2 },
            ],
        );
        assert_eq!(state.items.len(), 1);
        assert!(!state.loading);
        let note = state.notification.unwrap();
        assert_eq!(note.severity, Severity::Error);
    }

    #[test]
    fn test_open_create_then_edit() {
        let existing = task(5, "לנקות", TaskStatus::InProgress);
        let state = apply(
            PageState::new(),
            vec![
                PageAction::OpenCreate,
                PageAction::FieldChanged(TaskField::Description, "draft".to_string()),
                PageAction::OpenEdit(existing.clone()),
            ],
        );
        assert!(state.dialog_open);
        assert_eq!(state.editing_id(), Some(5));
        assert_eq!(state.form, TasksPage::form_from(&existing));

        let state = reduce(state, PageAction::OpenCreate);
        assert_eq!(state.editing_id(), None);
        assert_eq!(state.form, TasksPage::blank_form());
    }

    #[test]
    fn test_save_failure_keeps_dialog_open() {
        let state = apply(
            PageState::new(),
            vec![PageAction::OpenCreate, PageAction::SaveStarted, PageAction::SaveFailed],
        );
        assert!(state.dialog_open);
        assert!(!state.saving);
        assert_eq!(state.notification.unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_save_success_closes_dialog() {
        let state = apply(
            PageState::new(),
            vec![PageAction::OpenCreate, PageAction::SaveStarted, PageAction::SaveSucceeded { created: true }],
        );
        assert!(!state.dialog_open);
        let note = state.notification.unwrap();
        assert_eq!(note.severity, Severity::Success);
        assert_eq!(note.message, TasksPage::messages().created);
    }

    #[test]
    fn test_dismiss_ignores_older_notification() {
        let state = apply(PageState::new(), vec![PageAction::DeleteFailed, PageAction::DeleteSucceeded]);
        let current = state.notification.clone().unwrap();

        let state = reduce(state, PageAction::DismissNotification(current.id - 1));
        assert!(state.notification.is_some());

        let state = reduce(state, PageAction::DismissNotification(current.id));
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_search_and_tab_do_not_touch_items() {
        let items = vec![
            task(1, "איסוף מהמרכז", TaskStatus::Pending),
            task(2, "Fix LOCK", TaskStatus::Completed),
            task(3, "fix lid", TaskStatus::Pending),
        ];
        let state = apply(
            PageState::new(),
            vec![
                PageAction::FetchStarted { request: 1 },
                PageAction::FetchSucceeded { request: 1, items },
                PageAction::SearchChanged("FIX".to_string()),
            ],
        );
        let ids: Vec<i64> = state.visible_rows().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);

        // Tab 1 = pending
        let state = reduce(state, PageAction::TabChanged(1));
        let ids: Vec<i64> = state.visible_rows().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3]);
        assert_eq!(state.items.len(), 3);
    }
}
