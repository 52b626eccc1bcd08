//! Page State and Actions
//!
//! Explicit state of one CRUD page and the closed set of transitions
//! that can change it.

use crate::models::{DonationBox, Entity, EntityId};

use super::descriptor::{filter_rows, EntityDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "snackbar snackbar-success",
            Severity::Error => "snackbar snackbar-error",
        }
    }
}

/// Transient message; `id` lets a stale auto-hide timer be ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

pub struct PageState<D: EntityDescriptor> {
    /// Last-fetched full list
    pub items: Vec<D::Entity>,
    pub loading: bool,
    /// Boxes offered in the form dropdowns
    pub refs: Vec<DonationBox>,
    pub refs_loading: bool,
    pub search_term: String,
    pub active_tab: usize,
    pub dialog_open: bool,
    /// `None` means the dialog creates
    pub editing: Option<D::Entity>,
    pub form: D::Form,
    pub saving: bool,
    pub notification: Option<Notification>,
    /// Sequence number of the newest list request issued
    pub latest_request: u64,
    pub(super) notification_seq: u64,
}

impl<D: EntityDescriptor> PageState<D> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            refs: Vec::new(),
            refs_loading: D::ref_filter().is_some(),
            search_term: String::new(),
            active_tab: 0,
            dialog_open: false,
            editing: None,
            form: D::blank_form(),
            saving: false,
            notification: None,
            latest_request: 0,
            notification_seq: 0,
        }
    }

    pub fn editing_id(&self) -> Option<EntityId> {
        self.editing.as_ref().map(|entity| entity.id())
    }

    pub fn visible_rows(&self) -> Vec<D::Entity> {
        filter_rows::<D>(&self.items, &self.search_term, self.active_tab)
    }

    pub fn can_submit(&self) -> bool {
        !self.saving && D::can_submit(&self.form)
    }
}

impl<D: EntityDescriptor> Default for PageState<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: EntityDescriptor> Clone for PageState<D> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            loading: self.loading,
            refs: self.refs.clone(),
            refs_loading: self.refs_loading,
            search_term: self.search_term.clone(),
            active_tab: self.active_tab,
            dialog_open: self.dialog_open,
            editing: self.editing.clone(),
            form: self.form.clone(),
            saving: self.saving,
            notification: self.notification.clone(),
            latest_request: self.latest_request,
            notification_seq: self.notification_seq,
        }
    }
}

pub enum PageAction<D: EntityDescriptor> {
    FetchStarted { request: u64 },
    FetchSucceeded { request: u64, items: Vec<D::Entity> },
    FetchFailed { request: u64 },
    RefsStarted,
    RefsLoaded(Vec<DonationBox>),
    RefsFailed,
    OpenCreate,
    OpenEdit(D::Entity),
    CloseDialog,
    FieldChanged(D::Field, String),
    SaveStarted,
    SaveSucceeded { created: bool },
    SaveFailed,
    DeleteSucceeded,
    DeleteFailed,
    ShortcutSucceeded,
    ShortcutFailed,
    SearchChanged(String),
    TabChanged(usize),
    DismissNotification(u64),
}

impl<D: EntityDescriptor> PageAction<D> {
    pub fn name(&self) -> &'static str {
        match self {
            PageAction::FetchStarted { .. } => "fetch-started",
            PageAction::FetchSucceeded { .. } => "fetch-succeeded",
            PageAction::FetchFailed { .. } => "fetch-failed",
            PageAction::RefsStarted => "refs-started",
            PageAction::RefsLoaded(_) => "refs-loaded",
            PageAction::RefsFailed => "refs-failed",
            PageAction::OpenCreate => "open-create",
            PageAction::OpenEdit(_) => "open-edit",
            PageAction::CloseDialog => "close-dialog",
            PageAction::FieldChanged(..) => "field-changed",
            PageAction::SaveStarted => "save-started",
            PageAction::SaveSucceeded { .. } => "save-succeeded",
            PageAction::SaveFailed => "save-failed",
            PageAction::DeleteSucceeded => "delete-succeeded",
            PageAction::DeleteFailed => "delete-failed",
            PageAction::ShortcutSucceeded => "shortcut-succeeded",
            PageAction::ShortcutFailed => "shortcut-failed",
            PageAction::SearchChanged(_) => "search-changed",
            PageAction::TabChanged(_) => "tab-changed",
            PageAction::DismissNotification(_) => "dismiss-notification",
        }
    }
}
