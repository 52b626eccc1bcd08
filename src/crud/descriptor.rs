//! Entity Descriptor
//!
//! Everything that differs between the Boxes, Tasks and Transports pages:
//! form schema, payload building, searchable fields, status tabs and
//! user-facing messages.

use std::fmt::Debug;

use serde::Serialize;

use crate::models::{DonationBox, Entity, EntityId, EntityKind};

/// Localized strings of one CRUD page
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub add_label: &'static str,
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub search_placeholder: &'static str,
    pub empty: &'static str,
    pub load_error: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub save_error: &'static str,
    /// Question shown next to ✓/✗ before a delete
    pub delete_prompt: &'static str,
    pub deleted: &'static str,
    pub delete_error: &'static str,
    pub shortcut_done: &'static str,
    pub shortcut_error: &'static str,
    pub shortcut_label: &'static str,
}

pub trait EntityDescriptor: Sized + Send + Sync + 'static {
    type Entity: Entity<Id = EntityId> + Debug;
    /// Form fields as the inputs hold them (ids and dates flattened to strings)
    type Form: Clone + PartialEq + Debug + Send + Sync + 'static;
    type Field: Copy + Eq + Debug + Send + Sync + 'static;
    type Payload: Serialize + PartialEq + Debug + Send + Sync;

    const KIND: EntityKind;

    fn messages() -> &'static Messages;

    /// Status filter per tab, `None` being "all". Empty means no tab bar.
    fn tabs() -> &'static [(Option<<Self::Entity as Entity>::Status>, &'static str)] {
        &[]
    }

    /// Which boxes the form's dropdowns offer; `None` skips the fetch
    fn ref_filter() -> Option<fn(&DonationBox) -> bool> {
        None
    }

    fn blank_form() -> Self::Form;

    fn form_from(entity: &Self::Entity) -> Self::Form;

    /// Shallow merge of one input change
    fn apply_field(form: &mut Self::Form, field: Self::Field, value: &str);

    /// Client-side required fields
    fn can_submit(form: &Self::Form) -> bool;

    fn build_payload(form: &Self::Form) -> Self::Payload;

    /// Texts matched by the search box
    fn search_fields(entity: &Self::Entity) -> Vec<&str>;

    /// Target of the one-click row action, if the row offers one
    fn shortcut_status(entity: &Self::Entity) -> Option<<Self::Entity as Entity>::Status> {
        let _ = entity;
        None
    }
}

/// Case-insensitive substring match over the descriptor's search fields
pub fn matches_search<D: EntityDescriptor>(entity: &D::Entity, term: &str) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    D::search_fields(entity)
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Tab 0 (or any tab without a status) never excludes
pub fn matches_tab<D: EntityDescriptor>(entity: &D::Entity, tab: usize) -> bool {
    match D::tabs().get(tab) {
        Some((Some(status), _)) => entity.status() == *status,
        _ => true,
    }
}

/// Rows shown for the current search term and tab
pub fn filter_rows<D: EntityDescriptor>(items: &[D::Entity], term: &str, tab: usize) -> Vec<D::Entity> {
    items
        .iter()
        .filter(|entity| matches_search::<D>(entity, term) && matches_tab::<D>(entity, tab))
        .cloned()
        .collect()
}
