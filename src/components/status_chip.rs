//! Status Chip Component

use leptos::prelude::*;

use crate::models::EnumMeta;

/// Colored label for any enum value, driven by the metadata table
#[component]
pub fn StatusChip(meta: EnumMeta) -> impl IntoView {
    view! { <span class=meta.tone.css_class()>{meta.label}</span> }
}
