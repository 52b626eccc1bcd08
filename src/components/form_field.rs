//! Form Field Components
//!
//! Labeled inputs used by the entity edit dialogs. Every input is
//! controlled: the value comes from the page's form state and each change
//! goes back through a callback.

use leptos::prelude::*;

use crate::models::{DonationBox, Labeled};

/// Read one string field out of a form signal
pub fn project<F>(form: Signal<F>, get: fn(&F) -> String) -> Signal<String>
where
    F: Clone + Send + Sync + 'static,
{
    Signal::derive(move || form.with(get))
}

/// `(wire value, Hebrew label)` pairs for a select
pub fn enum_options<T: Labeled>(all: &[T]) -> Vec<(String, String)> {
    all.iter()
        .map(|value| (value.wire().to_string(), value.label().to_string()))
        .collect()
}

pub fn box_options(boxes: &[DonationBox]) -> Vec<(String, String)> {
    boxes
        .iter()
        .map(|b| (b.id.to_string(), b.display_name()))
        .collect()
}

fn label_text(label: &'static str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label_text(label, required)}</span>
            <input
                type=input_type
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <textarea
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Dropdown; `placeholder` adds an empty "none" option
#[component]
pub fn SelectField(
    label: &'static str,
    value: Signal<String>,
    options: Signal<Vec<(String, String)>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
    /// Locks the dropdown, e.g. while its options are still loading
    #[prop(optional)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label_text(label, required)}</span>
            <select
                disabled=move || disabled.is_some_and(|locked| locked.get())
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|text| {
                    view! {
                        <option value="" selected=move || value.get().is_empty()>
                            {text}
                        </option>
                    }
                })}
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(option, text)| {
                            let current = option.clone();
                            view! {
                                <option value=option selected=move || value.get() == current>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
