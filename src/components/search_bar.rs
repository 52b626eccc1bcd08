//! Search Bar Component
//!
//! Every keystroke is forwarded; filtering happens in memory.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <span class="search-icon">"🔍"</span>
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
        </div>
    }
}
