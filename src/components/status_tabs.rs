//! Status Tabs Component
//!
//! Tab bar restricting a list to one lifecycle status. Tab 0 is "all".

use leptos::prelude::*;

#[component]
pub fn StatusTabs(
    labels: Vec<&'static str>,
    #[prop(into)] active: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="status-tabs" role="tablist">
            {labels
                .into_iter()
                .enumerate()
                .map(|(index, label)| {
                    let tab_class = move || {
                        if active.get() == index { "status-tab active" } else { "status-tab" }
                    };
                    view! {
                        <button
                            role="tab"
                            class=tab_class
                            on:click=move |_| on_select.run(index)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
