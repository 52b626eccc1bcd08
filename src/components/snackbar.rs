//! Snackbar Component
//!
//! Shows the page's current notification and hides it after a delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::crud::Notification;

/// Transient success/error message.
///
/// The auto-hide timer dismisses by id, so a timer started for an older
/// message never closes a newer one.
#[component]
pub fn Snackbar(
    #[prop(into)] notification: Signal<Option<Notification>>,
    #[prop(into)] on_dismiss: Callback<u64>,
    timeout_ms: u32,
) -> impl IntoView {
    Effect::new(move |_| {
        if let Some(id) = notification.with(|n| n.as_ref().map(|n| n.id)) {
            spawn_local(async move {
                TimeoutFuture::new(timeout_ms).await;
                on_dismiss.run(id);
            });
        }
    });

    move || {
        notification.get().map(|note| {
            let id = note.id;
            view! {
                <div class=note.severity.css_class() role="alert">
                    <span class="snackbar-message">{note.message}</span>
                    <button class="snackbar-close" on:click=move |_| on_dismiss.run(id)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
