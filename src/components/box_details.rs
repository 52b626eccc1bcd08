//! Box Details Component
//!
//! Side panel for one box: its fields plus the transports leaving and
//! arriving at it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::format::format_date;
use crate::models::{DonationBox, EntityId, Labeled, Transport};
use crate::services::CrudService;

use super::StatusChip;

#[component]
pub fn BoxDetails(id: EntityId) -> impl IntoView {
    let ctx = use_app_context();
    let (details, set_details) = signal(None::<DonationBox>);
    let (outgoing, set_outgoing) = signal(Vec::<Transport>::new());
    let (incoming, set_incoming) = signal(Vec::<Transport>::new());
    let (loading, set_loading) = signal(true);
    let (failed, set_failed) = signal(false);

    let boxes = ctx.boxes.clone();
    spawn_local(async move {
        match boxes.get(id).await {
            Ok(found) => set_details.set(Some(found)),
            Err(err) => {
                log::error!("Failed to load box #{}: {}", id, err);
                set_failed.set(true);
            }
        }
        match boxes.outgoing_transports(id).await {
            Ok(list) => set_outgoing.set(list),
            Err(err) => log::error!("Failed to load outgoing transports of box #{}: {}", id, err),
        }
        match boxes.incoming_transports(id).await {
            Ok(list) => set_incoming.set(list),
            Err(err) => log::error!("Failed to load incoming transports of box #{}: {}", id, err),
        }
        set_loading.set(false);
    });

    view! {
        <div class="box-details">
            <Show when=move || loading.get()>
                <div class="loading-bar"></div>
            </Show>
            <Show when=move || failed.get()>
                <p class="error-text">"שגיאה בטעינת פרטי הארגז"</p>
            </Show>
            {move || details.get().map(box_summary)}
            <TransportList title="שינועים יוצאים" empty="אין שינועים יוצאים לארגז זה" transports=outgoing />
            <TransportList title="שינועים נכנסים" empty="אין שינועים נכנסים לארגז זה" transports=incoming />
        </div>
    }
}

fn box_summary(found: DonationBox) -> impl IntoView {
    let line = |label: &'static str, value: Option<String>| {
        view! {
            <p class="detail-line">
                <span class="detail-label">{label}": "</span>
                {value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| "-".to_string())}
            </p>
        }
    };
    let notes = found
        .notes
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "אין הערות".to_string());

    view! {
        <div class="detail-header">
            <h2>{found.display_name()}</h2>
            <StatusChip meta=found.status.meta() />
        </div>
        {line("קבוצת תרומה", found.donation_group.clone())}
        {line("כתובת", found.address.clone())}
        {line("אחראי ארגז", found.responsible_person.clone())}
        {line("טלפון אחראי", found.responsible_person_phone.clone())}
        {line("מנהל עמותה", found.association_manager.clone())}
        <p class="detail-line">
            <span class="detail-label">"הערות: "</span>
            {notes}
        </p>
    }
}

#[component]
fn TransportList(title: &'static str, empty: &'static str, transports: ReadSignal<Vec<Transport>>) -> impl IntoView {
    view! {
        <h3>{title}</h3>
        {move || {
            let list = transports.get();
            if list.is_empty() {
                return view! { <p class="empty-state">{empty}</p> }.into_any();
            }
            view! {
                <ul class="transport-list">
                    {list
                        .into_iter()
                        .map(|t| {
                            let source = t.source_label().unwrap_or_else(|| "לא ידוע".to_string());
                            let destination = t.destination_label().unwrap_or_else(|| "לא ידוע".to_string());
                            view! {
                                <li>
                                    <span>{format!("{} ← {}", source, destination)}</span>
                                    <span class="muted">{format_date(t.scheduled_date.as_deref())}</span>
                                    <StatusChip meta=t.status.meta() />
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
            .into_any()
        }}
    }
}
