//! Dashboard Page
//!
//! Counts, today's tasks and transports, and the recent activity feed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::dashboard::{transport_title, ActivityKind, DashboardSummary};
use crate::format::{format_date, format_date_time, today};
use crate::models::Labeled;
use crate::services::CrudService;

use crate::components::StatusChip;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let (summary, set_summary) = signal(DashboardSummary::default());
    let (loading, set_loading) = signal(true);
    let (failed, set_failed) = signal(false);

    spawn_local(async move {
        let boxes = ctx.boxes.list().await;
        let tasks = ctx.tasks.list().await;
        let transports = ctx.transports.list().await;
        match (boxes, tasks, transports) {
            (Ok(boxes), Ok(tasks), Ok(transports)) => {
                log::info!(
                    "Dashboard loaded: {} boxes, {} tasks, {} transports",
                    boxes.len(),
                    tasks.len(),
                    transports.len()
                );
                set_summary.set(DashboardSummary::compute(&boxes, &tasks, &transports, today()));
            }
            (boxes, tasks, transports) => {
                for err in [boxes.err(), tasks.err(), transports.err()].into_iter().flatten() {
                    log::error!("Error fetching dashboard data: {}", err);
                }
                set_failed.set(true);
            }
        }
        set_loading.set(false);
    });

    view! {
        <section class="dashboard">
            <h1>"לוח בקרה"</h1>
            <Show when=move || loading.get()>
                <div class="loading-bar"></div>
            </Show>
            <Show when=move || failed.get()>
                <p class="error-text">"שגיאה בטעינת נתוני לוח הבקרה"</p>
            </Show>

            <div class="stat-cards">
                {move || {
                    let s = summary.get();
                    view! {
                        <StatCard
                            title="ארגזים"
                            total=s.boxes.total
                            lines=vec![
                                ("פעילים", s.boxes.active),
                                ("בתחזוקה", s.boxes.maintenance),
                                ("לא פעילים", s.boxes.inactive),
                            ]
                        />
                        <StatCard
                            title="משימות"
                            total=s.tasks.total
                            lines=vec![
                                ("ממתינות", s.tasks.pending),
                                ("בביצוע", s.tasks.in_progress),
                                ("הושלמו", s.tasks.completed),
                                ("באיחור", s.tasks.overdue),
                                ("תחזוקה", s.tasks.maintenance),
                            ]
                        />
                        <StatCard
                            title="שינועים"
                            total=s.transports.total
                            lines=vec![
                                ("מתוכננים", s.transports.planned),
                                ("בביצוע", s.transports.in_progress),
                                ("הושלמו", s.transports.completed),
                            ]
                        />
                    }
                }}
            </div>

            <div class="dashboard-lists">
                <div class="panel">
                    <h2>"משימות להיום"</h2>
                    {move || {
                        let list = summary.with(|s| s.today_tasks.clone());
                        if list.is_empty() {
                            return view! { <p class="empty-state">"אין משימות מתוכננות להיום"</p> }.into_any();
                        }
                        view! {
                            <ul>
                                {list
                                    .into_iter()
                                    .map(|task| {
                                        view! {
                                            <li>
                                                <span>{task.description}</span>
                                                <StatusChip meta=task.priority.meta() />
                                                <StatusChip meta=task.status.meta() />
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }}
                </div>

                <div class="panel">
                    <h2>"שינועים להיום"</h2>
                    {move || {
                        let list = summary.with(|s| s.today_transports.clone());
                        if list.is_empty() {
                            return view! { <p class="empty-state">"אין שינועים מתוכננים להיום"</p> }.into_any();
                        }
                        view! {
                            <ul>
                                {list
                                    .into_iter()
                                    .map(|transport| {
                                        view! {
                                            <li>
                                                <span>{transport_title(&transport)}</span>
                                                <span class="muted">
                                                    {format_date(transport.scheduled_date.as_deref())}
                                                </span>
                                                <StatusChip meta=transport.status.meta() />
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }}
                </div>

                <div class="panel">
                    <h2>"פעילות אחרונה"</h2>
                    {move || {
                        let feed = summary.with(|s| s.recent_activity.clone());
                        if feed.is_empty() {
                            return view! { <p class="empty-state">"אין פעילות אחרונה להצגה"</p> }.into_any();
                        }
                        view! {
                            <ul>
                                <For
                                    each=move || feed.clone()
                                    key=|entry| entry.key.clone()
                                    children=|entry| {
                                        let icon = match entry.kind {
                                            ActivityKind::Task => "📋",
                                            ActivityKind::Transport => "🚚",
                                        };
                                        view! {
                                            <li>
                                                <span class="activity-icon">{icon}</span>
                                                <span>{entry.title}</span>
                                                <span class="muted">{format_date_time(entry.date.as_deref())}</span>
                                                <StatusChip meta=entry.status />
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCard(title: &'static str, total: usize, lines: Vec<(&'static str, usize)>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3>{title}</h3>
            <p class="stat-total">{total}</p>
            <ul class="stat-lines">
                {lines
                    .into_iter()
                    .map(|(label, value)| view! { <li>{label}": "{value}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
