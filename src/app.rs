//! Kesher Admin App
//!
//! Application shell: header, sidebar navigation and the active page.

use leptos::prelude::*;

use crate::components::crud_page;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{BoxesPage, DashboardPage, TasksPage, TransportsPage};

/// Sidebar destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Boxes,
    Tasks,
    Transports,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Boxes, Page::Tasks, Page::Transports];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "לוח בקרה",
            Page::Boxes => "ארגזים",
            Page::Tasks => "משימות",
            Page::Transports => "שינועים",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "📊",
            Page::Boxes => "📦",
            Page::Tasks => "📋",
            Page::Transports => "🚚",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (current_page, set_current_page) = signal(Page::Dashboard);

    // Provide services to all children
    provide_context(AppContext::new(AppConfig::load()));

    view! {
        <div class="app-layout" dir="rtl">
            <header class="app-header">
                <h1>"מערכת ניהול קשר"</h1>
            </header>
            <nav class="sidebar">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        let item_class = move || {
                            if current_page.get() == page { "nav-item active" } else { "nav-item" }
                        };
                        view! {
                            <button class=item_class on:click=move |_| set_current_page.set(page)>
                                <span class="nav-icon">{page.icon()}</span>
                                {page.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <main class="main-content">
                {move || {
                    log::debug!("Showing page {:?}", current_page.get());
                    match current_page.get() {
                        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Page::Boxes => crud_page::<BoxesPage>().into_any(),
                        Page::Tasks => crud_page::<TasksPage>().into_any(),
                        Page::Transports => crud_page::<TransportsPage>().into_any(),
                    }
                }}
            </main>
        </div>
    }
}
