//! Generic CRUD Page Component
//!
//! One page layout for every entity: header with "add", status tabs,
//! search, table, edit dialog and snackbar. The entity-specific parts come
//! from `EntityView`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, AppContext};
use crate::crud::{reduce, CrudController, Dispatch, EntityDescriptor, PageAction, PageState, RefSource};
use crate::models::{DonationBox, Entity, EntityId};
use crate::services::CrudService;

use super::{SearchBar, Snackbar, StatusTabs};

/// Rendering half of a page descriptor
pub trait EntityView: EntityDescriptor {
    type Service: CrudService<Self::Entity, Payload = Self::Payload> + 'static;

    /// Rows can be clicked to open `details`
    const HAS_DETAILS: bool = false;

    fn service(ctx: &AppContext) -> Arc<Self::Service>;

    /// Column titles, without the actions column
    fn headers() -> &'static [&'static str];

    /// `<td>` cells of one row
    fn row_cells(entity: &Self::Entity) -> AnyView;

    fn form_fields(
        form: Signal<Self::Form>,
        refs: Signal<Vec<DonationBox>>,
        refs_loading: Signal<bool>,
        on_change: Callback<(Self::Field, String)>,
    ) -> AnyView;

    fn details(id: EntityId) -> AnyView {
        let _ = id;
        ().into_any()
    }
}

type PageController<D> = CrudController<D, <D as EntityView>::Service>;

fn apply<D: EntityDescriptor>(state: RwSignal<PageState<D>>, action: PageAction<D>) {
    state.update(|current| *current = reduce(std::mem::take(current), action));
}

/// Full page for descriptor `D`
pub fn crud_page<D: EntityView>() -> impl IntoView {
    let ctx = use_app_context();
    let messages = D::messages();
    let state = RwSignal::new(PageState::<D>::new());

    let dispatch: Dispatch<D> = Arc::new(move |action| apply(state, action));
    let mut controller = PageController::<D>::new(D::service(&ctx), dispatch);
    if D::ref_filter().is_some() {
        let refs: RefSource = ctx.boxes.clone();
        controller = controller.with_refs(refs);
    }
    let controller = Arc::new(controller);

    {
        let controller = controller.clone();
        spawn_local(async move { controller.load().await });
    }

    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let rows = Memo::new(move |_| state.with(|s| s.visible_rows()));
    let search_term = Memo::new(move |_| state.with(|s| s.search_term.clone()));
    let active_tab = Memo::new(move |_| state.with(|s| s.active_tab));
    let dialog_open = Memo::new(move |_| state.with(|s| s.dialog_open));
    let notification = Memo::new(move |_| state.with(|s| s.notification.clone()));
    let selected = RwSignal::new(None::<EntityId>);

    let tab_labels: Vec<&'static str> = D::tabs().iter().map(|(_, label)| *label).collect();
    let column_count = D::headers().len() + 1;

    let table_body = {
        let controller = controller.clone();
        move || {
            let visible = rows.get();
            if visible.is_empty() {
                let text = if loading.get() { "טוען..." } else { messages.empty };
                return view! {
                    <tr>
                        <td class="empty-state" colspan=column_count.to_string()>{text}</td>
                    </tr>
                }
                .into_any();
            }
            visible
                .into_iter()
                .map(|entity| table_row::<D>(entity, controller.clone(), state, selected))
                .collect_view()
                .into_any()
        }
    };

    let dialog = {
        let controller = controller.clone();
        move || dialog_open.get().then(|| edit_dialog::<D>(controller.clone(), state))
    };

    view! {
        <section class="crud-page">
            <div class="page-header">
                <h1>{messages.title}</h1>
                <button class="add-btn" on:click=move |_| apply(state, PageAction::OpenCreate)>
                    "+ "
                    {messages.add_label}
                </button>
            </div>

            {(!tab_labels.is_empty()).then(|| {
                view! {
                    <StatusTabs
                        labels=tab_labels
                        active=active_tab
                        on_select=move |tab: usize| apply(state, PageAction::TabChanged(tab))
                    />
                }
            })}

            <SearchBar
                placeholder=messages.search_placeholder
                value=search_term
                on_search=move |term: String| apply(state, PageAction::SearchChanged(term))
            />

            <Show when=move || loading.get()>
                <div class="loading-bar"></div>
            </Show>

            <table class="entity-table">
                <thead>
                    <tr>
                        {D::headers().iter().map(|title| view! { <th>{*title}</th> }).collect_view()}
                        <th>"פעולות"</th>
                    </tr>
                </thead>
                <tbody>{table_body}</tbody>
            </table>

            {move || {
                selected
                    .get()
                    .filter(|_| D::HAS_DETAILS)
                    .map(|id| {
                        view! {
                            <aside class="details-panel">
                                <button class="close-btn" on:click=move |_| selected.set(None)>
                                    "×"
                                </button>
                                {D::details(id)}
                            </aside>
                        }
                    })
            }}

            {dialog}

            <Snackbar
                notification=notification
                on_dismiss=move |id: u64| apply(state, PageAction::DismissNotification(id))
                timeout_ms=ctx.config.notification_timeout_ms
            />
        </section>
    }
}

fn table_row<D: EntityView>(
    entity: D::Entity,
    controller: Arc<PageController<D>>,
    state: RwSignal<PageState<D>>,
    selected: RwSignal<Option<EntityId>>,
) -> AnyView {
    let id = entity.id();
    let shortcut = D::shortcut_status(&entity).map(|status| {
        let controller = controller.clone();
        view! {
            <button
                class="shortcut-btn"
                title=D::messages().shortcut_label
                on:click=move |ev| {
                    ev.stop_propagation();
                    let controller = controller.clone();
                    spawn_local(async move {
                        controller.shortcut(id, status).await;
                    });
                }
            >
                "✓"
            </button>
        }
    });
    // 🗑 asks first; ✓ or ✗ hands the answer to the controller
    let confirming = RwSignal::new(false);
    let on_decide = Callback::new(move |confirmed: bool| {
        confirming.set(false);
        let controller = controller.clone();
        spawn_local(async move {
            controller.delete(id, confirmed).await;
        });
    });
    let delete_control = move || {
        if confirming.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{D::messages().delete_prompt}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_decide.run(true);
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_decide.run(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="delete-btn"
                    title="מחיקה"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        confirming.set(true);
                    }
                >
                    "🗑"
                </button>
            }
            .into_any()
        }
    };
    let cells = D::row_cells(&entity);
    let row_class = if D::HAS_DETAILS { "entity-row clickable" } else { "entity-row" };

    view! {
        <tr
            class=row_class
            on:click=move |_| {
                if D::HAS_DETAILS {
                    selected.set(Some(id));
                }
            }
        >
            {cells}
            <td class="row-actions">
                {shortcut}
                <button
                    class="edit-btn"
                    title="עריכה"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        apply(state, PageAction::OpenEdit(entity.clone()));
                    }
                >
                    "✎"
                </button>
                {delete_control}
            </td>
        </tr>
    }
    .into_any()
}

fn edit_dialog<D: EntityView>(controller: Arc<PageController<D>>, state: RwSignal<PageState<D>>) -> impl IntoView {
    let messages = D::messages();
    let title = state.with_untracked(|s| {
        if s.editing.is_some() {
            messages.edit_title
        } else {
            messages.create_title
        }
    });
    let form = Memo::new(move |_| state.with(|s| s.form.clone()));
    let refs = Memo::new(move |_| state.with(|s| s.refs.clone()));
    let refs_loading = Memo::new(move |_| state.with(|s| s.refs_loading));
    let can_submit = Memo::new(move |_| state.with(|s| s.can_submit()));
    let on_change = Callback::new(move |(field, value): (D::Field, String)| {
        apply(state, PageAction::FieldChanged(field, value))
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (editing, form, allowed) = state.with_untracked(|s| (s.editing_id(), s.form.clone(), s.can_submit()));
        if !allowed {
            return;
        }
        let controller = controller.clone();
        spawn_local(async move {
            controller.submit(editing, &form).await;
        });
    };

    view! {
        <div class="dialog-backdrop">
            <form class="dialog" on:submit=on_submit>
                <h2 class="dialog-title">{title}</h2>
                <div class="dialog-body">{D::form_fields(form.into(), refs.into(), refs_loading.into(), on_change)}</div>
                <div class="dialog-actions">
                    <button type="button" on:click=move |_| apply(state, PageAction::CloseDialog)>
                        "ביטול"
                    </button>
                    <button type="submit" class="primary" disabled=move || !can_submit.get()>
                        "שמירה"
                    </button>
                </div>
            </form>
        </div>
    }
}
