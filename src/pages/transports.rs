//! Transports Page
//!
//! Form schema, filters and table layout for transports. The destination
//! is either a box or a free-text name, never both.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{box_options, enum_options, project, EntityView, SelectField, StatusChip, TextAreaField, TextField};
use crate::context::AppContext;
use crate::crud::{EntityDescriptor, Messages};
use crate::format::{format_date, is_past, to_input_date, today};
use crate::models::{
    non_empty, BoxStatus, DestinationType, DonationBox, EntityKind, EntityRef, Labeled, Transport, TransportPayload,
    TransportStatus,
};
use crate::services::TransportService;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransportForm {
    pub source_box_id: String,
    pub destination_type: DestinationType,
    pub destination_box_id: String,
    pub destination_name: String,
    pub quantity: String,
    pub scheduled_date: String,
    /// Not editable; kept so a full-replace update does not clear it
    pub completion_date: String,
    pub status: TransportStatus,
    pub notes: String,
    pub created_by: String,
    pub driver_name: String,
    pub driver_phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportField {
    SourceBox,
    DestinationType,
    DestinationBox,
    DestinationName,
    Quantity,
    ScheduledDate,
    Status,
    Notes,
    CreatedBy,
    DriverName,
    DriverPhone,
}

pub struct TransportsPage;

static MESSAGES: Messages = Messages {
    title: "ניהול שינועים",
    add_label: "הוסף שינוע חדש",
    create_title: "הוספת שינוע חדש",
    edit_title: "עריכת שינוע",
    search_placeholder: "חיפוש לפי מקור, יעד או שם יעד...",
    empty: "לא נמצאו שינועים",
    load_error: "שגיאה בטעינת שינועים",
    created: "השינוע נוצר בהצלחה",
    updated: "השינוע עודכן בהצלחה",
    save_error: "שגיאה בשמירת השינוע",
    delete_prompt: "האם אתה בטוח שברצונך למחוק שינוע זה?",
    deleted: "השינוע נמחק בהצלחה",
    delete_error: "שגיאה במחיקת השינוע",
    shortcut_done: "השינוע הושלם בהצלחה",
    shortcut_error: "שגיאה בהשלמת השינוע",
    shortcut_label: "סמן כהושלם",
};

static TABS: [(Option<TransportStatus>, &str); 4] = [
    (None, "כל השינועים"),
    (Some(TransportStatus::Planned), "מתוכננים"),
    (Some(TransportStatus::InProgress), "בביצוע"),
    (Some(TransportStatus::Completed), "הושלמו"),
];

/// Only active boxes are offered as source or destination
fn active_box(b: &DonationBox) -> bool {
    b.status == BoxStatus::Active
}

fn id_text(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

impl EntityDescriptor for TransportsPage {
    type Entity = Transport;
    type Form = TransportForm;
    type Field = TransportField;
    type Payload = TransportPayload;

    const KIND: EntityKind = EntityKind::Transport;

    fn messages() -> &'static Messages {
        &MESSAGES
    }

    fn tabs() -> &'static [(Option<TransportStatus>, &'static str)] {
        &TABS
    }

    fn ref_filter() -> Option<fn(&DonationBox) -> bool> {
        Some(active_box)
    }

    fn blank_form() -> TransportForm {
        TransportForm::default()
    }

    fn form_from(t: &Transport) -> TransportForm {
        TransportForm {
            source_box_id: id_text(t.source_box.as_ref().map(|b| b.id)),
            destination_type: t.destination_type,
            destination_box_id: id_text(t.destination_box.as_ref().map(|b| b.id)),
            destination_name: t.destination_name.clone().unwrap_or_default(),
            quantity: t.quantity.clone().unwrap_or_default(),
            scheduled_date: to_input_date(t.scheduled_date.as_deref()),
            completion_date: t.completion_date.clone().unwrap_or_default(),
            status: t.status,
            notes: t.notes.clone().unwrap_or_default(),
            created_by: t.created_by.clone().unwrap_or_default(),
            driver_name: t.driver_name.clone().unwrap_or_default(),
            driver_phone: t.driver_phone.clone().unwrap_or_default(),
        }
    }

    fn apply_field(form: &mut TransportForm, field: TransportField, value: &str) {
        let value = value.to_string();
        match field {
            TransportField::SourceBox => form.source_box_id = value,
            TransportField::DestinationType => {
                if let Ok(parsed) = value.parse() {
                    form.destination_type = parsed;
                }
                form.destination_box_id.clear();
                form.destination_name.clear();
            }
            TransportField::DestinationBox => form.destination_box_id = value,
            TransportField::DestinationName => form.destination_name = value,
            TransportField::Quantity => form.quantity = value,
            TransportField::ScheduledDate => form.scheduled_date = value,
            TransportField::Status => {
                if let Ok(parsed) = value.parse() {
                    form.status = parsed;
                }
            }
            TransportField::Notes => form.notes = value,
            TransportField::CreatedBy => form.created_by = value,
            TransportField::DriverName => form.driver_name = value,
            TransportField::DriverPhone => form.driver_phone = value,
        }
    }

    /// Source, the destination matching its type, and a scheduled date
    fn can_submit(form: &TransportForm) -> bool {
        let destination_set = match form.destination_type {
            DestinationType::Box => EntityRef::parse(&form.destination_box_id).is_some(),
            DestinationType::Store | DestinationType::Family => !form.destination_name.trim().is_empty(),
        };
        EntityRef::parse(&form.source_box_id).is_some() && destination_set && !form.scheduled_date.trim().is_empty()
    }

    fn build_payload(form: &TransportForm) -> TransportPayload {
        let (destination_box, destination_name) = match form.destination_type {
            DestinationType::Box => (EntityRef::parse(&form.destination_box_id), None),
            DestinationType::Store | DestinationType::Family => (None, non_empty(&form.destination_name)),
        };
        TransportPayload {
            source_box: EntityRef::parse(&form.source_box_id),
            destination_type: form.destination_type,
            destination_box,
            destination_name,
            quantity: non_empty(&form.quantity),
            scheduled_date: non_empty(&form.scheduled_date),
            completion_date: non_empty(&form.completion_date),
            status: form.status,
            notes: non_empty(&form.notes),
            created_by: non_empty(&form.created_by),
            driver_name: non_empty(&form.driver_name),
            driver_phone: non_empty(&form.driver_phone),
        }
    }

    fn search_fields(t: &Transport) -> Vec<&str> {
        [&t.source_box, &t.destination_box]
            .into_iter()
            .filter_map(|b| b.as_ref().and_then(|b| b.location_name.as_deref()))
            .chain(t.destination_name.as_deref())
            .collect()
    }

    fn shortcut_status(t: &Transport) -> Option<TransportStatus> {
        (t.status != TransportStatus::Completed).then_some(TransportStatus::Completed)
    }
}

impl EntityView for TransportsPage {
    type Service = TransportService;

    fn service(ctx: &AppContext) -> Arc<TransportService> {
        ctx.transports.clone()
    }

    fn headers() -> &'static [&'static str] {
        &["מקור", "סוג יעד", "יעד", "כמות", "תאריך מתוכנן", "סטטוס"]
    }

    fn row_cells(t: &Transport) -> AnyView {
        let unknown = || "-".to_string();
        let late = t.status == TransportStatus::Planned && is_past(t.scheduled_date.as_deref(), today());
        let date_class = if late { "late" } else { "" };
        view! {
            <td>{t.source_label().unwrap_or_else(unknown)}</td>
            <td>{t.destination_type.label()}</td>
            <td>{t.destination_label().unwrap_or_else(unknown)}</td>
            <td>{t.quantity.clone().unwrap_or_else(unknown)}</td>
            <td class=date_class>{format_date(t.scheduled_date.as_deref())}</td>
            <td><StatusChip meta=t.status.meta() /></td>
        }
        .into_any()
    }

    fn form_fields(
        form: Signal<TransportForm>,
        refs: Signal<Vec<DonationBox>>,
        refs_loading: Signal<bool>,
        on_change: Callback<(TransportField, String)>,
    ) -> AnyView {
        let set = move |field: TransportField| move |value: String| on_change.run((field, value));
        let boxes = Signal::derive(move || refs.with(|list| box_options(list)));
        let to_box = Memo::new(move |_| form.with(|f| f.destination_type == DestinationType::Box));

        view! {
            <SelectField
                label="ארגז מקור"
                required=true
                placeholder="בחר ארגז"
                value=project(form, |f| f.source_box_id.clone())
                options=boxes
                disabled=refs_loading
                on_change=set(TransportField::SourceBox)
            />
            <SelectField
                label="סוג יעד"
                value=project(form, |f| f.destination_type.as_str().to_string())
                options=Signal::derive(|| enum_options(DestinationType::ALL))
                on_change=set(TransportField::DestinationType)
            />
            {move || {
                if to_box.get() {
                    view! {
                        <SelectField
                            label="ארגז יעד"
                            required=true
                            placeholder="בחר ארגז"
                            value=project(form, |f| f.destination_box_id.clone())
                            options=boxes
                            disabled=refs_loading
                            on_change=set(TransportField::DestinationBox)
                        />
                    }
                    .into_any()
                } else {
                    view! {
                        <TextField
                            label="שם יעד"
                            required=true
                            value=project(form, |f| f.destination_name.clone())
                            on_input=set(TransportField::DestinationName)
                        />
                    }
                    .into_any()
                }
            }}
            <TextField
                label="כמות/תיאור מזון"
                value=project(form, |f| f.quantity.clone())
                on_input=set(TransportField::Quantity)
            />
            <TextField
                label="תאריך מתוכנן"
                required=true
                input_type="date"
                value=project(form, |f| f.scheduled_date.clone())
                on_input=set(TransportField::ScheduledDate)
            />
            <SelectField
                label="סטטוס"
                value=project(form, |f| f.status.as_str().to_string())
                options=Signal::derive(|| enum_options(TransportStatus::ALL))
                on_change=set(TransportField::Status)
            />
            <div class="form-row">
                <TextField
                    label="שם נהג"
                    value=project(form, |f| f.driver_name.clone())
                    on_input=set(TransportField::DriverName)
                />
                <TextField
                    label="טלפון נהג"
                    input_type="tel"
                    value=project(form, |f| f.driver_phone.clone())
                    on_input=set(TransportField::DriverPhone)
                />
            </div>
            <TextField
                label="נוצר על ידי"
                value=project(form, |f| f.created_by.clone())
                on_input=set(TransportField::CreatedBy)
            />
            <TextAreaField
                label="הערות"
                value=project(form, |f| f.notes.clone())
                on_input=set(TransportField::Notes)
            />
        }
        .into_any()
    }
}
