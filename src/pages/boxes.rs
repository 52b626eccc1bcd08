//! Boxes Page
//!
//! Form schema, filters and table layout for donation boxes. Clicking a
//! row opens the box details panel.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{enum_options, project, BoxDetails, EntityView, SelectField, StatusChip, TextAreaField, TextField};
use crate::context::AppContext;
use crate::crud::{EntityDescriptor, Messages};
use crate::models::{non_empty, BoxPayload, BoxStatus, DonationBox, EntityId, EntityKind, Labeled};
use crate::services::BoxService;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxForm {
    pub location_name: String,
    pub donation_group: String,
    pub responsible_person: String,
    pub responsible_person_phone: String,
    pub association_manager: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
    pub status: BoxStatus,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxField {
    LocationName,
    DonationGroup,
    ResponsiblePerson,
    ResponsiblePersonPhone,
    AssociationManager,
    Address,
    Latitude,
    Longitude,
    Status,
    Notes,
}

pub struct BoxesPage;

static MESSAGES: Messages = Messages {
    title: "ניהול ארגזים",
    add_label: "הוסף ארגז חדש",
    create_title: "הוספת ארגז חדש",
    edit_title: "עריכת ארגז",
    search_placeholder: "חיפוש לפי קבוצה או כתובת...",
    empty: "לא נמצאו ארגזים",
    load_error: "שגיאה בטעינת ארגזים",
    created: "הארגז נוצר בהצלחה",
    updated: "הארגז עודכן בהצלחה",
    save_error: "שגיאה בשמירת הארגז",
    delete_prompt: "האם אתה בטוח שברצונך למחוק ארגז זה?",
    deleted: "הארגז נמחק בהצלחה",
    delete_error: "שגיאה במחיקת הארגז",
    shortcut_done: "",
    shortcut_error: "",
    shortcut_label: "",
};

fn coordinate_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Blank or malformed input is sent as no coordinate
fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

impl EntityDescriptor for BoxesPage {
    type Entity = DonationBox;
    type Form = BoxForm;
    type Field = BoxField;
    type Payload = BoxPayload;

    const KIND: EntityKind = EntityKind::Box;

    fn messages() -> &'static Messages {
        &MESSAGES
    }

    fn blank_form() -> BoxForm {
        BoxForm::default()
    }

    fn form_from(b: &DonationBox) -> BoxForm {
        BoxForm {
            location_name: b.location_name.clone().unwrap_or_default(),
            donation_group: b.donation_group.clone().unwrap_or_default(),
            responsible_person: b.responsible_person.clone().unwrap_or_default(),
            responsible_person_phone: b.responsible_person_phone.clone().unwrap_or_default(),
            association_manager: b.association_manager.clone().unwrap_or_default(),
            address: b.address.clone().unwrap_or_default(),
            latitude: coordinate_text(b.latitude),
            longitude: coordinate_text(b.longitude),
            status: b.status,
            notes: b.notes.clone().unwrap_or_default(),
        }
    }

    fn apply_field(form: &mut BoxForm, field: BoxField, value: &str) {
        let value = value.to_string();
        match field {
            BoxField::LocationName => form.location_name = value,
            BoxField::DonationGroup => form.donation_group = value,
            BoxField::ResponsiblePerson => form.responsible_person = value,
            BoxField::ResponsiblePersonPhone => form.responsible_person_phone = value,
            BoxField::AssociationManager => form.association_manager = value,
            BoxField::Address => form.address = value,
            BoxField::Latitude => form.latitude = value,
            BoxField::Longitude => form.longitude = value,
            BoxField::Status => {
                if let Ok(parsed) = value.parse() {
                    form.status = parsed;
                }
            }
            BoxField::Notes => form.notes = value,
        }
    }

    fn can_submit(form: &BoxForm) -> bool {
        !form.donation_group.trim().is_empty()
    }

    fn build_payload(form: &BoxForm) -> BoxPayload {
        BoxPayload {
            location_name: non_empty(&form.location_name),
            donation_group: non_empty(&form.donation_group),
            responsible_person: non_empty(&form.responsible_person),
            responsible_person_phone: non_empty(&form.responsible_person_phone),
            association_manager: non_empty(&form.association_manager),
            address: non_empty(&form.address),
            latitude: parse_coordinate(&form.latitude),
            longitude: parse_coordinate(&form.longitude),
            status: form.status,
            notes: non_empty(&form.notes),
        }
    }

    fn search_fields(b: &DonationBox) -> Vec<&str> {
        b.donation_group.as_deref().into_iter().chain(b.address.as_deref()).collect()
    }
}

impl EntityView for BoxesPage {
    type Service = BoxService;

    const HAS_DETAILS: bool = true;

    fn service(ctx: &AppContext) -> Arc<BoxService> {
        ctx.boxes.clone()
    }

    fn headers() -> &'static [&'static str] {
        &["שם מיקום", "קבוצת תרומה", "כתובת", "אחראי ארגז", "סטטוס"]
    }

    fn row_cells(b: &DonationBox) -> AnyView {
        let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        view! {
            <td>{text(&b.location_name)}</td>
            <td>{text(&b.donation_group)}</td>
            <td>{text(&b.address)}</td>
            <td>{text(&b.responsible_person)}</td>
            <td><StatusChip meta=b.status.meta() /></td>
        }
        .into_any()
    }

    fn form_fields(
        form: Signal<BoxForm>,
        _refs: Signal<Vec<DonationBox>>,
        _refs_loading: Signal<bool>,
        on_change: Callback<(BoxField, String)>,
    ) -> AnyView {
        let set = move |field: BoxField| move |value: String| on_change.run((field, value));
        view! {
            <TextField
                label="קבוצת תרומה"
                required=true
                value=project(form, |f| f.donation_group.clone())
                on_input=set(BoxField::DonationGroup)
            />
            <TextField
                label="שם מיקום"
                value=project(form, |f| f.location_name.clone())
                on_input=set(BoxField::LocationName)
            />
            <TextField label="כתובת" value=project(form, |f| f.address.clone()) on_input=set(BoxField::Address) />
            <TextField
                label="אחראי ארגז"
                value=project(form, |f| f.responsible_person.clone())
                on_input=set(BoxField::ResponsiblePerson)
            />
            <TextField
                label="טלפון אחראי"
                input_type="tel"
                value=project(form, |f| f.responsible_person_phone.clone())
                on_input=set(BoxField::ResponsiblePersonPhone)
            />
            <TextField
                label="מנהל עמותה"
                value=project(form, |f| f.association_manager.clone())
                on_input=set(BoxField::AssociationManager)
            />
            <div class="form-row">
                <TextField
                    label="קו רוחב"
                    input_type="number"
                    value=project(form, |f| f.latitude.clone())
                    on_input=set(BoxField::Latitude)
                />
                <TextField
                    label="קו אורך"
                    input_type="number"
                    value=project(form, |f| f.longitude.clone())
                    on_input=set(BoxField::Longitude)
                />
            </div>
            <SelectField
                label="סטטוס"
                value=project(form, |f| f.status.as_str().to_string())
                options=Signal::derive(|| enum_options(BoxStatus::ALL))
                on_change=set(BoxField::Status)
            />
            <TextAreaField label="הערות" value=project(form, |f| f.notes.clone()) on_input=set(BoxField::Notes) />
        }
        .into_any()
    }

    fn details(id: EntityId) -> AnyView {
        view! { <BoxDetails id=id /> }.into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud::filter_rows;

    fn boxes() -> Vec<DonationBox> {
        serde_json::from_value(serde_json::json!([
            { "id": 1, "donationGroup": "North", "address": "Herzl 4" },
            { "id": 2, "donationGroup": "South", "address": "Weizmann 10", "locationName": "North Gate" },
            { "id": 3, "donationGroup": null, "address": null }
        ]))
        .unwrap()
    }

    #[test]
    fn test_search_covers_group_and_address_only() {
        let items = boxes();
        let ids = |term: &str| -> Vec<i64> { filter_rows::<BoxesPage>(&items, term, 0).iter().map(|b| b.id).collect() };

        assert_eq!(ids("north"), vec![1]);
        assert_eq!(ids("WEIZ"), vec![2]);
        assert_eq!(ids(""), vec![1, 2, 3]);
        assert!(filter_rows::<BoxesPage>(&[], "north", 0).is_empty());
    }

    #[test]
    fn test_edit_round_trip_preserves_fields() {
        let original: DonationBox = serde_json::from_value(serde_json::json!({
            "id": 7,
            "locationName": "בית הכנסת",
            "donationGroup": "מרכז",
            "responsiblePerson": "משה",
            "responsiblePersonPhone": "050-1234567",
            "associationManager": "רחל",
            "address": "הרצל 1",
            "latitude": 31.7683,
            "longitude": 35.2137,
            "status": "MAINTENANCE",
            "notes": "מכסה שבור"
        }))
        .unwrap();

        let payload = BoxesPage::build_payload(&BoxesPage::form_from(&original));

        assert_eq!(
            payload,
            BoxPayload {
                location_name: original.location_name.clone(),
                donation_group: original.donation_group.clone(),
                responsible_person: original.responsible_person.clone(),
                responsible_person_phone: original.responsible_person_phone.clone(),
                association_manager: original.association_manager.clone(),
                address: original.address.clone(),
                latitude: Some(31.7683),
                longitude: Some(35.2137),
                status: BoxStatus::Maintenance,
                notes: original.notes.clone(),
            }
        );
    }

    #[test]
    fn test_donation_group_required() {
        let mut form = BoxesPage::blank_form();
        BoxesPage::apply_field(&mut form, BoxField::Address, "הרצל 1");
        assert!(!BoxesPage::can_submit(&form));
        BoxesPage::apply_field(&mut form, BoxField::DonationGroup, "צפון");
        assert!(BoxesPage::can_submit(&form));
    }

    #[test]
    fn test_bad_coordinate_is_dropped() {
        let mut form = BoxesPage::blank_form();
        BoxesPage::apply_field(&mut form, BoxField::Latitude, "abc");
        BoxesPage::apply_field(&mut form, BoxField::Longitude, " 35.5 ");
        let payload = BoxesPage::build_payload(&form);
        assert_eq!(payload.latitude, None);
        assert_eq!(payload.longitude, Some(35.5));
        assert_eq!(payload.status, BoxStatus::Active);
    }
}
