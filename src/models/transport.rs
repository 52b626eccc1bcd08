//! Transport Entity
//!
//! Scheduled movement of goods from a source box to another box, a store
//! or a family.

use serde::{Deserialize, Serialize};

use super::donation_box::BoxSummary;
use super::entity::{Entity, EntityId, EntityRef};
use super::meta::wire_enum;
use super::wire::opt_date;

wire_enum! {
    DestinationType(Transport, DestinationType) {
        Box => "BOX",
        Store => "STORE",
        Family => "FAMILY",
    }
}

wire_enum! {
    TransportStatus(Transport, Status) {
        Planned => "PLANNED",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
}

impl Default for DestinationType {
    fn default() -> Self {
        DestinationType::Box
    }
}

impl Default for TransportStatus {
    fn default() -> Self {
        TransportStatus::Planned
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transport {
    pub id: EntityId,
    #[serde(default)]
    pub source_box: Option<BoxSummary>,
    #[serde(default)]
    pub destination_type: DestinationType,
    #[serde(default)]
    pub destination_box: Option<BoxSummary>,
    #[serde(default)]
    pub destination_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default, deserialize_with = "opt_date")]
    pub scheduled_date: Option<String>,
    #[serde(default, deserialize_with = "opt_date")]
    pub completion_date: Option<String>,
    #[serde(default)]
    pub status: TransportStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub driver_phone: Option<String>,
    #[serde(default, deserialize_with = "opt_date")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "opt_date")]
    pub updated_at: Option<String>,
}

impl Transport {
    pub fn source_label(&self) -> Option<String> {
        self.source_box.as_ref().map(BoxSummary::display_name)
    }

    /// Destination box name for `BOX`, free-text name otherwise
    pub fn destination_label(&self) -> Option<String> {
        match (self.destination_type, &self.destination_box) {
            (DestinationType::Box, Some(b)) => Some(b.display_name()),
            _ => self
                .destination_name
                .clone()
                .filter(|name| !name.trim().is_empty()),
        }
    }
}

impl Entity for Transport {
    type Id = EntityId;
    type Status = TransportStatus;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }
}

/// Create/update body for a transport.
///
/// Exactly one of `destination_box` / `destination_name` is set, chosen by
/// `destination_type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportPayload {
    pub source_box: Option<EntityRef>,
    pub destination_type: DestinationType,
    pub destination_box: Option<EntityRef>,
    pub destination_name: Option<String>,
    pub quantity: Option<String>,
    pub scheduled_date: Option<String>,
    pub completion_date: Option<String>,
    pub status: TransportStatus,
    pub notes: Option<String>,
    pub created_by: Option<String>,
    pub driver_name: Option<String>,
    pub driver_phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(json: &str) -> Transport {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_destination_label_by_type() {
        let to_box = transport(
            r#"{"id":1,"destinationType":"BOX","destinationBox":{"id":4,"locationName":"גבעה"},"destinationName":"ignored"}"#,
        );
        assert_eq!(to_box.destination_label().as_deref(), Some("גבעה"));

        let to_family = transport(r#"{"id":2,"destinationType":"FAMILY","destinationName":"משפחת כהן"}"#);
        assert_eq!(to_family.destination_label().as_deref(), Some("משפחת כהן"));

        let unknown = transport(r#"{"id":3,"destinationType":"STORE"}"#);
        assert_eq!(unknown.destination_label(), None);
    }

    #[test]
    fn test_decode_epoch_dates() {
        let t = transport(r#"{"id":5,"scheduledDate":86400000,"status":"COMPLETED"}"#);
        assert_eq!(t.scheduled_date.as_deref(), Some("1970-01-02T00:00:00+00:00"));
        assert_eq!(t.status(), TransportStatus::Completed);
        assert_eq!(t.source_label(), None);
    }
}
