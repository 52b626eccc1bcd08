//! Donation Box Entity
//!
//! A physical collection point. Transports and tasks refer to boxes by id.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId};
use super::meta::wire_enum;
use super::wire::opt_date;

wire_enum! {
    /// Box lifecycle
    BoxStatus(Box, Status) {
        Active => "ACTIVE",
        Maintenance => "MAINTENANCE",
        Inactive => "INACTIVE",
    }
}

impl Default for BoxStatus {
    fn default() -> Self {
        BoxStatus::Active
    }
}

/// Box as returned by `/api/boxes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationBox {
    pub id: EntityId,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub donation_group: Option<String>,
    #[serde(default)]
    pub responsible_person: Option<String>,
    #[serde(default)]
    pub responsible_person_phone: Option<String>,
    #[serde(default)]
    pub association_manager: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub status: BoxStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "opt_date")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "opt_date")]
    pub updated_at: Option<String>,
}

impl DonationBox {
    /// Location name, falling back to the donation group, then the id
    pub fn display_name(&self) -> String {
        display_name(self.id, self.location_name.as_deref(), self.donation_group.as_deref())
    }
}

impl Entity for DonationBox {
    type Id = EntityId;
    type Status = BoxStatus;

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

/// Box nested inside a task or transport response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxSummary {
    pub id: EntityId,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub donation_group: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: Option<BoxStatus>,
}

impl BoxSummary {
    pub fn display_name(&self) -> String {
        display_name(self.id, self.location_name.as_deref(), self.donation_group.as_deref())
    }
}

fn display_name(id: EntityId, location: Option<&str>, group: Option<&str>) -> String {
    location
        .filter(|s| !s.trim().is_empty())
        .or(group.filter(|s| !s.trim().is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", id))
}

/// Create/update body for a box
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPayload {
    pub location_name: Option<String>,
    pub donation_group: Option<String>,
    pub responsible_person: Option<String>,
    pub responsible_person_phone: Option<String>,
    pub association_manager: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: BoxStatus,
    pub notes: Option<String>,
}
