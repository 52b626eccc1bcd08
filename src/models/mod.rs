//! Frontend Models
//!
//! Data structures matching backend entities.

mod entity;
pub mod meta;
mod wire;
mod donation_box;
mod task;
mod transport;

pub use entity::{non_empty, Entity, EntityId, EntityRef};
pub use meta::{EntityKind, EnumField, EnumMeta, Labeled, Tone};
pub use donation_box::{BoxPayload, BoxStatus, BoxSummary, DonationBox};
pub use task::{Task, TaskPayload, TaskPriority, TaskStatus, TaskType};
pub use transport::{DestinationType, Transport, TransportPayload, TransportStatus};
