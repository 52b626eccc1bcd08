//! Enum Metadata
//!
//! One lookup table for every closed enum the UI displays:
//! (entity kind, field, wire value) -> Hebrew label + chip tone.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Box,
    Task,
    Transport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumField {
    Status,
    Priority,
    TaskType,
    DestinationType,
}

/// Semantic chip color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Default,
    Primary,
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Default => "chip chip-default",
            Tone::Primary => "chip chip-primary",
            Tone::Info => "chip chip-info",
            Tone::Success => "chip chip-success",
            Tone::Warning => "chip chip-warning",
            Tone::Error => "chip chip-error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMeta {
    pub label: &'static str,
    pub tone: Tone,
}

const fn meta(label: &'static str, tone: Tone) -> EnumMeta {
    EnumMeta { label, tone }
}

use EntityKind as K;
use EnumField as F;

static TABLE: &[(EntityKind, EnumField, &str, EnumMeta)] = &[
    (K::Box, F::Status, "ACTIVE", meta("פעיל", Tone::Success)),
    (K::Box, F::Status, "MAINTENANCE", meta("בתחזוקה", Tone::Warning)),
    (K::Box, F::Status, "INACTIVE", meta("לא פעיל", Tone::Error)),
    (K::Task, F::Status, "PENDING", meta("ממתינה", Tone::Info)),
    (K::Task, F::Status, "IN_PROGRESS", meta("בביצוע", Tone::Warning)),
    (K::Task, F::Status, "COMPLETED", meta("הושלמה", Tone::Success)),
    (K::Task, F::Status, "CANCELLED", meta("בוטלה", Tone::Error)),
    (K::Task, F::Priority, "LOW", meta("נמוכה", Tone::Default)),
    (K::Task, F::Priority, "MEDIUM", meta("בינונית", Tone::Primary)),
    (K::Task, F::Priority, "HIGH", meta("גבוהה", Tone::Warning)),
    (K::Task, F::Priority, "URGENT", meta("דחוף", Tone::Error)),
    (K::Task, F::TaskType, "COLLECTION", meta("איסוף", Tone::Default)),
    (K::Task, F::TaskType, "TRANSPORT", meta("שינוע", Tone::Default)),
    (K::Task, F::TaskType, "MAINTENANCE", meta("תחזוקה", Tone::Default)),
    (K::Task, F::TaskType, "OTHER", meta("אחר", Tone::Default)),
    (K::Transport, F::Status, "PLANNED", meta("מתוכנן", Tone::Info)),
    (K::Transport, F::Status, "IN_PROGRESS", meta("בביצוע", Tone::Warning)),
    (K::Transport, F::Status, "COMPLETED", meta("הושלם", Tone::Success)),
    (K::Transport, F::Status, "CANCELLED", meta("בוטל", Tone::Error)),
    (K::Transport, F::DestinationType, "BOX", meta("ארגז", Tone::Default)),
    (K::Transport, F::DestinationType, "STORE", meta("חנות", Tone::Default)),
    (K::Transport, F::DestinationType, "FAMILY", meta("משפחה", Tone::Default)),
];

pub fn lookup(kind: EntityKind, field: EnumField, value: &str) -> Option<EnumMeta> {
    TABLE
        .iter()
        .find(|(k, f, v, _)| *k == kind && *f == field && *v == value)
        .map(|(_, _, _, m)| *m)
}

/// Implemented by every closed enum that is shown to the user
pub trait Labeled: Copy {
    const KIND: EntityKind;
    const FIELD: EnumField;

    fn wire(&self) -> &'static str;

    fn meta(&self) -> EnumMeta {
        lookup(Self::KIND, Self::FIELD, self.wire()).unwrap_or(EnumMeta {
            label: self.wire(),
            tone: Tone::Default,
        })
    }

    fn label(&self) -> &'static str {
        self.meta().label
    }

    fn tone(&self) -> Tone {
        self.meta().tone
    }
}

/// Returned by `FromStr` for values outside an enum
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Closed wire enum with SCREAMING_SNAKE_CASE values and a metadata entry
macro_rules! wire_enum {
    (
        $(#[$attr:meta])*
        $name:ident ($kind:ident, $field:ident) {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::meta::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::models::meta::UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::models::meta::Labeled for $name {
            const KIND: $crate::models::meta::EntityKind = $crate::models::meta::EntityKind::$kind;
            const FIELD: $crate::models::meta::EnumField = $crate::models::meta::EnumField::$field;

            fn wire(&self) -> &'static str {
                self.as_str()
            }
        }
    };
}

pub(crate) use wire_enum;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_wire_value_differs_by_kind() {
        let task = lookup(EntityKind::Task, EnumField::Status, "COMPLETED").unwrap();
        let transport = lookup(EntityKind::Transport, EnumField::Status, "COMPLETED").unwrap();
        assert_eq!(task.label, "הושלמה");
        assert_eq!(transport.label, "הושלם");
        assert_eq!(task.tone, Tone::Success);
    }

    #[test]
    fn test_unknown_wire_value_is_rejected() {
        let err = "LOST".parse::<crate::models::BoxStatus>().unwrap_err();
        assert_eq!(err.value, "LOST");
        assert_eq!(err.to_string(), "unknown BoxStatus value: LOST");
    }

    #[test]
    fn test_lookup_miss() {
        assert!(lookup(EntityKind::Box, EnumField::Priority, "LOW").is_none());
    }

    #[test]
    fn test_every_row_is_unique() {
        for (i, a) in TABLE.iter().enumerate() {
            for b in &TABLE[i + 1..] {
                assert!(!(a.0 == b.0 && a.1 == b.1 && a.2 == b.2), "duplicate {:?}", a.2);
            }
        }
    }
}
