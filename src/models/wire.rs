//! Wire helpers shared by the entity models.

use chrono::DateTime;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Millis(i64),
}

/// Accepts an ISO string, epoch milliseconds or null; always yields a string
pub fn opt_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawDate>::deserialize(deserializer)? {
        None => None,
        Some(RawDate::Text(text)) if text.trim().is_empty() => None,
        Some(RawDate::Text(text)) => Some(text),
        Some(RawDate::Millis(ms)) => DateTime::from_timestamp_millis(ms).map(|dt| dt.to_rfc3339()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_date")]
        at: Option<String>,
    }

    fn probe(json: &str) -> Option<String> {
        serde_json::from_str::<Probe>(json).unwrap().at
    }

    #[test]
    fn test_date_shapes() {
        assert_eq!(probe(r#"{"at":"2026-10-16"}"#).as_deref(), Some("2026-10-16"));
        assert_eq!(probe(r#"{"at":0}"#).as_deref(), Some("1970-01-01T00:00:00+00:00"));
        assert_eq!(probe(r#"{"at":null}"#), None);
        assert_eq!(probe(r#"{"at":""}"#), None);
        assert_eq!(probe(r#"{}"#), None);
    }
}
