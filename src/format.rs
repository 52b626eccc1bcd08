//! Date Formatting
//!
//! Helpers for backend date strings: parsing, Hebrew display and
//! calendar predicates. Predicates take "today" explicitly.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};

const HEBREW_MONTHS: [&str; 12] = [
    "ינואר", "פברואר", "מרץ", "אפריל", "מאי", "יוני",
    "יולי", "אוגוסט", "ספטמבר", "אוקטובר", "נובמבר", "דצמבר",
];

/// Parse any date shape the backend has been seen to emit.
///
/// Values without an offset are interpreted in the local timezone.
pub fn parse_wire_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt);
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
}

/// Calendar day of a wire date in the local timezone
pub fn local_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(parse_wire_date)
        .map(|dt| dt.with_timezone(&Local).date_naive())
}

fn hebrew_date(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!(
        "{} ב{} {}",
        date.day(),
        HEBREW_MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Long Hebrew date ("16 באוקטובר 2026"); empty for missing input
pub fn format_date(raw: Option<&str>) -> String {
    local_date(raw).map(hebrew_date).unwrap_or_default()
}

pub fn format_date_time(raw: Option<&str>) -> String {
    match raw.and_then(parse_wire_date) {
        Some(dt) => {
            let local = dt.with_timezone(&Local);
            format!("{}, {}", hebrew_date(local.date_naive()), local.format("%H:%M"))
        }
        None => String::new(),
    }
}

pub fn is_today(raw: Option<&str>, today: NaiveDate) -> bool {
    local_date(raw) == Some(today)
}

/// Calendar day strictly before `today`
pub fn is_past(raw: Option<&str>, today: NaiveDate) -> bool {
    local_date(raw).is_some_and(|day| day < today)
}

/// Value for an `<input type="date">`.
///
/// Keeps the calendar date exactly as written when the string starts with
/// one, so editing never shifts a due date across a timezone boundary.
pub fn to_input_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    if let Some(prefix) = raw.get(..10) {
        if NaiveDate::parse_from_str(prefix, "%Y-%m-%d").is_ok() {
            return prefix.to_string();
        }
    }
    parse_wire_date(raw)
        .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
