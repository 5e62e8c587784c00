//! Type-aware comparison of field values

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::types::{FieldKind, SortDirection};

/// A record type whose fields can drive a sortable list view
pub trait Sortable {
    /// Field descriptor (usually a column enum)
    type Field: Clone + PartialEq + fmt::Debug;

    /// Declared comparison kind of a field
    fn field_kind(field: &Self::Field) -> FieldKind;

    /// Value of a field, or None when the record leaves it undefined
    fn field_value(&self, field: &Self::Field) -> Option<FieldValue<'_>>;
}

/// A single field value as seen by the comparator
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
}

impl<'a> FieldValue<'a> {
    pub fn text(s: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(s))
    }

    /// Stringified form used when a value has to fall back to text comparison
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_ref()),
            FieldValue::Number(n) => Cow::Owned(format_number(*n)),
        }
    }

    fn as_number(&self) -> Option<f64> {
        let n = match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        (!n.is_nan()).then_some(n)
    }

    fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Text(s) => parse_date(s),
            FieldValue::Number(_) => None,
        }
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(n: u32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<String> for FieldValue<'_> {
    fn from(s: String) -> Self {
        FieldValue::Text(Cow::Owned(s))
    }
}

/// Render a number without a trailing `.0` when it is integral
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Parse a date-like string into a UTC instant
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and plain
/// `YYYY-MM-DD` (zero padding optional).
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Precomputed ordering key for one value.
///
/// Values that match their field's kind order before values that had to
/// degrade to text in both directions; direction only applies within a rank.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SortKey {
    Instant(DateTime<Utc>),
    Number(f64),
    Text(String),
}

impl SortKey {
    pub(crate) fn new(kind: FieldKind, value: &FieldValue<'_>) -> Self {
        let typed = match kind {
            FieldKind::Date => value.as_instant().map(SortKey::Instant),
            FieldKind::Number => value.as_number().map(SortKey::Number),
            FieldKind::Text => None,
        };
        typed.unwrap_or_else(|| SortKey::Text(value.to_text().to_lowercase()))
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Instant(_) | SortKey::Number(_) => 0,
            SortKey::Text(_) => 1,
        }
    }

    fn order(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Instant(a), SortKey::Instant(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Compare two optional keys; undefined values go last in either direction,
/// degraded values after typed ones
pub(crate) fn compare_keys(a: Option<&SortKey>, b: Option<&SortKey>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.rank().cmp(&b.rank()).then_with(|| {
            let cmp = a.order(b);
            if direction == SortDirection::Descending { cmp.reverse() } else { cmp }
        }),
    }
}

/// Compare two field values of the given kind
pub fn compare_values(kind: FieldKind, a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    SortKey::new(kind, a).order(&SortKey::new(kind, b))
}

/// Stable one-shot sort of records by a field
pub fn sort_records<T: Sortable>(items: &mut Vec<T>, field: &T::Field, direction: SortDirection) {
    let kind = T::field_kind(field);
    let mut keyed: Vec<(Option<SortKey>, T)> = items
        .drain(..)
        .map(|item| {
            let key = item.field_value(field).map(|v| SortKey::new(kind, &v));
            (key, item)
        })
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a.as_ref(), b.as_ref(), direction));
    items.extend(keyed.into_iter().map(|(_, item)| item));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        assert!(parse_date("2024-03-08").is_some());
        assert!(parse_date("2024-3-7").is_some());
        assert!(parse_date("2024-03-08T10:30:00Z").is_some());
        assert!(parse_date("2024-03-08 10:30:00").is_some());
        assert!(parse_date("yesterday").is_none());
    }

    #[test]
    fn test_dates_compare_chronologically() {
        let cmp = compare_values(FieldKind::Date, &FieldValue::text("2024-3-7"), &FieldValue::text("2024-03-08"));
        assert_eq!(cmp, Ordering::Less);
        // Lexicographically "2024-3-7" > "2024-03-08"
        let cmp = compare_values(FieldKind::Text, &FieldValue::text("2024-3-7"), &FieldValue::text("2024-03-08"));
        assert_eq!(cmp, Ordering::Greater);
    }

    #[test]
    fn test_numbers_compare_arithmetically() {
        let cmp = compare_values(FieldKind::Number, &FieldValue::Number(9.0), &FieldValue::Number(45.0));
        assert_eq!(cmp, Ordering::Less);
        let cmp = compare_values(FieldKind::Number, &FieldValue::text("9"), &FieldValue::Number(45.0));
        assert_eq!(cmp, Ordering::Less);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let cmp = compare_values(FieldKind::Text, &FieldValue::text("alice"), &FieldValue::text("Bob"));
        assert_eq!(cmp, Ordering::Less);
    }

    #[test]
    fn test_mismatched_values_degrade_to_text() {
        // Unparseable dates sort after real dates and among themselves as text
        let cmp = compare_values(FieldKind::Date, &FieldValue::text("n/a"), &FieldValue::text("2024-01-01"));
        assert_eq!(cmp, Ordering::Greater);
        let cmp = compare_values(FieldKind::Number, &FieldValue::text("abc"), &FieldValue::text("ABD"));
        assert_eq!(cmp, Ordering::Less);
    }

    #[test]
    fn test_missing_sorts_last_in_both_directions() {
        let key = SortKey::Number(1.0);
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(compare_keys(None, Some(&key), direction), Ordering::Greater);
            assert_eq!(compare_keys(Some(&key), None, direction), Ordering::Less);
        }
    }

    #[test]
    fn test_degraded_values_follow_typed_in_both_directions() {
        let typed = SortKey::new(FieldKind::Date, &FieldValue::text("2024-3-7"));
        let degraded = SortKey::new(FieldKind::Date, &FieldValue::text("n/a"));
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(compare_keys(Some(&degraded), Some(&typed), direction), Ordering::Greater);
            assert_eq!(compare_keys(Some(&typed), Some(&degraded), direction), Ordering::Less);
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(45.0), "45");
        assert_eq!(format_number(38.5), "38.5");
    }
}
