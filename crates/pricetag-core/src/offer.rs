//! Promotional offer types.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PricingError;

/// Which catalog level an offer is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferScope {
    /// Offer on a single product.
    Product,
    /// Offer on every product in a category.
    Category,
}

impl OfferScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferScope::Product => "product",
            OfferScope::Category => "category",
        }
    }
}

impl fmt::Display for OfferScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an offer does not apply at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ineligibility {
    /// `is_active` is false.
    Inactive,
    /// Start or end date is missing or could not be parsed.
    MissingDates,
    /// The window has not opened yet.
    NotStarted,
    /// The window has closed.
    Expired,
}

impl Ineligibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ineligibility::Inactive => "inactive",
            Ineligibility::MissingDates => "missing or invalid dates",
            Ineligibility::NotStarted => "not started",
            Ineligibility::Expired => "expired",
        }
    }
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A time-bounded percentage discount.
///
/// Product and category offers share this shape. Dates that are missing or
/// fail to parse deserialize as `None`, which makes the offer inapplicable.
///
/// [`Offer::new`] builds an active offer. `Offer::default()`, like a feed
/// entry without `is_active`, is inactive with 0% and no window.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    /// Activation flag.
    #[serde(default, alias = "isActive")]
    pub is_active: bool,
    /// First instant the offer applies (inclusive).
    #[serde(
        default,
        alias = "startDate",
        deserialize_with = "lenient_date::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<DateTime<Utc>>,
    /// Last instant the offer applies (inclusive).
    #[serde(
        default,
        alias = "endDate",
        deserialize_with = "lenient_date::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<DateTime<Utc>>,
    /// Percentage off, expected in 0..=100 but not validated.
    #[serde(default, alias = "discountPercent")]
    pub discount_percent: f64,
}

impl Offer {
    /// Create an active offer with no window set yet.
    pub fn new(discount_percent: f64) -> Self {
        Self {
            is_active: true,
            start_date: None,
            end_date: None,
            discount_percent,
        }
    }

    /// Set the start of the window.
    pub fn starting(mut self, at: DateTime<Utc>) -> Self {
        self.start_date = Some(at);
        self
    }

    /// Set the end of the window.
    pub fn ending(mut self, at: DateTime<Utc>) -> Self {
        self.end_date = Some(at);
        self
    }

    /// Set both window bounds from date strings, leniently.
    pub fn between(mut self, start: &str, end: &str) -> Self {
        self.start_date = parse_offer_date(start);
        self.end_date = parse_offer_date(end);
        self
    }

    /// Set the activation flag.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Reason the offer does not apply at `now`, or `None` if it does.
    pub fn ineligibility_at(&self, now: DateTime<Utc>) -> Option<Ineligibility> {
        if !self.is_active {
            return Some(Ineligibility::Inactive);
        }

        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Some(Ineligibility::MissingDates);
        };

        if now < start {
            return Some(Ineligibility::NotStarted);
        }
        if now > end {
            return Some(Ineligibility::Expired);
        }

        None
    }

    /// Check if the offer is active and `now` lies within `[start, end]`.
    pub fn is_applicable_at(&self, now: DateTime<Utc>) -> bool {
        self.ineligibility_at(now).is_none()
    }
}

/// Parse an offer date, returning `None` for anything unrecognized.
///
/// Accepted forms:
/// - RFC 3339 (`2026-01-31T23:59:59Z`, `2026-01-31T23:59:59+05:30`)
/// - naive date-time, read as UTC (`2026-01-31T23:59:59`, `2026-01-31 23:59:59`)
/// - date only, midnight UTC (`2026-01-31`)
/// - Unix milliseconds (`1769903999000`)
pub fn parse_offer_date(input: &str) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    s.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis)
}

/// Parse an offer date, failing on unrecognized input.
pub fn parse_offer_date_strict(input: &str) -> Result<DateTime<Utc>, PricingError> {
    parse_offer_date(input).ok_or_else(|| PricingError::InvalidDate(input.to_string()))
}

mod lenient_date {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(from_value))
    }

    fn from_value(value: &Value) -> Option<DateTime<Utc>> {
        match value {
            Value::String(s) => super::parse_offer_date(s),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .and_then(DateTime::from_timestamp_millis),
            // toml datetimes arrive as a single-entry table wrapping the string form
            Value::Object(map) if map.len() == 1 => map.values().next().and_then(from_value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_offer_in_window_applies() {
        let offer = Offer::new(20.0)
            .starting(now() - Duration::days(1))
            .ending(now() + Duration::days(1));
        assert!(offer.is_applicable_at(now()));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let offer = Offer::new(10.0).starting(now()).ending(now());
        assert!(offer.is_applicable_at(now()));
        assert!(!offer.is_applicable_at(now() + Duration::milliseconds(1)));
        assert!(!offer.is_applicable_at(now() - Duration::milliseconds(1)));
    }

    #[test]
    fn test_inactive_offer_never_applies() {
        let offer = Offer::new(50.0)
            .starting(now() - Duration::days(1))
            .ending(now() + Duration::days(1))
            .active(false);
        assert_eq!(offer.ineligibility_at(now()), Some(Ineligibility::Inactive));
    }

    #[test]
    fn test_future_and_past_windows() {
        let future = Offer::new(30.0)
            .starting(now() + Duration::hours(1))
            .ending(now() + Duration::days(2));
        assert_eq!(future.ineligibility_at(now()), Some(Ineligibility::NotStarted));

        let past = Offer::new(30.0)
            .starting(now() - Duration::days(2))
            .ending(now() - Duration::hours(1));
        assert_eq!(past.ineligibility_at(now()), Some(Ineligibility::Expired));
    }

    #[test]
    fn test_missing_dates_never_apply() {
        let offer = Offer::new(15.0).starting(now() - Duration::days(1));
        assert_eq!(offer.ineligibility_at(now()), Some(Ineligibility::MissingDates));

        let garbage = Offer::new(15.0).between("not a date", "2099-01-01");
        assert!(garbage.start_date.is_none());
        assert!(!garbage.is_applicable_at(now()));
    }

    #[test]
    fn test_parse_offer_date_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 1, 31, 0, 0, 0).unwrap();
        assert_eq!(parse_offer_date("2026-01-31"), Some(expected));
        assert_eq!(parse_offer_date("2026-01-31T00:00:00Z"), Some(expected));
        assert_eq!(parse_offer_date("2026-01-31T05:30:00+05:30"), Some(expected));
        assert_eq!(parse_offer_date("2026-01-31 00:00:00"), Some(expected));
        assert_eq!(parse_offer_date("2026-01-31T00:00:00.000"), Some(expected));
        assert_eq!(
            parse_offer_date(&expected.timestamp_millis().to_string()),
            Some(expected)
        );
        assert_eq!(parse_offer_date(""), None);
        assert_eq!(parse_offer_date("31/01/2026"), None);
    }

    #[test]
    fn test_parse_offer_date_strict() {
        assert!(parse_offer_date_strict("2026-01-31").is_ok());
        assert_eq!(
            parse_offer_date_strict("soon"),
            Err(PricingError::InvalidDate("soon".to_string()))
        );
    }

    #[test]
    fn test_deserialize_camel_case_json() {
        let json = r#"{
            "isActive": true,
            "startDate": "2026-06-01T00:00:00Z",
            "endDate": 1782864000000,
            "discountPercent": 25
        }"#;
        let offer: Offer = serde_json::from_str(json).unwrap();
        assert!(offer.is_active);
        assert_eq!(offer.discount_percent, 25.0);
        assert_eq!(
            offer.start_date,
            Some(Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(offer.end_date, DateTime::from_timestamp_millis(1782864000000));
    }

    #[test]
    fn test_deserialize_malformed_dates_as_none() {
        let json = r#"{"is_active": true, "start_date": "whenever", "end_date": null, "discount_percent": 10}"#;
        let offer: Offer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.start_date, None);
        assert_eq!(offer.end_date, None);
        assert!(!offer.is_applicable_at(now()));
    }

    #[test]
    fn test_deserialize_missing_fields_defaults() {
        let offer: Offer = serde_json::from_str("{}").unwrap();
        assert!(!offer.is_active);
        assert_eq!(offer.discount_percent, 0.0);
        assert!(offer.start_date.is_none());
    }

    #[test]
    fn test_deserialize_toml_datetime_literals() {
        let offer: Offer = toml::from_str(
            r#"
            is_active = true
            start_date = 2026-01-01T00:00:00Z
            end_date = 2026-12-31T23:59:59Z
            discount_percent = 10
            "#,
        )
        .unwrap();

        assert_eq!(
            offer.start_date,
            Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            offer.end_date,
            Some(Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap())
        );
        assert!(offer.is_applicable_at(now()));
    }

    #[test]
    fn test_default_offer_is_inactive() {
        let offer = Offer::default();
        assert!(!offer.is_active);
        assert_eq!(offer.discount_percent, 0.0);
        assert!(Offer::new(0.0).is_active);
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(OfferScope::Product.to_string(), "product");
        assert_eq!(OfferScope::Category.as_str(), "category");
    }
}
