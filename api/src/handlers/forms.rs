//! Form field parsing
//!
//! Browsers submit every field as text. These helpers turn raw values into
//! typed input and report bad values as validation errors.

use chrono::NaiveDate;

use crate::domain::entities::DonorId;
use crate::error::DomainError;

/// Empty means absent; otherwise `YYYY-MM-DD`
pub fn parse_optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>, DomainError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| DomainError::Validation(format!("Invalid date: {} (use YYYY-MM-DD)", s))),
    }
}

/// Whole number of units; absent or empty falls back to `default`
pub fn parse_units(raw: Option<&str>, default: i32) -> Result<i32, DomainError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(s) => s.parse().map_err(|_| {
            DomainError::Validation("Units must be a positive whole number.".to_string())
        }),
    }
}

/// `none` or empty selects an anonymous donation
pub fn parse_donor_id(raw: Option<&str>) -> Result<Option<DonorId>, DomainError> {
    match raw.map(str::trim).filter(|s| !s.is_empty() && *s != "none") {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(|id| Some(DonorId(id)))
            .map_err(|_| DomainError::Validation("Please select a valid donor.".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_is_optional() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert_eq!(parse_optional_date(Some("  ")).unwrap(), None);
    }

    #[test]
    fn date_parses_iso_format() {
        assert_eq!(
            parse_optional_date(Some("2025-07-01")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 1)
        );
    }

    #[test]
    fn malformed_date_is_validation_error() {
        assert!(matches!(
            parse_optional_date(Some("01/07/2025")),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn units_default_when_missing() {
        assert_eq!(parse_units(None, 1).unwrap(), 1);
        assert_eq!(parse_units(Some(""), 1).unwrap(), 1);
    }

    #[test]
    fn units_parse_numbers() {
        assert_eq!(parse_units(Some("4"), 1).unwrap(), 4);
        assert_eq!(parse_units(Some("-2"), 1).unwrap(), -2);
    }

    #[test]
    fn non_numeric_units_are_rejected() {
        assert!(matches!(
            parse_units(Some("three"), 1),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            parse_units(Some("2.5"), 1),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn donor_id_none_means_anonymous() {
        assert_eq!(parse_donor_id(Some("none")).unwrap(), None);
        assert_eq!(parse_donor_id(Some("")).unwrap(), None);
        assert_eq!(parse_donor_id(None).unwrap(), None);
    }

    #[test]
    fn donor_id_parses_number() {
        assert_eq!(parse_donor_id(Some("12")).unwrap(), Some(DonorId(12)));
    }

    #[test]
    fn donor_id_rejects_text() {
        assert!(matches!(
            parse_donor_id(Some("rahul")),
            Err(DomainError::Validation(_))
        ));
    }
}
