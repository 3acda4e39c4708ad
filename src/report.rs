//! Bug report types
//!
//! A bug report records where a defect was observed (free-text category such
//! as "Ship", "FPS" or "Terminal"), how to reproduce it, and the date it was
//! filed. The date is always computed by the caller, never by the store.

use crate::{Error, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A persisted bug report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugReport {
    /// Store-assigned identifier, unique for the lifetime of the row
    pub id: i64,
    /// Where the bug was found (Ship, FPS, Terminal, ...)
    pub category: String,
    /// Steps to replicate
    pub reproduction_steps: String,
    /// Filing date as `YYYY/M/D`
    pub created_at: String,
}

impl BugReport {
    pub fn new(
        id: i64,
        category: impl Into<String>,
        reproduction_steps: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            reproduction_steps: reproduction_steps.into(),
            created_at: created_at.into(),
        }
    }
}

/// Reject a report whose category or reproduction steps are empty.
///
/// Whitespace-only text is accepted; only the empty string counts as missing.
pub fn validate_fields(category: &str, reproduction_steps: &str) -> Result<()> {
    if category.is_empty() {
        return Err(Error::MissingField("category"));
    }
    if reproduction_steps.is_empty() {
        return Err(Error::MissingField("reproduction_steps"));
    }
    Ok(())
}

/// Calendar date in the `year/month/day` form used by `created_at`.
///
/// Month and day are not zero padded: April 14th 2023 is `2023/4/14`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportDate(NaiveDate);

impl ReportDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| Error::InvalidDate(format!("{}/{}/{}", year, month, day)))
    }

    /// Today's date on the local clock
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }
}

impl From<NaiveDate> for ReportDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for ReportDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.0.year(), self.0.month(), self.0.day())
    }
}

impl FromStr for ReportDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDate(s.to_string());
        let mut parts = s.trim().split('/');
        let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        let day: u32 = d.parse().map_err(|_| invalid())?;
        Self::new(year, month, day).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_has_no_zero_padding() {
        let date = ReportDate::new(2023, 4, 14).unwrap();
        assert_eq!(date.to_string(), "2023/4/14");

        let date = ReportDate::new(2024, 1, 5).unwrap();
        assert_eq!(date.to_string(), "2024/1/5");
    }

    #[test]
    fn test_date_parse() {
        let date: ReportDate = "2023/4/14".parse().unwrap();
        assert_eq!(date, ReportDate::new(2023, 4, 14).unwrap());

        // Zero-padded input is accepted but normalised on display
        let date: ReportDate = "2023/04/09".parse().unwrap();
        assert_eq!(date.to_string(), "2023/4/9");
    }

    #[test]
    fn test_date_parse_rejects_garbage() {
        assert!("2023-4-14".parse::<ReportDate>().is_err());
        assert!("2023/13/1".parse::<ReportDate>().is_err());
        assert!("2023/2/30".parse::<ReportDate>().is_err());
        assert!("2023/4/14/1".parse::<ReportDate>().is_err());
        assert!("".parse::<ReportDate>().is_err());
    }

    #[test]
    fn test_validate_fields() {
        assert!(validate_fields("Ship", "Fly into a rock").is_ok());
        assert!(matches!(validate_fields("", "steps"), Err(Error::MissingField("category"))));
        assert!(matches!(
            validate_fields("Ship", ""),
            Err(Error::MissingField("reproduction_steps"))
        ));
        assert!(validate_fields(" ", " ").is_ok());
    }

    #[test]
    fn test_report_serializes_with_field_names() {
        let report = BugReport::new(1, "Ship", "Fly into a rock", "2023/4/14");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["category"], "Ship");
        assert_eq!(json["reproduction_steps"], "Fly into a rock");
        assert_eq!(json["created_at"], "2023/4/14");
    }
}
