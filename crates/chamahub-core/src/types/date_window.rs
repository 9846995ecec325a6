//! Open-interval date window used by report and audit filters.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// A date range with independently optional bounds.
///
/// The window is a closed interval over timestamps: the start date maps to
/// an inclusive `00:00:00.000` bound and the end date to an inclusive
/// `23:59:59.999` bound. The same convention is used by every report path,
/// so a record stamped exactly at either bound is always included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First calendar day of the window, if bounded below.
    pub start: Option<NaiveDate>,
    /// Last calendar day of the window, if bounded above.
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    /// A window with no bounds on either side.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Create a window from optional calendar dates.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> AppResult<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(AppError::validation(format!(
                    "Invalid date range: start {s} is after end {e}"
                )));
            }
        }
        Ok(Self { start, end })
    }

    /// Parse a window from optional `YYYY-MM-DD` strings, as received in
    /// query parameters and export request bodies.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> AppResult<Self> {
        let start = start.map(parse_date).transpose()?;
        let end = end.map(parse_date).transpose()?;
        Self::new(start, end)
    }

    /// Inclusive lower timestamp bound (start of the start day).
    pub fn start_bound(&self) -> Option<DateTime<Utc>> {
        self.start
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }

    /// Inclusive upper timestamp bound (end of the end day, millisecond
    /// precision: `23:59:59.999`).
    pub fn end_bound(&self) -> Option<DateTime<Utc>> {
        self.end
            .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999))
            .map(|dt| dt.and_utc())
    }

    /// Whether a timestamp falls inside the window.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        if let Some(start) = self.start_bound() {
            if ts < start {
                return false;
            }
        }
        if let Some(end) = self.end_bound() {
            if ts > end {
                return false;
            }
        }
        true
    }

    /// Whether neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Human-readable window label used as the `period` field of reports.
    pub fn label(&self) -> String {
        match (self.start, self.end) {
            (Some(s), Some(e)) => format!("{s} to {e}"),
            (Some(s), None) => format!("from {s}"),
            (None, Some(e)) => format!("until {e}"),
            (None, None) => "all time".to_string(),
        }
    }
}

fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date '{s}', expected YYYY-MM-DD")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window(start: &str, end: &str) -> DateWindow {
        DateWindow::parse(Some(start), Some(end)).unwrap()
    }

    #[test]
    fn test_start_of_day_is_included() {
        let w = window("2024-01-01", "2024-03-31");
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(w.contains(ts));
    }

    #[test]
    fn test_end_of_day_millisecond_is_included() {
        let w = window("2024-01-01", "2024-03-31");
        let ts = Utc
            .with_ymd_and_hms(2024, 3, 31, 23, 59, 59)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(999))
            .unwrap();
        assert!(w.contains(ts));
    }

    #[test]
    fn test_one_millisecond_past_end_is_excluded() {
        let w = window("2024-01-01", "2024-03-31");
        let ts = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        assert!(!w.contains(ts));
    }

    #[test]
    fn test_bounds_independently_optional() {
        let open_start = DateWindow::parse(None, Some("2024-06-30")).unwrap();
        assert!(open_start.start_bound().is_none());
        assert!(open_start.contains(Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap()));

        let open_end = DateWindow::parse(Some("2024-06-01"), None).unwrap();
        assert!(open_end.end_bound().is_none());
        assert!(open_end.contains(Utc.with_ymd_and_hms(2090, 1, 1, 0, 0, 0).unwrap()));

        assert!(DateWindow::unbounded().is_unbounded());
    }

    #[test]
    fn test_rejects_malformed_and_inverted() {
        assert!(DateWindow::parse(Some("01/02/2024"), None).is_err());
        assert!(DateWindow::parse(Some("2024-06-30"), Some("2024-06-01")).is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(window("2024-01-01", "2024-03-31").label(), "2024-01-01 to 2024-03-31");
        assert_eq!(DateWindow::unbounded().label(), "all time");
    }
}
