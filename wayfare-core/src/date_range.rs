//! Inclusive date ranges for trips.

use chrono::NaiveDate;

use crate::error::{WayfareError, WayfareResult};

/// Storage and CLI format for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive range of calendar days. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> WayfareResult<Self> {
        if end < start {
            return Err(WayfareError::Validation(format!(
                "End date {} must not be before start date {}",
                end.format(DATE_FORMAT),
                start.format(DATE_FORMAT)
            )));
        }
        Ok(DateRange { start, end })
    }

    /// Single-day range.
    pub fn day(date: NaiveDate) -> Self {
        DateRange {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Both ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> WayfareResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        WayfareError::Validation(format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
    })
}
