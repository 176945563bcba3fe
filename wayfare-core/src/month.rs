//! Calendar months and the navigable month window.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::{WayfareError, WayfareResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A month of a year. `month0` is zero-based (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    year: i32,
    month0: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month0: u32) -> WayfareResult<Self> {
        if month0 > 11 {
            return Err(WayfareError::Validation(format!(
                "Month index {} is out of range (expected 0-11)",
                month0
            )));
        }
        // Make sure chrono can represent the month at all
        NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or_else(|| {
            WayfareError::Validation(format!("Year {} is out of range", year))
        })?;
        Ok(CalendarMonth { year, month0 })
    }

    /// Parse YYYY-MM (one-based month, as people write it)
    pub fn parse(s: &str) -> WayfareResult<Self> {
        let invalid =
            || WayfareError::Validation(format!("Invalid month '{}'. Expected YYYY-MM", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Self::new(year, month - 1)
    }

    pub fn containing(date: NaiveDate) -> Self {
        CalendarMonth {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn next(&self) -> Self {
        if self.month0 == 11 {
            CalendarMonth {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            CalendarMonth {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month0 == 0 {
            CalendarMonth {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            CalendarMonth {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    /// 28 to 31
    pub fn num_days(&self) -> u32 {
        let next = self.next();
        match (
            NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1),
            NaiveDate::from_ymd_opt(next.year, next.month0 + 1, 1),
        ) {
            (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
            // December of chrono's last representable year
            _ => 31,
        }
    }

    /// Date of the given day of this month, if it exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day)
    }

    /// "YYYY-MM"
    pub fn key(&self) -> String {
        format!("{}-{:02}", self.year, self.month0 + 1)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", MONTH_NAMES[self.month0 as usize], self.year)
    }
}

impl FromStr for CalendarMonth {
    type Err = WayfareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// The inclusive range of months a user may navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    first: CalendarMonth,
    last: CalendarMonth,
}

impl Default for MonthWindow {
    /// January 2026 through April 2026
    fn default() -> Self {
        MonthWindow {
            first: CalendarMonth {
                year: 2026,
                month0: 0,
            },
            last: CalendarMonth {
                year: 2026,
                month0: 3,
            },
        }
    }
}

impl MonthWindow {
    pub fn new(first: CalendarMonth, last: CalendarMonth) -> WayfareResult<Self> {
        if last < first {
            return Err(WayfareError::Validation(format!(
                "Last month {} is before first month {}",
                last, first
            )));
        }
        Ok(MonthWindow { first, last })
    }

    pub fn first(&self) -> CalendarMonth {
        self.first
    }

    pub fn last(&self) -> CalendarMonth {
        self.last
    }

    pub fn contains(&self, month: CalendarMonth) -> bool {
        self.first <= month && month <= self.last
    }

    /// The neighbouring month in `direction`, or None if it leaves the window.
    pub fn step(&self, current: CalendarMonth, direction: Direction) -> Option<CalendarMonth> {
        let candidate = match direction {
            Direction::Prev => current.prev(),
            Direction::Next => current.next(),
        };
        self.contains(candidate).then_some(candidate)
    }

    pub fn can_go_prev(&self, current: CalendarMonth) -> bool {
        current > self.first
    }

    pub fn can_go_next(&self, current: CalendarMonth) -> bool {
        current < self.last
    }

    /// The month containing `today` if it is inside the window, else the first month.
    pub fn initial(&self, today: NaiveDate) -> CalendarMonth {
        let month = CalendarMonth::containing(today);
        if self.contains(month) { month } else { self.first }
    }
}
