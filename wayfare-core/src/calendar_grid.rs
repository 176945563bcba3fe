//! Month grid for the trip calendar.
//!
//! A grid is always 6 rows of 7 days, Sunday first. Days before the 1st
//! come from the previous month and days after the last come from the
//! next month; both are inactive and carry no trip status.

use chrono::{Datelike, NaiveDate};

use crate::error::{WayfareError, WayfareResult};
use crate::month::CalendarMonth;
use crate::trip::Trip;

pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_ROWS: usize = 6;
pub const GRID_CELLS: usize = DAYS_PER_WEEK * GRID_ROWS;

pub const WEEKDAY_HEADERS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day_number: u32,
    /// Set for days of the displayed month only.
    pub date: Option<NaiveDate>,
    pub is_active: bool,
    pub is_today: bool,
    /// Covered by a weekend trip.
    pub has_trip: bool,
    /// Covered by a non-weekend event.
    pub has_event: bool,
    /// Destination of the first trip starting this day, plus " +N" for
    /// any further trips starting the same day.
    pub title_label: Option<String>,
}

impl DayCell {
    fn inactive(day_number: u32) -> Self {
        DayCell {
            day_number,
            date: None,
            is_active: false,
            is_today: false,
            has_trip: false,
            has_event: false,
            title_label: None,
        }
    }

    fn active(date: NaiveDate, trips: &[Trip], today: NaiveDate) -> Self {
        let mut has_trip = false;
        let mut has_event = false;
        for trip in trips.iter().filter(|t| t.covers(date)) {
            if trip.is_weekend_trip {
                has_trip = true;
            } else {
                has_event = true;
            }
        }

        DayCell {
            day_number: date.day(),
            date: Some(date),
            is_active: true,
            is_today: date == today,
            has_trip,
            has_event,
            title_label: title_label(date, trips),
        }
    }
}

fn title_label(date: NaiveDate, trips: &[Trip]) -> Option<String> {
    let mut starting = trips.iter().filter(|t| t.start_date == date);
    let first = starting.next()?;
    let others = starting.count();

    if others == 0 {
        Some(first.destination.clone())
    } else {
        Some(format!("{} +{}", first.destination, others))
    }
}

#[derive(Debug, Clone)]
pub struct CalendarGrid {
    month: CalendarMonth,
    cells: Vec<DayCell>,
}

impl CalendarGrid {
    /// Lay out `month`, marking days covered by `trips`.
    pub fn build(month: CalendarMonth, trips: &[Trip], today: NaiveDate) -> WayfareResult<Self> {
        let first = month.first_day();
        let leading = first.weekday().num_days_from_sunday();
        let days_in_month = month.num_days();
        let days_in_prev_month = month.prev().num_days();

        let mut cells = Vec::with_capacity(GRID_CELLS);

        for i in (0..leading).rev() {
            cells.push(DayCell::inactive(days_in_prev_month - i));
        }

        for day in 1..=days_in_month {
            let date = month.day(day).ok_or_else(|| {
                WayfareError::Validation(format!("{} has no day {}", month, day))
            })?;
            cells.push(DayCell::active(date, trips, today));
        }

        let trailing = GRID_CELLS.saturating_sub(cells.len());
        for day in 1..=trailing {
            cells.push(DayCell::inactive(day as u32));
        }

        // 31 days starting on a Saturday is the tightest fit: 6 + 31 = 37
        debug_assert_eq!(cells.len(), GRID_CELLS);

        Ok(CalendarGrid { month, cells })
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Six rows of seven cells.
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// The active cell for `date`, if it is in this month.
    pub fn cell_for(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.date == Some(date))
    }

    pub fn leading_count(&self) -> usize {
        self.cells.iter().take_while(|c| !c.is_active).count()
    }

    pub fn trailing_count(&self) -> usize {
        self.cells.iter().rev().take_while(|c| !c.is_active).count()
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_active).count()
    }
}
