//! Trips, their costs and itinerary items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;
use crate::error::{WayfareError, WayfareResult};

/// Category used when an itinerary item is added without one.
pub const DEFAULT_ITINERARY_CATEGORY: &str = "activity";

/// A planned trip or a plain calendar event.
///
/// Weekend trips (`is_weekend_trip`) show up in the trip list and mark the
/// calendar with the trip marker; everything else is an "event".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: i64,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub costs: Vec<Cost>,
    #[serde(default)]
    pub is_weekend_trip: bool,
    #[serde(default)]
    pub itinerary: Vec<ItineraryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub id: i64,
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: i64,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default)]
    pub notes: String,
}

impl Trip {
    /// None for a stored record whose end is before its start.
    pub fn range(&self) -> Option<DateRange> {
        DateRange::new(self.start_date, self.end_date).ok()
    }

    /// Whether the trip covers `date`, both ends included. A reversed
    /// record covers nothing.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.range().is_some_and(|range| range.contains(date))
    }

    /// Sum of all cost amounts.
    pub fn total_cost(&self) -> f64 {
        total(&self.costs)
    }

    pub fn kind_label(&self) -> &'static str {
        if self.is_weekend_trip {
            "Weekend Trip"
        } else {
            "Event"
        }
    }
}

pub fn total(costs: &[Cost]) -> f64 {
    costs.iter().map(|c| c.amount).sum()
}

/// Input for creating a trip.
#[derive(Debug, Clone, Default)]
pub struct NewTrip {
    pub destination: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: String,
    pub costs: Vec<NewCost>,
    pub is_weekend_trip: bool,
}

impl NewTrip {
    pub fn new(destination: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        NewTrip {
            destination: destination.into(),
            start_date: Some(start_date),
            end_date: Some(end_date),
            ..Default::default()
        }
    }

    pub fn weekend(mut self) -> Self {
        self.is_weekend_trip = true;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_cost(mut self, description: impl Into<String>, amount: f64) -> Self {
        self.costs.push(NewCost {
            description: description.into(),
            amount,
        });
        self
    }

    /// Checks every field; nothing is created unless all of them pass.
    pub(crate) fn validate(&self) -> WayfareResult<DateRange> {
        if self.destination.trim().is_empty() {
            return Err(WayfareError::Validation("Destination is required".into()));
        }

        let start = self
            .start_date
            .ok_or_else(|| WayfareError::Validation("Start date is required".into()))?;
        let end = self
            .end_date
            .ok_or_else(|| WayfareError::Validation("End date is required".into()))?;
        let range = DateRange::new(start, end)?;

        for cost in &self.costs {
            cost.validate()?;
        }

        Ok(range)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCost {
    pub description: String,
    pub amount: f64,
}

impl NewCost {
    pub(crate) fn validate(&self) -> WayfareResult<()> {
        if self.description.trim().is_empty() {
            return Err(WayfareError::Validation("Cost description is required".into()));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(WayfareError::Validation(format!(
                "Cost amount for '{}' must be a positive number",
                self.description.trim()
            )));
        }
        Ok(())
    }
}

/// Input for adding an itinerary item to a trip.
#[derive(Debug, Clone, Default)]
pub struct NewItineraryItem {
    pub title: String,
    pub category: Option<String>,
    pub time: Option<String>,
    pub notes: String,
}

impl NewItineraryItem {
    pub fn new(title: impl Into<String>) -> Self {
        NewItineraryItem {
            title: title.into(),
            ..Default::default()
        }
    }

    pub(crate) fn into_item(self, id: i64) -> WayfareResult<ItineraryItem> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(WayfareError::Validation("Itinerary title is required".into()));
        }

        let category = self
            .category
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_ITINERARY_CATEGORY.to_string());

        let time = self
            .time
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(ItineraryItem {
            id,
            title,
            category,
            time,
            notes: self.notes.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_test_trip() -> Trip {
        Trip {
            id: 1,
            destination: "Paris".to_string(),
            start_date: date(2026, 2, 14),
            end_date: date(2026, 2, 16),
            notes: String::new(),
            costs: vec![
                Cost {
                    id: 10,
                    description: "Train".to_string(),
                    amount: 89.5,
                },
                Cost {
                    id: 11,
                    description: "Hostel".to_string(),
                    amount: 60.25,
                },
            ],
            is_weekend_trip: true,
            itinerary: vec![],
        }
    }

    #[test]
    fn test_total_cost() {
        assert_eq!(make_test_trip().total_cost(), 149.75);
        assert_eq!(total(&[]), 0.0);
    }

    #[test]
    fn test_covers() {
        let trip = make_test_trip();
        assert!(trip.covers(date(2026, 2, 14)));
        assert!(trip.covers(date(2026, 2, 16)));
        assert!(!trip.covers(date(2026, 2, 17)));
    }

    #[test]
    fn test_reversed_record_covers_nothing() {
        let trip = Trip {
            start_date: date(2026, 2, 16),
            end_date: date(2026, 2, 14),
            ..make_test_trip()
        };
        assert_eq!(trip.range(), None);
        assert!(!trip.covers(date(2026, 2, 14)));
        assert!(!trip.covers(date(2026, 2, 15)));
        assert!(!trip.covers(date(2026, 2, 16)));
    }

    #[test]
    fn test_serializes_camel_case_with_iso_dates() {
        let json = serde_json::to_value(make_test_trip()).unwrap();
        assert_eq!(json["startDate"], "2026-02-14");
        assert_eq!(json["endDate"], "2026-02-16");
        assert_eq!(json["isWeekendTrip"], true);
        assert!(json["itinerary"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_new_trip_validation() {
        let ok = NewTrip::new("Rome", date(2026, 3, 1), date(2026, 3, 1));
        assert!(ok.validate().is_ok());

        let reversed = NewTrip::new("Rome", date(2026, 3, 2), date(2026, 3, 1));
        assert!(matches!(reversed.validate(), Err(WayfareError::Validation(_))));

        let blank = NewTrip::new("  ", date(2026, 3, 1), date(2026, 3, 2));
        assert!(blank.validate().is_err());

        let missing_end = NewTrip {
            destination: "Rome".to_string(),
            start_date: Some(date(2026, 3, 1)),
            ..Default::default()
        };
        assert!(missing_end.validate().is_err());
    }

    #[test]
    fn test_new_trip_rejects_bad_costs() {
        let base = NewTrip::new("Rome", date(2026, 3, 1), date(2026, 3, 2));
        assert!(base.clone().with_cost("Flight", 0.0).validate().is_err());
        assert!(base.clone().with_cost("Flight", -5.0).validate().is_err());
        assert!(base.clone().with_cost("Flight", f64::NAN).validate().is_err());
        assert!(base.clone().with_cost("", 5.0).validate().is_err());
        assert!(base.with_cost("Flight", 42.0).validate().is_ok());
    }

    #[test]
    fn test_itinerary_item_defaults() {
        let item = NewItineraryItem::new(" Sagrada Familia ").into_item(7).unwrap();
        assert_eq!(item.title, "Sagrada Familia");
        assert_eq!(item.category, DEFAULT_ITINERARY_CATEGORY);
        assert_eq!(item.time, None);

        let item = NewItineraryItem {
            title: "Lunch".to_string(),
            category: Some("Food".to_string()),
            time: Some("  ".to_string()),
            notes: String::new(),
        }
        .into_item(8)
        .unwrap();
        assert_eq!(item.category, "food");
        assert_eq!(item.time, None);
    }

    #[test]
    fn test_itinerary_item_requires_title() {
        assert!(NewItineraryItem::new("").into_item(1).is_err());
    }
}
