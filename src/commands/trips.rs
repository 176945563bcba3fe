use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use wayfare_core::display::format_display_date;
use wayfare_core::storage::KeyValueStore;
use wayfare_core::trip::{NewCost, NewTrip};
use wayfare_core::trip_store::TripStore;

use crate::commands::report_persist_warning;
use crate::render::{Render, pluralize};
use crate::utils::prompt::confirm;

pub fn add<S: KeyValueStore>(
    store: &mut TripStore<S>,
    destination: String,
    start: NaiveDate,
    end: NaiveDate,
    notes: String,
    costs: Vec<NewCost>,
    weekend: bool,
) -> Result<()> {
    let new = NewTrip {
        destination,
        start_date: Some(start),
        end_date: Some(end),
        notes,
        costs,
        is_weekend_trip: weekend,
    };

    let trip = store.add_trip(new)?;
    report_persist_warning(store.take_persist_warning());

    println!(
        "{}",
        format!("  Added {}: {} ({})", trip.kind_label().to_lowercase(), trip.destination, trip.id)
            .green()
    );
    Ok(())
}

pub fn delete<S: KeyValueStore>(store: &mut TripStore<S>, id: i64, yes: bool) -> Result<()> {
    let Some(trip) = store.trip(id) else {
        println!("{}", format!("No trip with id {}", id).dimmed());
        return Ok(());
    };

    let prompt = format!("Delete {} ({})?", trip.destination, trip.kind_label().to_lowercase());
    if !confirm(&prompt, yes)? {
        return Ok(());
    }

    store.delete_trip(id);
    report_persist_warning(store.take_persist_warning());
    println!("{}", "  Deleted".red());
    Ok(())
}

pub fn list<S: KeyValueStore>(store: &TripStore<S>) -> Result<()> {
    let trips = store.weekend_trips();

    if trips.is_empty() {
        println!("{}", "No weekend trips planned yet".dimmed());
        return Ok(());
    }

    for (i, trip) in trips.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", trip.render());
    }

    Ok(())
}

pub fn on<S: KeyValueStore>(store: &TripStore<S>, date: NaiveDate) -> Result<()> {
    let events = store.events_on(date);
    let heading = format!(
        "{} on {}",
        pluralize("Event", events.len()),
        format_display_date(date)
    );
    println!("{}", heading.bold());

    if events.is_empty() {
        println!("{}", "  Nothing planned".dimmed());
        return Ok(());
    }

    for trip in events {
        println!();
        println!("{}", trip.render());
    }

    Ok(())
}

/// Parse DESCRIPTION=AMOUNT. The last `=` splits, so descriptions may contain one.
pub fn parse_cost(s: &str) -> Result<NewCost> {
    let (description, amount) = s
        .rsplit_once('=')
        .with_context(|| format!("Invalid cost '{}'. Expected DESCRIPTION=AMOUNT", s))?;

    let amount: f64 = amount
        .trim()
        .trim_start_matches('€')
        .parse()
        .with_context(|| format!("Invalid amount '{}'", amount.trim()))?;

    let description = description.trim();
    if description.is_empty() || !amount.is_finite() || amount <= 0.0 {
        anyhow::bail!("Please enter both a description and a valid amount");
    }

    Ok(NewCost {
        description: description.to_string(),
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cost() {
        let cost = parse_cost("Train=89.50").unwrap();
        assert_eq!(cost.description, "Train");
        assert_eq!(cost.amount, 89.5);

        let cost = parse_cost("Museum a=b = €12").unwrap();
        assert_eq!(cost.description, "Museum a=b");
        assert_eq!(cost.amount, 12.0);
    }

    #[test]
    fn test_parse_cost_rejects_bad_input() {
        assert!(parse_cost("Train").is_err());
        assert!(parse_cost("Train=abc").is_err());
        assert!(parse_cost("=12").is_err());
        assert!(parse_cost("Train=0").is_err());
        assert!(parse_cost("Train=-3").is_err());
    }
}
