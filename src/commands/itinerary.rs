use anyhow::Result;
use owo_colors::OwoColorize;
use wayfare_core::storage::KeyValueStore;
use wayfare_core::trip::NewItineraryItem;
use wayfare_core::trip_store::TripStore;

use crate::commands::report_persist_warning;
use crate::render::Render;

pub fn add<S: KeyValueStore>(
    store: &mut TripStore<S>,
    trip_id: i64,
    title: String,
    category: Option<String>,
    time: Option<String>,
    notes: String,
) -> Result<()> {
    let new = NewItineraryItem {
        title,
        category,
        time,
        notes,
    };

    let item = store.add_itinerary_item(trip_id, new)?;
    report_persist_warning(store.take_persist_warning());

    println!("{} {}", "  Added:".green(), item.render());
    Ok(())
}

pub fn delete<S: KeyValueStore>(store: &mut TripStore<S>, trip_id: i64, item_id: i64) -> Result<()> {
    let exists = store
        .trip(trip_id)
        .is_some_and(|t| t.itinerary.iter().any(|i| i.id == item_id));

    store.delete_itinerary_item(trip_id, item_id);
    report_persist_warning(store.take_persist_warning());

    if exists {
        println!("{}", "  Deleted".red());
    } else {
        println!("{}", format!("No itinerary item {} on trip {}", item_id, trip_id).dimmed());
    }
    Ok(())
}
