//! Load-time schema migration for persisted JSON.
//!
//! Older saves lack fields that later versions added (itineraries, stable
//! favorite ids) or carry values the typed model no longer accepts
//! (fractional ids, free-form ratings). Each function rewrites the raw
//! value in place and returns true if anything changed, so the caller can
//! persist the migrated form once.

use serde_json::{Map, Value, json};
use uuid::Uuid;

use crate::favorite::{FavoriteCategory, Rating};
use crate::ids::IdGenerator;
use crate::trip::DEFAULT_ITINERARY_CATEGORY;

pub fn migrate_trips(value: &mut Value) -> bool {
    let Some(trips) = value.as_array_mut() else {
        return false;
    };

    let mut ids = IdGenerator::above(collect_trip_ids(trips));
    let mut changed = false;

    for trip in trips.iter_mut().filter_map(Value::as_object_mut) {
        changed |= ensure_integer_id(trip, &mut ids);
        changed |= ensure_default(trip, "notes", json!(""));
        changed |= ensure_default(trip, "isWeekendTrip", json!(false));
        changed |= ensure_default(trip, "costs", json!([]));
        changed |= ensure_default(trip, "itinerary", json!([]));

        if let Some(costs) = trip.get_mut("costs").and_then(Value::as_array_mut) {
            for cost in costs.iter_mut().filter_map(Value::as_object_mut) {
                changed |= ensure_integer_id(cost, &mut ids);
            }
        }

        if let Some(items) = trip.get_mut("itinerary").and_then(Value::as_array_mut) {
            for item in items.iter_mut().filter_map(Value::as_object_mut) {
                changed |= migrate_itinerary_item(item, &mut ids);
            }
        }
    }

    if changed {
        tracing::info!("Migrated stored trips to the current format");
    }
    changed
}

fn migrate_itinerary_item(item: &mut Map<String, Value>, ids: &mut IdGenerator) -> bool {
    let mut changed = ensure_integer_id(item, ids);

    // Early saves called the category "type"
    let legacy_type = item.remove("type");
    changed |= legacy_type.is_some();

    let has_category = item
        .get("category")
        .and_then(Value::as_str)
        .is_some_and(|c| !c.is_empty());
    if !has_category {
        let category = legacy_type
            .as_ref()
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_ITINERARY_CATEGORY)
            .to_string();
        item.insert("category".to_string(), Value::String(category));
        changed = true;
    }

    let blank_time = match item.get("time") {
        Some(Value::Null) => true,
        Some(Value::String(t)) => t.trim().is_empty(),
        _ => false,
    };
    if blank_time {
        item.remove("time");
        changed = true;
    }

    changed |= ensure_default(item, "notes", json!(""));
    changed
}

fn collect_trip_ids(trips: &[Value]) -> Vec<i64> {
    let mut found = Vec::new();
    for trip in trips {
        found.extend(trip.get("id").and_then(Value::as_i64));
        for nested in ["costs", "itinerary"] {
            if let Some(entries) = trip.get(nested).and_then(Value::as_array) {
                found.extend(entries.iter().filter_map(|e| e.get("id").and_then(Value::as_i64)));
            }
        }
    }
    found
}

pub fn migrate_ideas(value: &mut Value) -> bool {
    let Some(buckets) = value.as_object_mut() else {
        return false;
    };

    let existing: Vec<i64> = buckets
        .values()
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(|idea| idea.get("id").and_then(Value::as_i64))
        .collect();
    let mut ids = IdGenerator::above(existing);
    let mut changed = false;

    for key in ["must-see", "food", "activities"] {
        changed |= ensure_default(buckets, key, json!([]));

        if let Some(ideas) = buckets.get_mut(key).and_then(Value::as_array_mut) {
            for idea in ideas.iter_mut().filter_map(Value::as_object_mut) {
                changed |= ensure_integer_id(idea, &mut ids);
                changed |= ensure_default(idea, "description", json!(""));
            }
        }
    }

    if changed {
        tracing::info!("Migrated stored ideas to the current format");
    }
    changed
}

pub fn migrate_favorites(value: &mut Value) -> bool {
    let Some(favorites) = value.as_array_mut() else {
        return false;
    };

    let mut changed = false;

    for favorite in favorites.iter_mut().filter_map(Value::as_object_mut) {
        let has_id = favorite
            .get("id")
            .and_then(Value::as_str)
            .is_some_and(|id| Uuid::parse_str(id).is_ok());
        if !has_id {
            favorite.insert("id".to_string(), json!(Uuid::new_v4().to_string()));
            changed = true;
        }

        changed |= ensure_default(favorite, "name", json!(""));
        changed |= ensure_default(favorite, "notes", json!(""));
        changed |= ensure_default(favorite, "dateAdded", json!(""));

        let category = favorite
            .get("category")
            .and_then(Value::as_str)
            .and_then(|c| c.parse::<FavoriteCategory>().ok())
            .unwrap_or(FavoriteCategory::Other);
        changed |= replace_if_different(favorite, "category", json!(category.key()));

        let rating = favorite
            .get("rating")
            .and_then(Value::as_f64)
            .filter(|r| r.is_finite())
            .map(|r| r.round().clamp(1.0, f64::from(Rating::MAX)) as u8)
            .unwrap_or(1);
        changed |= replace_if_different(favorite, "rating", json!(rating));
    }

    if changed {
        tracing::info!("Migrated stored favorites to the current format");
    }
    changed
}

/// Insert `default` when the key is missing or null.
fn ensure_default(object: &mut Map<String, Value>, key: &str, default: Value) -> bool {
    match object.get(key) {
        Some(v) if !v.is_null() => false,
        _ => {
            object.insert(key.to_string(), default);
            true
        }
    }
}

fn ensure_integer_id(object: &mut Map<String, Value>, ids: &mut IdGenerator) -> bool {
    if object.get("id").and_then(Value::as_i64).is_some() {
        return false;
    }
    object.insert("id".to_string(), json!(ids.next_id()));
    true
}

fn replace_if_different(object: &mut Map<String, Value>, key: &str, value: Value) -> bool {
    if object.get(key) == Some(&value) {
        return false;
    }
    object.insert(key.to_string(), value);
    true
}
