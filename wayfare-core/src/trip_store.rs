//! Trips, itineraries and idea buckets, persisted after every change.

use chrono::NaiveDate;

use crate::error::{WayfareError, WayfareResult};
use crate::idea::{Idea, IdeaBucket, Ideas, NewIdea, default_ideas};
use crate::ids::IdGenerator;
use crate::migrate::{migrate_ideas, migrate_trips};
use crate::storage::{IDEAS_KEY, KeyValueStore, TRIPS_KEY, decode_value, load_value, save_json};
use crate::trip::{Cost, ItineraryItem, NewItineraryItem, NewTrip, Trip};

pub struct TripStore<S: KeyValueStore> {
    storage: S,
    trips: Vec<Trip>,
    ideas: Ideas,
    ids: IdGenerator,
    persist_warning: Option<WayfareError>,
}

impl<S: KeyValueStore> TripStore<S> {
    /// Load trips and ideas from `storage`.
    ///
    /// Missing or malformed data starts out empty. Older saves are
    /// migrated and, if anything changed, written back once. A key that
    /// could not be decoded is left untouched in storage.
    pub fn load(storage: S) -> Self {
        let mut trips_value = load_value(&storage, TRIPS_KEY);
        let mut ideas_value = load_value(&storage, IDEAS_KEY);

        let trips_migrated = trips_value.as_mut().is_some_and(migrate_trips);
        let ideas_migrated = ideas_value.as_mut().is_some_and(migrate_ideas);

        let trips: Option<Vec<Trip>> = decode_value(TRIPS_KEY, trips_value);
        let ideas: Option<Ideas> = decode_value(IDEAS_KEY, ideas_value);
        let save_trips = trips_migrated && trips.is_some();
        let save_ideas = ideas_migrated && ideas.is_some();
        let trips = trips.unwrap_or_default();
        let ideas = ideas.unwrap_or_default();

        let existing_ids: Vec<i64> = trips
            .iter()
            .flat_map(|t| {
                std::iter::once(t.id)
                    .chain(t.costs.iter().map(|c| c.id))
                    .chain(t.itinerary.iter().map(|i| i.id))
            })
            .chain(ideas.ids())
            .collect();

        tracing::debug!("Loaded {} trips", trips.len());

        let mut store = TripStore {
            storage,
            trips,
            ideas,
            ids: IdGenerator::above(existing_ids),
            persist_warning: None,
        };

        if save_trips {
            store.save_trips();
        }
        if save_ideas {
            store.save_ideas();
        }

        store
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn trip(&self, id: i64) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    pub fn ideas(&self) -> &Ideas {
        &self.ideas
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The last persistence failure, if any. In-memory state stays
    /// authoritative for the session regardless.
    pub fn take_persist_warning(&mut self) -> Option<WayfareError> {
        self.persist_warning.take()
    }

    // TRIPS:

    pub fn add_trip(&mut self, new: NewTrip) -> WayfareResult<Trip> {
        let range = new.validate()?;

        let costs = new
            .costs
            .into_iter()
            .map(|c| Cost {
                id: self.ids.next_id(),
                description: c.description.trim().to_string(),
                amount: c.amount,
            })
            .collect();

        let trip = Trip {
            id: self.ids.next_id(),
            destination: new.destination.trim().to_string(),
            start_date: range.start(),
            end_date: range.end(),
            notes: new.notes.trim().to_string(),
            costs,
            is_weekend_trip: new.is_weekend_trip,
            itinerary: Vec::new(),
        };

        tracing::debug!("Adding trip {} to {}", trip.id, trip.destination);
        self.trips.push(trip.clone());
        self.persist();
        Ok(trip)
    }

    /// Removes the trip and its itinerary. Unknown ids are ignored.
    pub fn delete_trip(&mut self, id: i64) {
        let before = self.trips.len();
        self.trips.retain(|t| t.id != id);
        if self.trips.len() != before {
            tracing::debug!("Deleted trip {id}");
        }
        self.persist();
    }

    /// Trips covering `date`, in store order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Trip> {
        self.trips.iter().filter(|t| t.covers(date)).collect()
    }

    /// Weekend trips by start date. Trips starting the same day keep their
    /// store order.
    pub fn weekend_trips(&self) -> Vec<&Trip> {
        let mut trips: Vec<&Trip> = self.trips.iter().filter(|t| t.is_weekend_trip).collect();
        trips.sort_by_key(|t| t.start_date);
        trips
    }

    // ITINERARY:

    pub fn add_itinerary_item(
        &mut self,
        trip_id: i64,
        new: NewItineraryItem,
    ) -> WayfareResult<ItineraryItem> {
        let index = self
            .trips
            .iter()
            .position(|t| t.id == trip_id)
            .ok_or_else(|| WayfareError::NotFound(format!("Trip {}", trip_id)))?;

        let item = new.into_item(self.ids.next_id())?;

        tracing::debug!("Adding itinerary item {} to trip {trip_id}", item.id);
        self.trips[index].itinerary.push(item.clone());
        self.persist();
        Ok(item)
    }

    /// Unknown trip or item ids are ignored.
    pub fn delete_itinerary_item(&mut self, trip_id: i64, item_id: i64) {
        if let Some(trip) = self.trips.iter_mut().find(|t| t.id == trip_id) {
            trip.itinerary.retain(|i| i.id != item_id);
        }
        self.persist();
    }

    // IDEAS:

    pub fn add_idea(&mut self, bucket: IdeaBucket, new: NewIdea) -> WayfareResult<Idea> {
        let idea = new.into_idea(self.ids.next_id())?;
        tracing::debug!("Adding idea {} to {bucket}", idea.id);
        self.ideas.bucket_mut(bucket).push(idea.clone());
        self.persist();
        Ok(idea)
    }

    /// Unknown ids are ignored.
    pub fn delete_idea(&mut self, bucket: IdeaBucket, id: i64) {
        self.ideas.bucket_mut(bucket).retain(|i| i.id != id);
        self.persist();
    }

    /// First-run step: fill the buckets with sample ideas when the
    /// must-see bucket is empty. Returns true if anything was added.
    pub fn seed_default_ideas_if_empty(&mut self) -> bool {
        if !self.ideas.must_see.is_empty() {
            return false;
        }

        for (bucket, new) in default_ideas() {
            // Sample titles are never blank
            if let Ok(idea) = new.into_idea(self.ids.next_id()) {
                self.ideas.bucket_mut(bucket).push(idea);
            }
        }

        tracing::info!("Seeded default ideas");
        self.persist();
        true
    }

    fn persist(&mut self) {
        self.save_trips();
        self.save_ideas();
    }

    fn save_trips(&mut self) {
        if let Err(e) = save_json(&mut self.storage, TRIPS_KEY, &self.trips) {
            tracing::warn!("Error saving trips: {e}");
            self.persist_warning = Some(e);
        }
    }

    fn save_ideas(&mut self) {
        if let Err(e) = save_json(&mut self.storage, IDEAS_KEY, &self.ideas) {
            tracing::warn!("Error saving ideas: {e}");
            self.persist_warning = Some(e);
        }
    }
}
