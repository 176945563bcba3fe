use anyhow::Result;
use owo_colors::OwoColorize;
use uuid::Uuid;
use wayfare_core::favorite::{CategoryFilter, Favorite, FavoriteCategory, NewFavorite};
use wayfare_core::favorites_store::FavoritesStore;
use wayfare_core::storage::KeyValueStore;

use crate::commands::report_persist_warning;
use crate::render::{Render, pluralize};
use crate::utils::prompt::confirm;

pub fn add<S: KeyValueStore>(
    store: &mut FavoritesStore<S>,
    name: String,
    category: FavoriteCategory,
    rating: u8,
    notes: String,
) -> Result<()> {
    let favorite = store.add_favorite(NewFavorite::new(name, category, rating).with_notes(notes))?;
    report_persist_warning(store.take_persist_warning());

    println!("{}", format!("  Added: {}", favorite.name).green());
    println!("{}", format!("  Total favorites: {}", store.len()).dimmed());
    Ok(())
}

pub fn delete<S: KeyValueStore>(store: &mut FavoritesStore<S>, id: Uuid, yes: bool) -> Result<()> {
    let Some(favorite) = store.favorite(id) else {
        println!("{}", format!("No favorite with id {}", id).dimmed());
        return Ok(());
    };

    let prompt = format!("Delete {}?", favorite.name);
    if !confirm(&prompt, yes)? {
        return Ok(());
    }

    store.delete_favorite(id);
    report_persist_warning(store.take_persist_warning());
    println!("{}", format!("  Deleted. Total remaining: {}", store.len()).red());
    Ok(())
}

pub fn list<S: KeyValueStore>(store: &FavoritesStore<S>) -> Result<()> {
    if store.is_empty() {
        println!("{}", "No favorites added yet. Add your first one with `wayfare fav add`".dimmed());
        return Ok(());
    }

    let heading = format!("Showing {} {}", store.len(), pluralize("favorite", store.len()));
    print_favorites(&heading, store.favorites().iter());
    Ok(())
}

pub fn search<S: KeyValueStore>(
    store: &FavoritesStore<S>,
    term: &str,
    category: CategoryFilter,
) -> Result<()> {
    let matches = store.search(term, category);

    if matches.is_empty() {
        println!("{}", "No favorites match your search.".dimmed());
        return Ok(());
    }

    let heading = format!("Showing {} of {} books", matches.len(), store.len());
    print_favorites(&heading, matches.into_iter());
    Ok(())
}

pub fn clear<S: KeyValueStore>(store: &mut FavoritesStore<S>, yes: bool) -> Result<()> {
    if !confirm(
        "Are you sure you want to delete ALL favorites? This cannot be undone!",
        yes,
    )? {
        println!("{}", "Clear all cancelled".dimmed());
        return Ok(());
    }

    store.clear_all();
    report_persist_warning(store.take_persist_warning());
    println!("{}", "  All favorites have been deleted.".red());
    Ok(())
}

fn print_favorites<'a>(heading: &str, favorites: impl Iterator<Item = &'a Favorite>) {
    println!("{}", heading.bold());
    for favorite in favorites {
        println!();
        println!("{}", favorite.render());
    }
}
