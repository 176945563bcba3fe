use anyhow::Result;
use owo_colors::OwoColorize;
use wayfare_core::idea::{IdeaBucket, NewIdea};
use wayfare_core::storage::KeyValueStore;
use wayfare_core::trip_store::TripStore;

use crate::commands::report_persist_warning;
use crate::render::Render;

pub fn add<S: KeyValueStore>(
    store: &mut TripStore<S>,
    bucket: IdeaBucket,
    title: String,
    description: String,
) -> Result<()> {
    let idea = store.add_idea(bucket, NewIdea::new(title, description))?;
    report_persist_warning(store.take_persist_warning());

    println!("{}", format!("  Added {} spot: {}", bucket.label(), idea.title).green());
    Ok(())
}

pub fn delete<S: KeyValueStore>(store: &mut TripStore<S>, bucket: IdeaBucket, id: i64) -> Result<()> {
    store.delete_idea(bucket, id);
    report_persist_warning(store.take_persist_warning());
    println!("{}", "  Deleted".red());
    Ok(())
}

pub fn list<S: KeyValueStore>(store: &TripStore<S>) -> Result<()> {
    for (i, bucket) in IdeaBucket::ALL.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} {}", bucket.label().bold(), format!("({})", bucket.key()).dimmed());

        let ideas = store.ideas().bucket(bucket);
        if ideas.is_empty() {
            println!("{}", "   Nothing here yet".dimmed());
        }
        for idea in ideas {
            println!("   {}", idea.render());
        }
    }

    Ok(())
}
