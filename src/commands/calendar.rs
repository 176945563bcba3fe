use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use wayfare_core::calendar_grid::CalendarGrid;
use wayfare_core::month::{CalendarMonth, Direction, MonthWindow};
use wayfare_core::storage::KeyValueStore;
use wayfare_core::trip_store::TripStore;

use crate::render::Render;

pub fn run<S: KeyValueStore>(
    store: &TripStore<S>,
    window: MonthWindow,
    month: Option<CalendarMonth>,
) -> Result<()> {
    let today = Local::now().date_naive();
    let month = month.unwrap_or_else(|| window.initial(today));

    if !window.contains(month) {
        anyhow::bail!(
            "{} is outside the calendar range ({} to {})",
            month,
            window.first(),
            window.last()
        );
    }

    let grid = CalendarGrid::build(month, store.trips(), today)?;
    println!("{}", grid.render());
    println!();
    println!("{}", navigation_hint(&window, month).dimmed());

    Ok(())
}

/// "‹ 2026-01 | 2026-03 ›", leaving out directions that leave the window.
fn navigation_hint(window: &MonthWindow, month: CalendarMonth) -> String {
    let prev = window
        .step(month, Direction::Prev)
        .map(|m| format!("‹ {}", m.key()))
        .unwrap_or_default();
    let next = window
        .step(month, Direction::Next)
        .map(|m| format!("{} ›", m.key()))
        .unwrap_or_default();

    match (prev.is_empty(), next.is_empty()) {
        (false, false) => format!("{} | {}", prev, next),
        _ => format!("{}{}", prev, next),
    }
}
