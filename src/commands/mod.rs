pub mod calendar;
pub mod favorites;
pub mod ideas;
pub mod itinerary;
pub mod trips;

use owo_colors::OwoColorize;
use wayfare_core::WayfareError;

/// Saving failed but the change still applies to this session.
pub fn report_persist_warning(warning: Option<WayfareError>) {
    if let Some(e) = warning {
        eprintln!("{}", format!("Warning: changes could not be saved ({e})").yellow());
    }
}
