//! TUI rendering traits for wayfare types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to wayfare-core types using owo_colors.

use owo_colors::OwoColorize;
use wayfare_core::calendar_grid::{CalendarGrid, DayCell, WEEKDAY_HEADERS};
use wayfare_core::display::{category_label, format_amount, format_display_date};
use wayfare_core::favorite::Favorite;
use wayfare_core::idea::Idea;
use wayfare_core::trip::{ItineraryItem, Trip};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Width of one calendar column
const CELL_WIDTH: usize = 5;

impl Render for DayCell {
    fn render(&self) -> String {
        let marker = match (self.has_trip, self.has_event) {
            (true, true) => "*•",
            (true, false) => "* ",
            (false, true) => "• ",
            (false, false) => "  ",
        };
        let text = format!("{:>3}{}", self.day_number, marker);

        if !self.is_active {
            return text.dimmed().to_string();
        }

        let text = if self.has_trip {
            text.green().bold().to_string()
        } else if self.has_event {
            text.cyan().to_string()
        } else {
            text
        };

        if self.is_today {
            text.reversed().to_string()
        } else {
            text
        }
    }
}

impl Render for CalendarGrid {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(self.month().to_string().bold().to_string());

        let headers: String = WEEKDAY_HEADERS
            .iter()
            .map(|h| format!("{:>width$}", h, width = CELL_WIDTH - 1))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(headers.dimmed().to_string());

        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|c| c.render()).collect();
            lines.push(cells.join(""));
        }

        let titled: Vec<String> = self
            .cells()
            .iter()
            .filter_map(|c| {
                let label = c.title_label.as_ref()?;
                Some(format!("  {:>2}  {}", c.day_number, label))
            })
            .collect();
        if !titled.is_empty() {
            lines.push(String::new());
            lines.extend(titled);
        }

        lines.push(String::new());
        lines.push(format!(
            "{}  {}  {}",
            "* trip".green(),
            "• event".cyan(),
            "today".reversed()
        ));

        lines.join("\n")
    }
}

impl Render for Trip {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{} {}",
            self.destination.bold(),
            format!("[{}]", self.id).dimmed()
        ));
        lines.push(format!(
            "   {} • {} - {}",
            self.kind_label(),
            format_display_date(self.start_date),
            format_display_date(self.end_date)
        ));

        if !self.notes.is_empty() {
            lines.push(format!("   {}", self.notes.dimmed()));
        }

        if !self.costs.is_empty() {
            lines.push("   Costs:".to_string());
            for cost in &self.costs {
                lines.push(format!(
                    "     {:<28} {:>10}",
                    cost.description,
                    format_amount(cost.amount)
                ));
            }
            let total = format!("     {:<28} {:>10}", "Total", format_amount(self.total_cost()));
            lines.push(total.bold().to_string());
        }

        lines.push("   Itinerary:".to_string());
        if self.itinerary.is_empty() {
            lines.push("     No itinerary items yet".dimmed().to_string());
        } else {
            for item in &self.itinerary {
                lines.push(format!("     {}", item.render()));
            }
        }

        lines.join("\n")
    }
}

impl Render for ItineraryItem {
    fn render(&self) -> String {
        let badge = format!("[{}]", category_label(&self.category));
        let mut line = format!("{} {}", badge.yellow(), self.title);
        if let Some(time) = &self.time {
            line.push_str(&format!(" {}", time.cyan()));
        }
        line.push_str(&format!(" {}", format!("({})", self.id).dimmed()));
        if !self.notes.is_empty() {
            line.push_str(&format!("\n       {}", self.notes.dimmed()));
        }
        line
    }
}

impl Render for Idea {
    fn render(&self) -> String {
        let mut line = format!("{} {}", self.title, format!("({})", self.id).dimmed());
        if !self.description.is_empty() {
            line.push_str(&format!("\n     {}", self.description.dimmed()));
        }
        line
    }
}

impl Render for Favorite {
    fn render(&self) -> String {
        let notes = if self.notes.is_empty() {
            "No notes added"
        } else {
            self.notes.as_str()
        };

        [
            format!(
                "{} {} {}",
                self.name.bold(),
                format!("[{}]", self.category).yellow(),
                self.rating.stars()
            ),
            format!("   {}", notes),
            format!("   Added: {}", self.date_added).dimmed().to_string(),
            format!("   id: {}", self.id).dimmed().to_string(),
        ]
        .join("\n")
    }
}

/// Plural form of the nouns used in listings; other words are returned as is.
pub fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        return word;
    }
    match word {
        "Event" => "Events",
        "favorite" => "favorites",
        _ => word,
    }
}
