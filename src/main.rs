mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use uuid::Uuid;
use wayfare_core::config::WayfareConfig;
use wayfare_core::date_range::parse_date;
use wayfare_core::favorite::{CategoryFilter, FavoriteCategory};
use wayfare_core::idea::IdeaBucket;
use wayfare_core::month::CalendarMonth;
use wayfare_core::storage::FileStore;
use wayfare_core::trip::NewCost;
use wayfare_core::trip_store::TripStore;

const DEFAULT_RUST_LOG: &str = "wayfare=warn,wayfare_core=warn";

#[derive(Parser)]
#[command(name = "wayfare")]
#[command(about = "Plan trips on a month calendar and keep a list of favorite books")]
struct Cli {
    /// Read and write data here instead of the configured data_dir
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month with trips and events marked
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<CalendarMonth>,
    },
    /// Manage trips and events
    Trip {
        #[command(subcommand)]
        action: TripAction,
    },
    /// Manage a trip's itinerary
    Itinerary {
        #[command(subcommand)]
        action: ItineraryAction,
    },
    /// Manage general ideas (must-see, food, activities)
    Idea {
        #[command(subcommand)]
        action: IdeaAction,
    },
    /// Manage favorite books
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
}

#[derive(Subcommand)]
enum TripAction {
    Add {
        #[arg(short, long)]
        destination: String,

        /// First day (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date)]
        start: NaiveDate,

        /// Last day (YYYY-MM-DD), defaults to the start day
        #[arg(short, long, value_parser = parse_date)]
        end: Option<NaiveDate>,

        #[arg(short, long, default_value = "")]
        notes: String,

        /// A cost as DESCRIPTION=AMOUNT, may be repeated
        #[arg(long = "cost", value_parser = commands::trips::parse_cost)]
        costs: Vec<NewCost>,

        /// Mark as a weekend trip rather than a plain event
        #[arg(short, long)]
        weekend: bool,
    },
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List weekend trips by start date
    List,
    /// Show everything happening on a day
    On {
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
}

#[derive(Subcommand)]
enum ItineraryAction {
    Add {
        trip_id: i64,

        #[arg(short, long)]
        title: String,

        /// e.g. activity, food, sight, transport
        #[arg(short, long)]
        category: Option<String>,

        /// e.g. 10:30
        #[arg(long)]
        time: Option<String>,

        #[arg(short, long, default_value = "")]
        notes: String,
    },
    Delete {
        trip_id: i64,
        item_id: i64,
    },
}

#[derive(Subcommand)]
enum IdeaAction {
    Add {
        bucket: IdeaBucket,

        #[arg(short, long)]
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },
    Delete {
        bucket: IdeaBucket,
        id: i64,
    },
    List,
}

#[derive(Subcommand)]
enum FavAction {
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        category: FavoriteCategory,

        /// 1 to 5 stars
        #[arg(short, long)]
        rating: u8,

        #[arg(long, default_value = "")]
        notes: String,
    },
    Delete {
        id: Uuid,

        #[arg(short, long)]
        yes: bool,
    },
    List,
    /// Search names and notes, optionally within one category
    Search {
        #[arg(default_value = "")]
        term: String,

        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Delete every favorite
    Clear {
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    setup_tracing();

    let cli = Cli::parse();
    let config = WayfareConfig::load().context("Could not load wayfare config")?;
    let storage = FileStore::new(cli.data_dir.unwrap_or_else(|| config.data_path()));
    tracing::debug!("Using data directory {}", storage.dir().display());

    match cli.command {
        Commands::Calendar { month } => {
            let window = config.month_window()?;
            let store = open_trip_store(storage, &config);
            commands::calendar::run(&store, window, month)
        }
        Commands::Trip { action } => {
            let mut store = open_trip_store(storage, &config);
            match action {
                TripAction::Add {
                    destination,
                    start,
                    end,
                    notes,
                    costs,
                    weekend,
                } => commands::trips::add(
                    &mut store,
                    destination,
                    start,
                    end.unwrap_or(start),
                    notes,
                    costs,
                    weekend,
                ),
                TripAction::Delete { id, yes } => commands::trips::delete(&mut store, id, yes),
                TripAction::List => commands::trips::list(&store),
                TripAction::On { date } => commands::trips::on(&store, date),
            }
        }
        Commands::Itinerary { action } => {
            let mut store = open_trip_store(storage, &config);
            match action {
                ItineraryAction::Add {
                    trip_id,
                    title,
                    category,
                    time,
                    notes,
                } => commands::itinerary::add(&mut store, trip_id, title, category, time, notes),
                ItineraryAction::Delete { trip_id, item_id } => {
                    commands::itinerary::delete(&mut store, trip_id, item_id)
                }
            }
        }
        Commands::Idea { action } => {
            let mut store = open_trip_store(storage, &config);
            match action {
                IdeaAction::Add {
                    bucket,
                    title,
                    description,
                } => commands::ideas::add(&mut store, bucket, title, description),
                IdeaAction::Delete { bucket, id } => commands::ideas::delete(&mut store, bucket, id),
                IdeaAction::List => commands::ideas::list(&store),
            }
        }
        Commands::Fav { action } => {
            let mut store = wayfare_core::favorites_store::FavoritesStore::load(storage);
            match action {
                FavAction::Add {
                    name,
                    category,
                    rating,
                    notes,
                } => commands::favorites::add(&mut store, name, category, rating, notes),
                FavAction::Delete { id, yes } => commands::favorites::delete(&mut store, id, yes),
                FavAction::List => commands::favorites::list(&store),
                FavAction::Search { term, category } => {
                    commands::favorites::search(&store, &term, category)
                }
                FavAction::Clear { yes } => commands::favorites::clear(&mut store, yes),
            }
        }
    }
}

/// Load trips and ideas, seeding sample ideas on first run when enabled.
fn open_trip_store(storage: FileStore, config: &WayfareConfig) -> TripStore<FileStore> {
    let mut store = TripStore::load(storage);
    if config.seed_ideas {
        store.seed_default_ideas_if_empty();
    }
    store
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.into()),
        ))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
