use crate::core::cycle::{LOOKAHEAD_DAYS, MAX_LOOKAHEAD_DAYS};
use crate::export::ExportFormat;
use crate::models::city::CitySort;
use crate::models::reading::TimeRange;
use crate::models::task::TaskFilter;
use crate::models::weather::{MapLayer, Units};
use clap::{Parser, Subcommand};

/// Command-line interface definition for hometools
/// Everyday household utilities backed by JSON files and SQLite
#[derive(Parser)]
#[command(
    name = "hometools",
    version = env!("CARGO_PKG_VERSION"),
    about = "Household utilities: 4-on/4-off cycle planner, calendar, to-do list, INR log, lookups and weather",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the directory holding the JSON data files
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, data directory and database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Archive every data file into a zip
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing archive")]
        force: bool,
    },

    /// Show where a date falls in the off/on cycle
    Cycle {
        #[arg(long, help = "Cycle start date (YYYY-MM-DD or MM/DD/YYYY)")]
        start: Option<String>,

        #[arg(
            long,
            default_value_t = LOOKAHEAD_DAYS,
            value_parser = clap::value_parser!(u32).range(1..=MAX_LOOKAHEAD_DAYS as i64),
            help = "Number of days to list"
        )]
        days: u32,

        #[arg(long = "on", value_name = "DATE", help = "Show the phase of a single date")]
        on: Option<String>,
    },

    /// Print a month or a whole year colored by cycle phase
    Calendar {
        #[arg(long, help = "Cycle start date (YYYY-MM-DD or MM/DD/YYYY)")]
        start: Option<String>,

        #[arg(
            long,
            value_parser = clap::value_parser!(i32).range(1..=9999),
            help = "Year to show (default: current year)"
        )]
        year: Option<i32>,

        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(1..=12),
            help = "Show only this month"
        )]
        month: Option<u32>,

        #[arg(long = "no-color", help = "Plain output: * marks off days, @ marks today")]
        no_color: bool,
    },

    /// Day-by-day activity planner
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },

    /// To-do list
    Todo {
        #[command(subcommand)]
        action: TodoAction,
    },

    /// INR (blood clotting) readings
    Inr {
        #[command(subcommand)]
        action: InrAction,
    },

    /// Compare airlines by code (up to 5)
    Airline {
        #[arg(value_name = "CODE", help = "Airline codes, e.g. DL UA EK")]
        codes: Vec<String>,

        #[arg(long, help = "List the known airline codes")]
        list: bool,
    },

    /// Browse the city reference table
    City {
        #[command(subcommand)]
        action: CityAction,
    },

    /// Recommended household tools by category
    Tools {
        #[arg(value_name = "CATEGORY", help = "Category name, part of it, or its number")]
        category: Option<String>,

        #[arg(long, conflicts_with = "category", help = "Show every category")]
        all: bool,
    },

    /// Current weather, forecast, maps and severe weather alerts
    Weather {
        #[arg(long, value_enum, help = "Unit system (default: from config)")]
        units: Option<Units>,

        #[command(subcommand)]
        action: WeatherAction,
    },
}

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Show the planner, or one day of it
    Show {
        day: Option<String>,

        #[arg(long, help = "Only show activities of this category")]
        category: Option<String>,

        #[arg(long = "no-color")]
        no_color: bool,
    },

    /// Append an activity to a day
    Add {
        day: String,

        #[arg(long, help = "Time label, e.g. \"10:00 AM\"")]
        time: String,

        #[arg(long = "desc")]
        description: String,

        #[arg(long, help = "Category (sleep, morning, afternoon, evening, medicine, gym, coding, meal)")]
        category: String,
    },

    /// Change fields of an activity
    Edit {
        day: String,

        #[arg(help = "Activity number as shown by `schedule show`")]
        index: usize,

        #[arg(long)]
        time: Option<String>,

        #[arg(long = "desc")]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Remove an activity
    Remove { day: String, index: usize },

    /// Rename a day
    Title { day: String, title: String },

    /// Add an empty day after the last one
    AddDay {
        #[arg(long)]
        title: Option<String>,
    },

    /// Delete a whole day
    RemoveDay { day: String },

    /// Set the name shown in the planner title
    Name {
        first: Option<String>,
        last: Option<String>,

        #[arg(long, conflicts_with_all = ["first", "last"])]
        clear: bool,
    },

    /// Show or change the notes
    Notes {
        #[arg(long, conflicts_with_all = ["append", "clear"])]
        set: Option<String>,

        #[arg(long, conflicts_with = "clear")]
        append: Option<String>,

        #[arg(long)]
        clear: bool,
    },

    /// Show or set the cycle start date
    Start { date: Option<String> },

    /// Show the category colors
    Legend {
        #[arg(long = "no-color")]
        no_color: bool,
    },

    /// Save the planner to another file
    Export { file: String },

    /// Replace the planner with a file saved by `export`
    Import { file: String },

    /// Restore the default planner
    Reset,
}

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a task
    Add {
        title: String,

        #[arg(long = "desc", default_value = "")]
        description: String,
    },

    /// List tasks
    List {
        #[arg(long, short, default_value = "")]
        search: String,

        #[arg(long, value_enum, default_value = "all")]
        filter: TaskFilter,
    },

    /// Toggle a task between done and not done
    Done { id: u32 },

    /// Toggle the selection mark of a task
    Select { id: u32 },

    /// Show every field of a task
    Show { id: u32 },

    /// Delete the given tasks, or every selected task when none are given
    Delete { ids: Vec<u32> },

    /// Print the task counters
    Status,
}

#[derive(Subcommand)]
pub enum InrAction {
    /// Record a reading
    Add {
        value: String,

        #[arg(long, help = "Reading date (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List readings, newest first
    List {
        #[arg(long, value_enum, default_value = "all")]
        range: TimeRange,
    },

    /// Delete by id, or every reading matching a date and value
    Delete {
        #[arg(long, conflicts_with_all = ["date", "value"])]
        id: Option<i64>,

        #[arg(long, requires = "value")]
        date: Option<String>,

        #[arg(long, requires = "date")]
        value: Option<String>,
    },

    /// Summary statistics
    Stats {
        #[arg(long, value_enum, default_value = "all")]
        range: TimeRange,
    },

    /// Text chart against the therapeutic range
    Chart {
        #[arg(long, value_enum, default_value = "all")]
        range: TimeRange,
    },

    /// Export readings, oldest first
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Default: inr_data_export.<format>")]
        file: Option<String>,

        #[arg(long, value_enum, default_value = "all")]
        range: TimeRange,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum CityAction {
    /// List the countries
    Countries,

    /// List the cities of a country
    List {
        country: String,

        #[arg(long, value_enum, default_value = "name")]
        sort: CitySort,
    },

    /// Show one city
    Show { country: String, city: String },

    /// Add a city to a country
    Add {
        country: String,
        city: String,

        #[arg(long)]
        population: Option<String>,

        #[arg(long, help = "Area; a bare number is taken as km²")]
        area: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum WeatherAction {
    /// Current conditions (default: last searched city)
    Now {
        city: Option<String>,

        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Five-day forecast at noon
    Forecast { city: Option<String> },

    /// Guess the current city from the IP address
    Locate,

    /// Weather map tile and browser links
    Map {
        city: Option<String>,

        #[arg(long, value_enum, default_value = "temperature")]
        layer: MapLayer,
    },

    /// Air quality index and the dominant pollutant
    Air { city: Option<String> },

    /// Manage favorite cities
    Favorites {
        #[command(subcommand)]
        action: FavoriteAction,
    },

    /// Poll and alert on severe weather
    Watch {
        city: Option<String>,

        #[arg(long, help = "Seconds between checks (default: from config)")]
        interval: Option<u64>,

        #[arg(long, help = "Stop after this many checks")]
        count: Option<u32>,
    },
}

#[derive(Subcommand)]
pub enum FavoriteAction {
    /// List favorite cities
    List,

    /// Add a city
    Add { city: String },

    /// Remove a city
    Remove { city: String },
}
