use clap::{Parser, Subcommand};

use hijri_calendar::CalendarDate;

/// Hijri calendar companion.
#[derive(Parser)]
#[command(
    name = "hijri",
    version,
    about = "Hijri/Gregorian conversion, moon phases and age calculation"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the day of the week, both calendar dates and the moon phase.
    Today(TodayArgs),
    /// Convert a date to the other calendar.
    Convert(ConvertArgs),
    /// Calculate an age in years, months and days.
    Age(AgeArgs),
    /// Show the moon phase of a date, formatted for sharing.
    Phase(PhaseArgs),
    /// Print the month browser grid for a Hijri month.
    Grid(GridArgs),
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Date to show instead of the system clock (YYYY-MM-DD, or YYYY-MM-DD AH).
    #[arg(short, long)]
    pub date: Option<CalendarDate>,

    /// Shift by whole days to follow local moon sighting.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub offset: i64,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian `YYYY-MM-DD` converts to Hijri; `YYYY-MM-DD AH` converts to Gregorian.
    pub date: CalendarDate,
}

/// Arguments for the `age` subcommand.
#[derive(clap::Args)]
pub struct AgeArgs {
    /// Birth date.
    pub birth: CalendarDate,

    /// Reference date instead of the system clock.
    #[arg(short, long)]
    pub today: Option<CalendarDate>,
}

/// Arguments for the `phase` subcommand.
#[derive(clap::Args)]
pub struct PhaseArgs {
    /// Date to inspect; defaults to today.
    pub date: Option<CalendarDate>,
}

/// Arguments for the `grid` subcommand.
#[derive(clap::Args)]
pub struct GridArgs {
    /// Hijri year.
    pub year: u16,

    /// Hijri month (1-12).
    pub month: u8,

    /// Date to highlight instead of the system clock.
    #[arg(short, long)]
    pub today: Option<CalendarDate>,
}
