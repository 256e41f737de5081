use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gabbai synagogue calendar tools.
#[derive(Parser)]
#[command(
    name = "gabbai",
    version,
    about = "Hebrew dates, weekly readings, yahrzeits, and olim selection"
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
    /// Select the olim for the Sabbath of a date.
    Olim(OlimArgs),
    /// Show the weekly reading for the Sabbath of a date.
    Parasha(ParashaArgs),
    /// Convert between Gregorian and Hebrew dates.
    HebrewDate(HebrewDateArgs),
    /// Find the next yahrzeit for a date of death.
    Yahrzeit(YahrzeitArgs),
}

/// Reading options shared by the `olim` and `parasha` subcommands.
#[derive(clap::Args)]
pub struct ReadingArgs {
    /// Path to TOML configuration file (defaults to ./gabbai.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Use the Israel reading schedule.
    #[arg(long)]
    pub israel: bool,

    /// Label readings in Hebrew.
    #[arg(long)]
    pub hebrew: bool,
}

/// Arguments for the `olim` subcommand.
#[derive(clap::Args)]
pub struct OlimArgs {
    /// Path to a JSON array of congregant records.
    #[arg(short, long)]
    pub records: PathBuf,

    /// Target date (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: String,

    /// Print matches as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub reading: ReadingArgs,
}

/// Arguments for the `parasha` subcommand.
#[derive(clap::Args)]
pub struct ParashaArgs {
    /// Any date in the week (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: String,

    /// List every Sabbath of the Hebrew year containing that Sabbath.
    #[arg(long)]
    pub year: bool,

    #[command(flatten)]
    pub reading: ReadingArgs,
}

/// Arguments for the `hebrew-date` subcommand.
#[derive(clap::Args)]
pub struct HebrewDateArgs {
    /// Gregorian date to convert (YYYY-MM-DD).
    #[arg(
        short,
        long,
        conflicts_with = "to_gregorian",
        required_unless_present = "to_gregorian"
    )]
    pub date: Option<String>,

    /// Hebrew year, month number (Nisan = 1, Adar II = 13), and day to convert.
    #[arg(long, num_args = 3, value_names = ["YEAR", "MONTH", "DAY"])]
    pub to_gregorian: Option<Vec<i32>>,
}

/// Arguments for the `yahrzeit` subcommand.
#[derive(clap::Args)]
pub struct YahrzeitArgs {
    /// Gregorian date of death (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: String,

    /// Find the first yahrzeit on or after this date (defaults to today).
    #[arg(long)]
    pub from: Option<String>,

    /// Path to TOML configuration file (defaults to ./gabbai.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
