use clap::{Parser, Subcommand, ValueEnum};

/// Chinese Four Pillars (BaZi) calculator.
#[derive(Parser)]
#[command(name = "bazi", version, about = "Chinese Four Pillars (BaZi) calculator")]
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
    /// Compute the four pillars and the full reading for a date and hour.
    Reading(ReadingArgs),
    /// Print the zodiac animal of a Gregorian year.
    Animal(AnimalArgs),
    /// Print the Western sun sign of a month and day.
    Zodiac(ZodiacArgs),
    /// Print the lucky color and number of a date.
    Lucky(LuckyArgs),
}

/// Arguments for the `reading` subcommand.
#[derive(clap::Args)]
pub struct ReadingArgs {
    /// Local date and hour: YYYY-MM-DD, YYYY-MM-DDTHH, YYYY-MM-DDTHH:MM or
    /// "YYYY-MM-DD HH:MM".
    pub datetime: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Arguments for the `animal` subcommand.
#[derive(clap::Args)]
pub struct AnimalArgs {
    /// Gregorian year (astronomical numbering, 1 BC is 0).
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

/// Arguments for the `zodiac` subcommand.
#[derive(clap::Args)]
pub struct ZodiacArgs {
    /// Month (1-12).
    #[arg(value_parser = clap::value_parser!(i32).range(1..=12))]
    pub month: i32,

    /// Day of month (1-31).
    #[arg(value_parser = clap::value_parser!(i32).range(1..=31))]
    pub day: i32,
}

/// Arguments for the `lucky` subcommand.
#[derive(clap::Args)]
pub struct LuckyArgs {
    /// Date: YYYY-MM-DD.
    pub date: String,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}
