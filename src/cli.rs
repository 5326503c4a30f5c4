use clap::{Parser, Subcommand};
use reltime::{DurationUnit, Locale, Numeric};

#[derive(Parser)]
#[command(name = "reltime", version, about = "Print how long ago (or how far ahead) a date is")]
pub struct Cli {
    /// Dates to render: RFC 3339, YYYY-MM-DD[ HH:MM[:SS]], or epoch milliseconds
    #[arg(value_name = "DATE", allow_negative_numbers = true)]
    pub dates: Vec<String>,

    /// Smallest unit to report (second, minute, hour, day, month, year)
    #[arg(long, short = 's', value_name = "UNIT")]
    pub smallest: Option<DurationUnit>,

    /// Output locale (pl, en)
    #[arg(long, short = 'l', value_name = "LOCALE")]
    pub locale: Option<Locale>,

    /// Numeric display: auto allows phrases like "yesterday", always forces a count
    #[arg(long, value_name = "MODE")]
    pub numeric: Option<Numeric>,

    /// Treat this date as "now" instead of reading the system clock
    #[arg(long, value_name = "DATE", allow_hyphen_values = true)]
    pub now: Option<String>,

    /// Print one JSON object per date
    #[arg(long)]
    pub json: bool,

    /// Log unit selection details to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the duration units and their lengths
    Units,
    /// Show the config file location and the effective settings
    Config,
}
