use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worktime
/// CLI application to track weekly badge times with SQLite
#[derive(Parser)]
#[command(
    name = "worktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple week-balance CLI: track badge times, lunch breaks and the balance against the standard workday",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Edit one weekday's record
    Set {
        /// Day to edit (mon..fri, lun..ven, or 1..5)
        day: String,

        #[arg(
            long = "smart",
            help = "Mark the day as smart working (clears all stamps)"
        )]
        smart: bool,

        #[arg(
            long = "no-smart",
            conflicts_with = "smart",
            help = "Turn smart working off for the day"
        )]
        no_smart: bool,

        /// First entry stamp (HH:MM, '-' clears the field)
        #[arg(long = "entry1")]
        entry1: Option<String>,

        /// First exit stamp (HH:MM, '-' clears the field)
        #[arg(long = "exit1")]
        exit1: Option<String>,

        /// Second entry stamp (HH:MM, '-' clears the field)
        #[arg(long = "entry2")]
        entry2: Option<String>,

        /// Second exit stamp (HH:MM, '-' clears the field)
        #[arg(long = "exit2")]
        exit2: Option<String>,
    },

    /// Step a day's permit minutes up or down (30' steps)
    Permit {
        /// Day to edit (mon..fri, lun..ven, or 1..5)
        day: String,

        /// 'add' or 'del'
        op: String,
    },

    /// Print the week table: stamps, balances, rubato, suggestions
    Show,

    /// Print the suggested second exit for a day, if any
    Suggest {
        /// Day to solve (mon..fri, lun..ven, or 1..5)
        day: String,
    },

    /// Reset a single day or the whole week
    Clear {
        /// Day to clear (omit with --week)
        day: Option<String>,

        #[arg(long = "week", help = "Clear the whole week")]
        week: bool,
    },

    /// Manage the default-day template
    Default {
        /// Template first entry (HH:MM, '-' clears the field)
        #[arg(long = "entry1")]
        entry1: Option<String>,

        /// Template first exit (HH:MM, '-' clears the field)
        #[arg(long = "exit1")]
        exit1: Option<String>,

        /// Template second entry (HH:MM, '-' clears the field)
        #[arg(long = "entry2")]
        entry2: Option<String>,

        /// Template second exit (HH:MM, '-' clears the field)
        #[arg(long = "exit2")]
        exit2: Option<String>,

        #[arg(long = "print", help = "Print the stored template")]
        print_default: bool,

        /// Apply the template to one day (keeps that day's permit)
        #[arg(long = "apply")]
        apply: Option<String>,

        #[arg(
            long = "apply-week",
            conflicts_with = "apply",
            help = "Apply the template to the whole week (resets permits)"
        )]
        apply_week: bool,
    },

    /// Export the week to a file
    Export {
        #[arg(long = "format", value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default: WorkTime_YYYY-MM-DD.<ext> in the current dir)
        #[arg(long = "file")]
        file: Option<String>,

        #[arg(long = "force", help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Print the audit log
    Log,
}
