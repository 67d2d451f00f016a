use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rCheckin
/// CLI application that logs who is on the local network and reports on it
#[derive(Parser)]
#[command(
    name = "rcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track device presence on the local network: ping log → sessions → monthly reports",
    long_about = None
)]
pub struct Cli {
    /// Override the sample directory (useful for tests or a shared data folder)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Enable debug logging on stderr
    #[arg(global = true, short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the sample directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Probe every configured address and append the results
    Scan {
        /// Run a single probe round and exit
        #[arg(long)]
        once: bool,
    },

    /// Show the sessions of one person on one day
    Day {
        /// Person (name of the sample directory)
        person: String,

        /// Date (YYYY-MM-DD), default today
        #[arg(long, short)]
        date: Option<String>,

        /// Print the day summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Calendar view: who was connected on each day of a month
    List {
        /// Month to show (YYYY-MM), default current month
        #[arg(long, short)]
        period: Option<String>,

        /// Only show this person
        #[arg(long)]
        person: Option<String>,
    },

    /// Monthly statistics per person
    Report {
        /// Month to report on (YYYY-MM), default current month
        #[arg(long, short)]
        period: Option<String>,

        /// Only report on this person
        #[arg(long)]
        person: Option<String>,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export monthly reports
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Month to export (YYYY-MM), default current month
        #[arg(long, short)]
        period: Option<String>,

        /// Only export this person
        #[arg(long)]
        person: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the sample directory
    Backup {
        /// Destination path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Write a single zip archive instead of a directory copy
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
