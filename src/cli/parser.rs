use crate::core::board::SortField;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for opsboard
#[derive(Parser)]
#[command(
    name = "opsboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ops Board: review today's Ops and manage operator check-ins",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the Ops feed (http(s) URL or path to a JSON file)
    #[arg(global = true, long = "feed")]
    pub feed: Option<String>,

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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Show the board: every Op with its roster and check-in status
    List {
        /// Filter by operator name, op title or public id
        #[arg(long, short)]
        search: Option<String>,

        /// Roster sort column (default from config)
        #[arg(long, value_enum)]
        sort: Option<SortField>,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Check an operator in with the op's check-in code
    Checkin {
        op_id: u64,
        operator_id: u64,

        /// Code to validate; prompted for on stdin when omitted
        #[arg(long)]
        code: Option<String>,

        /// Record even if the board would not offer the action
        #[arg(long)]
        force: bool,
    },

    /// Check an operator out with the op's check-out code
    Checkout {
        op_id: u64,
        operator_id: u64,

        /// Code to validate; prompted for on stdin when omitted
        #[arg(long)]
        code: Option<String>,

        /// Record even if the board would not offer the action
        #[arg(long)]
        force: bool,
    },

    /// Print recorded check-in/check-out times
    Status {
        /// Only this op
        op_id: Option<u64>,
    },

    /// Export recorded attendance
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Write local wall-clock times instead of UTC RFC 3339
        #[arg(long)]
        local: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
