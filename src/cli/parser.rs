use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for abxlog
/// CLI application to track ICU antibiotic administrations in a Google Sheet
#[derive(Parser)]
#[command(
    name = "abxlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record and review ICU antibiotic administrations stored in a Google Sheets worksheet",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override secrets file path (service account + sheet URL)
    #[arg(global = true, long = "secrets", value_name = "FILE")]
    pub secrets: Option<String>,

    /// Override the worksheet (tab) name
    #[arg(global = true, long = "worksheet", value_name = "NAME")]
    pub worksheet: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the header row if the worksheet is empty
    Init,

    /// Show configuration diagnostics (sheet ID, service identity) without network access
    Status,

    /// Authenticate and read the worksheet once to verify access
    TestConnection,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "create",
            help = "Create the configuration file and a secrets template if missing"
        )]
        create: bool,

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

    /// Add an administration record
    Add {
        /// Patient identifier
        patient_id: String,

        /// Antibiotic name
        antibiotic: String,

        /// Dosage (free text, e.g. "1g IV")
        dosage: String,

        #[arg(long = "date", help = "Administration date (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long = "time", help = "Administration time (HH:MM)")]
        time: Option<String>,

        #[arg(long = "by", help = "Who added the entry (default: Unknown)")]
        added_by: Option<String>,
    },

    /// List records with summary metrics
    List {
        #[arg(long = "patient", help = "Show only records of this patient")]
        patient: Option<String>,

        #[arg(long = "no-summary", help = "Do not print summary metrics")]
        no_summary: bool,
    },

    /// Export records to a local file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long = "patient", help = "Export only records of this patient")]
        patient: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },
}
