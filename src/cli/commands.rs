//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Order mailer CLI
#[derive(Parser, Debug)]
#[command(name = "order-mailer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pipeline configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Locale catalog file (YAML), replaces the built-in locales
    #[arg(short, long, global = true)]
    pub locales: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turn a CSV order export into an order message
    Process {
        /// CSV file to process
        file: PathBuf,

        /// Message language (unknown codes use the default)
        #[arg(short = 'L', long, default_value = "pl")]
        language: String,
    },

    /// List available languages
    Languages,

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "5000")]
        port: u16,

        /// Maximum upload size in bytes
        #[arg(long, default_value = "10485760")]
        max_upload_bytes: usize,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON document (`success`, `content`/`error`)
    Json,
    /// Message text only
    Pretty,
}
