//! # CLI Argument Definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "ordum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect and query closed enumerations declared in catalog files")]
pub struct Cli {
    /// Configuration file (`ORDUM__*` environment variables override it)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalog file to declare, in addition to the configured ones (repeatable)
    #[arg(long = "catalog", global = true, value_name = "FILE")]
    pub catalogs: Vec<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List declared type identifiers
    Types,
    /// List the enumerators of a type in ordinal order
    List {
        /// Type identifier, e.g. `cards::Suit`
        type_id: String,
    },
    /// Look up an enumerator by name
    Name { type_id: String, name: String },
    /// Look up an enumerator by value (parsed as JSON, falling back to plain text)
    Value { type_id: String, value: String },
    /// Look up an enumerator by ordinal
    Ordinal { type_id: String, ordinal: usize },
    /// Build every declared enumeration and report invalid ones
    Check,
}
