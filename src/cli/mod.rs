//! Command-line parsing for the pipe dimension selector.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the loader/engine code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::length::LengthUnit;

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "pipesel",
    version,
    about = "Pipe dimension selector (capacity-rated CSV catalogs)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Select the smallest fitting dimension for a catalog and length.
    Select(SelectArgs),
    /// List the catalog identifiers available in the catalog directory.
    List(DbArgs),
    /// Interactive mode: pick a catalog, then enter lengths repeatedly.
    ///
    /// This uses the same underlying pipeline as `pipesel select`, but prompts
    /// on stdin instead of taking flags.
    Pick(DbArgs),
}

/// Options for a one-shot selection.
#[derive(Debug, Parser, Clone)]
pub struct SelectArgs {
    /// Catalog identifier (file stem of a CSV in the catalog directory).
    #[arg(short = 'c', long)]
    pub catalog: String,

    /// Length of material to carry. Accepts `,` or `.` decimals (e.g. 80,034).
    #[arg(short = 'l', long)]
    pub length: String,

    /// Unit of the length input.
    #[arg(short = 'u', long, value_enum, default_value_t = LengthUnit::Meter)]
    pub unit: LengthUnit,

    /// Directory containing catalog CSV files (one catalog per file).
    #[arg(long, default_value = "db", value_name = "DIR")]
    pub db_dir: PathBuf,

    /// Print the selection result as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Options shared by commands that only need the catalog directory.
#[derive(Debug, Parser, Clone)]
pub struct DbArgs {
    /// Directory containing catalog CSV files (one catalog per file).
    #[arg(long, default_value = "db", value_name = "DIR")]
    pub db_dir: PathBuf,
}
