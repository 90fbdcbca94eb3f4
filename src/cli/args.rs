//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Talus - scientific-model palette backend.
#[derive(Debug, Parser)]
#[command(name = "talus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the palette root directory (defaults to current directory)
    #[arg(short, long, global = true, env = "TALUS_PALETTE")]
    pub palette: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the components available in the palette
    List(ListArgs),

    /// Show one component's assembled description
    Show(ShowArgs),

    /// Render a component's input files
    Render(RenderArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Sort names lexicographically
    #[arg(long)]
    pub sort: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Component name
    pub name: String,

    /// Show only the parameter table
    #[arg(long)]
    pub parameters: bool,

    /// Show only the default-value mapping
    #[arg(long, conflicts_with = "parameters")]
    pub defaults: bool,
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RenderArgs {
    /// Component name
    pub name: String,

    /// Override a parameter value (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub set: Vec<(String, String)>,

    /// Human-readable output with per-file headers and missing-field notes
    #[arg(long)]
    pub pretty: bool,
}

/// Parse a `KEY=VALUE` override.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}
