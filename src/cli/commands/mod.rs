//! CLI command implementations.
//!
//! Commands are routed through [`dispatch`], which resolves the palette
//! root once and hands each subcommand its arguments. The library core
//! never prints; all stdout/stderr output happens in this layer.

pub mod list;
pub mod render;
pub mod show;

use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;

/// Route a parsed CLI invocation to its command implementation.
pub fn dispatch(cli: &Cli, palette_root: &Path) -> Result<()> {
    match &cli.command {
        Commands::List(args) => list::run(palette_root, args),
        Commands::Show(args) => show::run(palette_root, args),
        Commands::Render(args) => render::run(palette_root, args),
    }
}
