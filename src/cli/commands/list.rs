//! List command implementation.
//!
//! The `talus list` command prints the component names in the palette.

use std::path::Path;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::palette::Palette;

/// Print the palette's component names, one per line or as JSON.
pub fn run(palette_root: &Path, args: &ListArgs) -> Result<()> {
    let palette = Palette::load(palette_root)?;
    let names = palette.names(args.sort);

    if args.json {
        let json = serde_json::to_string_pretty(&names).map_err(anyhow::Error::from)?;
        println!("{json}");
    } else {
        for name in names {
            println!("{name}");
        }
    }

    Ok(())
}
