//! Render command implementation.
//!
//! The `talus render` command renders a component's input files with its
//! parameter defaults, optionally overridden from the command line.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::cli::args::RenderArgs;
use crate::error::Result;
use crate::palette::Palette;
use crate::render::{formatted_input, pretty_input};

/// Render one component's input files to stdout.
///
/// Machine mode prints a JSON object keyed by emitted filename; `--pretty`
/// prints the labeled diagnostic blocks instead.
pub fn run(palette_root: &Path, args: &RenderArgs) -> Result<()> {
    let palette = Palette::load(palette_root)?;
    let overrides: HashMap<String, String> = args.set.iter().cloned().collect();

    if args.pretty {
        println!("{}", pretty_input(&palette, &args.name, &overrides)?);
    } else {
        let files: BTreeMap<_, _> = formatted_input(&palette, &args.name, &overrides)?
            .into_iter()
            .collect();
        let json = serde_json::to_string_pretty(&files).map_err(anyhow::Error::from)?;
        println!("{json}");
    }

    Ok(())
}
