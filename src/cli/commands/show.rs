//! Show command implementation.
//!
//! The `talus show` command prints one component's assembled description,
//! or just its parameter table or default-value mapping.

use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::args::ShowArgs;
use crate::error::Result;
use crate::palette::Palette;

/// Print one component as pretty JSON.
pub fn run(palette_root: &Path, args: &ShowArgs) -> Result<()> {
    let palette = Palette::load(palette_root)?;

    let output = if args.parameters {
        to_pretty_json(palette.parameters(&args.name)?)?
    } else if args.defaults {
        // BTreeMap keeps the printed mapping in stable key order.
        let defaults: BTreeMap<_, _> = palette.defaults(&args.name)?.into_iter().collect();
        to_pretty_json(&defaults)?
    } else {
        to_pretty_json(palette.get(&args.name)?)?
    };

    println!("{output}");
    Ok(())
}

fn to_pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(anyhow::Error::from)
        .map_err(Into::into)
}
