//! Rendering of a component's input files.
//!
//! A component lists its input files in its `files` table; the raw file
//! bodies live under `<root>/<component>/files/`. Files carrying the
//! `.tmpl` extension are parameter templates; the extension is stripped
//! from the emitted filename once the template is rendered.

use crate::error::Result;
use crate::palette::Palette;
use crate::render::formatter::TemplateFormatter;
use std::collections::HashMap;
use std::fs;

/// File extension marking an input file as a parameter template.
const TEMPLATE_EXTENSION: &str = ".tmpl";

/// Width of the separator rules in pretty-printed output.
const HEADER_WIDTH: usize = 80;

#[cfg(windows)]
const LINE_SEP: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEP: &str = "\n";

/// Read the raw input files of a component, in `files`-table order.
///
/// Raw file bodies are returned untouched; no placeholder substitution.
/// A missing or unreadable input file propagates as an I/O error.
pub fn input_files(palette: &Palette, name: &str) -> Result<Vec<(String, String)>> {
    let files_dir = palette.component_dir(name)?.join("files");

    let mut files = Vec::new();
    for filename in &palette.get(name)?.files {
        let contents = fs::read_to_string(files_dir.join(filename))?;
        files.push((filename.clone(), contents));
    }

    Ok(files)
}

/// Render a component's input files for machine consumption.
///
/// Each file is rendered through one [`TemplateFormatter`] built from the
/// component's parameter defaults, with `overrides` layered on top. The
/// returned mapping is keyed by the emitted filename, with any `.tmpl`
/// extension stripped. Missing-field diagnostics are not surfaced here;
/// use [`pretty_input`] for those.
pub fn formatted_input(
    palette: &Palette,
    name: &str,
    overrides: &HashMap<String, String>,
) -> Result<HashMap<String, String>> {
    let formatter = TemplateFormatter::new(&palette.defaults(name)?);

    let mut rendered = HashMap::new();
    for (filename, contents) in input_files(palette, name)? {
        let result = formatter.format(&contents, overrides);
        rendered.insert(strip_template_extension(&filename), result.text);
    }

    Ok(rendered)
}

/// Render a component's input files as one human-readable diagnostic blob.
///
/// Each file becomes a labeled block: a `file:` header line, a `missing:`
/// line when that file's render left placeholders unresolved, the rendered
/// body between two 80-character rules. Missing-field reporting is strictly
/// per file.
pub fn pretty_input(
    palette: &Palette,
    name: &str,
    overrides: &HashMap<String, String>,
) -> Result<String> {
    let formatter = TemplateFormatter::new(&palette.defaults(name)?);

    let mut blocks = Vec::new();
    for (filename, contents) in input_files(palette, name)? {
        let result = formatter.format(&contents, overrides);

        let mut lines = vec![format!("file: {filename}")];
        if !result.missing.is_empty() {
            lines.push(format!("missing: {}", result.missing.join(", \n  ")));
        }

        let rule = "-".repeat(HEADER_WIDTH);
        lines.push(rule.clone());
        lines.push(result.text);
        lines.push(rule);

        blocks.push(lines.join(LINE_SEP));
    }

    Ok(blocks.join(LINE_SEP))
}

/// Strip a final `.tmpl` extension from an input filename.
fn strip_template_extension(filename: &str) -> String {
    filename
        .strip_suffix(TEMPLATE_EXTENSION)
        .unwrap_or(filename)
        .to_string()
}
