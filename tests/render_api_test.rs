//! Integration tests for the input-rendering pipeline.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use talus::palette::Palette;
use talus::render::{formatted_input, input_files, pretty_input};
use tempfile::TempDir;

#[cfg(windows)]
const LINE_SEP: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEP: &str = "\n";

/// Write a component whose `a.txt.tmpl` references `x` (defaulted) and `y`
/// (undefaulted), and whose `b.txt` renders cleanly.
fn write_component_with_files(root: &Path, name: &str) {
    let db = root.join(name).join("db");
    fs::create_dir_all(&db).unwrap();
    fs::write(db.join("info.json"), format!(r#"{{"id": "{name}"}}"#)).unwrap();
    fs::write(
        db.join("parameters.json"),
        r#"[{
            "key": "x",
            "name": "X",
            "description": "A defaulted parameter",
            "value": {"type": "int", "default": 5}
        }]"#,
    )
    .unwrap();
    fs::write(db.join("uses.json"), "[]").unwrap();
    fs::write(db.join("provides.json"), "[]").unwrap();
    fs::write(db.join("files.json"), r#"["a.txt.tmpl", "b.txt"]"#).unwrap();

    let files = root.join(name).join("files");
    fs::create_dir_all(&files).unwrap();
    fs::write(files.join("a.txt.tmpl"), "x = ${x}\ny = ${y}\n").unwrap();
    fs::write(files.join("b.txt"), "x is ${x}\n").unwrap();
}

#[test]
fn input_files_returns_raw_contents_in_table_order() {
    let temp = TempDir::new().unwrap();
    write_component_with_files(temp.path(), "cem");
    let palette = Palette::load(temp.path()).unwrap();

    let files = input_files(&palette, "cem").unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].0, "a.txt.tmpl");
    assert_eq!(files[0].1, "x = ${x}\ny = ${y}\n");
    assert_eq!(files[1].0, "b.txt");
}

#[test]
fn formatted_input_strips_template_extension_only() {
    let temp = TempDir::new().unwrap();
    write_component_with_files(temp.path(), "cem");
    let palette = Palette::load(temp.path()).unwrap();

    let rendered = formatted_input(&palette, "cem", &HashMap::new()).unwrap();
    let mut names: Vec<&str> = rendered.keys().map(String::as_str).collect();
    names.sort();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
}

#[test]
fn formatted_input_substitutes_defaults_and_blanks_missing() {
    let temp = TempDir::new().unwrap();
    write_component_with_files(temp.path(), "cem");
    let palette = Palette::load(temp.path()).unwrap();

    let rendered = formatted_input(&palette, "cem", &HashMap::new()).unwrap();
    assert_eq!(rendered["a.txt"], "x = 5\ny = \n");
    assert_eq!(rendered["b.txt"], "x is 5\n");
}

#[test]
fn formatted_input_applies_overrides() {
    let temp = TempDir::new().unwrap();
    write_component_with_files(temp.path(), "cem");
    let palette = Palette::load(temp.path()).unwrap();

    let mut overrides = HashMap::new();
    overrides.insert("x".to_string(), "7".to_string());
    overrides.insert("y".to_string(), "ready".to_string());

    let rendered = formatted_input(&palette, "cem", &overrides).unwrap();
    assert_eq!(rendered["a.txt"], "x = 7\ny = ready\n");
}

#[test]
fn pretty_input_reports_missing_per_file() {
    let temp = TempDir::new().unwrap();
    write_component_with_files(temp.path(), "cem");
    let palette = Palette::load(temp.path()).unwrap();

    let blob = pretty_input(&palette, "cem", &HashMap::new()).unwrap();
    let rule = "-".repeat(80);

    // Two 80-character rules per file block.
    assert_eq!(blob.lines().filter(|line| *line == rule).count(), 4);

    // Headers show the on-disk filename, unstripped.
    assert!(blob.contains("file: a.txt.tmpl"));
    assert!(blob.contains("file: b.txt"));

    // Only the first block reports the missing field.
    assert_eq!(blob.matches("missing:").count(), 1);
    assert!(blob.contains("missing: y"));
    let b_block = blob.split("file: b.txt").nth(1).unwrap();
    assert!(!b_block.contains("missing:"));
}

#[test]
fn pretty_input_joins_blocks_with_line_separator() {
    let temp = TempDir::new().unwrap();
    write_component_with_files(temp.path(), "cem");
    let palette = Palette::load(temp.path()).unwrap();

    let blob = pretty_input(&palette, "cem", &HashMap::new()).unwrap();
    let rule = "-".repeat(80);
    assert!(blob.contains(&format!("{rule}{LINE_SEP}file: b.txt")));
}

#[test]
fn pretty_input_with_full_overrides_has_no_missing_lines() {
    let temp = TempDir::new().unwrap();
    write_component_with_files(temp.path(), "cem");
    let palette = Palette::load(temp.path()).unwrap();

    let mut overrides = HashMap::new();
    overrides.insert("y".to_string(), "0.5".to_string());

    let blob = pretty_input(&palette, "cem", &overrides).unwrap();
    assert!(!blob.contains("missing:"));
    assert!(blob.contains("y = 0.5"));
}

#[test]
fn rendering_unknown_component_fails() {
    let temp = TempDir::new().unwrap();
    write_component_with_files(temp.path(), "cem");
    let palette = Palette::load(temp.path()).unwrap();

    assert!(formatted_input(&palette, "nope", &HashMap::new()).is_err());
    assert!(pretty_input(&palette, "nope", &HashMap::new()).is_err());
}

#[test]
fn listed_but_absent_input_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    write_component_with_files(temp.path(), "cem");
    fs::remove_file(temp.path().join("cem/files/b.txt")).unwrap();
    let palette = Palette::load(temp.path()).unwrap();

    assert!(matches!(
        formatted_input(&palette, "cem", &HashMap::new()),
        Err(talus::TalusError::Io(_))
    ));
}
