//! Input-file templating pipeline.
//!
//! Turns a component's raw input files into run-ready input by substituting
//! parameter values into `${name}` placeholders:
//!
//! - [`interpolation`] - placeholder scanning
//! - [`formatter`] - substitution with missing-field tracking
//! - [`inputs`] - whole-component rendering, machine- or human-readable
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use talus::render::TemplateFormatter;
//!
//! let mut defaults = HashMap::new();
//! defaults.insert("dt".to_string(), serde_json::json!(0.5));
//!
//! let formatter = TemplateFormatter::new(&defaults);
//! let rendered = formatter.format("time step: ${dt}", &HashMap::new());
//! assert_eq!(rendered.text, "time step: 0.5");
//! assert!(rendered.missing.is_empty());
//! ```

pub mod formatter;
pub mod inputs;
pub mod interpolation;

pub use formatter::{Rendered, TemplateFormatter};
pub use inputs::{formatted_input, input_files, pretty_input};
pub use interpolation::{parse_template, Segment};
