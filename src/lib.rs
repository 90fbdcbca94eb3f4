//! Talus - backend data layer for a scientific-model component palette.
//!
//! Talus loads a catalog ("palette") of reusable simulation components from
//! per-component directories of flat JSON tables, answers read-only queries
//! against the loaded catalog, and renders each component's input-file
//! templates by substituting parameter values.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`hooks`] - Component lifecycle hook resolution
//! - [`palette`] - Component discovery, assembly, and catalog queries
//! - [`render`] - Input-file templating pipeline
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use talus::render::TemplateFormatter;
//!
//! // Substitute parameter values into template text
//! let mut defaults = HashMap::new();
//! defaults.insert("run_duration".to_string(), serde_json::json!(100));
//! let formatter = TemplateFormatter::new(&defaults);
//!
//! let rendered = formatter.format("duration: ${run_duration} days", &HashMap::new());
//! assert_eq!(rendered.text, "duration: 100 days");
//! ```
//!
//! For palette loading against an on-disk fixture tree, see the integration
//! tests.

pub mod cli;
pub mod error;
pub mod hooks;
pub mod palette;
pub mod render;

pub use error::{Result, TalusError};
