//! Component palette: discovery, assembly, and catalog queries.
//!
//! The palette is the catalog of simulation components available under one
//! root directory. On disk, each component occupies a subdirectory holding a
//! `db` directory of JSON tables, a `files` directory of raw input files,
//! and optionally a `hooks` directory of lifecycle scripts:
//!
//! ```text
//! <root>/<component>/db/info.json
//!                      /parameters.json
//!                      /uses.json
//!                      /provides.json
//!                      /files.json
//!                      /argv.json        (optional)
//! <root>/<component>/files/<filename>
//! <root>/<component>/hooks/<hook>.py
//! ```
//!
//! # Example
//!
//! ```no_run
//! use talus::palette::Palette;
//!
//! let palette = Palette::load("/data/components".as_ref())?;
//! for name in palette.names(true) {
//!     println!("{name}");
//! }
//! # Ok::<(), talus::TalusError>(())
//! ```

pub mod catalog;
pub mod component;
pub mod table;

pub use catalog::Palette;
pub use component::{Component, Parameter, ParameterValue};
pub use table::{load_table, TableKind};
