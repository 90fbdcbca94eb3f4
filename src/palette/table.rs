//! JSON table loading for component databases.
//!
//! Each component is described by a handful of small JSON files ("tables")
//! living in its `db` directory. This module knows the table names, which of
//! them a component may omit, and how to parse one table file into a typed
//! value.

use crate::error::{Result, TalusError};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// The JSON tables that make up a component description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Scalar metadata: id, name, version, etc.
    Info,
    /// Ordered list of user-settable parameters.
    Parameters,
    /// Exchange items the component consumes.
    Uses,
    /// Exchange items the component produces.
    Provides,
    /// Input file names, relative to the component's `files` directory.
    Files,
    /// Command-line tokens used to invoke the model.
    Argv,
}

impl TableKind {
    /// Every table, in assembly order.
    pub const ALL: [TableKind; 6] = [
        TableKind::Info,
        TableKind::Parameters,
        TableKind::Uses,
        TableKind::Provides,
        TableKind::Files,
        TableKind::Argv,
    ];

    /// File stem of the table within a component's `db` directory.
    pub fn stem(&self) -> &'static str {
        match self {
            TableKind::Info => "info",
            TableKind::Parameters => "parameters",
            TableKind::Uses => "uses",
            TableKind::Provides => "provides",
            TableKind::Files => "files",
            TableKind::Argv => "argv",
        }
    }

    /// Whether a load failure for this table aborts component assembly.
    ///
    /// `argv` is the one table older or partial components may omit; every
    /// other table is required. This asymmetry is a deliberate per-table
    /// policy and must not be generalized.
    pub fn required(&self) -> bool {
        !matches!(self, TableKind::Argv)
    }

    /// Full path of the table file within `db`.
    pub fn path_in(&self, db: &Path) -> PathBuf {
        db.join(format!("{}.json", self.stem()))
    }
}

/// Parse `<db>/<stem>.json` into a typed value.
///
/// # Errors
///
/// Returns [`TalusError::TableRead`] if the file is missing or unreadable and
/// [`TalusError::TableParse`] if it contains malformed JSON. Both carry the
/// underlying diagnostic message. There is no partial-result recovery.
pub fn load_table<T: DeserializeOwned>(db: &Path, kind: TableKind) -> Result<T> {
    let path = kind.path_in(db);

    let content = fs::read_to_string(&path).map_err(|e| TalusError::TableRead {
        path: path.clone(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| TalusError::TableParse {
        path,
        message: e.to_string(),
    })
}
