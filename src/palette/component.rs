//! Component description schema and assembly.
//!
//! A component is one reusable simulation model. Its on-disk description is
//! assembled from the tables in its `db` directory into a single
//! [`Component`] record.

use crate::error::Result;
use crate::palette::table::{load_table, TableKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

/// A user-settable parameter exposed by a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Substitution key, unique within a component's parameter list.
    pub key: String,

    /// Human-readable parameter name.
    pub name: String,

    /// Human-readable description.
    pub description: String,

    /// Typed value portion, including the default.
    pub value: ParameterValue,
}

/// The typed value portion of a parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterValue {
    /// Value type name (e.g. "int", "float", "string", "choice").
    #[serde(rename = "type")]
    pub kind: String,

    /// Default value, always present; its JSON type matches `kind`.
    pub default: Value,

    /// Allowed values for choice-typed parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

/// A fully assembled component description.
///
/// Serializes back to the merged shape the tables came from: the `info`
/// scalars at the top level with the five list tables alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Scalar metadata from `info.json` (id, name, version, ...). The field
    /// set is site-defined, so it stays an open JSON object.
    #[serde(flatten)]
    pub info: Map<String, Value>,

    /// Ordered parameter list from `parameters.json`.
    pub parameters: Vec<Parameter>,

    /// Exchange items the component consumes, from `uses.json`.
    pub uses: Vec<Value>,

    /// Exchange items the component produces, from `provides.json`.
    pub provides: Vec<Value>,

    /// Input file names from `files.json`.
    pub files: Vec<String>,

    /// Command-line tokens from `argv.json`; empty when the table is absent.
    #[serde(default)]
    pub argv: Vec<String>,
}

impl Component {
    /// Assemble a component description from its `db` directory.
    ///
    /// `info` is loaded first; failure there is always fatal. The list
    /// tables follow, each loaded under its own [`TableKind`] policy: a
    /// required table's failure aborts assembly, while the optional `argv`
    /// table falls back to an empty sequence.
    pub fn from_db(db: &Path) -> Result<Self> {
        let info: Map<String, Value> = load_table(db, TableKind::Info)?;

        let parameters = load_list(db, TableKind::Parameters)?;
        let uses = load_list(db, TableKind::Uses)?;
        let provides = load_list(db, TableKind::Provides)?;
        let files = load_list(db, TableKind::Files)?;
        let argv = load_list(db, TableKind::Argv)?;

        Ok(Self {
            info,
            parameters,
            uses,
            provides,
            files,
            argv,
        })
    }

    /// Mapping from each parameter's key to its default value.
    pub fn default_values(&self) -> HashMap<String, Value> {
        self.parameters
            .iter()
            .map(|p| (p.key.clone(), p.value.default.clone()))
            .collect()
    }
}

/// Load one list table, honoring the per-table failure policy.
fn load_list<T: DeserializeOwned>(db: &Path, kind: TableKind) -> Result<Vec<T>> {
    match load_table(db, kind) {
        Ok(items) => Ok(items),
        Err(err) if !kind.required() => {
            tracing::debug!(
                "{}: optional table unavailable, defaulting to empty: {err}",
                kind.stem()
            );
            Ok(Vec::new())
        }
        Err(err) => Err(err),
    }
}
