//! Palette discovery and read-only catalog queries.
//!
//! A [`Palette`] is the full catalog of components found under one root
//! directory. It is built once by [`Palette::load`] and never mutated; a
//! changed on-disk component requires loading a fresh value. Applications
//! that reload should build the new palette completely and then swap the
//! shared reference, so readers always see a fully-formed snapshot.

use crate::error::{Result, TalusError};
use crate::palette::component::{Component, Parameter};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// The catalog of components available under one palette root.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    root: PathBuf,
    components: HashMap<String, Component>,
}

impl Palette {
    /// Load every component under `root` into a palette.
    ///
    /// Each immediate subdirectory whose name does not start with `.` is
    /// treated as a component and assembled from `<root>/<name>/db`. Any
    /// assembly failure aborts the whole load after logging the offending
    /// component name; there is no partial catalog.
    pub fn load(root: &Path) -> Result<Self> {
        let mut components = HashMap::new();

        for name in component_names(root)? {
            let db = root.join(&name).join("db");
            match Component::from_db(&db) {
                Ok(component) => {
                    components.insert(name, component);
                }
                Err(err) => {
                    tracing::error!("{name}: unable to load");
                    return Err(err);
                }
            }
        }

        tracing::debug!(
            "loaded {} components from {}",
            components.len(),
            root.display()
        );

        Ok(Self {
            root: root.to_path_buf(),
            components,
        })
    }

    /// The palette root directory this catalog was loaded from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of components in the palette.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the palette holds no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// All component records, in no particular order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Component names, optionally sorted lexicographically.
    pub fn names(&self, sort: bool) -> Vec<String> {
        let mut names: Vec<String> = self.components.keys().cloned().collect();
        if sort {
            names.sort();
        }
        names
    }

    /// Fetch one component by name.
    ///
    /// # Errors
    ///
    /// Returns [`TalusError::UnknownComponent`] carrying the requested name
    /// when it is not in the catalog.
    pub fn get(&self, name: &str) -> Result<&Component> {
        self.components
            .get(name)
            .ok_or_else(|| TalusError::UnknownComponent {
                name: name.to_string(),
            })
    }

    /// The parameter list of one component, same failure semantics as [`get`].
    ///
    /// [`get`]: Palette::get
    pub fn parameters(&self, name: &str) -> Result<&[Parameter]> {
        Ok(&self.get(name)?.parameters)
    }

    /// Mapping from each of a component's parameter keys to its default value.
    pub fn defaults(&self, name: &str) -> Result<HashMap<String, Value>> {
        Ok(self.get(name)?.default_values())
    }

    /// Directory of one component, `<root>/<name>`.
    ///
    /// The name is validated against the catalog, so a stale reference
    /// surfaces as [`TalusError::UnknownComponent`] rather than a bad path.
    pub fn component_dir(&self, name: &str) -> Result<PathBuf> {
        self.get(name)?;
        Ok(self.root.join(name))
    }
}

/// Names of the component subdirectories under `root`, hidden ones excluded.
fn component_names(root: &Path) -> Result<HashSet<String>> {
    let mut names = HashSet::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        names.insert(name);
    }

    Ok(names)
}
