//! Component lifecycle hooks.
//!
//! A component may ship scripts in its `hooks` directory that run around a
//! lifecycle stage (staging a run, for instance). The palette core never
//! invokes hooks itself; it only resolves them for the run-launch layer.
//!
//! Resolution always succeeds: a component without a script for a stage
//! gets a [`NoopHook`], so callers can invoke every stage unconditionally.

use crate::error::{Result, TalusError};
use crate::palette::Palette;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Hook stages recognized for every component.
pub const HOOK_STAGES: [&str; 2] = ["pre-stage", "post-stage"];

/// An executable extension point around a component lifecycle stage.
pub trait Hook {
    /// Run the hook to completion.
    fn execute(&self) -> Result<()>;
}

/// Hook backed by a script in a component's `hooks` directory.
#[derive(Debug, Clone)]
pub struct ScriptHook {
    stage: String,
    path: PathBuf,
}

impl ScriptHook {
    /// Path of the backing script.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Hook for ScriptHook {
    fn execute(&self) -> Result<()> {
        tracing::debug!("running hook script {}", self.path.display());

        let status = Command::new("python3").arg(&self.path).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(TalusError::HookFailed {
                hook: self.stage.clone(),
                code: status.code(),
            })
        }
    }
}

/// Hook used when a component has no script for a stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl Hook for NoopHook {
    fn execute(&self) -> Result<()> {
        Ok(())
    }
}

/// Resolve the hook for one component stage.
///
/// Returns a [`ScriptHook`] when `<root>/<name>/hooks/<stage>.py` exists
/// and a [`NoopHook`] otherwise. An unknown component name fails with
/// [`TalusError::UnknownComponent`].
pub fn component_hook(palette: &Palette, name: &str, stage: &str) -> Result<Box<dyn Hook>> {
    let path = palette
        .component_dir(name)?
        .join("hooks")
        .join(format!("{stage}.py"));

    if path.is_file() {
        Ok(Box::new(ScriptHook {
            stage: stage.to_string(),
            path,
        }))
    } else {
        Ok(Box::new(NoopHook))
    }
}

/// Resolve every recognized hook stage for a component.
pub fn component_hooks(palette: &Palette, name: &str) -> Result<HashMap<String, Box<dyn Hook>>> {
    let mut hooks = HashMap::new();
    for stage in HOOK_STAGES {
        hooks.insert(stage.to_string(), component_hook(palette, name, stage)?);
    }
    Ok(hooks)
}
