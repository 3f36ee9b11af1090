//! Discovery of lifecycle scripts in a template's `hooks` directory.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::constants::{HOOKS, HOOKS_DIR};
use crate::error::{Error, Result};

/// Hook name (file name without extension) -> absolute script path.
pub type Hooks = IndexMap<String, PathBuf>;

/// Finds hooks under `hooks/` of the current working directory.
///
/// Must be called with the template root as the working directory, see
/// [`work_in`](crate::utils::work_in).
pub fn find_hooks() -> Result<Hooks> {
    find_hooks_in(std::env::current_dir()?)
}

/// Finds hooks under `<template_dir>/hooks/`.
///
/// # Arguments
/// * `template_dir` - Template root
///
/// # Returns
/// * `Result<Hooks>` - Recognised hooks; empty when the directory is missing
///
/// # Notes
/// - Any extension is accepted: `pre_gen_project.py`, `pre_gen_project.sh`, `pre_gen_project`
/// - When several files share a hook name the first one in file name order wins
pub fn find_hooks_in<P: AsRef<Path>>(template_dir: P) -> Result<Hooks> {
    let hooks_dir = template_dir.as_ref().join(HOOKS_DIR);
    let mut hooks = Hooks::new();

    debug!("hooks_dir is {}", hooks_dir.display());
    if !hooks_dir.is_dir() {
        debug!("No hooks/ dir in template_dir");
        return Ok(hooks);
    }

    for entry in WalkDir::new(&hooks_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if !HOOKS.contains(&name) {
            continue;
        }

        if let Some(existing) = hooks.get(name) {
            warn!(
                "Ignoring {}, hook '{}' is already provided by {}",
                path.display(),
                name,
                existing.display()
            );
            continue;
        }

        debug!("Found hook '{}' at {}", name, path.display());
        hooks.insert(name.to_string(), path.canonicalize()?);
    }

    Ok(hooks)
}
