//! Turns a hook source file into the script that is actually executed.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::TempPath;

use crate::context::Context;
use crate::error::Result;
use crate::renderer::TemplateRenderer;

/// Script ready for execution.
///
/// A rendered script lives in a temporary file that is removed when the
/// value is dropped.
#[derive(Debug)]
pub enum RenderedHook {
    /// The hook source file, run without template substitution.
    InPlace(PathBuf),
    /// A rendered copy of the hook.
    Rendered(TempPath),
}

impl RenderedHook {
    pub fn path(&self) -> &Path {
        match self {
            RenderedHook::InPlace(path) => path.as_path(),
            RenderedHook::Rendered(path) => &**path,
        }
    }
}

/// Prepares `script_path` for execution.
///
/// # Arguments
/// * `script_path` - Hook source file
/// * `context` - Context whose keys are the template variables
/// * `in_place` - Skip rendering and run the source file itself
/// * `renderer` - Template engine
///
/// # Returns
/// * `Result<RenderedHook>` - The source path when `in_place`, otherwise a
///   temporary file with the same extension holding the rendered script
pub fn render_hook(
    script_path: &Path,
    context: &Context,
    in_place: bool,
    renderer: &dyn TemplateRenderer,
) -> Result<RenderedHook> {
    if in_place {
        debug!("Running {} in place", script_path.display());
        return Ok(RenderedHook::InPlace(script_path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(script_path)?;
    let rendered = renderer.render(&contents, &serde_json::Value::Object(context.clone()))?;

    let suffix = script_path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let mut file = tempfile::Builder::new().prefix("bakehook-").suffix(&suffix).tempfile()?;
    file.write_all(rendered.as_bytes())?;
    let path = file.into_temp_path();

    debug!("Rendered {} to {}", script_path.display(), path.display());
    Ok(RenderedHook::Rendered(path))
}
