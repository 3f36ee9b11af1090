//! Small filesystem helpers shared by the hook runner and the CLI.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

/// Restores the previous working directory when dropped.
#[derive(Debug)]
pub struct WorkIn {
    previous: PathBuf,
}

impl Drop for WorkIn {
    fn drop(&mut self) {
        if let Err(e) = std::env::set_current_dir(&self.previous) {
            log::warn!("Failed to restore working directory {}: {}", self.previous.display(), e);
        }
    }
}

/// Changes the working directory to `dir` until the returned guard is dropped.
///
/// The working directory is process-wide state; do not hold guards from
/// several threads at once.
pub fn work_in<P: AsRef<Path>>(dir: P) -> Result<WorkIn> {
    let previous = std::env::current_dir()?;
    debug!("Entering {}", dir.as_ref().display());
    std::env::set_current_dir(dir.as_ref())?;
    Ok(WorkIn { previous })
}

/// Adds the owner execute bit to `script_path`.
#[cfg(unix)]
pub fn make_executable<P: AsRef<Path>>(script_path: P) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let script_path = script_path.as_ref();
    let mut permissions = std::fs::metadata(script_path)?.permissions();
    let mode = permissions.mode();
    if mode & 0o100 == 0 {
        permissions.set_mode(mode | 0o100);
        std::fs::set_permissions(script_path, permissions)?;
    }
    Ok(())
}

#[cfg(not(unix))]
pub fn make_executable<P: AsRef<Path>>(_script_path: P) -> Result<()> {
    Ok(())
}
