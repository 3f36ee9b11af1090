//! Resolution of the process invocation for a hook script.

use std::path::Path;
use std::process::Command;

use indexmap::IndexMap;
use log::debug;

use crate::error::Result;
use crate::utils::make_executable;

/// Interpreters by script extension.
///
/// Scripts with a listed extension run as `<interpreter> <script>`, all
/// others are executed directly.
#[derive(Debug, Clone)]
pub struct CommandTable {
    interpreters: IndexMap<String, String>,
}

impl CommandTable {
    /// Creates a table knowing `py` (`python3`) and `sh` (`sh`).
    pub fn new() -> Self {
        let mut interpreters = IndexMap::new();
        interpreters.insert("py".to_string(), "python3".to_string());
        interpreters.insert("sh".to_string(), "sh".to_string());
        Self { interpreters }
    }

    /// Adds or replaces the interpreter for `extension`.
    ///
    /// `interpreter` may carry arguments, e.g. `npx tsx`.
    pub fn insert(&mut self, extension: impl Into<String>, interpreter: impl Into<String>) {
        let extension = extension.into();
        self.interpreters.insert(extension.trim_start_matches('.').to_string(), interpreter.into());
    }

    pub fn interpreter(&self, extension: &str) -> Option<&str> {
        self.interpreters.get(extension).map(String::as_str)
    }

    /// Builds the command running `script_path`.
    ///
    /// Scripts executed directly get their owner execute bit set first.
    pub fn resolve(&self, script_path: &Path) -> Result<Command> {
        let interpreter = script_path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.interpreter(ext))
            .map(str::split_whitespace);

        if let Some(mut parts) = interpreter {
            if let Some(program) = parts.next() {
                debug!("Running {} through {}", script_path.display(), program);
                let mut command = Command::new(program);
                command.args(parts).arg(script_path);
                return Ok(command);
            }
        }

        make_executable(script_path)?;
        debug!("Running {} directly", script_path.display());
        Ok(direct_command(script_path))
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        CommandTable::new()
    }
}

#[cfg(not(windows))]
fn direct_command(script_path: &Path) -> Command {
    Command::new(script_path)
}

#[cfg(windows)]
fn direct_command(script_path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(script_path);
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_resolve_with_interpreter() {
        let table = CommandTable::new();
        let command = table.resolve(Path::new("/tmp/hooks/pre_gen_project.py")).unwrap();
        assert_eq!(command.get_program(), OsStr::new("python3"));
        assert_eq!(
            command.get_args().collect::<Vec<_>>(),
            vec![OsStr::new("/tmp/hooks/pre_gen_project.py")]
        );
    }

    #[test]
    fn test_interpreter_arguments_are_split() {
        let mut table = CommandTable::new();
        table.insert(".ts", "npx tsx");
        let command = table.resolve(Path::new("hook.ts")).unwrap();
        assert_eq!(command.get_program(), OsStr::new("npx"));
        assert_eq!(
            command.get_args().collect::<Vec<_>>(),
            vec![OsStr::new("tsx"), OsStr::new("hook.ts")]
        );
    }

    #[test]
    fn test_override_default_interpreter() {
        let mut table = CommandTable::new();
        table.insert("py", "python3.12");
        assert_eq!(table.interpreter("py"), Some("python3.12"));
    }
}
