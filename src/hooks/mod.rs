//! Pre and post generation hook processing.
//!
//! Hooks are scripts named `pre_gen_project.*` or `post_gen_project.*` in the
//! template's `hooks/` directory. Each run receives the context as JSON on
//! stdin and may print a new context as JSON on stdout.

use std::path::Path;

use dialoguer::Confirm;
use log::{debug, info};

use crate::config::Config;
use crate::constants::{HOOKS, RUN_HOOK_IN_PLACE};
use crate::context::{is_truthy, Context};
use crate::error::{Error, Result};
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};

pub mod command;
pub mod executor;
pub mod locator;
pub mod render;

pub use command::CommandTable;
pub use locator::{find_hooks, find_hooks_in, Hooks};
pub use render::{render_hook, RenderedHook};

/// Runs hook scripts with a shared renderer and command table.
pub struct HookRunner {
    renderer: Box<dyn TemplateRenderer>,
    commands: CommandTable,
    run_in_place: bool,
}

impl HookRunner {
    /// Creates a runner rendering hooks with MiniJinja and the default command table.
    pub fn new() -> Self {
        Self {
            renderer: Box::new(MiniJinjaRenderer::new()),
            commands: CommandTable::new(),
            run_in_place: false,
        }
    }

    /// Creates a runner honouring the template's `interpreters` and
    /// `run_hooks_in_place` settings.
    pub fn from_config(config: &Config) -> Self {
        let mut runner = Self::new();
        for (extension, interpreter) in &config.interpreters {
            runner.commands.insert(extension.as_str(), interpreter.as_str());
        }
        runner.run_in_place = config.run_hooks_in_place;
        runner
    }

    /// Always run hooks without template rendering.
    pub fn with_run_in_place(mut self, run_in_place: bool) -> Self {
        self.run_in_place = run_in_place;
        self
    }

    pub fn with_renderer(mut self, renderer: Box<dyn TemplateRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn commands_mut(&mut self) -> &mut CommandTable {
        &mut self.commands
    }

    /// Runs hook `name` found under `hooks/` of the current working directory.
    ///
    /// # Returns
    /// * `Result<Context>` - The context returned by the hook, or `context`
    ///   unchanged when the hook does not exist
    pub fn run_hook(&self, name: &str, project_dir: &Path, context: Context) -> Result<Context> {
        let hooks = find_hooks()?;
        self.run_found_hook(&hooks, name, project_dir, context)
    }

    /// Runs hook `name` of the template at `template_dir`.
    pub fn run_hook_in(
        &self,
        template_dir: &Path,
        name: &str,
        project_dir: &Path,
        context: Context,
    ) -> Result<Context> {
        let hooks = find_hooks_in(template_dir)?;
        self.run_found_hook(&hooks, name, project_dir, context)
    }

    /// Runs every lifecycle hook of the template in order, threading the
    /// context from one hook into the next.
    pub fn run_hooks(
        &self,
        template_dir: &Path,
        project_dir: &Path,
        context: Context,
    ) -> Result<Context> {
        let hooks = find_hooks_in(template_dir)?;
        HOOKS.iter().try_fold(context, |context, name| {
            self.run_found_hook(&hooks, name, project_dir, context)
        })
    }

    /// Executes a script, rendered or in place, and returns the updated context.
    ///
    /// # Arguments
    /// * `script_path` - Hook source file
    /// * `cwd` - Directory to run the script from
    /// * `context` - Context passed to the script on stdin
    ///
    /// # Errors
    /// * `Error::FailedHook` if the script exits with a non-zero status
    pub fn run_script_with_context(
        &self,
        script_path: &Path,
        cwd: &Path,
        context: Context,
    ) -> Result<Context> {
        let in_place =
            self.run_in_place || context.get(RUN_HOOK_IN_PLACE).is_some_and(is_truthy);
        let script = render_hook(script_path, &context, in_place, self.renderer.as_ref())?;

        let command = self.commands.resolve(script.path())?;
        let input = serde_json::to_vec(&context)?;
        let stdout = executor::execute_script(command, cwd, input)?;

        match executor::extract_context(&stdout) {
            Some(updated) => {
                debug!("Hook {} returned a new context", script_path.display());
                Ok(updated)
            }
            None => {
                debug!("Hook {} left the context unchanged", script_path.display());
                Ok(context)
            }
        }
    }

    fn run_found_hook(
        &self,
        hooks: &Hooks,
        name: &str,
        project_dir: &Path,
        context: Context,
    ) -> Result<Context> {
        match hooks.get(name) {
            Some(script) => {
                info!("Running hook '{}'", name);
                self.run_script_with_context(script, project_dir, context)
            }
            None => {
                debug!("No hooks found");
                Ok(context)
            }
        }
    }
}

impl Default for HookRunner {
    fn default() -> Self {
        HookRunner::new()
    }
}

/// Runs hook `name` from the current working directory's `hooks/` with default settings.
pub fn run_hook(name: &str, project_dir: &Path, context: Context) -> Result<Context> {
    HookRunner::new().run_hook(name, project_dir, context)
}

/// Runs `script_path` in `cwd` with default settings.
pub fn run_script_with_context(
    script_path: &Path,
    cwd: &Path,
    context: Context,
) -> Result<Context> {
    HookRunner::new().run_script_with_context(script_path, cwd, context)
}

/// Asks the user whether the template's hooks may run.
///
/// # Arguments
/// * `hooks` - Hooks that would run
/// * `skip_hooks_check` - Answer yes without asking
pub fn confirm_hooks_execution(hooks: &Hooks, skip_hooks_check: bool) -> Result<bool> {
    if skip_hooks_check || hooks.is_empty() {
        return Ok(true);
    }

    let names: Vec<&str> = hooks.keys().map(String::as_str).collect();
    Confirm::new()
        .with_prompt(format!(
            "WARNING: This template contains hooks ({}) that will execute commands on your system. \
             Do you want to run these hooks?",
            names.join(", ")
        ))
        .default(false)
        .interact()
        .map_err(|e| Error::ConfigError(e.to_string()))
}
