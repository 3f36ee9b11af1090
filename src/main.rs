//! bakehook's main application entry point.
//! Handles command-line argument parsing and dispatches to the serialization
//! facade and the hook runner.

use std::io::Read;
use std::path::{Path, PathBuf};

use bakehook::{
    cli::{get_args, Args, Commands},
    config::load_config,
    context::Context,
    error::{default_error_handler, Result},
    hooks::{confirm_hooks_execution, find_hooks_in, HookRunner},
    logger::init_logger,
    serialization::SerializationFacade,
    utils::work_in,
};
use log::{debug, info};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Reads a file, or stdin when no path is given.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Loads the initial hook context; empty when no file is given.
fn read_context(path: Option<&Path>) -> Result<Context> {
    match path {
        Some(path) => Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?),
        None => Ok(Context::new()),
    }
}

fn load_facade(template: Option<&Path>) -> Result<SerializationFacade> {
    match template {
        Some(template_dir) => load_config(template_dir)?.build_facade(),
        None => Ok(SerializationFacade::new()),
    }
}

/// Creates the project directory if needed and returns its absolute path.
///
/// Hooks run after the working directory moved to the template root, so a
/// relative project path would resolve against the wrong directory.
fn prepare_project_dir(project_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(project_dir)?;
    Ok(project_dir.canonicalize()?)
}

fn print_context(context: &Context) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(context)?);
    Ok(())
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Returns
/// * `Result<()>` - Success or error status of the command
fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Serialize { input, serializer_type, template } => {
            let facade = load_facade(template.as_deref())?;
            let context: Context = serde_json::from_str(&read_input(input.as_deref())?)?;
            println!("{}", facade.serialize(&context, serializer_type.as_deref())?);
        }
        Commands::Deserialize { input, template } => {
            let mut facade = load_facade(template.as_deref())?;
            let context = facade.deserialize(&read_input(input.as_deref())?)?;
            debug!("Deserialized a '{}' envelope", facade.get_type());
            print_context(&context)?;
        }
        Commands::Hooks { template_dir } => {
            for (name, path) in find_hooks_in(&template_dir)? {
                println!("{}: '{}'", name, path.display());
            }
        }
        Commands::RunHook {
            hook,
            template_dir,
            project_dir,
            context,
            in_place,
            skip_hooks_check,
        } => {
            let config = load_config(&template_dir)?;
            let context = read_context(context.as_deref())?;

            if !confirm_hooks_execution(&find_hooks_in(&template_dir)?, skip_hooks_check)? {
                info!("Hooks were not executed.");
                return print_context(&context);
            }

            let project_dir = prepare_project_dir(&project_dir)?;
            let runner = HookRunner::from_config(&config)
                .with_run_in_place(config.run_hooks_in_place || in_place);

            let context = {
                let _template_root = work_in(&template_dir)?;
                runner.run_hook(&hook, &project_dir, context)?
            };
            print_context(&context)?;
        }
        Commands::Generate { template_dir, project_dir, context, skip_hooks_check } => {
            let config = load_config(&template_dir)?;
            let context = read_context(context.as_deref())?;

            if !confirm_hooks_execution(&find_hooks_in(&template_dir)?, skip_hooks_check)? {
                info!("Hooks were not executed.");
                return print_context(&context);
            }

            let project_dir = prepare_project_dir(&project_dir)?;
            let context =
                HookRunner::from_config(&config).run_hooks(&template_dir, &project_dir, context)?;
            info!("Hooks completed successfully in {}.", project_dir.display());
            print_context(&context)?;
        }
    }
    Ok(())
}
