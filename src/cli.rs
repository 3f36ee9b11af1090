//! Command-line interface implementation for bakehook.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for bakehook.
#[derive(Parser, Debug)]
#[command(author, version, about = "bakehook: context serialization and hook execution for project templates", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serialize a JSON context into a `type|payload$` envelope
    Serialize {
        /// JSON file holding the context; stdin when omitted
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Serializer type to use
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        serializer_type: Option<String>,

        /// Template directory whose configuration registers extra serializers
        #[arg(long, value_name = "TEMPLATE_DIR")]
        template: Option<PathBuf>,
    },

    /// Extract the last envelope from text and print its context as JSON
    Deserialize {
        /// File holding the text; stdin when omitted
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Template directory whose configuration registers extra serializers
        #[arg(long, value_name = "TEMPLATE_DIR")]
        template: Option<PathBuf>,
    },

    /// List the hooks provided by a template
    Hooks {
        /// Path to the template directory
        #[arg(value_name = "TEMPLATE_DIR")]
        template_dir: PathBuf,
    },

    /// Run a single hook and print the resulting context
    RunHook {
        /// Hook name, e.g. pre_gen_project
        #[arg(value_name = "HOOK")]
        hook: String,

        /// Path to the template directory
        #[arg(value_name = "TEMPLATE_DIR")]
        template_dir: PathBuf,

        /// Directory the hook runs in
        #[arg(value_name = "PROJECT_DIR")]
        project_dir: PathBuf,

        /// JSON file holding the initial context
        #[arg(short, long, value_name = "FILE")]
        context: Option<PathBuf>,

        /// Run the hook without template rendering
        #[arg(long)]
        in_place: bool,

        /// Skip confirmation prompts when executing hooks.
        #[arg(long)]
        skip_hooks_check: bool,
    },

    /// Run the pre and post generation hooks in order, passing the context along
    Generate {
        /// Path to the template directory
        #[arg(value_name = "TEMPLATE_DIR")]
        template_dir: PathBuf,

        /// Directory the hooks run in
        #[arg(value_name = "PROJECT_DIR")]
        project_dir: PathBuf,

        /// JSON file holding the initial context
        #[arg(short, long, value_name = "FILE")]
        context: Option<PathBuf>,

        /// Skip confirmation prompts when executing hooks.
        #[arg(long)]
        skip_hooks_check: bool,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument
                || e.kind() == ErrorKind::MissingSubcommand
            {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
