//! Command-line interface implementation for wedgen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for wedgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "Wedgen: wedding app archive generator", long_about = None)]
pub struct Args {
    /// Path to the builder form JSON, or "-" to read it from stdin
    #[arg(value_name = "REQUEST")]
    pub request: String,

    /// Directory where working trees and finished archives are created
    #[arg(value_name = "OUTPUT_DIR", default_value = "generated_apps")]
    pub output_dir: PathBuf,

    /// Root of the app template tree to copy from
    #[arg(long, default_value = "templates/flutter_template")]
    pub template_dir: PathBuf,

    /// Load template and output roots from a JSON config file instead
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
