//! Wedgen's main application entry point.
//! Reads the builder form, runs the generation pipeline and prints the
//! path of the finished archive.

use std::fs;
use std::io::Read;

use wedgen::{
    cli::{get_args, Args},
    config::Config,
    error::{default_error_handler, Result},
    generator::Generator,
    request::GenerationRequest,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn read_request(source: &str) -> Result<GenerationRequest> {
    let payload = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(source)?
    };
    GenerationRequest::from_json(&payload)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves configuration from flags or a config file
/// 2. Parses the builder form payload
/// 3. Runs the generation pipeline
/// 4. Prints the archive path and suggested download filename
fn run(args: Args) -> Result<()> {
    let config = match args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(args.template_dir, args.output_dir),
    };
    config.ensure_output_root()?;

    let request = read_request(&args.request)?;
    let generated = Generator::new(config).generate(&request)?;

    println!(
        "Generated {} (download as '{}').",
        generated.archive_path.display(),
        generated.download_filename
    );
    Ok(())
}
