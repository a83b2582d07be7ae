use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{Parser, error::ErrorKind};
use mdhtml::{ConvertError, convert_file};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: mdhtml <INPUT> <OUTPUT>";

/// Environment variable holding the `tracing` filter directives.
const LOG_ENV: &str = "MDHTML_LOG";

#[derive(Parser)]
#[command(version, about = "Convert a Markdown file to HTML")]
struct Cli {
    /// Markdown file to read
    input: PathBuf,
    /// HTML file to write, overwritten if present
    output: PathBuf,
    /// Further arguments are accepted and ignored
    #[arg(hide = true, num_args = 0..)]
    extra: Vec<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if !cli.extra.is_empty() {
        debug!(extra = ?cli.extra, "ignoring extra arguments");
    }
    convert_file(&cli.input, &cli.output).with_context(|| {
        format!(
            "converting {} to {}",
            cli.input.display(),
            cli.output.display()
        )
    })
}

/// Entry point for the command-line converter.
///
/// Reads the Markdown file named by the first argument and writes HTML to the
/// second. Exits with status 1 on a usage error, when the input is missing, or
/// when file access fails.
///
/// # Examples
///
/// ```sh
/// mdhtml README.md README.html
/// ```
fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(missing @ ConvertError::MissingInput(_)) = err.downcast_ref::<ConvertError>() {
                eprintln!("{missing}");
            } else {
                eprintln!("Error: {err:?}");
            }
            ExitCode::FAILURE
        }
    }
}
