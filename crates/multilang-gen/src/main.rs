//! multilang-gen command-line interface.
//!
//! Generates one static HTML page per language from a single template and a
//! directory of per-language JSON data.

mod cli_config;
mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "multilang-gen", version, about, styles = output::clap_styles())]
struct Cli {
    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Export the built-in language index to a directory
    ///
    /// The exported index.json is a starting point for a custom language list.
    ///
    /// Examples:
    ///   multilang-gen export ./langs
    ///   multilang-gen export .
    Export {
        /// Directory to write index.json into
        #[arg(default_value = ".")]
        target_dir: PathBuf,
    },

    /// Generate one page per language from a template
    ///
    /// Examples:
    ///   multilang-gen gen template.html ./langs
    ///   multilang-gen gen template.html ./langs --output "{lang}.html"
    Gen {
        /// Template file (Tera syntax, HTML auto-escaped)
        template: PathBuf,

        /// Directory containing index.json and the language data files
        language_dir: PathBuf,

        /// Output file name pattern; {lang} is replaced by the language code [default: {lang}.html]
        #[arg(short, long)]
        output: Option<String>,

        /// Directory to write generated pages into
        #[arg(short = 'd', long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cli_config = cli_config::load_cli_config();

    let result = match cli.command {
        Commands::Export { target_dir } => commands::handle_export_command(&target_dir),
        Commands::Gen {
            template,
            language_dir,
            output,
            out_dir,
        } => commands::handle_gen_command(template, language_dir, output, out_dir, &cli_config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "multilang_gen=debug"
    } else {
        "multilang_gen=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
