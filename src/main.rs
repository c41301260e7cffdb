//! ICD-10 Viewer - Main Entry Point
//!
//! Command-line front end. The viewer itself lives in the `icd10_viewer` library.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use icd10_viewer::ViewerConfig;
use icd10_viewer::json_view::{DEFAULT_INDENT, write_json_view};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// ICD-10 annotation viewer - browse MDACE clinical notes and their codes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the interactive viewer for an ICD-10 annotation JSON file
    View {
        /// Path to the ICD-10 annotation JSON file
        file: PathBuf,

        /// Viewer configuration file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Pretty-print a JSON file
    ViewJson {
        /// Path to the JSON file to display
        file: PathBuf,

        /// Indentation level for JSON
        #[arg(long, default_value_t = DEFAULT_INDENT)]
        indent: usize,
    },
}

fn init_logging(log_file: Option<&Path>, fallback_level: &str) -> Result<()> {
    let level = if log_file.is_some() { "info" } else { fallback_level };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    match args.command {
        Command::View { file, config } => {
            // stderr output would land on the alternate screen
            init_logging(args.log_file.as_deref(), "off")?;
            let config = ViewerConfig::load(config.as_deref())?;
            icd10_viewer::view(&file, config)
        }
        Command::ViewJson { file, indent } => {
            init_logging(args.log_file.as_deref(), "warn")?;
            let stdout = io::stdout();
            write_json_view(&file, indent, &mut stdout.lock())
        }
    }
}
