//! aircas-launch CLI — fixed-configuration trainer launcher.
//!
//! With no arguments it launches the built-in experiment configuration
//! against the trainer in the current directory and exits with the
//! trainer's own exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use aircas_launch::experiment::ExperimentConfig;
use aircas_launch::launch::Launcher;
use aircas_launch::Error;

/// Launch the multi-aircraft collision-avoidance trainer
#[derive(Parser, Debug)]
#[command(name = "aircas-launch", version, about, long_about = None)]
struct Cli {
    /// JSON experiment config (defaults to the built-in configuration)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the trainer entry point and sibling libraries
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Print the trainer invocation and exit without launching
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(cli: &Cli) -> anyhow::Result<ExperimentConfig> {
    match &cli.config {
        Some(path) => ExperimentConfig::from_json_file(path)
            .with_context(|| format!("loading experiment config {}", path.display())),
        None => Ok(ExperimentConfig::default()),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let launcher = Launcher::new(&cli.base_dir);

    if cli.dry_run {
        return match launcher.command(&config) {
            Ok(cmd) => {
                println!("{}", cmd.get_program().to_string_lossy());
                for arg in cmd.get_args() {
                    println!("{}", arg.to_string_lossy());
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    match launcher.launch(&config) {
        Ok(_) => ExitCode::SUCCESS,
        // The trainer's exit code is the launcher's exit code
        Err(Error::ExternalProcess { code }) => {
            error!(code, "trainer failed");
            u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
