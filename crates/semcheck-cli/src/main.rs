//! semcheck - check versions against constraint expressions.

mod check;
mod compare;
mod config;
mod explain;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "semcheck", version, about = "Check versions against constraint expressions")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a semcheck.toml with named constraints
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one or more versions against a constraint expression
    Check(check::CheckArgs),
    /// Compare two versions
    Compare(compare::CompareArgs),
    /// Show how a constraint expression is rewritten and parsed
    Explain(explain::ExplainArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    let config = config::SemcheckConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Check(args) => check::execute(args, &config),
        Commands::Compare(args) => compare::execute(args),
        Commands::Explain(args) => explain::execute(args, &config),
    }
}

/// Map a command result to a process status; anything out of range is an error.
fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(2)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(exit_status(code)),
        Err(err) => {
            eprintln!("{} {:#}", console::style("error:").red().bold(), err);
            ExitCode::from(2)
        }
    }
}
