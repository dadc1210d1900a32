mod cli;
mod config;
mod logging;

use crate::cli::id::{IdArgs, IdOutcome};
use crate::logging::init_logging;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "reqid",
    version,
    about = "reqid: content-addressable request identifiers"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the id of a request described on the command line
    Id(IdArgs),

    /// Validate a generator config file and list its stages
    Check {
        /// Path to the HCL config file
        #[arg(long)]
        config: PathBuf,

        /// Print errors without hints
        #[arg(long)]
        plain: bool,
    },

    /// Print the lowered stage list as JSON
    Dump {
        /// Path to the HCL config file; the default preset when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::Id(args) => cli::id::run(&args).map(|outcome| match outcome {
            IdOutcome::Included(id) => {
                println!("{id}");
                ExitCode::SUCCESS
            }
            IdOutcome::Excluded => {
                println!("excluded");
                ExitCode::from(2)
            }
        }),

        Command::Check { config, plain } => Ok(cli::check::check(&config, plain)),

        Command::Dump { config } => cli::dump::dump(config.as_deref()).map(|_| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
