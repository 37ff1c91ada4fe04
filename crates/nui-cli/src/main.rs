//! NUI CLI
//!
//! Command-line front end for the natural-language command interpreter

use clap::{Parser, Subcommand};
use nui_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "nui")]
#[command(about = "NUI - Voice-style commands for a text editor", long_about = None)]
struct Cli {
    /// Emit JSON structured logs on stderr
    #[arg(long, global = true)]
    log_json: bool,

    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify one utterance and print the resulting command
    Interpret(commands::interpret::InterpretArgs),
    /// Drive a headless editing session from stdin
    Session(commands::session::SessionArgs),
    /// Print the default keyword table as YAML
    Keywords(commands::keywords::KeywordsArgs),
}

fn profile(cli: &Cli) -> Profile {
    if cli.log_json {
        Profile::Production
    } else if cli.verbose {
        Profile::Development
    } else {
        Profile::Quiet
    }
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(profile(&cli));

    let result = match cli.command {
        Commands::Interpret(args) => commands::interpret::execute(args),
        Commands::Session(args) => commands::session::execute(args),
        Commands::Keywords(args) => commands::keywords::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
