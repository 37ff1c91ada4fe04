//! Interpret command
//!
//! Usage: nui interpret <TEXT>... [--keywords <FILE>]

use clap::Args;
use nui_core::CommandInterpreter;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InterpretArgs {
    /// Utterance to classify; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// YAML keyword table (default: built-in Spanish table)
    #[arg(short, long)]
    pub keywords: Option<PathBuf>,
}

/// Execute interpret command
pub fn execute(args: InterpretArgs) -> Result<(), Box<dyn std::error::Error>> {
    let table = super::load_table(args.keywords.as_deref())?;
    let mut interpreter = CommandInterpreter::with_table(table);

    let input = args.text.join(" ");
    let outcome = interpreter.process_input(input.as_str())?;
    println!("{}", super::outcome_line(&outcome));

    Ok(())
}
