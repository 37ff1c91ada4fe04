//! Keywords command
//!
//! Usage: nui keywords [--output <FILE>]

use clap::Args;
use nui_core::KeywordTable;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct KeywordsArgs {
    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute keywords command
pub fn execute(args: KeywordsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let yaml = nui_store::keyword_file::render_keyword_table(&KeywordTable::default())?;

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, yaml)?;
        println!("✓ Keyword table written to {}", output_path.display());
    } else {
        print!("{}", yaml);
    }

    Ok(())
}
