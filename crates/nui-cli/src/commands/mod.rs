pub mod interpret;
pub mod keywords;
pub mod session;

use nui_core::{KeywordTable, Outcome};
use std::path::Path;

/// Keyword table from `--keywords`, or the built-in Spanish table
pub fn load_table(path: Option<&Path>) -> Result<KeywordTable, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(nui_store::keyword_file::parse_keyword_table_file(path)?),
        None => Ok(KeywordTable::default()),
    }
}

/// One-line rendering of an outcome: `<command>\t<payload>`, `ignored` or `unrecognized`
pub fn outcome_line(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Ignored => "ignored".to_string(),
        Outcome::Unrecognized => "unrecognized".to_string(),
        Outcome::Dispatched(event) => format!("{}\t{}", event.command, event.payload),
    }
}
