//! Keyword table files
//!
//! Parses YAML and validates schema version and rule shape. Example:
//!
//! ```yaml
//! schema_version: 0
//! rules:
//!   - command: save_document
//!     contains: [save, store]
//!   - command: dictate_text
//!     starts_with: [type]
//! ```

use crate::errors::{io_error, keyword_table_invalid, keyword_table_parse, Result};
use nui_core::keywords::{KeywordTable, KeywordTableFile};
use std::fs;
use std::path::Path;

/// Parse a keyword table file from a path
pub fn parse_keyword_table_file(path: &Path) -> Result<KeywordTable> {
    let content = fs::read_to_string(path).map_err(|e| io_error("keyword_table_read", path, e))?;
    parse_keyword_table_str(&content)
}

/// Parse a keyword table from a YAML string
pub fn parse_keyword_table_str(content: &str) -> Result<KeywordTable> {
    let file: KeywordTableFile = serde_yaml::from_str(content)
        .map_err(|e| keyword_table_parse(&format!("YAML parse error: {}", e)))?;

    let table = KeywordTable::try_from(file).map_err(keyword_table_invalid)?;
    tracing::debug!(
        component = module_path!(),
        op = "keyword_table_parse",
        rules = table.rules().len() as u64,
    );
    Ok(table)
}

/// Render a table as YAML in the file format
pub fn render_keyword_table(table: &KeywordTable) -> Result<String> {
    serde_yaml::to_string(&KeywordTableFile::from(table))
        .map_err(|e| keyword_table_parse(&format!("YAML render error: {}", e)))
}
