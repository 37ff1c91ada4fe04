//! NUI Store - file persistence for the editor session
//!
//! Provides:
//! - Plain-text document loading and saving (`FsDocumentStore`)
//! - Keyword table files in YAML (`keyword_file`)

pub mod document_fs;
pub mod errors;
pub mod keyword_file;

// Re-export key types
pub use document_fs::FsDocumentStore;
pub use errors::Result;
