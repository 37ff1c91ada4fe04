//! Plain-text documents on the local filesystem

use crate::errors::{document_io_error, Result};
use nui_core::schema::{OP_DOCUMENT_LOAD, OP_DOCUMENT_SAVE};
use nui_core::{log_op_end, log_op_error, log_op_start, DocumentStore, ExError};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

/// Document store backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentStore;

impl FsDocumentStore {
    pub fn new() -> Self {
        Self
    }

    /// Read `path` line by line; every line, the last included, ends in `\n`
    pub fn read_lines(path: &Path) -> Result<String> {
        let file = fs::File::open(path).map_err(|e| document_io_error(OP_DOCUMENT_LOAD, path, e))?;
        let mut text = String::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| document_io_error(OP_DOCUMENT_LOAD, path, e))?;
            text.push_str(&line);
            text.push('\n');
        }
        Ok(text)
    }
}

impl DocumentStore for FsDocumentStore {
    fn load(&self, path: &Path) -> std::result::Result<String, ExError> {
        let started = Instant::now();
        log_op_start!(OP_DOCUMENT_LOAD, path = %path.display());

        match Self::read_lines(path) {
            Ok(text) => {
                log_op_end!(
                    OP_DOCUMENT_LOAD,
                    duration_ms = started.elapsed().as_millis() as u64,
                    bytes = text.len() as u64
                );
                Ok(text)
            }
            Err(err) => {
                log_op_error!(
                    OP_DOCUMENT_LOAD,
                    err.clone(),
                    duration_ms = started.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    fn save(&self, path: &Path, text: &str) -> std::result::Result<(), ExError> {
        let started = Instant::now();
        log_op_start!(OP_DOCUMENT_SAVE, path = %path.display());

        match fs::write(path, text) {
            Ok(()) => {
                log_op_end!(
                    OP_DOCUMENT_SAVE,
                    duration_ms = started.elapsed().as_millis() as u64,
                    bytes = text.len() as u64
                );
                Ok(())
            }
            Err(e) => {
                let err = document_io_error(OP_DOCUMENT_SAVE, path, e);
                log_op_error!(
                    OP_DOCUMENT_SAVE,
                    err.clone(),
                    duration_ms = started.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }
}
