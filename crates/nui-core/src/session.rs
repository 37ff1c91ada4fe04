//! Editor session: the document as an interpreter listener
//!
//! Maps each command onto a document mutation. File operations go through a
//! [`DocumentStore`]; their success or failure is reported on the session's
//! own progress channel and never fails the dispatch.

use crate::command::{Command, DispatchEvent};
use crate::document::{Color, Document};
use crate::errors::{ExError, NuiError, Result};
use crate::listener::CommandListener;
use std::path::{Path, PathBuf};

/// Separator appended after dictated text
pub const DICTATION_SEPARATOR: &str = " ";

/// Extension enforced by "save as"
pub const TEXT_EXTENSION: &str = ".txt";

/// Path "save as" writes to: `path` itself when its file name already ends
/// in `.txt` (any case), otherwise `path` with `.txt` appended
pub fn save_as_path(path: &Path) -> PathBuf {
    let has_extension = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(TEXT_EXTENSION))
        .unwrap_or(false);
    if has_extension {
        path.to_path_buf()
    } else {
        let mut raw = path.as_os_str().to_os_string();
        raw.push(TEXT_EXTENSION);
        PathBuf::from(raw)
    }
}

/// Persistence used by the session for open and save
pub trait DocumentStore {
    /// Read the document at `path`
    ///
    /// # Errors
    ///
    /// Any I/O or decoding failure.
    fn load(&self, path: &Path) -> std::result::Result<String, ExError>;

    /// Write `text` to `path`
    ///
    /// # Errors
    ///
    /// Any I/O failure.
    fn save(&self, path: &Path, text: &str) -> std::result::Result<(), ExError>;
}

/// State of the last file operation, as a status bar would show it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Idle,
    Done(String),
    Error(String),
}

pub struct EditorSession {
    document: Document,
    store: Box<dyn DocumentStore>,
    progress: Progress,
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("document", &self.document)
            .field("progress", &self.progress)
            .finish()
    }
}

impl EditorSession {
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self {
            document: Document::new(),
            store: Box::new(store),
            progress: Progress::Idle,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Load `path` and make it the current file
    ///
    /// # Errors
    ///
    /// Store failures; the document is left untouched.
    pub fn open(&mut self, path: &Path) -> std::result::Result<(), ExError> {
        let text = self.store.load(path)?;
        self.document.set_text(text);
        self.document.set_current_file(Some(path.to_path_buf()));
        Ok(())
    }

    /// Save to the current file
    ///
    /// # Errors
    ///
    /// `NoCurrentFile` when no file is associated, or store failures.
    pub fn save(&mut self) -> std::result::Result<(), ExError> {
        let path = self.current_file_or_err()?;
        self.store.save(&path, self.document.text())
    }

    /// Save under `path` with the `.txt` extension enforced, and make the
    /// written path the current file
    ///
    /// Returns the path actually written.
    ///
    /// # Errors
    ///
    /// Store failures; the current file is only changed on success.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> std::result::Result<PathBuf, ExError> {
        let path = save_as_path(path.as_ref());
        self.store.save(&path, self.document.text())?;
        self.document.set_current_file(Some(path.clone()));
        Ok(path)
    }

    fn current_file_or_err(&self) -> std::result::Result<PathBuf, ExError> {
        self.document
            .current_file()
            .map(Path::to_path_buf)
            .ok_or_else(|| ExError::from(NuiError::NoCurrentFile))
    }

    fn reload(&mut self) -> std::result::Result<PathBuf, ExError> {
        let path = self.current_file_or_err()?;
        self.open(&path)?;
        Ok(path)
    }

    fn report(&mut self, action: &str, result: std::result::Result<PathBuf, ExError>) {
        self.progress = match result {
            Ok(path) => Progress::Done(format!("{} {}", action, path.display())),
            Err(err) => {
                tracing::warn!(
                    component = module_path!(),
                    op = action,
                    err.code = err.code(),
                    "file operation failed"
                );
                Progress::Error(err.to_string())
            }
        };
    }
}

impl CommandListener for EditorSession {
    fn on_command(&mut self, event: &DispatchEvent) -> Result<()> {
        match event.command {
            Command::NewDocument => {
                self.document.clear();
                self.progress = Progress::Idle;
            }
            Command::OpenDocument => {
                let result = self.reload();
                self.report("opened", result);
            }
            Command::SaveDocument => {
                let result = self.save().and_then(|()| self.current_file_or_err());
                self.report("saved", result);
            }
            Command::ApplyBold => self.document.toggle_bold(),
            Command::ApplyItalic => self.document.toggle_italic(),
            Command::ColorRed => self.document.set_color(Color::RED),
            Command::ColorBlue => self.document.set_color(Color::BLUE),
            Command::DictateText => {
                self.document.insert_at_caret(&event.payload);
                self.document.insert_at_caret(DICTATION_SEPARATOR);
            }
        }
        Ok(())
    }
}
