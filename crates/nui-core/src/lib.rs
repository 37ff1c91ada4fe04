//! NUI Core - natural-language command layer for a text editor
//!
//! This crate maps loosely structured phrases (simulated voice input) onto a
//! closed set of editor commands and delivers them to listeners:
//! - Command vocabulary and dispatch events
//! - Priority-ordered keyword table, replaceable from configuration
//! - Interpreter with an ordered, synchronous listener fan-out
//! - Headless document model and the editor session that listens to it
//! - Error and logging facilities shared by the other NUI crates

pub mod command;
pub mod document;
pub mod errors;
pub mod interpreter;
pub mod keywords;
pub mod listener;
pub mod logging_facility;
pub mod session;

pub use nui_core_types::schema;

// Re-export commonly used types
pub use command::{Command, DispatchEvent};
pub use document::Document;
pub use errors::{ExError, ExErrorKind, NuiError, Result};
pub use interpreter::{CommandInterpreter, Outcome};
pub use keywords::{KeywordRule, KeywordTable, Matcher};
pub use listener::{listener_fn, CommandListener, ListenerId};
pub use session::{save_as_path, DocumentStore, EditorSession, Progress};
