use crate::command::Command;
use thiserror::Error;

/// Result type alias using NuiError
pub type Result<T> = std::result::Result<T, NuiError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output. Unrecognized input is not an
/// error and has no kind here; it is reported through logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration
    InvalidKeywordTable,
    UnsupportedSchemaVersion,

    // Dispatch
    ListenerFailed,

    // Document
    InvalidRange,
    NoCurrentFile,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidKeywordTable => "ERR_INVALID_KEYWORD_TABLE",
            ExErrorKind::UnsupportedSchemaVersion => "ERR_UNSUPPORTED_SCHEMA_VERSION",
            ExErrorKind::ListenerFailed => "ERR_LISTENER_FAILED",
            ExErrorKind::InvalidRange => "ERR_INVALID_RANGE",
            ExErrorKind::NoCurrentFile => "ERR_NO_CURRENT_FILE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context for debugging.
/// Crossing crate boundaries (store, CLI) always happens through this type.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    command: Option<Command>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            command: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add the command being dispatched when the error occurred
    pub fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the command context, if any
    pub fn command(&self) -> Option<Command> {
        self.command
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(command) = self.command {
            write!(f, " (command: {})", command)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for interpreter and document operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NuiError {
    /// A listener rejected a dispatch; delivery to later listeners was aborted
    #[error("Listener {listener_id} failed handling {command}: {reason}")]
    ListenerFailed {
        listener_id: u64,
        command: Command,
        reason: String,
    },

    /// Keyword table failed validation
    #[error("Invalid keyword table: {reason}")]
    InvalidKeywordTable { reason: String },

    /// Keyword table file declares a schema version this build cannot read
    #[error("Unsupported keyword table schema_version: {found}. Expected {expected}")]
    UnsupportedSchemaVersion { found: u32, expected: u32 },

    /// Character range falls outside the document
    #[error("Range {start}..{end} is outside a document of {len} characters")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// Save or reload requested with no file associated to the document
    #[error("Document has no associated file")]
    NoCurrentFile,

    /// Document persistence failure reported by a store
    #[error("Document I/O failed for {path}: {reason}")]
    DocumentIo { path: String, reason: String },
}

impl From<NuiError> for ExError {
    fn from(err: NuiError) -> Self {
        match err {
            NuiError::ListenerFailed {
                listener_id,
                command,
                reason,
            } => ExError::new(ExErrorKind::ListenerFailed)
                .with_op("dispatch")
                .with_command(command)
                .with_message(format!("listener {} failed: {}", listener_id, reason)),

            NuiError::InvalidKeywordTable { reason } => {
                ExError::new(ExErrorKind::InvalidKeywordTable)
                    .with_op("keyword_table")
                    .with_message(reason)
            }

            NuiError::UnsupportedSchemaVersion { found, expected } => {
                ExError::new(ExErrorKind::UnsupportedSchemaVersion)
                    .with_op("keyword_table")
                    .with_message(format!(
                        "schema_version {} is not supported, expected {}",
                        found, expected
                    ))
            }

            err @ NuiError::InvalidRange { .. } => ExError::new(ExErrorKind::InvalidRange)
                .with_op("select")
                .with_message(err.to_string()),

            NuiError::NoCurrentFile => ExError::new(ExErrorKind::NoCurrentFile)
                .with_message("Document has no associated file"),

            NuiError::DocumentIo { path, reason } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(reason),
        }
    }
}
