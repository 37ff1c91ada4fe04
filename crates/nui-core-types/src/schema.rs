//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Interpreter fields
pub const FIELD_INPUT: &str = "input";
pub const FIELD_COMMAND: &str = "command";
pub const FIELD_LISTENERS: &str = "listeners";
pub const FIELD_LISTENER_ID: &str = "listener_id";

// Document fields
pub const FIELD_PATH: &str = "path";
pub const FIELD_BYTES: &str = "bytes";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Interpreter outcomes
pub const EVENT_DISPATCH: &str = "dispatch";
pub const EVENT_IGNORED: &str = "ignored";
pub const EVENT_UNRECOGNIZED: &str = "unrecognized";

// Canonical operation names
pub const OP_PROCESS_INPUT: &str = "process_input";
pub const OP_DOCUMENT_LOAD: &str = "document_load";
pub const OP_DOCUMENT_SAVE: &str = "document_save";
pub const OP_EDITOR_SESSION: &str = "editor_session";
