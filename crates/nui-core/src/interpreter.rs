//! Command interpreter
//!
//! Turns free text into at most one [`DispatchEvent`] through a
//! [`KeywordTable`] and delivers it to every registered listener.
//!
//! ## Dispatch contract
//!
//! - **Synchronous**: listeners run on the calling thread, in registration
//!   order, before `process_input` returns. No timeout, no cancellation.
//! - **No deduplication**: registering the same listener twice means it is
//!   notified twice per dispatch.
//! - **Fail-fast**: the first listener error stops delivery to the remaining
//!   listeners and is returned to the caller.
//! - **Never fails on input**: empty or unrecognized text is a no-op;
//!   unrecognized text is reported on the log channel only.
//!
//! The interpreter is not thread-safe. An application feeding it from
//! several threads must serialize access itself.
//!
//! ## Example
//!
//! ```
//! use nui_core::{Command, CommandInterpreter, Outcome};
//!
//! let mut interpreter = CommandInterpreter::new();
//! let outcome = interpreter.process_input("Dictar Hola Mundo").unwrap();
//!
//! match outcome {
//!     Outcome::Dispatched(event) => {
//!         assert_eq!(event.command, Command::DictateText);
//!         assert_eq!(event.payload, "Hola Mundo");
//!     }
//!     other => panic!("unexpected outcome {:?}", other),
//! }
//! ```

use crate::command::DispatchEvent;
use crate::errors::{NuiError, Result};
use crate::keywords::{normalize, KeywordTable};
use crate::listener::{CommandListener, ListenerId};
use crate::schema::{EVENT_DISPATCH, EVENT_IGNORED, EVENT_UNRECOGNIZED, OP_PROCESS_INPUT};
use nui_core_types::RequestId;

/// What a call to `process_input` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was absent, empty, or whitespace only
    Ignored,
    /// No rule matched; nothing was dispatched
    Unrecognized,
    /// The event was delivered to every listener
    Dispatched(DispatchEvent),
}

impl Outcome {
    pub fn event(&self) -> Option<&DispatchEvent> {
        match self {
            Outcome::Dispatched(event) => Some(event),
            _ => None,
        }
    }
}

/// Classifies free text and fans the result out to listeners
pub struct CommandInterpreter {
    table: KeywordTable,
    listeners: Vec<(ListenerId, Box<dyn CommandListener>)>,
    next_id: u64,
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CommandInterpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandInterpreter")
            .field("rules", &self.table.rules().len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl CommandInterpreter {
    /// Interpreter using the built-in keyword table
    pub fn new() -> Self {
        Self::with_table(KeywordTable::default())
    }

    /// Interpreter using a custom keyword table
    pub fn with_table(table: KeywordTable) -> Self {
        Self {
            table,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Append a listener to the end of the delivery order
    pub fn add_listener<L>(&mut self, listener: L) -> ListenerId
    where
        L: CommandListener + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove one registration; returns false when the id is unknown
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        match self.listeners.iter().position(|(lid, _)| *lid == id) {
            Some(index) => {
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    /// Classify without dispatching
    pub fn classify<'a>(&self, input: impl Into<Option<&'a str>>) -> Option<DispatchEvent> {
        self.table.classify(input)
    }

    /// Classify `input` and deliver the result to every listener
    ///
    /// # Errors
    ///
    /// Only listener failures surface here, as `NuiError::ListenerFailed`.
    /// Listeners registered after the failing one do not see the event.
    pub fn process_input<'a>(&mut self, input: impl Into<Option<&'a str>>) -> Result<Outcome> {
        let request_id = RequestId::new();
        let span = tracing::debug_span!("process_input", request_id = %request_id);
        let _guard = span.enter();

        let input = input.into();
        let trimmed = input.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            tracing::debug!(
                component = module_path!(),
                op = OP_PROCESS_INPUT,
                event = EVENT_IGNORED,
            );
            return Ok(Outcome::Ignored);
        }

        let Some(event) = self.table.classify(input) else {
            tracing::warn!(
                component = module_path!(),
                op = OP_PROCESS_INPUT,
                event = EVENT_UNRECOGNIZED,
                input = %normalize(trimmed),
                "command not understood"
            );
            return Ok(Outcome::Unrecognized);
        };

        tracing::info!(
            component = module_path!(),
            op = OP_PROCESS_INPUT,
            event = EVENT_DISPATCH,
            command = event.command.as_str(),
            listeners = self.listeners.len(),
        );

        for (id, listener) in self.listeners.iter_mut() {
            listener
                .on_command(&event)
                .map_err(|err| NuiError::ListenerFailed {
                    listener_id: id.as_u64(),
                    command: event.command,
                    reason: err.to_string(),
                })?;
        }

        Ok(Outcome::Dispatched(event))
    }
}
