//! Listener capability
//!
//! A listener receives every dispatch event produced by the interpreter.
//! The editor session is one implementation; tests attach recording doubles.

use crate::command::DispatchEvent;
use crate::errors::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives classified commands
pub trait CommandListener {
    /// Handle one dispatch event
    ///
    /// # Errors
    ///
    /// An error aborts delivery of this event to later listeners and is
    /// returned to the caller of `process_input`.
    fn on_command(&mut self, event: &DispatchEvent) -> Result<()>;
}

/// Shared handle, so the embedding application keeps access to its listener
impl<T: CommandListener + ?Sized> CommandListener for Rc<RefCell<T>> {
    fn on_command(&mut self, event: &DispatchEvent) -> Result<()> {
        self.borrow_mut().on_command(event)
    }
}

impl<T: CommandListener + ?Sized> CommandListener for Box<T> {
    fn on_command(&mut self, event: &DispatchEvent) -> Result<()> {
        (**self).on_command(event)
    }
}

/// Adapter turning a closure into a listener
pub struct FnListener<F>(pub F);

impl<F> CommandListener for FnListener<F>
where
    F: FnMut(&DispatchEvent) -> Result<()>,
{
    fn on_command(&mut self, event: &DispatchEvent) -> Result<()> {
        (self.0)(event)
    }
}

/// Wrap a closure as a listener
pub fn listener_fn<F>(f: F) -> FnListener<F>
where
    F: FnMut(&DispatchEvent) -> Result<()>,
{
    FnListener(f)
}

/// Handle identifying one registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

impl ListenerId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
