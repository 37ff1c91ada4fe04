use nui_core::{CommandListener, DispatchEvent, NuiError, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared call log: (listener label, event) in delivery order
pub type CallLog = Rc<RefCell<Vec<(String, DispatchEvent)>>>;

#[allow(dead_code)]
pub fn new_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Test double recording every event into a shared log
pub struct Recorder {
    label: String,
    log: CallLog,
}

impl Recorder {
    #[allow(dead_code)]
    pub fn new(label: &str, log: &CallLog) -> Self {
        Self {
            label: label.to_string(),
            log: log.clone(),
        }
    }
}

impl CommandListener for Recorder {
    fn on_command(&mut self, event: &DispatchEvent) -> Result<()> {
        self.log
            .borrow_mut()
            .push((self.label.clone(), event.clone()));
        Ok(())
    }
}

/// Test double that records, then fails
pub struct Failing {
    inner: Recorder,
}

impl Failing {
    #[allow(dead_code)]
    pub fn new(label: &str, log: &CallLog) -> Self {
        Self {
            inner: Recorder::new(label, log),
        }
    }
}

impl CommandListener for Failing {
    fn on_command(&mut self, event: &DispatchEvent) -> Result<()> {
        self.inner.on_command(event)?;
        Err(NuiError::NoCurrentFile)
    }
}

/// Labels in delivery order
#[allow(dead_code)]
pub fn labels(log: &CallLog) -> Vec<String> {
    log.borrow().iter().map(|(label, _)| label.clone()).collect()
}
