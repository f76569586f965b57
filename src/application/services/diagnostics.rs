use std::cell::RefCell;

/// Receives human-readable warnings and failure messages from a sync run
pub trait DiagnosticSink {
    fn log(&self, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str),
{
    fn log(&self, message: &str) {
        self(message)
    }
}

/// Default sink: forwards every diagnostic to `tracing` at warn level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Keeps every diagnostic in memory, in emission order
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Number of recorded messages containing `needle`
    pub fn count_containing(&self, needle: &str) -> usize {
        self.messages
            .borrow()
            .iter()
            .filter(|m| m.contains(needle))
            .count()
    }
}

impl DiagnosticSink for RecordingSink {
    fn log(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
