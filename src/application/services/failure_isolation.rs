use super::diagnostics::DiagnosticSink;
use crate::common::result::AssetSyncResult;
use serde::Serialize;
use std::cell::{Cell, RefCell};

/// One isolated failure: what was being done and why it failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub context: String,
    pub message: String,
}

/// Runs units of work so that a failure is diagnosed instead of propagated.
///
/// Every failure goes to the [`DiagnosticSink`] and is kept in memory so the
/// caller can count them afterwards; the caller never sees an `Err`.
pub struct FailureIsolator<'a> {
    sink: &'a dyn DiagnosticSink,
    failures: RefCell<Vec<Failure>>,
    warnings: Cell<usize>,
}

impl<'a> FailureIsolator<'a> {
    pub fn new(sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            sink,
            failures: RefCell::new(Vec::new()),
            warnings: Cell::new(0),
        }
    }

    /// Run `work`; on failure log `"<context>: <error>"` and carry on.
    /// Returns whether the work succeeded.
    pub fn call_safely<F>(&self, context: &str, work: F) -> bool
    where
        F: FnOnce() -> AssetSyncResult<()>,
    {
        match work() {
            Ok(()) => true,
            Err(e) => {
                let message = e.to_string();
                tracing::debug!(context, error = ?e, "isolated failure");
                self.sink.log(&format!("{}: {}", context, message));
                self.failures.borrow_mut().push(Failure {
                    context: context.to_string(),
                    message,
                });
                false
            }
        }
    }

    /// Emit a non-fatal anomaly
    pub fn warn(&self, message: &str) {
        self.warnings.set(self.warnings.get() + 1);
        self.sink.log(message);
    }

    pub fn failure_count(&self) -> usize {
        self.failures.borrow().len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.get()
    }

    pub fn failures(&self) -> Vec<Failure> {
        self.failures.borrow().clone()
    }

    pub fn into_failures(self) -> Vec<Failure> {
        self.failures.into_inner()
    }
}
