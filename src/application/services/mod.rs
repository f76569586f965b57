pub mod diagnostics;
pub mod failure_isolation;

pub use diagnostics::{DiagnosticSink, RecordingSink, TracingSink};
pub use failure_isolation::{Failure, FailureIsolator};
