//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::DecodeError;

/// A diagnostic wrapper for decode faults compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct DecodeDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying fault
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<DecodeError> for DecodeDiagnostic {
    fn from(e: DecodeError) -> Self {
        let (message, help) = match &e {
            DecodeError::Open { source_id, .. } => (
                format!("could not open `{source_id}`"),
                "Check that the source exists and is readable",
            ),
            DecodeError::Read { line, .. } => (
                format!("stream failed after line {line}"),
                "The underlying stream reported an I/O error mid-session",
            ),
            DecodeError::Build { line, .. } => (
                format!("line {line} was rejected by the record builder"),
                "Check the line content against the record's expected shape",
            ),
        };
        DecodeDiagnostic {
            message,
            source: Some(Box::new(e)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<DecodeError> for miette::Report {
    fn from(e: DecodeError) -> Self {
        miette::Report::new(DecodeDiagnostic::from(e))
    }
}
