//! Error types for decoding sessions.
//!
//! End-of-stream is never an error: it is the quiet termination of the
//! sequence. Every fault is yielded to the consumer at the element where it
//! occurred, never batched and never deferred, and the sequence ends there.
//! The engine performs no local recovery and no retries.

use std::io;

use thiserror::Error;

/// A fault raised while decoding a stream of lines into records.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The byte source could not be opened, or was unreadable when
    /// iteration began.
    #[error("failed to open source `{source_id}`: {error}")]
    Open {
        /// Identifier of the source ("-" for stdin, the path for files).
        source_id: String,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// The underlying stream failed mid-iteration.
    #[error("stream read failed after line {line}: {error}")]
    Read {
        /// Count of lines fully decoded before the failure.
        line: u64,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// Record construction rejected a line. The builder's own error is
    /// carried through untranslated.
    #[error("failed to build record from line {line}: {error}")]
    Build {
        /// 1-based line number within the stream, counting skipped lines.
        line: u64,
        /// The error produced by the record's `FromLine` implementation.
        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DecodeError {
    /// The line number the fault is attributed to, if it has one.
    pub fn line(&self) -> Option<u64> {
        match self {
            DecodeError::Open { .. } => None,
            DecodeError::Read { line, .. } | DecodeError::Build { line, .. } => Some(*line),
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
