//! # linecast
//!
//! Lazy line-to-record decoding over configurable byte streams.
//!
//! ## Overview
//!
//! linecast provides:
//! - **Line-to-record decoding**: one strongly-typed record per line of
//!   text, built through the [`FromLine`] contract
//! - **Lazy, single-pass sequences**: no I/O until the first pull, at most
//!   one line of I/O per pull, strictly forward-only
//! - **Configurable text decoding**: character encoding, byte-order-mark
//!   detection, read-buffer size, and a skip-prefix of lines
//! - **Abstract byte sources**: decode files, stdin, or in-memory buffers
//!   through the [`ByteSource`] trait
//! - **Deterministic resource release**: the line reader is released on
//!   every exit path, and stream ownership is configurable
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use linecast::{DecodeOptions, decode_lines};
//!
//! let data = "last, first, email\nSmith, John, jsmith@gmail.com\nJones, Mary, mjones@hotmail.com\n";
//! let options = DecodeOptions::new().with_lines_to_skip(1);
//!
//! let names: Vec<String> = decode_lines::<String, _>(Cursor::new(data), options)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(names.len(), 2);
//! assert!(names[0].starts_with("Smith"));
//! ```
//!
//! ## Features
//!
//! - `json` - load a [`DecodeProfile`] from JSON
//! - `yaml` - load a [`DecodeProfile`] from YAML
//! - `miette` - pretty error reporting with miette
//!
//! ## Decoding semantics
//!
//! - **Laziness**: constructing a [`Records`] sequence performs no I/O and
//!   raises nothing, even over an unopenable source; faults surface at the
//!   first pull. Each pull resumes exactly where the previous one left
//!   off, reads at most one more line, and suspends.
//! - **Ordering**: records are yielded in exact source-line order after
//!   the configured skip prefix; there is no read-ahead and no
//!   speculative construction.
//! - **Skipping**: the first `lines_to_skip` decoded lines are discarded
//!   entirely, never reaching the build step. A stream with
//!   fewer lines than the skip count yields an empty sequence, not an
//!   error. Retained lines are passed to the build exactly as decoded:
//!   whitespace is preserved and empty lines are not filtered.
//! - **Faults**: I/O errors and rejected builds are yielded once as
//!   `Err`, attributed to the offending line, and terminate the sequence;
//!   records yielded before the fault stay valid. End-of-stream is not an
//!   error.
//! - **Resources**: the line reader is released deterministically on
//!   exhaustion, fault, or early drop. With `leave_source_open` (the
//!   default for stream sessions) the byte stream survives the session
//!   and [`Records::into_source`] hands it back; file sessions always own
//!   and close their file.
//! - **Single ownership**: one session per stream at a time. Sessions
//!   over different streams are fully independent.

// Core modules
pub mod config;
pub mod decoder;
pub mod error;
pub mod io;
pub mod record;
pub mod text;

// Re-exports for convenience
pub use config::{DEFAULT_BUFFER_SIZE, DecodeOptions, DecodeProfile, FileDecodeOptions};
pub use decoder::{LineDecoder, Records, decode_file, decode_lines};
pub use error::DecodeError;
pub use io::{ByteSource, FileSource, InMemorySource, StdinSource};
pub use record::FromLine;
pub use text::LineReader;

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::DecodeDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
