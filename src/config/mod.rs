//! Configuration types for decoding sessions.
//!
//! This module provides:
//! - `DecodeOptions`: stream-scoped decode settings
//! - `FileDecodeOptions`: file-scoped subset (a file is always closed)
//! - `DecodeProfile`: serde-facing settings loaded from config files

mod options;
mod profile;

pub use options::{DEFAULT_BUFFER_SIZE, DecodeOptions, FileDecodeOptions};
pub use profile::DecodeProfile;
