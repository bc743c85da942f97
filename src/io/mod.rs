//! Byte-stream sources feeding decoding sessions.
//!
//! This module provides:
//! - `ByteSource`: trait for openable byte streams
//! - Standard implementations for files and stdin
//! - An in-memory implementation for tests and in-process pipelines

mod input;
mod memory;
mod std_io;

pub use input::ByteSource;
pub use memory::InMemorySource;
pub use std_io::{FileSource, StdinSource};
