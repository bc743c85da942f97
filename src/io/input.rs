//! Byte source trait definition.

use std::fmt::Debug;
use std::io::Read;

/// Trait for openable byte streams.
///
/// Implementors provide sequential byte-read access from sources such as
/// files, stdin, or in-memory buffers. A decoding session built over a
/// source opens it only when iteration begins, so even an unopenable
/// source faults at the first pull rather than at decode-call time.
pub trait ByteSource: Send + Sync + Debug {
    /// Returns a unique identifier for this source.
    ///
    /// This is used for error attribution.
    /// Convention: "-" for stdin, the path for files.
    fn id(&self) -> &str;

    /// Open and return a fresh stream positioned at the beginning.
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;
}
