//! In-memory byte sources for tests and in-process pipelines.

use std::io::{self, Cursor, Read};
use std::sync::Arc;

use super::ByteSource;

/// In-memory byte source backed by a shared buffer.
///
/// Each `open` yields a fresh cursor over the same bytes, so a single
/// source can feed several independent decoding sessions.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: Arc<Vec<u8>>,
}

impl InMemorySource {
    /// Create a new in-memory source with the given data.
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data: Arc::new(data),
        }
    }

    /// Create a new in-memory source from a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }
}

impl ByteSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.data.as_ref().clone())))
    }
}
