//! Decoding options.
//!
//! Every setter normalizes out-of-range input to the documented default, so
//! an instantiated options value is always valid. Failure detection belongs
//! to actual I/O, not to configuration.

use encoding_rs::{Encoding, UTF_8};

/// Default read-buffer size for the line reader, in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Options for decoding a caller-owned byte stream into lines.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    lines_to_skip: u64,
    encoding: &'static Encoding,
    detect_byte_order_marks: bool,
    buffer_size: usize,
    leave_source_open: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            lines_to_skip: 0,
            encoding: UTF_8,
            detect_byte_order_marks: true,
            buffer_size: DEFAULT_BUFFER_SIZE,
            leave_source_open: true,
        }
    }
}

impl DecodeOptions {
    /// Create options with all defaults: skip nothing, UTF-8, BOM detection
    /// on, 1024-byte buffer, stream left open for the caller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of leading decoded lines discarded before records are built.
    pub fn with_lines_to_skip(mut self, lines: u64) -> Self {
        self.lines_to_skip = lines;
        self
    }

    /// Character encoding used to decode bytes into text.
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Resolve the encoding from a WHATWG label ("utf-8", "utf-16le",
    /// "windows-1252", ...). Unknown labels substitute UTF-8.
    pub fn with_encoding_label(mut self, label: &str) -> Self {
        self.encoding = Encoding::for_label(label.as_bytes()).unwrap_or(UTF_8);
        self
    }

    /// Whether a byte order mark at stream start overrides the configured
    /// encoding.
    pub fn with_detect_byte_order_marks(mut self, detect: bool) -> Self {
        self.detect_byte_order_marks = detect;
        self
    }

    /// Read-buffer size for the line reader. Zero substitutes
    /// [`DEFAULT_BUFFER_SIZE`].
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = if size == 0 { DEFAULT_BUFFER_SIZE } else { size };
        self
    }

    /// Whether the byte stream outlives the decoding session.
    ///
    /// When true (the default) the session parks the stream at its end and
    /// hands it back through `Records::into_source`; when false the stream
    /// is dropped as soon as the session terminates.
    pub fn with_leave_source_open(mut self, leave_open: bool) -> Self {
        self.leave_source_open = leave_open;
        self
    }

    /// Effective number of leading lines to discard.
    pub fn lines_to_skip(&self) -> u64 {
        self.lines_to_skip
    }

    /// Effective character encoding.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Effective BOM policy.
    pub fn detect_byte_order_marks(&self) -> bool {
        self.detect_byte_order_marks
    }

    /// Effective read-buffer size.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Effective stream-ownership policy.
    pub fn leave_source_open(&self) -> bool {
        self.leave_source_open
    }
}

/// Options for decoding a file into lines.
///
/// A strict subset of [`DecodeOptions`]: there is no `leave_source_open`
/// because a freshly opened file is fully owned by the session and is
/// always closed when the session ends.
#[derive(Debug, Clone)]
pub struct FileDecodeOptions {
    lines_to_skip: u64,
    encoding: &'static Encoding,
    detect_byte_order_marks: bool,
    buffer_size: usize,
}

impl Default for FileDecodeOptions {
    fn default() -> Self {
        Self {
            lines_to_skip: 0,
            encoding: UTF_8,
            detect_byte_order_marks: true,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl FileDecodeOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of leading decoded lines discarded before records are built.
    pub fn with_lines_to_skip(mut self, lines: u64) -> Self {
        self.lines_to_skip = lines;
        self
    }

    /// Character encoding used to decode bytes into text.
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Resolve the encoding from a WHATWG label. Unknown labels substitute
    /// UTF-8.
    pub fn with_encoding_label(mut self, label: &str) -> Self {
        self.encoding = Encoding::for_label(label.as_bytes()).unwrap_or(UTF_8);
        self
    }

    /// Whether a byte order mark at file start overrides the configured
    /// encoding.
    pub fn with_detect_byte_order_marks(mut self, detect: bool) -> Self {
        self.detect_byte_order_marks = detect;
        self
    }

    /// Read-buffer size for the line reader. Zero substitutes
    /// [`DEFAULT_BUFFER_SIZE`].
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = if size == 0 { DEFAULT_BUFFER_SIZE } else { size };
        self
    }

    /// Effective number of leading lines to discard.
    pub fn lines_to_skip(&self) -> u64 {
        self.lines_to_skip
    }

    /// Effective character encoding.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Effective BOM policy.
    pub fn detect_byte_order_marks(&self) -> bool {
        self.detect_byte_order_marks
    }

    /// Effective read-buffer size.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}

impl From<&FileDecodeOptions> for DecodeOptions {
    /// Derive stream-scoped options from file-scoped ones: the four shared
    /// fields are copied and `leave_source_open` takes its own default. The
    /// result is an independent copy.
    fn from(file: &FileDecodeOptions) -> Self {
        DecodeOptions {
            lines_to_skip: file.lines_to_skip,
            encoding: file.encoding,
            detect_byte_order_marks: file.detect_byte_order_marks,
            buffer_size: file.buffer_size,
            leave_source_open: true,
        }
    }
}
