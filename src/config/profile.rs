//! Serde-facing decode configuration.

use serde::Deserialize;

use super::{DecodeOptions, FileDecodeOptions};

/// Loosely-typed decode settings as they appear in configuration files.
///
/// All fields are optional. Conversion into [`DecodeOptions`] or
/// [`FileDecodeOptions`] applies the same normalization as the typed
/// setters: a negative skip count becomes 0, a non-positive buffer size
/// becomes the default, an unknown or absent encoding label becomes UTF-8.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DecodeProfile {
    /// Number of leading lines to discard
    #[serde(default)]
    pub lines_to_skip: Option<i64>,
    /// WHATWG encoding label, e.g. "utf-8" or "windows-1252"
    #[serde(default)]
    pub encoding: Option<String>,
    /// Whether a byte order mark overrides the configured encoding
    #[serde(default)]
    pub detect_byte_order_marks: Option<bool>,
    /// Read-buffer size in bytes
    #[serde(default)]
    pub buffer_size: Option<i64>,
    /// Whether the stream outlives the session (stream sources only)
    #[serde(default)]
    pub leave_source_open: Option<bool>,
}

impl DecodeProfile {
    /// Parse a profile from JSON text.
    #[cfg(feature = "json")]
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Parse a profile from YAML text.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Resolve into stream-scoped options, normalizing loose values.
    pub fn into_options(self) -> DecodeOptions {
        let mut options = DecodeOptions::new();
        if let Some(skip) = self.lines_to_skip {
            options = options.with_lines_to_skip(skip.max(0) as u64);
        }
        if let Some(label) = self.encoding.as_deref() {
            options = options.with_encoding_label(label);
        }
        if let Some(detect) = self.detect_byte_order_marks {
            options = options.with_detect_byte_order_marks(detect);
        }
        if let Some(size) = self.buffer_size {
            options = options.with_buffer_size(size.max(0) as usize);
        }
        if let Some(leave_open) = self.leave_source_open {
            options = options.with_leave_source_open(leave_open);
        }
        options
    }

    /// Resolve into file-scoped options. `leave_source_open` is ignored: a
    /// freshly opened file is always owned by the session.
    pub fn into_file_options(self) -> FileDecodeOptions {
        let mut options = FileDecodeOptions::new();
        if let Some(skip) = self.lines_to_skip {
            options = options.with_lines_to_skip(skip.max(0) as u64);
        }
        if let Some(label) = self.encoding.as_deref() {
            options = options.with_encoding_label(label);
        }
        if let Some(detect) = self.detect_byte_order_marks {
            options = options.with_detect_byte_order_marks(detect);
        }
        if let Some(size) = self.buffer_size {
            options = options.with_buffer_size(size.max(0) as usize);
        }
        options
    }
}
