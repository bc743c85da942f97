//! Tests for DecodeOptions and FileDecodeOptions.

use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::config::{DEFAULT_BUFFER_SIZE, DecodeOptions, FileDecodeOptions};

#[test]
fn defaults_match_documented_values() {
    let options = DecodeOptions::new();
    assert_eq!(options.lines_to_skip(), 0);
    assert_eq!(options.encoding(), UTF_8);
    assert!(options.detect_byte_order_marks());
    assert_eq!(options.buffer_size(), DEFAULT_BUFFER_SIZE);
    assert!(options.leave_source_open());
}

#[test]
fn zero_buffer_size_substitutes_default() {
    let options = DecodeOptions::new().with_buffer_size(0);
    assert_eq!(options.buffer_size(), DEFAULT_BUFFER_SIZE);

    let options = FileDecodeOptions::new().with_buffer_size(0);
    assert_eq!(options.buffer_size(), DEFAULT_BUFFER_SIZE);
}

#[test]
fn unknown_encoding_label_substitutes_utf8() {
    let options = DecodeOptions::new().with_encoding_label("no-such-charset");
    assert_eq!(options.encoding(), UTF_8);
}

#[test]
fn known_encoding_label_resolves() {
    let options = DecodeOptions::new().with_encoding_label("windows-1252");
    assert_eq!(options.encoding(), WINDOWS_1252);
}

#[test]
fn stream_options_derive_from_file_options() {
    let file = FileDecodeOptions::new()
        .with_lines_to_skip(3)
        .with_encoding(WINDOWS_1252)
        .with_detect_byte_order_marks(false)
        .with_buffer_size(4096);

    let stream = DecodeOptions::from(&file);
    assert_eq!(stream.lines_to_skip(), 3);
    assert_eq!(stream.encoding(), WINDOWS_1252);
    assert!(!stream.detect_byte_order_marks());
    assert_eq!(stream.buffer_size(), 4096);
    // the derived copy applies leave_source_open's own default
    assert!(stream.leave_source_open());
}
