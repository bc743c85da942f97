//! Tests for DecodeProfile normalization and parsing.

use encoding_rs::UTF_8;

use crate::config::{DEFAULT_BUFFER_SIZE, DecodeProfile};

#[test]
fn negative_skip_normalizes_to_zero() {
    let profile = DecodeProfile {
        lines_to_skip: Some(-5),
        ..Default::default()
    };
    assert_eq!(profile.into_options().lines_to_skip(), 0);
}

#[test]
fn non_positive_buffer_normalizes_to_default() {
    let profile = DecodeProfile {
        buffer_size: Some(-1),
        ..Default::default()
    };
    assert_eq!(profile.into_options().buffer_size(), DEFAULT_BUFFER_SIZE);

    let profile = DecodeProfile {
        buffer_size: Some(0),
        ..Default::default()
    };
    assert_eq!(profile.into_options().buffer_size(), DEFAULT_BUFFER_SIZE);
}

#[test]
fn absent_encoding_normalizes_to_utf8() {
    let options = DecodeProfile::default().into_options();
    assert_eq!(options.encoding(), UTF_8);
}

#[test]
fn unknown_encoding_label_normalizes_to_utf8() {
    let profile = DecodeProfile {
        encoding: Some("klingon".into()),
        ..Default::default()
    };
    assert_eq!(profile.into_options().encoding(), UTF_8);
}

#[test]
fn file_options_ignore_leave_source_open() {
    let profile = DecodeProfile {
        lines_to_skip: Some(2),
        leave_source_open: Some(false),
        ..Default::default()
    };
    let options = profile.into_file_options();
    assert_eq!(options.lines_to_skip(), 2);
}

#[cfg(feature = "json")]
#[test]
fn profile_parses_from_json() {
    let profile = DecodeProfile::from_json(
        r#"{"lines_to_skip": 1, "encoding": "utf-16le", "buffer_size": 512}"#,
    )
    .unwrap();

    let options = profile.into_options();
    assert_eq!(options.lines_to_skip(), 1);
    assert_eq!(options.encoding(), encoding_rs::UTF_16LE);
    assert_eq!(options.buffer_size(), 512);
}

#[cfg(feature = "yaml")]
#[test]
fn profile_parses_from_yaml() {
    let profile =
        DecodeProfile::from_yaml("lines_to_skip: 2\ndetect_byte_order_marks: false\n").unwrap();

    let options = profile.into_options();
    assert_eq!(options.lines_to_skip(), 2);
    assert!(!options.detect_byte_order_marks());
}
