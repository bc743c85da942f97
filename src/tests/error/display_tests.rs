//! Tests for DecodeError display and attribution.

use std::io;

use crate::error::DecodeError;

#[test]
fn open_faults_name_the_source() {
    let e = DecodeError::Open {
        source_id: "data.txt".into(),
        error: io::Error::new(io::ErrorKind::NotFound, "missing"),
    };
    assert!(e.to_string().contains("data.txt"));
    assert_eq!(e.line(), None);
}

#[test]
fn read_and_build_faults_carry_their_line_number() {
    let e = DecodeError::Read {
        line: 7,
        error: io::Error::other("boom"),
    };
    assert_eq!(e.line(), Some(7));
    assert!(e.to_string().contains('7'));

    let e = DecodeError::Build {
        line: 3,
        error: "bad field".into(),
    };
    assert_eq!(e.line(), Some(3));
    assert!(e.to_string().contains('3'));
}

#[test]
fn build_faults_expose_the_builder_error_as_source() {
    let e = DecodeError::Build {
        line: 1,
        error: "bad field".into(),
    };
    let source = std::error::Error::source(&e).expect("build faults have a source");
    assert_eq!(source.to_string(), "bad field");
}
