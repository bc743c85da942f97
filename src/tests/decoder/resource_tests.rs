//! Tests for the session resource discipline: deterministic release on
//! exhaustion, fault, and early abandonment.

use std::io::{self, Cursor, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::DecodeOptions;
use crate::decoder::decode_lines;
use crate::error::DecodeError;

// A stream that records the moment it is dropped.
struct TrackedStream {
    data: Cursor<Vec<u8>>,
    dropped: Arc<AtomicBool>,
}

impl TrackedStream {
    fn new(data: &[u8]) -> (Self, Arc<AtomicBool>) {
        let dropped = Arc::new(AtomicBool::new(false));
        (
            Self {
                data: Cursor::new(data.to_vec()),
                dropped: dropped.clone(),
            },
            dropped,
        )
    }
}

impl Read for TrackedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.data.read(buf)
    }
}

impl Drop for TrackedStream {
    fn drop(&mut self) {
        self.dropped.store(true, Ordering::SeqCst);
    }
}

#[test]
fn an_owned_stream_is_closed_at_exhaustion_not_at_iterator_drop() {
    let (stream, dropped) = TrackedStream::new(b"a\n");
    let options = DecodeOptions::new().with_leave_source_open(false);
    let mut records = decode_lines::<String, _>(stream, options);

    assert_eq!(records.next().unwrap().unwrap(), "a");
    assert!(!dropped.load(Ordering::SeqCst));

    assert!(records.next().is_none());
    // released at the terminal transition, while the iterator still exists
    assert!(dropped.load(Ordering::SeqCst));
}

#[test]
fn leave_source_open_hands_the_stream_back() {
    let (stream, dropped) = TrackedStream::new(b"a\nb\n");
    let mut records = decode_lines::<String, _>(stream, DecodeOptions::new());

    while records.next().is_some() {}
    assert!(!dropped.load(Ordering::SeqCst));

    let stream = records
        .into_source()
        .expect("the stream should survive the session");
    assert!(!dropped.load(Ordering::SeqCst));
    drop(stream);
    assert!(dropped.load(Ordering::SeqCst));
}

#[test]
fn closed_sessions_have_nothing_to_hand_back() {
    let (stream, _) = TrackedStream::new(b"a\n");
    let options = DecodeOptions::new().with_leave_source_open(false);
    let mut records = decode_lines::<String, _>(stream, options);

    while records.next().is_some() {}
    assert!(records.into_source().is_none());
}

#[test]
fn abandoning_iteration_early_still_releases_the_stream() {
    let (stream, dropped) = TrackedStream::new(b"a\nb\nc\n");
    let options = DecodeOptions::new().with_leave_source_open(false);
    let mut records = decode_lines::<String, _>(stream, options);

    assert_eq!(records.next().unwrap().unwrap(), "a");
    drop(records);
    assert!(dropped.load(Ordering::SeqCst));
}

#[test]
fn into_source_recovers_the_stream_mid_iteration() {
    let (stream, dropped) = TrackedStream::new(b"a\nb\nc\n");
    let mut records = decode_lines::<String, _>(stream, DecodeOptions::new());

    assert_eq!(records.next().unwrap().unwrap(), "a");
    let mut stream = records.into_source().expect("the stream is still held");
    assert!(!dropped.load(Ordering::SeqCst));

    // still readable; bytes buffered past the last yielded line are gone
    let mut tail = Vec::new();
    stream.read_to_end(&mut tail).unwrap();
}

#[test]
fn the_fault_path_releases_the_stream() {
    let (stream, dropped) = TrackedStream::new(b"nope\n");
    let options = DecodeOptions::new().with_leave_source_open(false);
    let mut records = decode_lines::<i32, _>(stream, options);

    match records.next() {
        Some(Err(DecodeError::Build { .. })) => {}
        other => panic!("expected a build fault, got {other:?}"),
    }
    // released at the fault, while the iterator still exists
    assert!(dropped.load(Ordering::SeqCst));
}

#[test]
fn the_fault_path_can_still_hand_the_stream_back() {
    let (stream, dropped) = TrackedStream::new(b"nope\n");
    let mut records = decode_lines::<i32, _>(stream, DecodeOptions::new());

    assert!(records.next().unwrap().is_err());
    assert!(!dropped.load(Ordering::SeqCst));
    assert!(records.into_source().is_some());
}
