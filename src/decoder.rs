//! The decoding engine: lazy record sequences over byte streams.

use std::fs::File;
use std::io::Read;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;

use crate::config::{DecodeOptions, FileDecodeOptions};
use crate::error::DecodeError;
use crate::io::ByteSource;
use crate::record::FromLine;
use crate::text::LineReader;

/// Decoding engine holding stream-scoped options.
///
/// Each `decode*` call produces an independent [`Records`] session; the
/// engine itself is cheap to clone and never touches I/O.
#[derive(Debug, Clone, Default)]
pub struct LineDecoder {
    options: DecodeOptions,
}

impl LineDecoder {
    /// Create a decoder with the given options.
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Get the decoder's options.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a caller-supplied byte stream into records of `T`.
    ///
    /// Returns immediately without touching the stream; decoding starts on
    /// the first pull.
    pub fn decode<T, R>(&self, stream: R) -> Records<T>
    where
        T: FromLine,
        R: Read + Send + 'static,
    {
        Records::from_stream(Box::new(stream), self.options.clone())
    }

    /// Decode from a [`ByteSource`].
    ///
    /// The source is opened on the first pull, so even an unopenable
    /// source faults only once iteration begins.
    pub fn decode_source<T: FromLine>(&self, source: Arc<dyn ByteSource>) -> Records<T> {
        Records::from_source(source, self.options.clone())
    }
}

/// Decode a byte stream into records of `T` under the given options.
///
/// Convenience for [`LineDecoder::decode`].
pub fn decode_lines<T, R>(stream: R, options: DecodeOptions) -> Records<T>
where
    T: FromLine,
    R: Read + Send + 'static,
{
    Records::from_stream(Box::new(stream), options)
}

/// Decode a file into records of `T`.
///
/// The file is opened read-only and eagerly, at call time; decoding itself
/// stays lazy. The session owns the file and closes it at session end on
/// every path; file ownership is never left to the caller, which is why
/// [`FileDecodeOptions`] carries no `leave_source_open`.
pub fn decode_file<T: FromLine>(
    path: &Path,
    options: &FileDecodeOptions,
) -> Result<Records<T>, DecodeError> {
    let file = File::open(path).map_err(|error| DecodeError::Open {
        source_id: path.display().to_string(),
        error,
    })?;
    let options = DecodeOptions::from(options).with_leave_source_open(false);
    Ok(Records::from_stream(Box::new(file), options))
}

/// A lazy, forward-only, single-pass sequence of records decoded from a
/// byte stream, one record per retained line.
///
/// Nothing is opened, read, or validated until the first call to
/// [`next`](Iterator::next); each pull performs at most the I/O needed to
/// produce one more line and then suspends. The sequence is finite and not
/// restartable: a second pass requires a fresh session over a fresh
/// stream.
///
/// Records are yielded in exact source-line order after the configured
/// skip prefix. A fault (an I/O error or a rejected build) is yielded
/// once as `Err` and the sequence is terminal from then on; records
/// yielded before the fault remain valid.
///
/// The line reader is released at the terminal transition on every path:
/// exhaustion, fault, or dropping the iterator early. When the options say
/// `leave_source_open` the underlying stream is parked rather than dropped
/// and [`into_source`](Records::into_source) hands it back; otherwise the
/// stream is dropped together with the line reader.
pub struct Records<T: FromLine> {
    state: State,
    options: DecodeOptions,
    // Lines fully decoded so far, counting skipped lines.
    line: u64,
    _record: PhantomData<fn() -> T>,
}

enum State {
    /// Iteration has not started.
    Pending(PendingSource),
    /// Actively decoding lines.
    Reading { reader: LineReader, skipped: u64 },
    /// Terminal; the stream survived the session for the caller.
    Retained(Box<dyn Read + Send>),
    /// Terminal; every resource has been released.
    Finished,
}

enum PendingSource {
    Stream(Box<dyn Read + Send>),
    Source(Arc<dyn ByteSource>),
}

impl<T: FromLine> std::fmt::Debug for Records<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            State::Pending(_) => "Pending",
            State::Reading { .. } => "Reading",
            State::Retained(_) => "Retained",
            State::Finished => "Finished",
        };
        f.debug_struct("Records")
            .field("state", &state)
            .field("options", &self.options)
            .field("line", &self.line)
            .finish_non_exhaustive()
    }
}

impl<T: FromLine> Records<T> {
    pub(crate) fn from_stream(stream: Box<dyn Read + Send>, options: DecodeOptions) -> Self {
        Self {
            state: State::Pending(PendingSource::Stream(stream)),
            options,
            line: 0,
            _record: PhantomData,
        }
    }

    pub(crate) fn from_source(source: Arc<dyn ByteSource>, options: DecodeOptions) -> Self {
        Self {
            state: State::Pending(PendingSource::Source(source)),
            options,
            line: 0,
            _record: PhantomData,
        }
    }

    /// Number of lines fully decoded so far, including skipped lines.
    pub fn lines_read(&self) -> u64 {
        self.line
    }

    /// Hand back whatever stream the session still holds.
    ///
    /// After normal exhaustion this is `Some` exactly when the options
    /// said `leave_source_open`. Calling it mid-iteration abandons the
    /// session and recovers the stream regardless; bytes already buffered
    /// past the last yielded line are discarded.
    pub fn into_source(self) -> Option<Box<dyn Read + Send>> {
        match self.state {
            State::Pending(PendingSource::Stream(stream)) => Some(stream),
            State::Reading { reader, .. } => Some(reader.into_inner()),
            State::Retained(stream) => Some(stream),
            State::Pending(PendingSource::Source(_)) | State::Finished => None,
        }
    }

    // Terminal transition: release the line reader, park or drop the
    // stream per the ownership policy.
    fn release(&mut self, reader: LineReader) {
        self.state = if self.options.leave_source_open() {
            State::Retained(reader.into_inner())
        } else {
            State::Finished
        };
    }
}

impl<T: FromLine> Iterator for Records<T> {
    type Item = Result<T, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.state, State::Finished) {
                State::Pending(PendingSource::Stream(stream)) => {
                    self.state = State::Reading {
                        reader: LineReader::new(stream, &self.options),
                        skipped: 0,
                    };
                }
                State::Pending(PendingSource::Source(source)) => match source.open() {
                    Ok(stream) => {
                        self.state = State::Reading {
                            reader: LineReader::new(stream, &self.options),
                            skipped: 0,
                        };
                    }
                    Err(error) => {
                        return Some(Err(DecodeError::Open {
                            source_id: source.id().to_string(),
                            error,
                        }));
                    }
                },
                State::Reading {
                    mut reader,
                    mut skipped,
                } => loop {
                    match reader.read_line() {
                        Ok(Some(line)) => {
                            self.line += 1;
                            if skipped < self.options.lines_to_skip() {
                                skipped += 1;
                                continue;
                            }
                            match T::from_line(&line) {
                                Ok(record) => {
                                    self.state = State::Reading { reader, skipped };
                                    return Some(Ok(record));
                                }
                                Err(e) => {
                                    self.release(reader);
                                    return Some(Err(DecodeError::Build {
                                        line: self.line,
                                        error: Box::new(e),
                                    }));
                                }
                            }
                        }
                        Ok(None) => {
                            self.release(reader);
                            return None;
                        }
                        Err(error) => {
                            self.release(reader);
                            return Some(Err(DecodeError::Read {
                                line: self.line,
                                error,
                            }));
                        }
                    }
                },
                State::Retained(stream) => {
                    self.state = State::Retained(stream);
                    return None;
                }
                State::Finished => return None,
            }
        }
    }
}

impl<T: FromLine> std::iter::FusedIterator for Records<T> {}
