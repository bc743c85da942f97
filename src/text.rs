//! Line-oriented text decoding over a byte stream.

use std::io::{self, Read};

use encoding_rs::{CoderResult, Decoder};

use crate::config::DecodeOptions;

/// Decodes a byte stream into successive text lines under a configured
/// encoding, byte-order-mark policy, and read-buffer size.
///
/// The decoder is stateful, so multi-byte sequences split across buffer
/// boundaries decode correctly; malformed input is replaced with U+FFFD.
/// Recognized line terminators are `\n`, `\r\n`, and a lone `\r`; the final
/// line is yielded even without a terminator.
///
/// With `detect_byte_order_marks` on, a UTF-8 or UTF-16 BOM at stream start
/// overrides the configured encoding and is stripped. With it off, the
/// configured encoding always applies, and a BOM matching it is consumed
/// rather than surfaced as text.
pub struct LineReader {
    input: Box<dyn Read + Send>,
    decoder: Decoder,
    chunk: Vec<u8>,
    decoded: String,
    eof: bool,
}

impl LineReader {
    /// Wrap a byte stream using the encoding, BOM policy, and buffer size
    /// from `options`.
    pub fn new(input: Box<dyn Read + Send>, options: &DecodeOptions) -> Self {
        let decoder = if options.detect_byte_order_marks() {
            options.encoding().new_decoder()
        } else {
            options.encoding().new_decoder_with_bom_removal()
        };
        Self {
            input,
            decoder,
            chunk: vec![0; options.buffer_size()],
            decoded: String::new(),
            eof: false,
        }
    }

    /// Read the next line, without its terminator.
    ///
    /// Returns `Ok(None)` at end of stream.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(line) = self.split_line() {
                return Ok(Some(line));
            }
            if self.eof {
                if self.decoded.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(std::mem::take(&mut self.decoded)));
            }
            self.fill()?;
        }
    }

    /// Hand the underlying stream back. Bytes already buffered past the
    /// last yielded line are discarded.
    pub fn into_inner(self) -> Box<dyn Read + Send> {
        self.input
    }

    // Split one terminated line off the front of the decoded buffer. A
    // trailing `\r` with nothing after it is held until the next fill so a
    // following `\n` can be joined to it.
    fn split_line(&mut self) -> Option<String> {
        let bytes = self.decoded.as_bytes();
        let pos = bytes.iter().position(|b| *b == b'\n' || *b == b'\r')?;
        let after = match bytes[pos] {
            b'\r' => match bytes.get(pos + 1) {
                Some(b'\n') => pos + 2,
                Some(_) => pos + 1,
                None if self.eof => pos + 1,
                None => return None,
            },
            _ => pos + 1,
        };
        let rest = self.decoded.split_off(after);
        let mut line = std::mem::replace(&mut self.decoded, rest);
        line.truncate(pos);
        Some(line)
    }

    fn fill(&mut self) -> io::Result<()> {
        let n = self.input.read(&mut self.chunk)?;
        let (src, last) = if n == 0 {
            self.eof = true;
            (&[][..], true)
        } else {
            (&self.chunk[..n], false)
        };
        let mut consumed = 0;
        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length(src.len() - consumed)
                .unwrap_or(self.chunk.len().max(16));
            // at least one replacement character must always fit
            self.decoded.reserve(needed.max(4));
            let (result, read, _) =
                self.decoder
                    .decode_to_string(&src[consumed..], &mut self.decoded, last);
            consumed += read;
            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => continue,
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for LineReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineReader")
            .field("encoding", &self.decoder.encoding())
            .field("eof", &self.eof)
            .finish_non_exhaustive()
    }
}
