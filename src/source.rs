//! Character sources feeding the scanner
//!
//! A source yields one `char` per call and `None` once the input is
//! exhausted. Decoding happens here so the scanner only ever sees
//! characters.

use crate::error::{Result, TextStatsError};
use std::io::{self, BufRead, BufReader, Read};

/// Pull-based supplier of single characters
pub trait CharSource {
    /// Read the next character, or `Ok(None)` at end of input
    fn read_char(&mut self) -> Result<Option<char>>;
}

impl CharSource for std::str::Chars<'_> {
    fn read_char(&mut self) -> Result<Option<char>> {
        Ok(self.next())
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn read_char(&mut self) -> Result<Option<char>> {
        (**self).read_char()
    }
}

/// Decodes UTF-8 from a byte reader one character at a time
///
/// Malformed or truncated sequences are reported as
/// [`TextStatsError::InvalidUtf8`] rather than replaced.
pub struct Utf8Source<R> {
    reader: BufReader<R>,
    offset: u64,
}

impl<R: Read> Utf8Source<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            offset: 0,
        }
    }

    /// Number of bytes consumed so far
    pub fn bytes_read(&self) -> u64 {
        self.offset
    }

    /// Unwrap the underlying reader. Buffered but unread bytes are lost.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            let Some(&byte) = buf.first() else {
                return Ok(None);
            };
            self.reader.consume(1);
            self.offset += 1;
            return Ok(Some(byte));
        }
    }
}

impl<R: Read> CharSource for Utf8Source<R> {
    fn read_char(&mut self) -> Result<Option<char>> {
        let start = self.offset;
        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };

        let width = sequence_width(lead);
        if width == 0 {
            return Err(TextStatsError::InvalidUtf8 { offset: start });
        }

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.next_byte()? {
                Some(byte) if byte & 0xC0 == 0x80 => *slot = byte,
                _ => return Err(TextStatsError::InvalidUtf8 { offset: start }),
            }
        }

        // from_utf8 rejects overlong encodings and surrogates
        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or(TextStatsError::InvalidUtf8 { offset: start })
    }
}

/// Length of the UTF-8 sequence introduced by `lead`, or 0 if it cannot
/// start one
fn sequence_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
