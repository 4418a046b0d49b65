//! Line framing
//!
//! Bytes are fed one at a time as they arrive. A partial line stays
//! buffered across calls, so the reader never waits for a whole message.

use crate::error::LineError;
use heapless::{String, Vec};

/// Longest accepted line, excluding the terminator
pub const MAX_LINE_LEN: usize = 256;

/// One complete line without its terminator
pub type Line = String<MAX_LINE_LEN>;

/// Incremental line splitter
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    buffer: Vec<u8, MAX_LINE_LEN>,
    /// Dropping the rest of an overlong line
    discarding: bool,
}

impl LineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.discarding = false;
    }

    /// Bytes of the current partial line
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` on a newline ending a non-blank line,
    /// `Ok(None)` when more bytes are needed, or `Err` once per bad line.
    /// `\r` is dropped.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        match byte {
            b'\n' => {
                if self.discarding {
                    self.discarding = false;
                    return Ok(None);
                }
                let bytes = core::mem::take(&mut self.buffer);
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(None);
                }
                String::from_utf8(bytes)
                    .map(Some)
                    .map_err(|_| LineError::InvalidUtf8)
            }
            b'\r' => Ok(None),
            _ if self.discarding => Ok(None),
            _ => {
                if self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    self.discarding = true;
                    return Err(LineError::Overflow);
                }
                Ok(None)
            }
        }
    }

    /// Feed multiple bytes
    ///
    /// Returns the first complete line found, if any, and the number of
    /// bytes consumed. Remaining bytes are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> (Result<Option<Line>, LineError>, usize) {
        for (i, &byte) in bytes.iter().enumerate() {
            match self.feed(byte) {
                Ok(None) => {}
                other => return (other, i + 1),
            }
        }
        (Ok(None), bytes.len())
    }
}
