//! Bounded byte streams over borrowed buffers.
//!
//! Decoding reads from a [`ReadStream`], a cursor over a borrowed slice.
//! Length-delimited payloads are handed out as bounded sub-streams:
//!
//! ```text
//! parent:  [ tag | len | a b c d e | tag | ... ]
//!                        \_________/
//!                         take(5) -> sub-stream, depth + 1
//! ```
//!
//! Encoding writes into a [`WriteStream`], either bounded by a caller
//! buffer or in sizing mode, which counts bytes without storing them.
//! Sizing mode is how nested length prefixes and exact allocation sizes
//! are computed.

use crate::error::WireError;

/// Read cursor over a borrowed byte slice.
#[derive(Debug)]
pub struct ReadStream<'a> {
    buf: &'a [u8],
    depth: u8,
}

impl<'a> ReadStream<'a> {
    /// Creates a top-level stream over `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        ReadStream { buf, depth: 0 }
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// True once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Nesting level of this stream; zero at top level.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Remaining bytes, without consuming them.
    pub fn as_slice(&self) -> &'a [u8] {
        self.buf
    }

    /// Consumes exactly `n` bytes. A failed read consumes nothing.
    pub fn read(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        if n > self.buf.len() {
            return Err(WireError::Underrun {
                needed: n,
                remaining: self.buf.len(),
            });
        }
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }

    /// Consumes one byte.
    pub fn read_byte(&mut self) -> Result<u8, WireError> {
        let bytes = self.read(1)?;
        Ok(bytes[0])
    }

    /// Splits off a bounded sub-stream over the next `n` bytes and
    /// advances this stream past them. The sub-stream cannot read
    /// beyond its slice by construction.
    pub fn take(&mut self, n: usize) -> Result<ReadStream<'a>, WireError> {
        let bytes = self.read(n)?;
        Ok(ReadStream {
            buf: bytes,
            depth: self.depth.saturating_add(1),
        })
    }
}

/// Write cursor over a borrowed buffer, or a byte counter in sizing mode.
#[derive(Debug)]
pub struct WriteStream<'a> {
    buf: Option<&'a mut [u8]>,
    written: usize,
}

impl<'a> WriteStream<'a> {
    /// Creates a stream bounded by `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        WriteStream {
            buf: Some(buf),
            written: 0,
        }
    }

    /// Creates a sizing stream: writes are counted, not stored.
    pub fn sizing() -> WriteStream<'static> {
        WriteStream {
            buf: None,
            written: 0,
        }
    }

    /// Bytes accepted so far.
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    /// Capacity left, or `None` in sizing mode.
    pub fn remaining(&self) -> Option<usize> {
        self.buf.as_ref().map(|b| b.len() - self.written)
    }

    /// Appends `bytes`. Capacity is checked before anything is copied,
    /// so a failed write leaves both the buffer and the count untouched.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), WireError> {
        if let Some(buf) = self.buf.as_deref_mut() {
            let free = buf.len() - self.written;
            if bytes.len() > free {
                return Err(WireError::Overrun {
                    needed: bytes.len(),
                    remaining: free,
                });
            }
            buf[self.written..self.written + bytes.len()].copy_from_slice(bytes);
        }
        self.written += bytes.len();
        Ok(())
    }

    /// Appends one byte.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), WireError> {
        self.write(&[byte])
    }
}
