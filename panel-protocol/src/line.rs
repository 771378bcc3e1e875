//! Line framing for incoming serial bytes.
//!
//! Line format:
//! - Payload: up to 49 bytes of text
//! - Terminator: CR (`\r`) or LF (`\n`), never stored
//!
//! Bytes arriving after the payload is full are dropped until the next
//! terminator; the truncated line is still delivered.

use heapless::Vec;

/// Receive buffer capacity, including room for the terminator position
pub const LINE_CAPACITY: usize = 50;

/// Maximum number of payload bytes stored for one line
pub const MAX_LINE_LEN: usize = LINE_CAPACITY - 1;

/// A complete, terminator-delimited line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8, MAX_LINE_LEN>,
}

impl Line {
    /// Create a line from raw bytes, keeping at most [`MAX_LINE_LEN`] of them
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len().min(MAX_LINE_LEN);
        let mut line = Self::default();
        // Cannot fail: len is clamped to capacity
        let _ = line.bytes.extend_from_slice(&bytes[..len]);
        line
    }

    /// Raw line contents without terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Line contents as text, if valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes).ok()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Line {
    fn format(&self, f: defmt::Formatter) {
        match self.as_str() {
            Some(text) => defmt::write!(f, "{=str}", text),
            None => defmt::write!(f, "{=[u8]}", self.as_bytes()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReceiveState {
    /// No payload bytes since the last terminator
    Idle,
    /// Collecting payload bytes
    Accumulating,
}

/// Byte-at-a-time line accumulator
///
/// Fed from the serial receive path. A completed line is returned by value,
/// so the receiver can start on the next line while the previous one is
/// still waiting to be dispatched.
#[derive(Debug, Clone)]
pub struct LineReceiver {
    state: ReceiveState,
    buffer: Vec<u8, MAX_LINE_LEN>,
    dropped: usize,
}

impl Default for LineReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReceiver {
    pub const fn new() -> Self {
        Self {
            state: ReceiveState::Idle,
            buffer: Vec::new(),
            dropped: 0,
        }
    }

    /// Feed a single received byte
    ///
    /// Returns `Some(line)` when a terminator completes a non-empty line.
    /// A terminator with nothing accumulated (the second half of CR LF)
    /// yields nothing.
    pub fn on_byte(&mut self, byte: u8) -> Option<Line> {
        if byte == b'\r' || byte == b'\n' {
            return match self.state {
                ReceiveState::Idle => None,
                ReceiveState::Accumulating => {
                    let line = Line {
                        bytes: core::mem::take(&mut self.buffer),
                    };
                    self.state = ReceiveState::Idle;
                    self.dropped = 0;
                    Some(line)
                }
            };
        }

        self.state = ReceiveState::Accumulating;
        if self.buffer.push(byte).is_err() {
            // Line is full: drop until the next terminator
            self.dropped = self.dropped.saturating_add(1);
        }
        None
    }

    /// Number of payload bytes accumulated so far
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Number of bytes dropped from the current line because it was full
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}
