//! Messages sent from the panel to the host
//!
//! Every outbound message is a short ASCII line terminated by CR LF:
//! - Acknowledgments: `HEY`, `YES`, `DID`, `LIT`, `SHO`
//! - Pot reports: `POT0 dddd` (value right-justified to 4 characters)
//! - Button reports: `BTN0` .. `BTN3`

use core::fmt::Write;

use heapless::String;

use crate::events::{ButtonId, PotChannel};

/// Longest encoded message (`POT0 4095\r\n`)
pub const MAX_OUTBOUND_LEN: usize = 11;

/// Line terminator appended to every outbound message
const TERMINATOR: &str = "\r\n";

/// Errors that can occur while encoding an outbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// Acknowledgment of a recognized command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ack {
    /// Handshake accepted
    Hey,
    /// Still alive
    Yes,
    /// Display write handled
    Did,
    /// Output port write handled
    Lit,
    /// Disconnect handled
    Sho,
}

impl Ack {
    pub fn as_str(self) -> &'static str {
        match self {
            Ack::Hey => "HEY",
            Ack::Yes => "YES",
            Ack::Did => "DID",
            Ack::Lit => "LIT",
            Ack::Sho => "SHO",
        }
    }
}

/// Any message the panel sends to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outbound {
    /// Reply to a command
    Ack(Ack),
    /// Pot value changed by more than the report threshold
    Pot { channel: PotChannel, value: u16 },
    /// Debounced button press
    Button(ButtonId),
}

impl From<Ack> for Outbound {
    fn from(ack: Ack) -> Self {
        Outbound::Ack(ack)
    }
}

impl Outbound {
    /// Render this message as text, terminator included
    pub fn to_text(&self) -> String<MAX_OUTBOUND_LEN> {
        let mut text = String::new();
        // Cannot fail: every variant fits MAX_OUTBOUND_LEN (values are 12-bit)
        let _ = match self {
            Outbound::Ack(ack) => write!(text, "{}{}", ack.as_str(), TERMINATOR),
            Outbound::Pot { channel, value } => {
                write!(text, "{} {:>4}{}", channel.name(), value, TERMINATOR)
            }
            Outbound::Button(button) => write!(text, "{}{}", button.name(), TERMINATOR),
        };
        text
    }

    /// Encode this message into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, EncodeError> {
        let text = self.to_text();
        let bytes = text.as_bytes();
        if buffer.len() < bytes.len() {
            return Err(EncodeError::BufferTooSmall);
        }
        buffer[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }
}
