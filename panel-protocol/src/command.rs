//! Host command parsing
//!
//! A command is identified by the first two bytes of a line. For `WR` and
//! `LI` the rest of the line carries a payload; a payload that cannot be
//! parsed still yields the command, carrying a [`PayloadError`], because the
//! panel acknowledges the command shape regardless of the payload.

use heapless::String;

use crate::line::MAX_LINE_LEN;
use crate::reply::Ack;

/// Maximum characters kept per display line
pub const TEXT_LINE_LEN: usize = MAX_LINE_LEN;

/// Only this many leading bytes of an `LI` line are scanned for the value
const VALUE_SCAN_LEN: usize = 19;

/// Why a command payload was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PayloadError {
    /// Nothing after the prefix
    MissingPayload,
    /// `WR` payload without a `;` between the two lines
    MissingSeparator,
    /// `LI` payload does not start with a decimal integer
    InvalidNumber,
    /// `LI` value outside 0..=255
    OutOfRange,
    /// Payload is not valid UTF-8
    InvalidText,
}

/// Two lines of display text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayText {
    pub line1: String<TEXT_LINE_LEN>,
    pub line2: String<TEXT_LINE_LEN>,
}

impl DisplayText {
    /// Build display text, truncating each line and trimming trailing spaces
    pub fn new(line1: &str, line2: &str) -> Self {
        Self {
            line1: fit_line(line1),
            line2: fit_line(line2),
        }
    }
}

/// A parsed host command
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `HI` - host connected
    Handshake,
    /// `UP` - are you there?
    LivenessQuery,
    /// `WR line1;line2` - replace both display lines
    WriteDisplay(Result<DisplayText, PayloadError>),
    /// `LI n` - drive the 8-bit output port
    SetOutput(Result<u8, PayloadError>),
    /// `ES` - host disconnecting
    Disconnect,
    /// Anything else; produces no reply
    Unrecognized,
}

impl Command {
    /// Parse a command from a complete line (without terminator)
    pub fn parse(line: &[u8]) -> Self {
        match line {
            [b'H', b'I', ..] => Command::Handshake,
            [b'U', b'P', ..] => Command::LivenessQuery,
            [b'W', b'R', ..] => Command::WriteDisplay(parse_display_text(line)),
            [b'L', b'I', ..] => Command::SetOutput(parse_output_value(line)),
            [b'E', b'S', ..] => Command::Disconnect,
            _ => Command::Unrecognized,
        }
    }

    /// Acknowledgment sent back for this command
    ///
    /// `WR` and `LI` are acknowledged even when their payload was rejected.
    pub fn ack(&self) -> Option<Ack> {
        match self {
            Command::Handshake => Some(Ack::Hey),
            Command::LivenessQuery => Some(Ack::Yes),
            Command::WriteDisplay(_) => Some(Ack::Did),
            Command::SetOutput(_) => Some(Ack::Lit),
            Command::Disconnect => Some(Ack::Sho),
            Command::Unrecognized => None,
        }
    }
}

/// Parse `WR <text1>;<text2>`
fn parse_display_text(line: &[u8]) -> Result<DisplayText, PayloadError> {
    let rest = trim_start(trim_end(&line[2..]));
    if rest.is_empty() {
        return Err(PayloadError::MissingPayload);
    }

    let sep = rest
        .iter()
        .position(|&b| b == b';')
        .ok_or(PayloadError::MissingSeparator)?;

    let line1 = core::str::from_utf8(&rest[..sep]).map_err(|_| PayloadError::InvalidText)?;
    let line2 = core::str::from_utf8(&rest[sep + 1..]).map_err(|_| PayloadError::InvalidText)?;

    Ok(DisplayText::new(line1, line2))
}

/// Parse `LI <n>` with `n` in 0..=255
///
/// Accepts optional whitespace after the prefix, an optional sign, and stops
/// at the first non-digit, so `LI 12abc` yields 12.
fn parse_output_value(line: &[u8]) -> Result<u8, PayloadError> {
    let scanned = &line[..line.len().min(VALUE_SCAN_LEN)];
    let rest = trim_start(trim_end(&scanned[2..]));
    if rest.is_empty() {
        return Err(PayloadError::MissingPayload);
    }

    let (negative, digits) = match rest {
        [b'-', tail @ ..] => (true, tail),
        [b'+', tail @ ..] => (false, tail),
        _ => (false, rest),
    };

    let digit_count = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if digit_count == 0 {
        return Err(PayloadError::InvalidNumber);
    }

    let mut value: u32 = 0;
    for &d in &digits[..digit_count] {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(d - b'0')))
            .ok_or(PayloadError::OutOfRange)?;
    }

    if negative && value != 0 {
        return Err(PayloadError::OutOfRange);
    }
    u8::try_from(value).map_err(|_| PayloadError::OutOfRange)
}

fn fit_line(text: &str) -> String<TEXT_LINE_LEN> {
    let mut end = text.len().min(TEXT_LINE_LEN);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let trimmed = text[..end].trim_end_matches(' ');

    let mut out = String::new();
    // Cannot fail: at most TEXT_LINE_LEN bytes
    let _ = out.push_str(trimmed);
    out
}

fn trim_end(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != b' ').map_or(0, |i| i + 1);
    &bytes[..end]
}

/// Skip leading whitespace, vertical tab included
fn trim_start(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !is_space(b))
        .unwrap_or(bytes.len());
    &bytes[start..]
}

fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
