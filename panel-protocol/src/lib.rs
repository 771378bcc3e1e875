//! Panel Link Serial Protocol
//!
//! This crate defines the text protocol spoken between the host terminal and
//! the control panel over a plain serial link. There is no binary framing:
//! every message is a short ASCII line.
//!
//! # Protocol Overview
//!
//! Host → panel commands are lines terminated by CR or LF, identified by a
//! case-sensitive two-letter prefix:
//! ```text
//! HI              handshake            -> HEY
//! UP              liveness query       -> YES
//! WR text1;text2  write display lines  -> DID
//! LI 0..255       set output port      -> LIT
//! ES              disconnect           -> SHO
//! ```
//!
//! Panel → host messages always end in CR LF:
//! ```text
//! <ACK>\r\n       acknowledgment of a command
//! POTn dddd\r\n   analog value moved past the report threshold
//! BTNn\r\n        debounced button press
//! ```
//!
//! Lines with an unknown prefix get no answer at all.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod events;
pub mod line;
pub mod reply;

pub use command::{Command, DisplayText, PayloadError, TEXT_LINE_LEN};
pub use events::{ButtonId, PotChannel};
pub use line::{Line, LineReceiver, LINE_CAPACITY, MAX_LINE_LEN};
pub use reply::{Ack, EncodeError, Outbound, MAX_OUTBOUND_LEN};
