//! Interrupt handler traits
//!
//! Each interrupt source gets a small handler object that owns its own
//! state. The firmware forwards hardware events to these; tests drive them
//! directly with mock hardware.

pub mod handlers;

pub use handlers::{ByteHandler, ConversionHandler, EdgeHandler};
