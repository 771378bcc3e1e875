//! Analog-to-digital converter abstraction
//!
//! Models a single converter with a one-entry regular sequence: software
//! starts a conversion on one input, the end-of-conversion interrupt fires,
//! and the handler collects the result.

/// Largest raw sample of a 12-bit conversion
pub const ADC_MAX: u16 = 0x0FFF;

/// Single-shot analog converter
pub trait AnalogConverter {
    /// Select `channel` and start one conversion
    fn start_conversion(&mut self, channel: u8);

    /// Read and clear the end-of-conversion condition
    ///
    /// Returns `None` if no conversion has completed since the last call.
    fn take_result(&mut self) -> Option<u16>;
}
