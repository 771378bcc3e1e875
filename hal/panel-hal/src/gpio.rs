//! GPIO output port abstraction
//!
//! The panel drives eight LEDs as one parallel port; the host sets all eight
//! bits at once.

/// 8-bit digital output port
///
/// Bit `n` of the value drives output line `n` (1 = high).
pub trait OutputPort {
    /// Drive all eight lines from `value`
    fn write_port(&mut self, value: u8);

    /// Last value written to the port
    fn port_value(&self) -> u8;
}
