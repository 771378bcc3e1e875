//! In-memory capability doubles for host-side testing
//!
//! Each double records what the code under test asked of it so tests can
//! assert on side effects without real peripherals.

use core::cell::Cell;
use core::convert::Infallible;

use heapless::Vec;

use crate::{AnalogConverter, OutputPort, SerialTx, TickSource};

/// Serial transmitter that collects written bytes
#[derive(Debug, Default)]
pub struct MockSerial {
    pub written: Vec<u8, 512>,
}

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as text
    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.written).unwrap_or("<non-utf8>")
    }

    pub fn clear(&mut self) {
        self.written.clear();
    }
}

impl SerialTx for MockSerial {
    type Error = Infallible;

    async fn send(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // Overflowing the capture buffer truncates silently
        let _ = self.written.extend_from_slice(data);
        Ok(())
    }
}

/// Output port that remembers every value written
#[derive(Debug, Default)]
pub struct MockPort {
    value: u8,
    pub writes: Vec<u8, 64>,
}

impl MockPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent value written, if any
    pub fn last_write(&self) -> Option<u8> {
        self.writes.last().copied()
    }
}

impl OutputPort for MockPort {
    fn write_port(&mut self, value: u8) {
        self.value = value;
        let _ = self.writes.push(value);
    }

    fn port_value(&self) -> u8 {
        self.value
    }
}

/// Converter whose results are injected by the test
#[derive(Debug, Default)]
pub struct MockAdc {
    /// Result returned by the next `take_result`
    pub pending: Option<u16>,
    /// Channels conversions were started on, in order
    pub started: Vec<u8, 64>,
}

impl MockAdc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the end of a conversion producing `value`
    pub fn complete(&mut self, value: u16) {
        self.pending = Some(value);
    }

    /// Channel of the most recently started conversion
    pub fn last_started(&self) -> Option<u8> {
        self.started.last().copied()
    }
}

impl AnalogConverter for MockAdc {
    fn start_conversion(&mut self, channel: u8) {
        let _ = self.started.push(channel);
    }

    fn take_result(&mut self) -> Option<u16> {
        self.pending.take()
    }
}

/// Manually advanced millisecond clock
#[derive(Debug, Default)]
pub struct MockTicks {
    now: Cell<u32>,
}

impl MockTicks {
    pub fn new(start_ms: u32) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: u32) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u32) {
        self.now.set(self.now.get().wrapping_add(delta_ms));
    }
}

impl TickSource for MockTicks {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn test_serial_captures_in_order() {
        let mut serial = MockSerial::new();
        block_on(serial.send(b"HEY\r\n")).unwrap();
        block_on((&mut serial).send(b"YES\r\n")).unwrap();
        assert_eq!(serial.text(), "HEY\r\nYES\r\n");
        serial.clear();
        assert!(serial.written.is_empty());
    }

    #[test]
    fn test_port_records_writes() {
        let mut port = MockPort::new();
        assert_eq!(port.last_write(), None);
        port.write_port(0b0000_1001);
        port.write_port(0xFF);
        assert_eq!(port.port_value(), 0xFF);
        assert_eq!(port.writes.as_slice(), &[0b0000_1001, 0xFF]);
    }

    #[test]
    fn test_ticks_wrap() {
        let ticks = MockTicks::new(u32::MAX - 9);
        let start = ticks.now_ms();
        ticks.advance(20);
        assert_eq!(ticks.now_ms(), 10);
        assert_eq!(ticks.now_ms().wrapping_sub(start), 20);
    }
}
