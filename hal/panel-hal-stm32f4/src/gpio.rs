//! GPIO output port for STM32F4
//!
//! Eight independent output pins presented as one 8-bit port. Bit `n` of the
//! value drives `pins[n]`.

use embassy_stm32::gpio::{Level, Output};
use panel_hal::OutputPort;

/// Eight output pins driven together
pub struct PinPort<'d> {
    pins: [Output<'d>; 8],
    value: u8,
}

impl<'d> PinPort<'d> {
    /// Take ownership of the pins and drive them all low
    pub fn new(pins: [Output<'d>; 8]) -> Self {
        let mut port = Self { pins, value: 0 };
        port.write_port(0);
        port
    }
}

impl OutputPort for PinPort<'_> {
    fn write_port(&mut self, value: u8) {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            let level = if value & (1 << bit) != 0 {
                Level::High
            } else {
                Level::Low
            };
            pin.set_level(level);
        }
        self.value = value;
    }

    fn port_value(&self) -> u8 {
        self.value
    }
}
