//! STM32F4-specific HAL for the Panel Link firmware
//!
//! Implements the `panel-hal` capabilities on top of embassy-stm32:
//!
//! - [`uart::SerialPort`] - host link transmitter with a bounded wait
//! - [`gpio::PinPort`] - eight output pins driven as one byte
//! - [`adc::RegisterAdc`] - interrupt-driven single conversions on ADC1
//! - [`time::SystemTicks`] - millisecond ticks from the embassy time driver
//!
//! # Features
//!
//! - `stm32f446re` - Enable support for STM32F446RE (Nucleo-F446RE)
//! - `stm32f401re` - Enable support for STM32F401RE
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod adc;
pub mod gpio;
pub mod time;
pub mod uart;

pub use adc::RegisterAdc;
pub use gpio::PinPort;
pub use time::SystemTicks;
pub use uart::{SerialPort, UartBusError};
