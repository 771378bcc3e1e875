//! Character display abstraction and drivers for Panel Link
//!
//! This crate provides:
//! - `CharacterDisplay` trait for line-oriented text displays
//! - `Hd44780` driver for the 16x2 LCD on the panel, using 4-bit GPIO wiring
//! - `MockDisplay` for host tests (feature `mock`)
//!
//! # Architecture
//!
//! The command dispatcher only ever clears the display and writes whole
//! lines, so the trait is small. Drivers are generic over `embedded-hal` 1.0
//! pins and an `embedded-hal-async` delay and do not depend on a chip HAL.

#![no_std]

pub mod backend;
pub mod hd44780;
#[cfg(feature = "mock")]
pub mod mock;

// Re-export key types
pub use backend::{CharacterDisplay, DisplayError, DisplayRow};
pub use hd44780::Hd44780;
#[cfg(feature = "mock")]
pub use mock::MockDisplay;
