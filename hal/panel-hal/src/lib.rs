//! Panel Link Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the panel logic needs. The
//! production implementation lives in a chip-specific HAL; host tests use the
//! in-memory doubles from the [`mock`] module.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (panel-core, firmware)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  panel-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  panel-hal-   │       │  mock (host   │
//! │   stm32f4     │       │   tests)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`adc::AnalogConverter`] - Single-shot analog conversions
//! - [`gpio::OutputPort`] - 8-bit digital output port
//! - [`uart::SerialTx`] - Bounded async serial transmit
//! - [`time::TickSource`] - Millisecond tick counter

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
#[cfg(feature = "mock")]
pub mod mock;
pub mod time;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::AnalogConverter;
pub use gpio::OutputPort;
pub use time::TickSource;
pub use uart::SerialTx;
