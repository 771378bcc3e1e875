//! Board-agnostic core logic for the Panel Link firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Interrupt handler traits (byte received, conversion complete, edge)
//! - Command dispatch onto the display and output port
//! - Round-robin analog sampling and change reporting
//! - Button debouncing
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod analog;
pub mod button;
pub mod config;
pub mod dispatcher;
pub mod traits;

pub use analog::{AnalogReadings, AnalogSampler, ChangeReporter};
pub use button::ButtonDebouncer;
pub use config::BridgeConfig;
pub use dispatcher::{Dispatch, Dispatcher};
