//! Configuration types
//!
//! Board-agnostic configuration for the bridge. The firmware builds a
//! [`BridgeConfig`] from `bridge.toml` at compile time; every field has a
//! default matching the stock panel.

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::ConfigError;
