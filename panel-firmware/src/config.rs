//! Build-time bridge configuration
//!
//! `build.rs` validates `bridge.toml` and writes the constants included
//! below.

use panel_core::config::{AnalogConfig, BridgeConfig, ButtonConfig, SerialConfig};

include!(concat!(env!("OUT_DIR"), "/bridge_config.rs"));

/// Configuration this firmware image was built with
pub fn bridge_config() -> BridgeConfig {
    BridgeConfig {
        serial: SerialConfig {
            baudrate: BAUDRATE,
            tx_timeout_ms: TX_TIMEOUT_MS,
        },
        analog: AnalogConfig {
            threshold: REPORT_THRESHOLD,
            pot0_input: POT0_INPUT,
            pot1_input: POT1_INPUT,
        },
        buttons: ButtonConfig {
            debounce_ms: DEBOUNCE_MS,
        },
    }
}
