//! Configuration type definitions

use panel_protocol::PotChannel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default host link baud rate
pub const DEFAULT_BAUDRATE: u32 = 115_200;

/// Default upper bound on one blocking transmit (ms)
pub const DEFAULT_TX_TIMEOUT_MS: u32 = 100;

/// Default pot change needed before a report is sent (raw counts, ~5% of 4095)
pub const DEFAULT_REPORT_THRESHOLD: u16 = 205;

/// Default ADC input for pot 0 (PA5)
pub const DEFAULT_POT0_INPUT: u8 = 5;

/// Default ADC input for pot 1 (PA6)
pub const DEFAULT_POT1_INPUT: u8 = 6;

/// Default minimum time between accepted presses of one button (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Host serial link settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SerialConfig {
    /// Baud rate (8N1)
    pub baudrate: u32,
    /// Maximum wait for one outbound message before it is dropped
    pub tx_timeout_ms: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baudrate: DEFAULT_BAUDRATE,
            tx_timeout_ms: DEFAULT_TX_TIMEOUT_MS,
        }
    }
}

/// Pot sampling and reporting settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalogConfig {
    /// A report is sent when a value moves strictly more than this
    pub threshold: u16,
    /// ADC input number wired to pot 0
    pub pot0_input: u8,
    /// ADC input number wired to pot 1
    pub pot1_input: u8,
}

impl Default for AnalogConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REPORT_THRESHOLD,
            pot0_input: DEFAULT_POT0_INPUT,
            pot1_input: DEFAULT_POT1_INPUT,
        }
    }
}

impl AnalogConfig {
    /// ADC input number for a pot channel
    pub fn input(&self, channel: PotChannel) -> u8 {
        match channel {
            PotChannel::Pot0 => self.pot0_input,
            PotChannel::Pot1 => self.pot1_input,
        }
    }
}

/// Button debounce settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ButtonConfig {
    /// Edges closer than this to the last accepted press are ignored
    pub debounce_ms: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Complete bridge configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BridgeConfig {
    pub serial: SerialConfig,
    pub analog: AnalogConfig,
    pub buttons: ButtonConfig,
}
