//! Configuration range checks
//!
//! Shared by the firmware build script (which rejects a bad `bridge.toml`
//! before anything is flashed) and by the firmware at startup.

use super::types::BridgeConfig;

/// Supported baud rates
pub const BAUDRATE_RANGE: core::ops::RangeInclusive<u32> = 1_200..=921_600;

/// Allowed transmit timeout (ms)
pub const TX_TIMEOUT_RANGE: core::ops::RangeInclusive<u32> = 1..=1_000;

/// Allowed report threshold (raw 12-bit counts)
pub const THRESHOLD_RANGE: core::ops::RangeInclusive<u16> = 1..=4_095;

/// Highest ADC1 input number (internal channels included)
pub const MAX_ADC_INPUT: u8 = 18;

/// Allowed debounce window (ms)
pub const DEBOUNCE_RANGE: core::ops::RangeInclusive<u32> = 1..=5_000;

/// Configuration problems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    BaudrateOutOfRange,
    TxTimeoutOutOfRange,
    ThresholdOutOfRange,
    AdcInputOutOfRange,
    /// Both pots mapped to the same ADC input
    DuplicateAdcInput,
    DebounceOutOfRange,
}

impl ConfigError {
    /// Human-readable description
    pub fn describe(self) -> &'static str {
        match self {
            ConfigError::BaudrateOutOfRange => "serial.baudrate must be 1200-921600",
            ConfigError::TxTimeoutOutOfRange => "serial.tx_timeout_ms must be 1-1000",
            ConfigError::ThresholdOutOfRange => "analog.threshold must be 1-4095",
            ConfigError::AdcInputOutOfRange => "analog.pot0_input/pot1_input must be 0-18",
            ConfigError::DuplicateAdcInput => "analog.pot0_input and pot1_input must differ",
            ConfigError::DebounceOutOfRange => "buttons.debounce_ms must be 1-5000",
        }
    }
}

impl BridgeConfig {
    /// Check every field against its allowed range
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !BAUDRATE_RANGE.contains(&self.serial.baudrate) {
            return Err(ConfigError::BaudrateOutOfRange);
        }
        if !TX_TIMEOUT_RANGE.contains(&self.serial.tx_timeout_ms) {
            return Err(ConfigError::TxTimeoutOutOfRange);
        }
        if !THRESHOLD_RANGE.contains(&self.analog.threshold) {
            return Err(ConfigError::ThresholdOutOfRange);
        }
        if self.analog.pot0_input > MAX_ADC_INPUT || self.analog.pot1_input > MAX_ADC_INPUT {
            return Err(ConfigError::AdcInputOutOfRange);
        }
        if self.analog.pot0_input == self.analog.pot1_input {
            return Err(ConfigError::DuplicateAdcInput);
        }
        if !DEBOUNCE_RANGE.contains(&self.buttons.debounce_ms) {
            return Err(ConfigError::DebounceOutOfRange);
        }
        Ok(())
    }
}
