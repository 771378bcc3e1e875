//! UART driver for STM32F4
//!
//! Provides the host link transmitter and the USART settings it runs with.

use embassy_stm32::mode::Async;
use embassy_stm32::usart::{self, Error as UsartError, UartTx};
use embassy_time::{with_timeout, Duration};
use panel_hal::SerialTx;

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Framing error
    Framing,
    /// Noise error
    Noise,
    /// Overrun error
    Overrun,
    /// Parity error
    Parity,
    /// Buffer too small
    BufferTooSmall,
    /// Write did not finish within the allowed time
    Timeout,
    /// Other error
    Other,
}

impl From<UsartError> for UartBusError {
    fn from(e: UsartError) -> Self {
        match e {
            UsartError::Framing => UartBusError::Framing,
            UsartError::Noise => UartBusError::Noise,
            UsartError::Overrun => UartBusError::Overrun,
            UsartError::Parity => UartBusError::Parity,
            UsartError::BufferTooLong => UartBusError::BufferTooSmall,
            _ => UartBusError::Other,
        }
    }
}

/// USART settings for the host link: 8N1 at `baudrate`
pub fn usart_config(baudrate: u32) -> usart::Config {
    let mut config = usart::Config::default();
    config.baudrate = baudrate;
    config.data_bits = usart::DataBits::DataBits8;
    config.parity = usart::Parity::ParityNone;
    config.stop_bits = usart::StopBits::STOP1;
    config
}

/// Host link transmitter
///
/// Every async write is bounded by `timeout`; a write that does not finish
/// in time is abandoned and reported as [`UartBusError::Timeout`].
pub struct SerialPort<'d> {
    tx: UartTx<'d, Async>,
    timeout: Duration,
}

impl<'d> SerialPort<'d> {
    pub fn new(tx: UartTx<'d, Async>, timeout_ms: u32) -> Self {
        Self {
            tx,
            timeout: Duration::from_millis(u64::from(timeout_ms)),
        }
    }
}

impl SerialTx for SerialPort<'_> {
    type Error = UartBusError;

    /// Write `data`, giving up after the configured timeout
    async fn send(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        with_timeout(self.timeout, self.tx.write(data))
            .await
            .map_err(|_| UartBusError::Timeout)??;
        Ok(())
    }
}
