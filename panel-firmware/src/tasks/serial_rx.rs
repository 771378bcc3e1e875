//! Host UART receive task
//!
//! Frames incoming bytes into lines and hands each completed line to the
//! bridge task. Bytes land in a circular DMA buffer independently of the
//! executor, so nothing is lost while the bridge task is busy with the LCD.

use defmt::*;
use embassy_stm32::usart::RingBufferedUartRx;
use embassy_sync::channel::TrySendError;

use panel_core::traits::ByteHandler;
use panel_hal_stm32f4::UartBusError;
use panel_protocol::LineReceiver;

use crate::channels::LINE_CHANNEL;

/// Bytes drained from the DMA ring per read
const RX_CHUNK_SIZE: usize = 32;

/// Serial RX task - drains the DMA ring into the line receiver
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: RingBufferedUartRx<'static>) {
    info!("Serial RX task started");

    let mut receiver = LineReceiver::new();
    let mut buf = [0u8; RX_CHUNK_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) => {
                trace!("RX: {} bytes", n);
                for &byte in &buf[..n] {
                    let dropped = receiver.dropped();
                    if let Some(line) = receiver.on_byte_received(byte) {
                        if dropped > 0 {
                            debug!("Line truncated, {} bytes dropped", dropped);
                        }
                        // The bridge task still holds the previous line
                        if let Err(TrySendError::Full(line)) = LINE_CHANNEL.try_send(line) {
                            warn!("Bridge busy, dropping line {:?}", line);
                        }
                    }
                }
            }
            Err(e) => {
                // The ring restarts on the next read; the partial line keeps
                // whatever arrived before the error
                warn!(
                    "UART read error: {:?} ({} bytes pending)",
                    UartBusError::from(e),
                    receiver.pending()
                );
            }
        }
    }
}
