//! Host UART transmit task
//!
//! The only writer of the host link: acks and reports from every context
//! are queued on the outbound channel and sent from here in order.

use defmt::*;
use panel_hal::SerialTx;
use panel_hal_stm32f4::SerialPort;
use panel_protocol::MAX_OUTBOUND_LEN;

use crate::channels::OUTBOUND_CHANNEL;

/// Serial TX task - sends queued messages to the host
#[embassy_executor::task]
pub async fn serial_tx_task(mut port: SerialPort<'static>) {
    info!("Serial TX task started");

    let mut buf = [0u8; MAX_OUTBOUND_LEN];

    loop {
        let message = OUTBOUND_CHANNEL.receive().await;
        let len = match message.encode(&mut buf) {
            Ok(len) => len,
            Err(e) => {
                warn!("Failed to encode {:?}: {:?}", message, e);
                continue;
            }
        };

        match port.send(&buf[..len]).await {
            Ok(()) => trace!("Sent {:?}", message),
            Err(e) => warn!("Failed to send {:?}: {:?}", message, e),
        }
    }
}
