//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use panel_protocol::{Line, Outbound};

/// One completed line may wait while the next is being received
const LINE_CHANNEL_SIZE: usize = 1;

/// Channel capacity for outbound messages
const OUTBOUND_CHANNEL_SIZE: usize = 8;

/// Completed host lines, receive task to bridge task
pub static LINE_CHANNEL: Channel<CriticalSectionRawMutex, Line, LINE_CHANNEL_SIZE> =
    Channel::new();

/// Acks and reports waiting for the transmit task
pub static OUTBOUND_CHANNEL: Channel<CriticalSectionRawMutex, Outbound, OUTBOUND_CHANNEL_SIZE> =
    Channel::new();

/// Queue a message for transmission without waiting
///
/// Callable from any context; drops the message if the queue is full.
pub fn queue_outbound(message: Outbound) {
    if OUTBOUND_CHANNEL.try_send(message).is_err() {
        warn!("Outbound queue full, dropping {:?}", message);
    }
}
