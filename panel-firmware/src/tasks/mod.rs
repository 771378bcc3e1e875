//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels. Analog
//! sampling is the exception: it runs entirely in the ADC interrupt.

pub mod analog;
pub mod bridge;
pub mod button;
pub mod serial_rx;
pub mod serial_tx;

pub use analog::start_sampling;
pub use bridge::bridge_task;
pub use button::button_task;
pub use serial_rx::serial_rx_task;
pub use serial_tx::serial_tx_task;
