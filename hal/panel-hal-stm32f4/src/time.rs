//! Millisecond tick source

use embassy_time::Instant;
use panel_hal::TickSource;

/// Ticks from the embassy time driver, truncated to `u32`
///
/// Wraps after about 49.7 days; consumers use wrapping arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTicks;

impl TickSource for SystemTicks {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
