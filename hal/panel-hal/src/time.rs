//! Millisecond tick source

/// Monotonic millisecond counter
///
/// The counter is 32 bits wide and wraps after about 49.7 days. Callers
/// compare ticks with `wrapping_sub`, which stays correct across one wrap.
pub trait TickSource {
    /// Milliseconds since boot, modulo 2^32
    fn now_ms(&self) -> u32;
}

impl<T: TickSource + ?Sized> TickSource for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
