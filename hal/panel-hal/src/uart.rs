//! UART serial communication abstractions
//!
//! Provides the transmit side of the host link. Reception is handled by the
//! chip HAL's DMA ring buffer and fed to the line receiver, so no receive
//! trait is needed here.

/// UART transmitter
///
/// Implementations bound the wait themselves; a write that cannot finish in
/// time returns an error instead of stalling the caller.
#[allow(async_fn_in_trait)]
pub trait SerialTx {
    /// Error type for transmit operations
    type Error;

    /// Write all of `data` to the UART
    async fn send(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: SerialTx + ?Sized> SerialTx for &mut T {
    type Error = T::Error;

    async fn send(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).send(data).await
    }
}
