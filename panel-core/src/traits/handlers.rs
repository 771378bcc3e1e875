//! Event handler capabilities

use panel_protocol::{ButtonId, Line, LineReceiver, PotChannel};

/// Handles one received serial byte
pub trait ByteHandler {
    /// Feed a byte; returns a line once its terminator arrives
    fn on_byte_received(&mut self, byte: u8) -> Option<Line>;
}

impl ByteHandler for LineReceiver {
    fn on_byte_received(&mut self, byte: u8) -> Option<Line> {
        self.on_byte(byte)
    }
}

/// Handles an analog conversion-complete event
pub trait ConversionHandler {
    /// Returns the channel and value that were stored, if a result was pending
    fn on_conversion_complete(&mut self) -> Option<(PotChannel, u16)>;
}

/// Handles a button edge
pub trait EdgeHandler {
    /// Returns the button identifier if the edge was accepted as a press
    fn on_edge(&mut self) -> Option<ButtonId>;
}

impl<T: ByteHandler + ?Sized> ByteHandler for &mut T {
    fn on_byte_received(&mut self, byte: u8) -> Option<Line> {
        (**self).on_byte_received(byte)
    }
}

impl<T: ConversionHandler + ?Sized> ConversionHandler for &mut T {
    fn on_conversion_complete(&mut self) -> Option<(PotChannel, u16)> {
        (**self).on_conversion_complete()
    }
}

impl<T: EdgeHandler + ?Sized> EdgeHandler for &mut T {
    fn on_edge(&mut self) -> Option<ButtonId> {
        (**self).on_edge()
    }
}
