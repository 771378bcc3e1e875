//! HD44780 character LCD driver
//!
//! Drives a 16x2 HD44780-compatible LCD over the 4-bit parallel interface
//! (RS, E, D4-D7; R/W tied low). The busy flag cannot be read in this wiring,
//! so every instruction is followed by its worst-case execution delay. The
//! delays are awaited, so other tasks keep running while the controller is
//! busy.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::backend::{CharacterDisplay, DisplayError, DisplayRow};

/// DDRAM holds 40 characters per line regardless of the visible width
const DDRAM_LINE_LEN: usize = 40;

/// Character substituted for anything outside printable ASCII
const REPLACEMENT_CHAR: u8 = b'?';

/// HD44780 instructions
#[allow(dead_code)]
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const HOME: u8 = 0x02;
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    pub const DISPLAY_ON: u8 = 0x0C;
    pub const DISPLAY_OFF: u8 = 0x08;
    pub const FUNCTION_4BIT_2LINE: u8 = 0x28;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
    pub const LINE_TWO_ADDR: u8 = 0x40;
}

/// HD44780 LCD in 4-bit mode
///
/// All six control and data lines share one pin type, which matches
/// type-erased HAL outputs.
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    data: [P; 4],
    delay: D,
    initialized: bool,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a new driver; `data` is D4, D5, D6, D7
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
            initialized: false,
        }
    }

    /// Run the power-on initialization sequence
    ///
    /// Forces 8-bit mode three times before switching to 4-bit, which works
    /// from any prior controller state.
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_ms(50).await;
        self.rs.set_low().map_err(|_| DisplayError::Bus)?;
        self.en.set_low().map_err(|_| DisplayError::Bus)?;

        self.write_nibble(0x03).await?;
        self.delay.delay_us(4500).await;
        self.write_nibble(0x03).await?;
        self.delay.delay_us(4500).await;
        self.write_nibble(0x03).await?;
        self.delay.delay_us(150).await;
        self.write_nibble(0x02).await?;
        self.delay.delay_us(100).await;

        self.command(cmd::FUNCTION_4BIT_2LINE).await?;
        self.command(cmd::DISPLAY_ON).await?;
        self.command(cmd::CLEAR).await?;
        self.command(cmd::ENTRY_MODE_INCREMENT).await?;

        self.initialized = true;
        Ok(())
    }

    /// Send an instruction byte
    async fn command(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.rs.set_low().map_err(|_| DisplayError::Bus)?;
        self.write_byte(byte).await?;
        if byte == cmd::CLEAR || byte == cmd::HOME {
            self.delay.delay_us(2000).await;
        } else {
            self.delay.delay_us(50).await;
        }
        Ok(())
    }

    /// Send a character byte to DDRAM
    async fn data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.rs.set_high().map_err(|_| DisplayError::Bus)?;
        self.write_byte(byte).await?;
        self.delay.delay_us(50).await;
        Ok(())
    }

    async fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_nibble(byte >> 4).await?;
        self.write_nibble(byte & 0x0F).await
    }

    /// Present four bits on D4-D7 and latch them with an enable pulse
    async fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            let result = if nibble & (1 << bit) != 0 {
                pin.set_high()
            } else {
                pin.set_low()
            };
            result.map_err(|_| DisplayError::Bus)?;
        }

        self.en.set_high().map_err(|_| DisplayError::Bus)?;
        self.delay.delay_us(1).await;
        self.en.set_low().map_err(|_| DisplayError::Bus)?;
        self.delay.delay_us(1).await;
        Ok(())
    }
}

impl<P, D> CharacterDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    async fn clear(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.command(cmd::CLEAR).await
    }

    async fn write_line(&mut self, row: DisplayRow, text: &str) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        let addr = match row {
            DisplayRow::Top => 0x00,
            DisplayRow::Bottom => cmd::LINE_TWO_ADDR,
        };
        self.command(cmd::SET_DDRAM_ADDR | addr).await?;

        for &byte in text.as_bytes().iter().take(DDRAM_LINE_LEN) {
            let ch = if byte.is_ascii_graphic() || byte == b' ' {
                byte
            } else {
                REPLACEMENT_CHAR
            };
            self.data(ch).await?;
        }
        Ok(())
    }
}
