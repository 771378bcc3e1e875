//! Character display trait
//!
//! Defines the interface the command dispatcher renders through.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Pin or bus write failed
    Bus,
    /// Display not initialized
    NotInitialized,
}

/// Display line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayRow {
    Top,
    Bottom,
}

impl DisplayRow {
    pub fn index(self) -> usize {
        match self {
            DisplayRow::Top => 0,
            DisplayRow::Bottom => 1,
        }
    }
}

/// Two-line character display
///
/// Implementations clip text that does not fit their line width.
#[allow(async_fn_in_trait)]
pub trait CharacterDisplay {
    /// Clear both lines and return the cursor home
    async fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write `text` at the start of `row`
    async fn write_line(&mut self, row: DisplayRow, text: &str) -> Result<(), DisplayError>;

    /// Clear the display and show two lines of text
    async fn show(&mut self, top: &str, bottom: &str) -> Result<(), DisplayError> {
        self.clear().await?;
        self.write_line(DisplayRow::Top, top).await?;
        self.write_line(DisplayRow::Bottom, bottom).await
    }
}

impl<T: CharacterDisplay + ?Sized> CharacterDisplay for &mut T {
    async fn clear(&mut self) -> Result<(), DisplayError> {
        (**self).clear().await
    }

    async fn write_line(&mut self, row: DisplayRow, text: &str) -> Result<(), DisplayError> {
        (**self).write_line(row, text).await
    }
}
