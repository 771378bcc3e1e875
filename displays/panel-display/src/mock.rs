//! In-memory display double

use heapless::String;

use crate::backend::{CharacterDisplay, DisplayError, DisplayRow};

/// Characters kept per line
const LINE_LEN: usize = 49;

/// Display that stores the text it was asked to show
#[derive(Debug, Default)]
pub struct MockDisplay {
    pub lines: [String<LINE_LEN>; 2],
    /// Number of `clear` calls
    pub clears: usize,
    /// Number of `write_line` calls
    pub writes: usize,
    /// When set, every operation fails with this error
    pub fail_with: Option<DisplayError>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self, row: DisplayRow) -> &str {
        self.lines[row.index()].as_str()
    }

    /// True if nothing was ever cleared or written
    pub fn untouched(&self) -> bool {
        self.clears == 0 && self.writes == 0
    }
}

impl CharacterDisplay for MockDisplay {
    async fn clear(&mut self) -> Result<(), DisplayError> {
        if let Some(err) = self.fail_with {
            return Err(err);
        }
        self.clears += 1;
        for line in &mut self.lines {
            line.clear();
        }
        Ok(())
    }

    async fn write_line(&mut self, row: DisplayRow, text: &str) -> Result<(), DisplayError> {
        if let Some(err) = self.fail_with {
            return Err(err);
        }
        self.writes += 1;
        let line = &mut self.lines[row.index()];
        line.clear();
        for ch in text.chars() {
            if line.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}
