//! ASCII frame type drawn into the terminal panes.

use crate::ascii::CellColor;

/// ASCII-rendered image: one character (and optional colour) per cell.
#[derive(Debug, Clone, Default)]
pub struct AsciiFrame {
    /// Character data for the frame (row-major order)
    pub chars: Vec<char>,
    /// Optional color data for each character (same length as chars)
    pub colors: Option<Vec<CellColor>>,
    /// Width in characters
    pub width: u16,
    /// Height in characters
    pub height: u16,
}

impl AsciiFrame {
    /// Create a frame from a character vector.
    pub fn from_chars(chars: Vec<char>, width: u16, height: u16) -> Self {
        Self {
            chars,
            colors: None,
            width,
            height,
        }
    }

    /// Create a frame with characters and colors.
    pub fn from_chars_colored(chars: Vec<char>, colors: Vec<CellColor>, width: u16, height: u16) -> Self {
        Self {
            chars,
            colors: Some(colors),
            width,
            height,
        }
    }

    /// Iterate over rows of characters.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.chars.chunks(self.width.max(1) as usize).take(self.height as usize)
    }

    /// Colour of the cell at `(col, row)`, if colours are present.
    pub fn color_at(&self, col: u16, row: u16) -> Option<CellColor> {
        let idx = row as usize * self.width as usize + col as usize;
        self.colors.as_ref()?.get(idx).copied()
    }
}
