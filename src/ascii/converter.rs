//! Reusable RGB -> coloured ASCII conversion.

use super::charset::CharSet;
use super::downsample::{downsample_colors_into, downsample_into, CellColor};
use super::grayscale::to_grayscale_into;
use super::mapping::map_to_chars_into;
use crate::terminal::AsciiFrame;

/// How characters are picked from brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AsciiStyle {
    pub charset: CharSet,
    /// Flip brightness for light terminal themes
    pub invert: bool,
}

/// Converts RGB images to [`AsciiFrame`]s, keeping its scratch buffers
/// between calls to avoid allocations in the per-tick path.
#[derive(Debug, Default)]
pub struct AsciiConverter {
    gray: Vec<u8>,
    brightness: Vec<u8>,
    chars: Vec<char>,
    colors: Vec<CellColor>,
}

impl AsciiConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `rgb` (packed, `width x height`) into a `cols x rows` character grid.
    pub fn convert(
        &mut self,
        rgb: &[u8],
        width: u32,
        height: u32,
        cols: u16,
        rows: u16,
        style: AsciiStyle,
    ) -> AsciiFrame {
        if cols == 0 || rows == 0 || width == 0 || height == 0 {
            return AsciiFrame::default();
        }

        to_grayscale_into(rgb, &mut self.gray);
        downsample_into(&self.gray, width, height, cols, rows, &mut self.brightness);
        map_to_chars_into(
            &self.brightness,
            style.charset.chars(),
            style.invert,
            &mut self.chars,
        );
        downsample_colors_into(rgb, width, height, cols, rows, &mut self.colors);

        AsciiFrame::from_chars_colored(self.chars.clone(), self.colors.clone(), cols, rows)
    }
}
