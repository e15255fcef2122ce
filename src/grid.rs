//! 2x2 grid composition.
//!
//! Every frame is normalised to a fixed 320x240 cell regardless of the camera
//! resolution, so the composite is always 640x480.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgb, RgbImage};

use crate::camera::Frame;

/// Width of one grid cell in pixels.
pub const CELL_WIDTH: u32 = 320;
/// Height of one grid cell in pixels.
pub const CELL_HEIGHT: u32 = 240;
/// Width of the composite grid.
pub const GRID_WIDTH: u32 = CELL_WIDTH * 2;
/// Height of the composite grid.
pub const GRID_HEIGHT: u32 = CELL_HEIGHT * 2;

/// Borrow a frame's pixels as an image view without copying.
fn frame_view(frame: &Frame) -> Option<ImageBuffer<Rgb<u8>, &[u8]>> {
    if frame.width == 0 || frame.height == 0 || !frame.is_well_formed() {
        return None;
    }
    ImageBuffer::from_raw(frame.width, frame.height, frame.data.as_slice())
}

/// Arrange four frames row-major into a 640x480 grid.
///
/// `frames[0]` goes top-left, `frames[1]` top-right, `frames[2]` bottom-left
/// and `frames[3]` bottom-right. Frames are resized bilinearly to the cell
/// size; malformed frames leave their cell black.
pub fn compose_grid(frames: [&Frame; 4]) -> RgbImage {
    let mut grid = RgbImage::new(GRID_WIDTH, GRID_HEIGHT);

    for (i, frame) in frames.iter().enumerate() {
        let col = (i % 2) as u32;
        let row = (i / 2) as u32;
        let x = i64::from(col * CELL_WIDTH);
        let y = i64::from(row * CELL_HEIGHT);

        let Some(view) = frame_view(frame) else {
            log::warn!(
                "Skipping malformed frame {} ({}x{}, {} bytes) in grid cell {}",
                frame.sequence,
                frame.width,
                frame.height,
                frame.data.len(),
                i + 1
            );
            continue;
        };

        if frame.width == CELL_WIDTH && frame.height == CELL_HEIGHT {
            imageops::replace(&mut grid, &view, x, y);
        } else {
            let cell = imageops::resize(&view, CELL_WIDTH, CELL_HEIGHT, FilterType::Triangle);
            imageops::replace(&mut grid, &cell, x, y);
        }
    }

    grid
}
