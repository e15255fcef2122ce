//! ASCII renderer for drawing RGB images as coloured character art.
//!
//! The pipeline is:
//!
//! 1. **Grayscale conversion** - RGB to luminance using BT.601
//! 2. **Downsampling** - average brightness and colour per character cell
//! 3. **Character mapping** - brightness to a density ramp from [`CharSet`]
//!
//! [`AsciiConverter`] runs all three steps with reusable buffers.

mod charset;
mod converter;
mod dimensions;
mod downsample;
mod grayscale;
mod mapping;

pub use charset::{CharSet, BLOCKS_CHARSET, MINIMAL_CHARSET, STANDARD_CHARSET};
pub use converter::{AsciiConverter, AsciiStyle};
pub use dimensions::fit_cells;
pub use downsample::{downsample_colors_into, downsample_into, CellColor};
pub use grayscale::to_grayscale_into;
pub use mapping::map_to_chars_into;
