//! Downsampling algorithms for converting pixel data to character grids.

/// RGB color for downsampled cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Pixel bounds `[start, end)` of character cell `c` along one axis.
#[inline]
fn cell_span(c: u16, cell_size: f32) -> (u32, u32) {
    let start = (c as f32 * cell_size) as u32;
    let end = ((c + 1) as f32 * cell_size) as u32;
    // Upscaling: make sure every cell covers at least one pixel
    (start, end.max(start + 1))
}

/// Downsample a grayscale image into a brightness grid, reusing `buffer`.
///
/// Each output cell is the average brightness of the pixels it covers.
///
/// # Arguments
/// * `gray` - Grayscale pixel data (one byte per pixel, row-major order)
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `char_width` - Desired output width in characters
/// * `char_height` - Desired output height in characters
/// * `buffer` - A mutable buffer to store the result
///
/// # Returns
/// The number of brightness values written to the buffer.
pub fn downsample_into(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    char_width: u16,
    char_height: u16,
    buffer: &mut Vec<u8>,
) -> usize {
    buffer.clear();

    if char_width == 0 || char_height == 0 || img_width == 0 || img_height == 0 || gray.is_empty() {
        return 0;
    }

    let output_size = (char_width as usize) * (char_height as usize);
    buffer.reserve(output_size);

    let cell_w = img_width as f32 / char_width as f32;
    let cell_h = img_height as f32 / char_height as f32;

    for cy in 0..char_height {
        let (start_y, end_y) = cell_span(cy, cell_h);
        for cx in 0..char_width {
            let (start_x, end_x) = cell_span(cx, cell_w);

            let mut sum = 0u32;
            let mut count = 0u32;

            for py in start_y..end_y.min(img_height) {
                for px in start_x..end_x.min(img_width) {
                    let idx = (py * img_width + px) as usize;
                    if let Some(&value) = gray.get(idx) {
                        sum += value as u32;
                        count += 1;
                    }
                }
            }

            buffer.push(if count > 0 { (sum / count) as u8 } else { 0 });
        }
    }

    output_size
}

/// Downsample packed RGB pixels to the average color of each character cell.
///
/// # Returns
/// The number of color values written to the buffer.
pub fn downsample_colors_into(
    rgb: &[u8],
    img_width: u32,
    img_height: u32,
    char_width: u16,
    char_height: u16,
    buffer: &mut Vec<CellColor>,
) -> usize {
    buffer.clear();

    if char_width == 0 || char_height == 0 || img_width == 0 || img_height == 0 || rgb.is_empty() {
        return 0;
    }

    let output_size = (char_width as usize) * (char_height as usize);
    buffer.reserve(output_size);

    let cell_w = img_width as f32 / char_width as f32;
    let cell_h = img_height as f32 / char_height as f32;

    for cy in 0..char_height {
        let (start_y, end_y) = cell_span(cy, cell_h);
        for cx in 0..char_width {
            let (start_x, end_x) = cell_span(cx, cell_w);

            let mut sum_r = 0u32;
            let mut sum_g = 0u32;
            let mut sum_b = 0u32;
            let mut count = 0u32;

            for py in start_y..end_y.min(img_height) {
                for px in start_x..end_x.min(img_width) {
                    let idx = ((py * img_width + px) * 3) as usize;
                    if let Some(px) = rgb.get(idx..idx + 3) {
                        sum_r += px[0] as u32;
                        sum_g += px[1] as u32;
                        sum_b += px[2] as u32;
                        count += 1;
                    }
                }
            }

            buffer.push(if count > 0 {
                CellColor {
                    r: (sum_r / count) as u8,
                    g: (sum_g / count) as u8,
                    b: (sum_b / count) as u8,
                }
            } else {
                CellColor::default()
            });
        }
    }

    output_size
}
