//! Frame conversion and transformation utilities.

use nokhwa::pixel_format::RgbFormat;

use super::types::Frame;

/// Convert a nokhwa buffer to an RGB [`Frame`] tagged with `sequence`.
///
/// nokhwa's `decode_image` handles the camera's native format (MJPEG, YUYV,
/// NV12, ...). Returns `None` if decoding fails or the decoded data does not
/// match the reported resolution.
pub fn convert_to_rgb(buffer: &nokhwa::Buffer, sequence: u64) -> Option<Frame> {
    let decoded = buffer.decode_image::<RgbFormat>().ok()?;
    let resolution = buffer.resolution();

    let frame = Frame::new(decoded.into_raw(), resolution.width(), resolution.height())
        .with_sequence(sequence);
    frame.is_well_formed().then_some(frame)
}

/// Mirror a frame horizontally (flip left-right) for selfie mode.
pub fn mirror_horizontal(frame: &mut Frame) {
    let width = frame.width as usize;
    let height = frame.height as usize;
    let bpp = Frame::BYTES_PER_PIXEL;

    for y in 0..height {
        let row_start = y * width * bpp;
        let Some(row) = frame.data.get_mut(row_start..row_start + width * bpp) else {
            return;
        };

        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            for i in 0..bpp {
                row.swap(left + i, right + i);
            }
        }
    }
}
