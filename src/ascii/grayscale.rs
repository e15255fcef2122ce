//! RGB to grayscale conversion using ITU-R BT.601 luminance formula.

/// Convert packed RGB pixels to grayscale, reusing an existing buffer.
///
/// The luminance formula is `Y = 0.299*R + 0.587*G + 0.114*B`, computed with
/// integer coefficients scaled by 1000 to stay out of floating point in the
/// per-tick path. Trailing bytes that don't form a full pixel are ignored.
///
/// # Returns
/// The number of pixels written to the buffer
pub fn to_grayscale_into(rgb: &[u8], buffer: &mut Vec<u8>) -> usize {
    buffer.clear();
    buffer.reserve(rgb.len() / 3);

    for px in rgb.chunks_exact(3) {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        let luminance = (299 * r + 587 * g + 114 * b) / 1000;
        buffer.push(luminance as u8);
    }

    buffer.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_primaries() {
        let mut gray = Vec::new();
        let n = to_grayscale_into(&[255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255], &mut gray);
        assert_eq!(n, 4);
        assert_eq!(gray, vec![76, 149, 29, 255]);
    }

    #[test]
    fn test_grayscale_reuses_buffer() {
        let mut gray = vec![9; 100];
        to_grayscale_into(&[0, 0, 0, 1], &mut gray);
        assert_eq!(gray, vec![0]);
    }
}
