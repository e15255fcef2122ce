//! Brightness to character mapping.

/// Map brightness values to characters, reusing an existing buffer.
///
/// Lower brightness maps to earlier characters of `charset` (darker), higher
/// brightness to later ones. With `invert`, brightness is flipped first for
/// light terminal themes.
///
/// # Returns
/// The number of characters written to the buffer.
pub fn map_to_chars_into(
    brightness: &[u8],
    charset: &[char],
    invert: bool,
    buffer: &mut Vec<char>,
) -> usize {
    buffer.clear();

    if charset.is_empty() {
        buffer.resize(brightness.len(), ' ');
        return brightness.len();
    }

    buffer.reserve(brightness.len());
    let levels = charset.len();

    for &b in brightness {
        let b = if invert { 255 - b } else { b };
        let idx = (b as usize * (levels - 1)) / 255;
        buffer.push(charset[idx]);
    }

    brightness.len()
}
