//! End-to-end tests for turning frames and composed grids into ASCII.

use quad_looper::ascii::{
    fit_cells, AsciiConverter, AsciiStyle, CellColor, CharSet, BLOCKS_CHARSET,
    MINIMAL_CHARSET, STANDARD_CHARSET,
};
use quad_looper::camera::Frame;
use quad_looper::grid::compose_grid;
use std::collections::HashSet;

/// Helper to create a test frame with specified pattern.
fn make_test_frame(pattern: &str, width: u32, height: u32) -> Frame {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let brightness = match pattern {
                "gradient_h" => (x * 255 / (width - 1).max(1)) as u8,
                "face_like" => {
                    let dx = x as f32 - width as f32 / 2.0;
                    let dy = y as f32 - height as f32 / 2.0;
                    let max = ((width * width + height * height) as f32).sqrt() / 2.0;
                    (255.0 * (1.0 - (dx * dx + dy * dy).sqrt() / max)).max(0.0) as u8
                }
                _ => 128,
            };
            data.extend_from_slice(&[brightness, brightness, brightness]);
        }
    }
    Frame::new(data, width, height)
}

fn style(charset: CharSet) -> AsciiStyle {
    AsciiStyle {
        charset,
        invert: false,
    }
}

#[test]
fn test_face_like_frame_has_detail() {
    let frame = make_test_frame("face_like", 320, 240);
    let (cols, rows) = fit_cells(frame.width, frame.height, 80, 24);
    let ascii = AsciiConverter::new().convert(
        &frame.data,
        frame.width,
        frame.height,
        cols,
        rows,
        style(CharSet::Standard),
    );

    let distinct: HashSet<char> = ascii.chars.iter().copied().collect();
    assert!(distinct.len() >= 5, "Expected varied characters, got {:?}", distinct);
    assert_eq!(ascii.chars.len(), cols as usize * rows as usize);
}

#[test]
fn test_gradient_runs_dark_to_bright() {
    let frame = make_test_frame("gradient_h", 200, 50);
    let ascii = AsciiConverter::new().convert(
        &frame.data,
        frame.width,
        frame.height,
        10,
        2,
        style(CharSet::Standard),
    );

    let level = |c: &char| STANDARD_CHARSET.iter().position(|s| s == c).unwrap();
    let levels: Vec<usize> = ascii.rows().next().unwrap().iter().map(level).collect();
    assert_eq!(levels[0], 0);
    assert!(levels.windows(2).all(|w| w[0] <= w[1]), "{:?}", levels);
    assert!(levels[9] >= STANDARD_CHARSET.len() - 2);
}

#[test]
fn test_charsets_look_different() {
    let frame = make_test_frame("face_like", 160, 120);
    let mut converter = AsciiConverter::new();

    let mut seen = Vec::new();
    for (charset, chars) in [
        (CharSet::Standard, STANDARD_CHARSET),
        (CharSet::Blocks, BLOCKS_CHARSET),
        (CharSet::Minimal, MINIMAL_CHARSET),
    ] {
        let ascii = converter.convert(&frame.data, 160, 120, 40, 15, style(charset));
        assert!(ascii.chars.iter().all(|c| chars.contains(c)));
        seen.push(ascii.chars);
    }
    assert_ne!(seen[0], seen[1]);
    assert_ne!(seen[1], seen[2]);
}

#[test]
fn test_invert_flips_brightness() {
    let white = Frame::filled(16, 16, [255, 255, 255]);
    let ascii = AsciiConverter::new().convert(
        &white.data,
        16,
        16,
        4,
        4,
        AsciiStyle {
            charset: CharSet::Minimal,
            invert: true,
        },
    );
    assert!(ascii.chars.iter().all(|&c| c == MINIMAL_CHARSET[0]));
}

#[test]
fn test_composed_grid_quadrant_colours() {
    let red = Frame::filled(64, 48, [255, 0, 0]);
    let green = Frame::filled(1280, 720, [0, 255, 0]);
    let blue = Frame::filled(320, 240, [0, 0, 255]);
    let black = Frame::blank(320, 240);
    let grid = compose_grid([&red, &green, &blue, &black]);

    let ascii = AsciiConverter::new().convert(
        grid.as_raw(),
        grid.width(),
        grid.height(),
        8,
        4,
        style(CharSet::Blocks),
    );

    assert_eq!(ascii.color_at(0, 0), Some(CellColor { r: 255, g: 0, b: 0 }));
    assert_eq!(ascii.color_at(7, 0), Some(CellColor { r: 0, g: 255, b: 0 }));
    assert_eq!(ascii.color_at(0, 3), Some(CellColor { r: 0, g: 0, b: 255 }));
    assert_eq!(ascii.color_at(7, 3), Some(CellColor { r: 0, g: 0, b: 0 }));
}
