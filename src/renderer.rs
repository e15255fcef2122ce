//! Draws the live pane, the grid pane and the status bar.
//!
//! Panes are placed with ratatui's layout engine. Each draw builds one string
//! of ANSI escape sequences (cursor moves and 24-bit foreground colours)
//! into those rects and writes it in a single call to limit flicker. The
//! screen is only cleared after a resize.

use ratatui::layout::Rect;
use std::fmt::Write as _;
use std::io::{self, Write};

use crate::ascii::{fit_cells, AsciiConverter, AsciiStyle, CellColor};
use crate::router::{RecordingState, STREAM_COUNT};
use crate::session::TickOutput;
use crate::terminal::{centered, content_area, AsciiFrame, PaneLayout, StatusBar};

/// Title of the live camera pane.
pub const LIVE_TITLE: &str = "Live Camera Feed";
/// Title of the playback grid pane.
pub const GRID_TITLE: &str = "2x2 Video Grid";

/// Display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub style: AsciiStyle,
    pub status_bar: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            style: AsciiStyle::default(),
            status_bar: true,
        }
    }
}

/// Recording state shown alongside a tick's images.
#[derive(Debug, Clone, Copy)]
pub struct StatusInfo {
    pub state: RecordingState,
    pub lens: [usize; STREAM_COUNT],
    pub camera_running: bool,
}

/// Terminal renderer writing to any `Write` (stdout in the app, a `Vec<u8>`
/// in tests).
pub struct Renderer<W: Write> {
    out: W,
    layout: PaneLayout,
    style: AsciiStyle,
    status_bar: StatusBar,
    converter: AsciiConverter,
    needs_clear: bool,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer for a `cols x rows` terminal.
    pub fn new(out: W, cols: u16, rows: u16, options: DisplayOptions) -> Self {
        Self {
            out,
            layout: PaneLayout::compute(cols, rows, options.status_bar),
            style: options.style,
            status_bar: StatusBar::with_visibility(options.status_bar),
            converter: AsciiConverter::new(),
            needs_clear: true,
        }
    }

    /// Recompute the layout after a terminal resize.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.layout = PaneLayout::compute(cols, rows, self.status_bar.visible);
        self.needs_clear = true;
    }

    /// Current layout.
    pub fn layout(&self) -> PaneLayout {
        self.layout
    }

    /// Draw one tick. Panes without a new image keep their previous content,
    /// which freezes the grid while recording.
    pub fn draw(&mut self, output: &TickOutput, status: &StatusInfo) -> io::Result<()> {
        let mut buf = String::new();

        if self.needs_clear {
            buf.push_str("\x1b[2J");
            self.needs_clear = false;
        }

        push_title(&mut buf, self.layout.live, LIVE_TITLE);
        let grid_title = if status.state == RecordingState::Idle {
            GRID_TITLE.to_string()
        } else {
            format!("{} (paused while recording)", GRID_TITLE)
        };
        push_title(&mut buf, self.layout.grid, &grid_title);

        if let Some(frame) = &output.live {
            self.push_image(&mut buf, self.layout.live, &frame.data, frame.width, frame.height);
        }
        if let Some(grid) = &output.grid {
            self.push_image(&mut buf, self.layout.grid, grid.as_raw(), grid.width(), grid.height());
        }

        if let Some(rect) = self.layout.status {
            let text = self
                .status_bar
                .format(status.state, status.lens, status.camera_running);
            push_status(&mut buf, rect, &text);
        }

        self.out.write_all(buf.as_bytes())?;
        self.out.flush()
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn push_image(&mut self, buf: &mut String, pane: Rect, rgb: &[u8], width: u32, height: u32) {
        let content = content_area(pane);
        if content.is_empty() {
            return;
        }
        let (cols, rows) = fit_cells(width, height, content.width, content.height);
        let area = centered(content, cols, rows);
        let frame = self
            .converter
            .convert(rgb, width, height, area.width, area.height, self.style);
        push_ascii(buf, &frame, area);
    }
}

/// Move the cursor to a 0-based cell.
fn push_move(buf: &mut String, x: u16, y: u16) {
    let _ = write!(buf, "\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1);
}

/// Draw `text` in bold on the pane's first row, padded to erase old text.
fn push_title(buf: &mut String, pane: Rect, text: &str) {
    if pane.is_empty() {
        return;
    }
    push_move(buf, pane.x, pane.y);
    let width = pane.width as usize;
    let title: String = text.chars().take(width).collect();
    let _ = write!(buf, "\x1b[1m{:<width$}\x1b[0m", title, width = width);
}

/// Draw the status bar in reverse video across the full row.
fn push_status(buf: &mut String, rect: Rect, text: &str) {
    push_move(buf, rect.x, rect.y);
    let width = rect.width as usize;
    let text: String = text.chars().take(width).collect();
    let _ = write!(buf, "\x1b[7m{:<width$}\x1b[0m", text, width = width);
}

/// Draw an ASCII frame with per-cell true colour, clipped to `area`.
fn push_ascii(buf: &mut String, frame: &AsciiFrame, area: Rect) {
    let mut current: Option<CellColor> = None;

    for (row, line) in frame.rows().enumerate().take(area.height as usize) {
        push_move(buf, area.x, area.y + row as u16);
        for (col, &c) in line.iter().enumerate().take(area.width as usize) {
            if let Some(color) = frame.color_at(col as u16, row as u16) {
                if current != Some(color) {
                    let _ = write!(buf, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
                    current = Some(color);
                }
            }
            buf.push(c);
        }
    }

    buf.push_str("\x1b[0m");
}
