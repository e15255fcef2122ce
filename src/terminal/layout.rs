//! Screen layout: live pane on the left, grid pane on the right, status bar
//! on the bottom row.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Positions of the two panes and the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    /// Live camera pane
    pub live: Rect,
    /// 2x2 grid pane
    pub grid: Rect,
    /// Status bar row, if shown
    pub status: Option<Rect>,
}

impl PaneLayout {
    /// Split a `cols x rows` terminal into two side-by-side panes separated
    /// by one blank column.
    pub fn compute(cols: u16, rows: u16, status_bar: bool) -> Self {
        let screen = Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        };

        let (body, status) = if status_bar && rows > 1 {
            let [body, status] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(screen);
            (body, Some(status))
        } else {
            (screen, None)
        };

        let [live, _gap, grid] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(body);

        Self { live, grid, status }
    }
}

/// The area below a pane's title row.
pub fn content_area(pane: Rect) -> Rect {
    let [_title, content] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(pane);
    content
}

/// A `width x height` area centered inside `area`, clamped to its size.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
