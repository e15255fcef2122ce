//! Character-grid sizing for images drawn into a terminal pane.

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

/// Largest `(cols, rows)` inside `max_cols x max_rows` that shows a
/// `width x height` image without stretching it.
///
/// Returns `(0, 0)` when either the image or the pane is empty.
pub fn fit_cells(width: u32, height: u32, max_cols: u16, max_rows: u16) -> (u16, u16) {
    if width == 0 || height == 0 || max_cols == 0 || max_rows == 0 {
        return (0, 0);
    }

    // Columns needed per row of characters
    let cols_per_row = width as f32 / height as f32 * CELL_ASPECT;

    let rows = (f32::from(max_cols) / cols_per_row).round();
    if rows < 1.0 {
        return (max_cols, 1);
    }
    if rows <= f32::from(max_rows) {
        return (max_cols, rows as u16);
    }

    let cols = (f32::from(max_rows) * cols_per_row).round() as u16;
    (cols.clamp(1, max_cols), max_rows)
}
