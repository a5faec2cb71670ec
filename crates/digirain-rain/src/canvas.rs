//! A pixel [`Surface`] composited onto the terminal cell grid.
//!
//! Every cell stands for a `cell_width` x `cell_height` block of virtual
//! pixels. A cell remembers the last glyph painted into it and its composited
//! color, so the per-frame black overlay fades old glyphs out gradually the
//! same way a translucent canvas fill does.

use digirain_core::{DrawError, Rgb, Surface};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::color::{blend, luminance, to_color};

/// Cells dimmer than this are rendered as blank.
const VISIBLE_LUMINANCE: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct CanvasCell {
    glyph: char,
    rgb: [f32; 3],
}

impl Default for CanvasCell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            rgb: [0.0; 3],
        }
    }
}

/// Terminal-backed drawing surface.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    cols: u16,
    rows: u16,
    cell_width: f32,
    cell_height: f32,
    cells: Vec<CanvasCell>,
}

impl CellCanvas {
    pub fn new(cols: u16, rows: u16, cell_width: f32, cell_height: f32) -> Self {
        Self {
            cols,
            rows,
            cell_width,
            cell_height,
            cells: vec![CanvasCell::default(); cols as usize * rows as usize],
        }
    }

    /// Grid size in cells.
    pub fn grid_size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Resize the grid, clearing everything painted so far.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![CanvasCell::default(); cols as usize * rows as usize];
    }

    /// Glyph and color at a cell, or `None` if it is blank or out of range.
    pub fn cell(&self, col: u16, row: u16) -> Option<(char, Rgb)> {
        let cell = self.cells.get(self.index(col, row)?)?;
        if luminance(cell.rgb) < VISIBLE_LUMINANCE || cell.glyph == ' ' {
            return None;
        }
        let rgb = cell.rgb.map(|v| v.round().clamp(0.0, 255.0) as u8);
        Some((cell.glyph, Rgb::new(rgb[0], rgb[1], rgb[2])))
    }

    fn index(&self, col: u16, row: u16) -> Option<usize> {
        (col < self.cols && row < self.rows).then(|| row as usize * self.cols as usize + col as usize)
    }

    /// Cell column containing pixel `x`.
    fn col_at(&self, x: f32) -> Option<u16> {
        let col = (x / self.cell_width).floor();
        (col >= 0.0 && col < self.cols as f32).then_some(col as u16)
    }

    /// Cell row holding a glyph whose baseline sits at `y`.
    ///
    /// The glyph body spans the cell_height pixels above the baseline, so a
    /// baseline of exactly 0 is entirely off the top.
    fn row_at_baseline(&self, y: f32) -> Option<u16> {
        let row = (y / self.cell_height).ceil() - 1.0;
        (row >= 0.0 && row < self.rows as f32).then_some(row as u16)
    }
}

impl Surface for CellCanvas {
    fn width(&self) -> f32 {
        self.cols as f32 * self.cell_width
    }

    fn height(&self) -> f32 {
        self.rows as f32 * self.cell_height
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32) {
        if !(w > 0.0 && h > 0.0) {
            return;
        }
        let col_start = (x / self.cell_width).floor().max(0.0) as usize;
        let col_end = ((x + w) / self.cell_width).ceil().min(self.cols as f32).max(0.0) as usize;
        let row_start = (y / self.cell_height).floor().max(0.0) as usize;
        let row_end = ((y + h) / self.cell_height).ceil().min(self.rows as f32).max(0.0) as usize;

        let cols = self.cols as usize;
        for row in row_start..row_end {
            for cell in &mut self.cells[row * cols + col_start.min(col_end)..row * cols + col_end] {
                cell.rgb = blend(cell.rgb, color, alpha);
            }
        }
    }

    /// The terminal font is fixed, so `font_size` only matters to callers
    /// positioning glyphs; the cell grid decides the rendered size.
    fn draw_glyph(
        &mut self,
        glyph: char,
        x: f32,
        y: f32,
        _font_size: f32,
        color: Rgb,
        alpha: f32,
    ) -> Result<(), DrawError> {
        if glyph.is_control() {
            return Err(DrawError::UnsupportedGlyph(glyph));
        }
        if !(x.is_finite() && y.is_finite() && alpha.is_finite()) {
            return Err(DrawError::InvalidGeometry { x, y });
        }

        let (Some(col), Some(row)) = (self.col_at(x), self.row_at_baseline(y)) else {
            return Ok(());
        };
        if let Some(idx) = self.index(col, row) {
            let cell = &mut self.cells[idx];
            cell.glyph = glyph;
            cell.rgb = blend(cell.rgb, color, alpha);
        }
        Ok(())
    }
}

impl Widget for &CellCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.rows.min(area.height);
        let cols = self.cols.min(area.width);
        let mut utf8 = [0u8; 4];

        for row in 0..rows {
            for col in 0..cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if cell.glyph == ' ' || luminance(cell.rgb) < VISIBLE_LUMINANCE {
                    continue;
                }
                buf.set_string(
                    area.x + col,
                    area.y + row,
                    cell.glyph.encode_utf8(&mut utf8),
                    Style::new().fg(to_color(cell.rgb)),
                );
            }
        }
    }
}
