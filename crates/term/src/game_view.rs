//! GameView: a [`Surface`] that paints into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use anyhow::Result;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::surface::{BlockGeometry, Surface};
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

/// Play-area background (the classic white clear color).
pub const BACKGROUND: Rgb = Rgb::new(255, 255, 255);

const BLOCK_CHAR: char = '█';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Play area centred in a viewport, framed by a box border.
#[derive(Debug, Clone)]
pub struct GameView {
    geometry: BlockGeometry,
    viewport: Viewport,
    fb: FrameBuffer,
}

impl GameView {
    pub fn new(geometry: BlockGeometry, viewport: Viewport) -> Self {
        Self {
            geometry,
            viewport,
            fb: FrameBuffer::new(viewport.width, viewport.height),
        }
    }

    pub fn geometry(&self) -> BlockGeometry {
        self.geometry
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adopt a new terminal size; takes effect on the next `clear`.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    /// Frame size including the one-character border.
    pub fn frame_size(&self) -> (u16, u16) {
        let (w, h) = self.geometry.window_size();
        (w + 2, h + 2)
    }

    /// Top-left corner of the border box.
    pub fn frame_origin(&self) -> (u16, u16) {
        let (w, h) = self.frame_size();
        (
            self.viewport.width.saturating_sub(w) / 2,
            self.viewport.height.saturating_sub(h) / 2,
        )
    }

    fn draw_border(&mut self, style: CellStyle) {
        let (x, y) = self.frame_origin();
        let (w, h) = self.frame_size();

        self.fb.paint(x, y, '┌', style);
        self.fb.paint(x + w - 1, y, '┐', style);
        self.fb.paint(x, y + h - 1, '└', style);
        self.fb.paint(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            self.fb.paint(x + dx, y, '─', style);
            self.fb.paint(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            self.fb.paint(x, y + dy, '│', style);
            self.fb.paint(x + w - 1, y + dy, '│', style);
        }
    }
}

impl Surface for GameView {
    fn clear(&mut self) {
        self.fb
            .reset(self.viewport.width, self.viewport.height, Cell::default());

        let (x, y) = self.frame_origin();
        let (w, h) = self.geometry.window_size();
        self.fb
            .paint_rect(x + 1, y + 1, w, h, ' ', CellStyle::new(BACKGROUND, BACKGROUND));

        self.draw_border(CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)));
    }

    fn draw_cell(&mut self, col: u8, row: u8, color: Rgb) {
        if col as usize >= FIELD_WIDTH || row as usize >= FIELD_HEIGHT {
            return;
        }
        let (fx, fy) = self.frame_origin();
        let (px, py) = self.geometry.origin(col, row);
        self.fb.paint_rect(
            fx + 1 + px,
            fy + 1 + py,
            self.geometry.block_w,
            self.geometry.block_h,
            BLOCK_CHAR,
            CellStyle::new(color, BACKGROUND),
        );
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_puts_border_at_edges() {
        // 10x2 by 20x1 cells plus border.
        let mut view = GameView::new(BlockGeometry::TERMINAL, Viewport::new(22, 22));
        view.clear();
        let fb = view.frame();
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
        assert_eq!(fb.get(0, 21).unwrap().ch, '└');
        assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
        assert_eq!(fb.get(1, 1).unwrap().style.bg, BACKGROUND);
    }

    #[test]
    fn cell_is_block_w_chars_wide() {
        let mut view = GameView::new(BlockGeometry::TERMINAL, Viewport::new(22, 22));
        view.clear();
        let red = Rgb::new(170, 0, 0);
        view.draw_cell(0, 19, red);

        let fb = view.frame();
        assert_eq!(fb.get(1, 20).unwrap().ch, BLOCK_CHAR);
        assert_eq!(fb.get(2, 20).unwrap().ch, BLOCK_CHAR);
        assert_eq!(fb.get(2, 20).unwrap().style.fg, red);
        assert_eq!(fb.get(3, 20).unwrap().ch, ' ');
    }

    #[test]
    fn out_of_field_cells_are_ignored() {
        let mut view = GameView::new(BlockGeometry::TERMINAL, Viewport::new(22, 22));
        view.clear();
        let before = view.frame().clone();
        view.draw_cell(10, 0, Rgb::new(1, 2, 3));
        view.draw_cell(0, 20, Rgb::new(1, 2, 3));
        assert_eq!(view.frame(), &before);
    }

    #[test]
    fn board_is_centred_in_larger_viewport() {
        let mut view = GameView::new(BlockGeometry::TERMINAL, Viewport::new(40, 30));
        view.clear();
        assert_eq!(view.frame_origin(), (9, 4));
        assert_eq!(view.frame().get(9, 4).unwrap().ch, '┌');
    }

    #[test]
    fn resize_applies_on_next_clear() {
        let mut view = GameView::new(BlockGeometry::TERMINAL, Viewport::new(22, 22));
        view.resize(Viewport::new(30, 25));
        view.clear();
        assert_eq!((view.frame().width(), view.frame().height()), (30, 25));
    }
}
