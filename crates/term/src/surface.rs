//! Drawing-surface seam between the engine and any renderer.
//!
//! The engine only exposes read accessors. [`draw_scene`] turns them into
//! colored blocks on something that implements [`Surface`], so the same
//! scene code drives the terminal, a pixel window, or a recording test double.

use anyhow::Result;

use crate::core::{Field, GameState};
use crate::types::{palette_color, Rgb, BLOCK_SIZE, FIELD_HEIGHT, FIELD_WIDTH};

/// Something that can show colored blocks on a 10x20 grid.
///
/// Coordinates are 0-based playable cells; the field border is never drawn.
pub trait Surface {
    /// Start a new frame.
    fn clear(&mut self);

    /// Paint one block.
    fn draw_cell(&mut self, col: u8, row: u8, color: Rgb);

    /// Make the frame visible.
    fn present(&mut self) -> Result<()>;
}

/// Size of one block in surface units, and the grid-to-surface mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGeometry {
    pub block_w: u16,
    pub block_h: u16,
}

impl BlockGeometry {
    /// Square pixel blocks of [`BLOCK_SIZE`].
    pub const PIXELS: BlockGeometry = BlockGeometry {
        block_w: BLOCK_SIZE,
        block_h: BLOCK_SIZE,
    };

    /// Two columns by one row, roughly square in a terminal.
    pub const TERMINAL: BlockGeometry = BlockGeometry {
        block_w: 2,
        block_h: 1,
    };

    /// Zero sizes are raised to 1.
    pub fn new(block_w: u16, block_h: u16) -> Self {
        Self {
            block_w: block_w.max(1),
            block_h: block_h.max(1),
        }
    }

    /// Top-left corner of a cell.
    pub fn origin(&self, col: u8, row: u8) -> (u16, u16) {
        (col as u16 * self.block_w, row as u16 * self.block_h)
    }

    /// Size of the whole playable area.
    pub fn window_size(&self) -> (u16, u16) {
        (
            FIELD_WIDTH as u16 * self.block_w,
            FIELD_HEIGHT as u16 * self.block_h,
        )
    }
}

impl Default for BlockGeometry {
    fn default() -> Self {
        Self::TERMINAL
    }
}

/// Draw one frame: the falling piece, then every settled block, then present.
pub fn draw_scene<S: Surface + ?Sized>(state: &GameState, surface: &mut S) -> Result<()> {
    surface.clear();

    let piece_color = palette_color(state.piece_color());
    for (x, y) in state.piece_cells() {
        // A fresh vertical line still overlaps the top wall.
        if let Some((col, row)) = to_surface(x, y) {
            surface.draw_cell(col, row, piece_color);
        }
    }

    for (x, y, color) in state.settled_cells() {
        if let Some((col, row)) = to_surface(x as i8, y as i8) {
            surface.draw_cell(col, row, palette_color(color));
        }
    }

    surface.present()
}

fn to_surface(x: i8, y: i8) -> Option<(u8, u8)> {
    Field::is_interior(x, y).then(|| ((x - 1) as u8, (y - 1) as u8))
}
