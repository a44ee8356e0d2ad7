//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions can be used by the engine, the renderer and the input layer.
//!
//! # Field Dimensions
//!
//! The playable area is 10 columns by 20 rows. The engine stores it with a
//! one-cell border on every side, so the backing grid is 12 x 22:
//!
//! ```text
//! -1 -1 -1 -1
//! -1  0  0 -1
//! -1  0  0 -1
//! -1 -1 -1 -1
//! ```
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 250 | Gravity period: one step plus one line-clear pass |
//!
//! # Examples
//!
//! ```
//! use tetro_types::{palette_color, PieceKind, Rgb, Rotation, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//!
//! assert_eq!(PieceKind::T.color_index(), 2);
//! assert_eq!(palette_color(PieceKind::T.color_index()), Rgb::new(192, 192, 192));
//!
//! assert_eq!(Rotation::SPAWN.next().index(), 1);
//! ```

/// Playable columns.
pub const FIELD_WIDTH: usize = 10;

/// Playable rows.
pub const FIELD_HEIGHT: usize = 20;

/// Backing grid width including the left and right border columns.
pub const GRID_WIDTH: usize = FIELD_WIDTH + 2;

/// Backing grid height including the top and bottom border rows.
pub const GRID_HEIGHT: usize = FIELD_HEIGHT + 2;

/// Number of blocks in a tetromino, also the side of its bounding box.
pub const TETRO_SIZE: usize = 4;

/// Side of one block on a pixel surface.
pub const BLOCK_SIZE: u16 = 20;

/// Pixel surface width for the default block size.
pub const WINDOW_WIDTH: u16 = BLOCK_SIZE * FIELD_WIDTH as u16;

/// Pixel surface height for the default block size.
pub const WINDOW_HEIGHT: u16 = BLOCK_SIZE * FIELD_HEIGHT as u16;

/// Gravity period in milliseconds.
pub const TICK_MS: u32 = 250;

/// A single field cell.
///
/// - `EMPTY` (0): free
/// - `WALL` (-1): border, never overwritten
/// - `1..=7`: settled block, value is the palette index of the piece that left it
pub type Cell = i8;

/// Free cell.
pub const EMPTY: Cell = 0;

/// Border cell.
pub const WALL: Cell = -1;

/// The seven piece shapes, in shape-table order.
///
/// The discriminant is the shape identity; the palette index is one more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    T,
    S,
    Z,
    L,
    J,
    I,
}

impl PieceKind {
    /// All kinds, indexed by shape identity.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
    ];

    /// Shape identity (0..=6), the row of the shape table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Palette index (1..=7), also the value written into the field when the
    /// piece settles.
    pub const fn color_index(self) -> u8 {
        self as u8 + 1
    }
}

/// Rotation index of a piece (0..=3).
///
/// Rotation only ever advances, wrapping from 3 back to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rotation(u8);

impl Rotation {
    /// Orientation every piece spawns with.
    pub const SPAWN: Rotation = Rotation(0);

    /// Build from any integer, wrapping into 0..=3.
    pub const fn new(index: u8) -> Self {
        Rotation(index % 4)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Next rotation in the cycle.
    ///
    /// ```
    /// use tetro_types::Rotation;
    ///
    /// let r = Rotation::SPAWN.next().next().next().next();
    /// assert_eq!(r, Rotation::SPAWN);
    /// ```
    pub const fn next(self) -> Self {
        Rotation::new(self.0 + 1)
    }
}

/// Commands the input layer can send to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance the rotation index
    Rotate,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// One gravity step, same landing rules as a tick
    SoftDrop,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Block colors. Index 0 is the unused background entry, 1..=7 follow
/// [`PieceKind::ALL`].
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(0, 0, 0),
    Rgb::new(170, 0, 0),
    Rgb::new(192, 192, 192),
    Rgb::new(170, 0, 170),
    Rgb::new(0, 0, 170),
    Rgb::new(0, 170, 0),
    Rgb::new(170, 85, 0),
    Rgb::new(0, 170, 170),
];

/// Look up a palette entry, falling back to the background for unknown
/// indices.
pub fn palette_color(index: u8) -> Rgb {
    PALETTE.get(index as usize).copied().unwrap_or(PALETTE[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_includes_border() {
        assert_eq!(GRID_WIDTH, 12);
        assert_eq!(GRID_HEIGHT, 22);
        assert_eq!(WINDOW_WIDTH, 200);
        assert_eq!(WINDOW_HEIGHT, 400);
    }

    #[test]
    fn color_index_follows_shape_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(kind.color_index() as usize, i + 1);
            assert_eq!(PieceKind::ALL[kind.index()], *kind);
        }
    }

    #[test]
    fn rotation_wraps() {
        assert_eq!(Rotation::new(5).index(), 1);
        assert_eq!(Rotation::new(3).next(), Rotation::SPAWN);
    }

    #[test]
    fn palette_lookup() {
        assert_eq!(palette_color(PieceKind::O.color_index()), Rgb::new(170, 0, 0));
        assert_eq!(palette_color(PieceKind::I.color_index()), Rgb::new(0, 170, 170));
        assert_eq!(palette_color(42), PALETTE[0]);
    }
}
