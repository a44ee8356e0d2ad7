//! Shapes module - tetromino shape table and its digit encoding
//!
//! Each rotation of each shape is stored as a small decimal number. Read as
//! four digits (leading zeros implied), digit `i` is row `i` of the shape's
//! 4x4 box, and the digit's binary picture is the row's occupancy:
//!
//! ```text
//! T, rotation 0 = 27 = 0027
//!   0  0000
//!   0  0000
//!   2  0010
//!   7  0111
//! ```
//!
//! A full row (`1111` = 15) does not fit in one digit, so the horizontal
//! line uses the sentinel code [`HORIZONTAL_LINE`], which marks the last row
//! as fully occupied.
//!
//! The codes are decoded once, at compile time, into [`SHAPES`].

use crate::types::{PieceKind, Rotation, TETRO_SIZE};

/// Offset of a single block relative to the piece anchor
pub type BlockOffset = (i8, i8);

/// Shape of a piece - 4 block offsets from the anchor
pub type PieceShape = [BlockOffset; TETRO_SIZE];

/// Sentinel code: bottom row of the box fully occupied.
pub const HORIZONTAL_LINE: u16 = 9;

/// Encoded rotations, indexed by shape identity then rotation index.
pub const SHAPE_CODES: [[u16; 4]; 7] = [
    // O
    // 0110
    // 0110
    [66, 66, 66, 66],
    // T
    // 0010
    // 0111
    [27, 131, 72, 232],
    // S
    // 0011
    // 0110
    [36, 231, 36, 231],
    // Z
    // 0110
    // 0011
    [63, 132, 63, 132],
    // L
    // 0011
    // 0001
    // 0001
    [311, 17, 223, 74],
    // J
    // 0011
    // 0010
    // 0010
    [322, 71, 113, 47],
    // I
    // 0001 x4 vertical, sentinel for horizontal
    [1111, HORIZONTAL_LINE, 1111, HORIZONTAL_LINE],
];

/// Decoded shape table, indexed like [`SHAPE_CODES`].
pub const SHAPES: [[PieceShape; 4]; 7] = build_table();

const fn build_table() -> [[PieceShape; 4]; 7] {
    let mut table = [[[(0, 0); TETRO_SIZE]; 4]; 7];
    let mut kind = 0;
    while kind < 7 {
        let mut rotation = 0;
        while rotation < 4 {
            table[kind][rotation] = decode(SHAPE_CODES[kind][rotation]);
            rotation += 1;
        }
        kind += 1;
    }
    table
}

/// Decode one rotation code into block offsets `(column, row)`.
///
/// Rows are read from the most significant digit down. Within a row,
/// columns are scanned from 3 to 0; the digit's lowest bit is column 3 and
/// its bit of value 8 is column 0, matching the binary picture. Blocks are
/// returned in scan order.
///
/// Every code in [`SHAPE_CODES`] yields exactly four blocks. Other inputs are
/// not validated beyond a debug assertion; extra blocks are dropped.
///
/// ```
/// use tetro_core::shapes::decode;
///
/// // 0066: rows 2 and 3 are 0110.
/// assert_eq!(decode(66), [(2, 2), (1, 2), (2, 3), (1, 3)]);
/// ```
pub const fn decode(code: u16) -> PieceShape {
    let horizontal = code == HORIZONTAL_LINE;
    let mut out = [(0, 0); TETRO_SIZE];
    let mut count = 0;
    let mut rest = code;
    let mut place = 1000;
    let mut row = 0;
    while row < TETRO_SIZE {
        let mut digit = rest / place;
        rest %= place;
        place /= 10;

        let mut col = TETRO_SIZE;
        while col > 0 {
            col -= 1;
            let bit = digit % 2;
            digit /= 2;
            if bit == 1 || (horizontal && row == TETRO_SIZE - 1) {
                if count < TETRO_SIZE {
                    out[count] = (col as i8, row as i8);
                }
                count += 1;
            }
        }
        row += 1;
    }
    debug_assert!(count == TETRO_SIZE);
    out
}

/// Get the block offsets for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// Block offsets every piece spawns with
pub fn get_spawn_shape(kind: PieceKind) -> PieceShape {
    get_shape(kind, Rotation::SPAWN)
}
