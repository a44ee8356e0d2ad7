//! Field module - the bordered playing grid
//!
//! The field is a fixed 12x22 array of integer cells: the 10x20 playable area
//! plus a one-cell frame of [`WALL`] cells. Because the frame is always there,
//! neighbour lookups for a piece that sits inside the playable area never run
//! off the grid.
//!
//! Coordinates: `(x, y)` with `x` in `0..GRID_WIDTH` (left to right) and `y` in
//! `0..GRID_HEIGHT` (top to bottom). Interior cells are `1..=FIELD_WIDTH` by
//! `1..=FIELD_HEIGHT`.

use arrayvec::ArrayVec;

use crate::types::{Cell, EMPTY, FIELD_HEIGHT, FIELD_WIDTH, GRID_HEIGHT, GRID_WIDTH, WALL};

/// The playing grid, row-major (`cells[y][x]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    cells: [[Cell; GRID_WIDTH]; GRID_HEIGHT],
}

impl Field {
    /// Create an empty field surrounded by walls.
    pub fn new() -> Self {
        let mut cells = [[EMPTY; GRID_WIDTH]; GRID_HEIGHT];
        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                if Self::is_border(x as i8, y as i8) {
                    *cell = WALL;
                }
            }
        }
        Self { cells }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || x as usize >= GRID_WIDTH || y < 0 || y as usize >= GRID_HEIGHT {
            return None;
        }
        Some((x as usize, y as usize))
    }

    /// Whether `(x, y)` lies on the frame.
    pub fn is_border(x: i8, y: i8) -> bool {
        x == 0 || x == GRID_WIDTH as i8 - 1 || y == 0 || y == GRID_HEIGHT as i8 - 1
    }

    /// Whether `(x, y)` lies in the playable area.
    pub fn is_interior(x: i8, y: i8) -> bool {
        (1..=FIELD_WIDTH as i8).contains(&x) && (1..=FIELD_HEIGHT as i8).contains(&y)
    }

    /// Cell at `(x, y)`, `None` off the grid.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|(x, y)| self.cells[y][x])
    }

    /// True when `(x, y)` is on the grid and empty. Walls, settled blocks and
    /// anything off the grid all count as occupied.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    /// Write an interior cell.
    ///
    /// Returns false (and leaves the field untouched) for border or
    /// off-grid coordinates, and for values that are not a valid cell.
    pub fn set(&mut self, x: i8, y: i8, value: Cell) -> bool {
        if !Self::is_interior(x, y) || value < EMPTY {
            return false;
        }
        self.cells[y as usize][x as usize] = value;
        true
    }

    /// Every interior column of row `y` is non-zero.
    pub fn is_row_complete(&self, y: usize) -> bool {
        if !(1..=FIELD_HEIGHT).contains(&y) {
            return false;
        }
        self.cells[y][1..=FIELD_WIDTH].iter().all(|&cell| cell != EMPTY)
    }

    /// Complete rows, bottom to top.
    pub fn complete_rows(&self) -> ArrayVec<usize, FIELD_HEIGHT> {
        (1..=FIELD_HEIGHT)
            .rev()
            .filter(|&y| self.is_row_complete(y))
            .collect()
    }

    /// Collapse complete rows, scanning from the bottom row up.
    ///
    /// Each complete row `y` is removed by copying every row above it one row
    /// down. Row 1 is copied but never blanked, so after a collapse the top
    /// interior row appears twice. The same `y` is checked again after each
    /// collapse, at most `y - 1` times, so stacked complete rows all go in one
    /// pass.
    ///
    /// Returns the number of collapses performed.
    pub fn delete_completed_lines(&mut self) -> usize {
        let mut collapsed = 0;
        for y in (1..=FIELD_HEIGHT).rev() {
            for _ in 1..y {
                if !self.is_row_complete(y) {
                    break;
                }
                self.shift_down_into(y);
                collapsed += 1;
            }
        }
        collapsed
    }

    /// Copy rows `1..y` one row down, overwriting row `y`.
    fn shift_down_into(&mut self, y: usize) {
        for row in (1..y).rev() {
            let src = self.cells[row];
            self.cells[row + 1][1..=FIELD_WIDTH].copy_from_slice(&src[1..=FIELD_WIDTH]);
        }
    }

    /// Non-empty interior cells as `(x, y, color_index)`.
    pub fn settled_cells(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        (1..=FIELD_HEIGHT).flat_map(move |y| {
            (1..=FIELD_WIDTH).filter_map(move |x| {
                let cell = self.cells[y][x];
                (cell > EMPTY).then_some((x as u8, y as u8, cell as u8))
            })
        })
    }

    /// All border cells still hold [`WALL`].
    pub fn borders_intact(&self) -> bool {
        self.cells.iter().enumerate().all(|(y, row)| {
            row.iter()
                .enumerate()
                .all(|(x, &cell)| !Self::is_border(x as i8, y as i8) || cell == WALL)
        })
    }

    /// Build a field from interior rows given as text, bottom-aligned.
    ///
    /// `.` is empty and `1`-`7` are settled blocks; other characters are
    /// treated as empty. Rows that are not given stay empty.
    ///
    /// ```
    /// use tetro_core::Field;
    ///
    /// let field = Field::from_rows(&["1..........", "2222222222"]);
    /// assert_eq!(field.get(1, 19), Some(1));
    /// assert!(field.is_row_complete(20));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut field = Self::new();
        let first = (FIELD_HEIGHT + 1).saturating_sub(rows.len()).max(1);
        for (i, text) in rows.iter().take(FIELD_HEIGHT).enumerate() {
            let y = (first + i) as i8;
            for (col, ch) in text.chars().take(FIELD_WIDTH).enumerate() {
                let value = ch.to_digit(10).filter(|d| (1..=7).contains(d)).unwrap_or(0);
                field.set(col as i8 + 1, y, value as Cell);
            }
        }
        field
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
