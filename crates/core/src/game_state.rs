//! Game state module - the field plus the falling piece
//!
//! One owned [`GameState`] holds everything the game knows. The clock calls
//! [`GameState::tick`], the input layer calls [`GameState::apply`], and the
//! renderer reads [`GameState::settled_cells`] / [`GameState::piece_cells`].
//!
//! Rules, all silent:
//! - a blocked horizontal move is ignored
//! - rotation is never blocked; only the anchor column is clamped
//! - a piece that cannot fall while its anchor is still in the top two rows
//!   restarts the whole session

use log::{debug, info, log_enabled, trace, Level};

use crate::field::Field;
use crate::rng::SimpleRng;
use crate::shapes::{get_shape, PieceShape};
use crate::types::{Command, PieceKind, Rotation, FIELD_WIDTH, TETRO_SIZE};

/// Anchor column of a freshly spawned piece.
pub const SPAWN_X: i8 = (FIELD_WIDTH / 2 - TETRO_SIZE / 2) as i8;

/// Anchor row of a freshly spawned piece.
pub const SPAWN_Y: i8 = 0;

/// A piece that lands with its anchor above this row ends the session.
pub const TOP_OUT_ROWS: i8 = 2;

/// Smallest anchor column left after a rotation.
pub const MIN_ANCHOR_X: i8 = 1;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::SPAWN,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Block offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute field coordinates of the four blocks.
    pub fn cells(&self) -> [(i8, i8); TETRO_SIZE] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Every block, shifted by `(dx, dy)`, lands on an empty cell.
    pub fn fits_shifted(&self, field: &Field, dx: i8, dy: i8) -> bool {
        self.cells()
            .iter()
            .all(|&(x, y)| field.is_free(x + dx, y + dy))
    }
}

/// What a gravity step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The piece moved down one row.
    Descended,
    /// The piece settled into the field and a new one spawned.
    Locked,
    /// The piece could not leave the top rows; the session started over.
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    field: Field,
    active: Tetromino,
    rng: SimpleRng,
    seed: u32,
    /// Monotonic session id (increments on every restart).
    episode_id: u32,
    /// Pieces spawned in the current session.
    pieces_spawned: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed and spawn the first piece.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            field: Field::new(),
            active: Tetromino::new(PieceKind::O),
            rng: SimpleRng::new(seed),
            seed,
            episode_id: 0,
            pieces_spawned: 0,
        };
        state.spawn();
        state
    }

    /// Start over: fresh field, new piece. The RNG stream continues.
    pub fn reset(&mut self) {
        self.field = Field::new();
        self.pieces_spawned = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn();
        info!("session {} started", self.episode_id);
    }

    /// Replace the active piece with a random one at the spawn position.
    pub fn spawn(&mut self) {
        let kind = self.rng.next_kind();
        self.active = Tetromino::new(kind);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        trace!("spawned {:?}", kind);
    }

    /// One gravity step.
    pub fn step(&mut self) -> Step {
        if self.active.fits_shifted(&self.field, 0, 1) {
            self.active.y += 1;
            return Step::Descended;
        }

        if self.active.y < TOP_OUT_ROWS {
            info!(
                "piece {:?} stuck at row {}, restarting after {} pieces",
                self.active.kind, self.active.y, self.pieces_spawned
            );
            self.reset();
            return Step::Restarted;
        }

        self.lock_piece();
        self.spawn();
        Step::Locked
    }

    /// Write the active piece into the field.
    fn lock_piece(&mut self) {
        let color = self.active.kind.color_index() as i8;
        for (x, y) in self.active.cells() {
            self.field.set(x, y, color);
        }
        debug!(
            "locked {:?} at ({}, {})",
            self.active.kind, self.active.x, self.active.y
        );
    }

    /// Shift the piece `dx` columns if every target cell on its current rows
    /// is empty. Returns whether it moved.
    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        if !self.active.fits_shifted(&self.field, dx, 0) {
            return false;
        }
        self.active.x += dx;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.move_horizontal(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_horizontal(1)
    }

    /// Advance to the next rotation without any collision check.
    ///
    /// Only the anchor column is corrected, to at least [`MIN_ANCHOR_X`].
    pub fn rotate(&mut self) {
        self.active.rotation = self.active.rotation.next();
        if self.active.x < MIN_ANCHOR_X {
            self.active.x = MIN_ANCHOR_X;
        }
    }

    /// A single gravity step on demand.
    pub fn soft_drop(&mut self) -> Step {
        self.step()
    }

    /// Collapse complete rows. See [`Field::delete_completed_lines`].
    pub fn delete_completed_lines(&mut self) -> usize {
        if !log_enabled!(Level::Debug) {
            return self.field.delete_completed_lines();
        }

        let full = self.field.complete_rows();
        let collapsed = self.field.delete_completed_lines();
        if collapsed > 0 {
            debug!("cleared rows {:?} ({} collapses)", full.as_slice(), collapsed);
        }
        collapsed
    }

    /// Clock entry point: gravity, then line clearing.
    pub fn tick(&mut self) -> Step {
        let step = self.step();
        self.delete_completed_lines();
        step
    }

    /// Input entry point.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Rotate => self.rotate(),
            Command::MoveLeft => {
                self.move_left();
            }
            Command::MoveRight => {
                self.move_right();
            }
            Command::SoftDrop => {
                self.soft_drop();
            }
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    /// Settled blocks as `(x, y, color_index)` in field coordinates.
    pub fn settled_cells(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        self.field.settled_cells()
    }

    /// The falling piece's blocks in field coordinates.
    pub fn piece_cells(&self) -> [(i8, i8); TETRO_SIZE] {
        self.active.cells()
    }

    /// Palette index of the falling piece.
    pub fn piece_color(&self) -> u8 {
        self.active.kind.color_index()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Tetromino) {
        self.active = piece;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EMPTY, FIELD_HEIGHT};

    fn state_with(kind: PieceKind, x: i8, y: i8) -> GameState {
        let mut state = GameState::new(1);
        state.set_active(Tetromino {
            kind,
            rotation: Rotation::SPAWN,
            x,
            y,
        });
        state
    }

    #[test]
    fn test_new_game_spawns_centered_piece() {
        let state = GameState::new(12345);
        let active = state.active();
        assert_eq!((active.x, active.y), (3, 0));
        assert_eq!(active.rotation, Rotation::SPAWN);
        assert_eq!(state.pieces_spawned(), 1);
        assert_eq!(state.episode_id(), 0);
        assert!(state.field().borders_intact());
    }

    #[test]
    fn test_step_descends_one_row() {
        let mut state = state_with(PieceKind::T, 3, 0);
        assert_eq!(state.step(), Step::Descended);
        assert_eq!(state.active().y, 1);
        assert_eq!(state.active().x, 3);
    }

    #[test]
    fn test_landing_locks_and_respawns() {
        // O occupies rows 2..=3 of its box; at y=17 it rests on the floor.
        let mut state = state_with(PieceKind::O, 3, 17);
        assert_eq!(state.step(), Step::Locked);

        let color = PieceKind::O.color_index() as i8;
        for (x, y) in [(4, 19), (5, 19), (4, 20), (5, 20)] {
            assert_eq!(state.field().get(x, y), Some(color));
        }
        assert_eq!((state.active().x, state.active().y), (SPAWN_X, SPAWN_Y));
        assert_eq!(state.pieces_spawned(), 2);
        assert!(state.field().borders_intact());
    }

    #[test]
    fn test_landing_in_top_rows_restarts() {
        let mut state = state_with(PieceKind::O, 3, 1);
        // Block the cells right under the piece.
        state.field_mut().set(4, 5, 3);
        state.field_mut().set(5, 5, 3);

        assert_eq!(state.step(), Step::Restarted);
        assert_eq!(*state.field(), Field::new());
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.pieces_spawned(), 1);
        assert_eq!((state.active().x, state.active().y), (SPAWN_X, SPAWN_Y));
    }

    #[test]
    fn test_landing_at_row_two_still_locks() {
        let mut state = state_with(PieceKind::O, 3, 2);
        state.field_mut().set(4, 6, 3);
        assert_eq!(state.step(), Step::Locked);
        assert_eq!(state.field().get(4, 5), Some(PieceKind::O.color_index() as i8));
    }

    #[test]
    fn test_move_blocked_by_wall() {
        // O blocks sit in columns 1..=2 of the box, x=0 puts them at 1..=2.
        let mut state = state_with(PieceKind::O, 0, 5);
        assert!(!state.move_left());
        assert_eq!(state.active().x, 0);
        assert!(state.move_right());
        assert_eq!(state.active().x, 1);
    }

    #[test]
    fn test_move_blocked_by_settled_block() {
        let mut state = state_with(PieceKind::O, 3, 5);
        // Piece covers (4..=5, 7..=8). Block the cell right of row 8.
        state.field_mut().set(6, 8, 2);
        assert!(!state.move_right());
        assert_eq!(state.active().x, 3);
        assert!(state.move_left());
    }

    #[test]
    fn test_move_checks_current_row_only() {
        let mut state = state_with(PieceKind::O, 3, 5);
        // Diagonally below-right: not in the way of a horizontal move.
        state.field_mut().set(6, 9, 2);
        assert!(state.move_right());
        assert_eq!(state.active().y, 5);
    }

    #[test]
    fn test_rotate_cycles_through_four() {
        let mut state = state_with(PieceKind::T, 3, 5);
        let original = state.active().shape();
        for i in 1..=4 {
            state.rotate();
            assert_eq!(state.active().rotation.index(), i % 4);
        }
        assert_eq!(state.active().shape(), original);
    }

    #[test]
    fn test_rotate_ignores_settled_blocks() {
        let mut state = state_with(PieceKind::I, 3, 5);
        // Horizontal I would cover row 8, columns 3..=6.
        state.field_mut().set(4, 8, 1);
        state.rotate();
        assert_eq!(state.active().rotation.index(), 1);
        assert!(state.piece_cells().contains(&(4, 8)));
    }

    #[test]
    fn test_rotate_clamps_anchor_column() {
        // Vertical I sits in box column 3, so x=-2 is the left wall.
        let mut state = state_with(PieceKind::I, -2, 5);
        assert!(state.piece_cells().iter().all(|&(x, _)| x == 1));
        state.rotate();
        assert_eq!(state.active().x, MIN_ANCHOR_X);
        assert!(state.piece_cells().iter().all(|&(x, _)| x >= 1));
    }

    #[test]
    fn test_soft_drop_is_one_step() {
        let mut state = state_with(PieceKind::S, 3, 4);
        state.apply(Command::SoftDrop);
        assert_eq!(state.active().y, 5);
    }

    #[test]
    fn test_tick_clears_line_after_landing() {
        let mut state = state_with(PieceKind::I, 3, 17);
        state.rotate();
        // Horizontal I covers columns 3..=6 of row 20; fill the rest.
        for x in [1, 2, 7, 8, 9, 10] {
            state.field_mut().set(x, FIELD_HEIGHT as i8, 5);
        }

        assert_eq!(state.tick(), Step::Locked);
        assert!(!state.field().is_row_complete(FIELD_HEIGHT));
        assert_eq!(state.settled_cells().count(), 0);
        assert_eq!(state.field().get(1, FIELD_HEIGHT as i8), Some(EMPTY));
    }

    #[test]
    fn test_delete_completed_lines_without_debug_logging() {
        // No logger is installed in unit tests, so the row listing is skipped.
        assert!(!log_enabled!(Level::Debug));

        let rows = ["1.........", "2222222222", "3333333333"];
        let mut state = GameState::new(1);
        *state.field_mut() = Field::from_rows(&rows);
        let mut expected = Field::from_rows(&rows);

        assert_eq!(state.delete_completed_lines(), expected.delete_completed_lines());
        assert_eq!(state.field(), &expected);
        assert_eq!(state.delete_completed_lines(), 0);
    }

    #[test]
    fn test_apply_dispatches_moves() {
        let mut state = state_with(PieceKind::T, 3, 5);
        state.apply(Command::MoveLeft);
        assert_eq!(state.active().x, 2);
        state.apply(Command::MoveRight);
        state.apply(Command::MoveRight);
        assert_eq!(state.active().x, 4);
        state.apply(Command::Rotate);
        assert_eq!(state.active().rotation.index(), 1);
    }
}
