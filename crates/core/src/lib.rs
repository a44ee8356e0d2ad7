//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the game and nothing else. It has no
//! dependency on a terminal, a window or the wall clock, so every rule can be
//! exercised headless.
//!
//! # Module Structure
//!
//! - [`field`]: bordered 12x22 integer grid, collision lookups and line clearing
//! - [`shapes`]: the digit-encoded shape table and its decoder
//! - [`game_state`]: the falling piece, gravity, moves, rotation and restarts
//! - [`rng`]: seeded LCG used to pick shapes
//! - [`ticker`]: converts elapsed milliseconds into gravity ticks
//!
//! # Example
//!
//! ```
//! use tetro_core::{GameState, Step};
//! use tetro_types::Command;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply(Command::MoveLeft);
//! game.apply(Command::Rotate);
//!
//! // One gravity step plus a line-clear pass.
//! assert_eq!(game.tick(), Step::Descended);
//! assert!(game.field().borders_intact());
//! ```

pub mod field;
pub mod game_state;
pub mod rng;
pub mod shapes;
pub mod ticker;

pub use tetro_types as types;

pub use field::Field;
pub use game_state::{GameState, Step, Tetromino};
pub use rng::SimpleRng;
pub use shapes::{decode, get_shape};
pub use ticker::Ticker;
