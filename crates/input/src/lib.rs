//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the four engine commands. Only key
//! presses act; releases and terminal auto-repeat events are ignored.

pub mod map;

pub use tetro_types as types;

pub use map::{handle_key_event, should_quit};
