//! Tetro (workspace facade crate).
//!
//! Re-exports the game crates under `tetro::{core,input,term,types}` and owns
//! the configuration file used by the `tetro` binary.

pub mod config;

pub use tetro_core as core;
pub use tetro_input as input;
pub use tetro_term as term;
pub use tetro_types as types;
