//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. Scenes are drawn through the
//! [`Surface`] trait; the terminal implementation paints into a framebuffer
//! and flushes only what changed.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - One drawing path for every backend (`draw_scene`)
//! - Precise control over aspect ratio (e.g. 2 chars wide per block)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod surface;

pub use tetro_core as core;
pub use tetro_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, BACKGROUND};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalSurface};
pub use surface::{draw_scene, BlockGeometry, Surface};
