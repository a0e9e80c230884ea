//! Terminal rendering for the cabinet games.
//!
//! A small game-style pipeline instead of a TUI widget library: views
//! draw into a plain framebuffer of styled cells, and the renderer
//! flushes it to the terminal with span diffing. Everything except the
//! final flush is pure and unit-testable.

pub mod fb;
pub mod renderer;
pub mod stack_view;

pub use joycab_core as core;
pub use joycab_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff, encode_full, TerminalRenderer};
pub use stack_view::{StackView, Viewport};
