//! Piece-stacking engine: pure, deterministic, and testable.
//!
//! All game rules live here, free of I/O, threads, and rendering, so
//! the same crate drives the terminal game, the tests, and the benches.
//!
//! # Module structure
//!
//! - [`board`]: the 10x20 well with row-clear compaction
//! - [`pieces`]: tetromino shapes, square-box rotation, the falling piece
//! - [`game`]: [`StackGame`], the per-tick state machine
//! - [`rng`]: seedable LCG behind the uniform piece draw
//! - [`snapshot`]: plain-data frame export for renderers
//! - [`intents`]: bounded move handoff from input callbacks to the game thread
//!
//! # Game rules
//!
//! Deliberately the cabinet's rules, not modern guideline Tetris:
//!
//! - uniform random piece draw (no 7-bag)
//! - clockwise rotation only, no wall kicks
//! - a failed gravity step locks the piece immediately (no lock delay)
//! - each cleared row scores 100, regardless of how many clear at once
//! - pieces spawn centered, two rows above the visible well; a piece
//!   that locks with any cell still above the well ends the game
//!
//! # Example
//!
//! ```
//! use joycab_core::StackGame;
//! use joycab_types::StackMove;
//!
//! let mut game = StackGame::new(12345);
//! game.apply(StackMove::Left);
//! game.gravity_tick();
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! [`StackGame`] never looks at a clock. Drive it either with
//! [`StackGame::gravity_tick`] per gravity period, or by calling
//! [`StackGame::tick`] with elapsed milliseconds from a fast scheduler
//! beat and letting the internal accumulator fire gravity at
//! [`GRAVITY_MS`](joycab_types::GRAVITY_MS).

pub mod board;
pub mod game;
pub mod intents;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use joycab_types as types;

pub use board::Board;
pub use game::StackGame;
pub use intents::{intent_queue, IntentRx, IntentTx, MOVE_BURST};
pub use pieces::{Piece, PieceKind, ShapeGrid, SPAWN_ROW};
pub use rng::SimpleRng;
pub use snapshot::StackSnapshot;
