//! Render-facing export of the game state.

use joycab_types::{STACK_COLS, STACK_ROWS};

use crate::pieces::{Piece, PieceKind};

/// Everything a renderer needs for one frame, as plain `Copy` data.
///
/// `board` holds [`PieceKind::code`] values, 0 meaning empty. Built
/// with [`StackGame::snapshot_into`](crate::StackGame::snapshot_into)
/// so the buffer can be reused frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackSnapshot {
    pub board: [[u8; STACK_COLS as usize]; STACK_ROWS as usize],
    pub active: Piece,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl Default for StackSnapshot {
    fn default() -> Self {
        StackSnapshot {
            board: [[0; STACK_COLS as usize]; STACK_ROWS as usize],
            active: Piece::spawn(PieceKind::I),
            next: PieceKind::I,
            score: 0,
            lines: 0,
            paused: false,
            game_over: false,
        }
    }
}
