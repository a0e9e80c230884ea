//! The piece-stacking state machine.
//!
//! One falling piece over a well of locked cells. Player moves arrive
//! as [`StackMove`]s and are validated against the same rule gravity
//! uses: every occupied cell of the candidate position must sit in
//! columns `0..STACK_COLS`, no deeper than the bottom row, and on an
//! empty cell when its row is visible (negative rows are bounds-checked
//! only, so fresh spawns can hang above the well). A failed gravity
//! step locks the piece; a lock that would write above the visible
//! board ends the game instead, leaving the well untouched.

use joycab_types::{StackMove, GRAVITY_MS, POINTS_PER_LINE, STACK_COLS, STACK_ROWS};

use crate::board::Board;
use crate::pieces::{Piece, PieceKind, ShapeGrid};
use crate::rng::SimpleRng;
use crate::snapshot::StackSnapshot;

fn draw_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}

pub struct StackGame {
    board: Board,
    active: Piece,
    next: PieceKind,
    rng: SimpleRng,
    score: u32,
    lines: u32,
    paused: bool,
    game_over: bool,
    gravity_ms: u32,
    gravity_timer_ms: u32,
}

impl StackGame {
    /// Fresh game: empty well, score 0, first piece spawned and the
    /// next one already drawn. The same seed replays the same piece
    /// sequence.
    pub fn new(seed: u32) -> StackGame {
        let mut rng = SimpleRng::new(seed);
        let first = draw_kind(&mut rng);
        let next = draw_kind(&mut rng);
        StackGame {
            board: Board::new(),
            active: Piece::spawn(first),
            next,
            rng,
            score: 0,
            lines: 0,
            paused: false,
            game_over: false,
            gravity_ms: GRAVITY_MS,
            gravity_timer_ms: 0,
        }
    }

    /// Override the gravity period, mostly for tests and demos.
    pub fn with_gravity_ms(mut self, gravity_ms: u32) -> StackGame {
        self.gravity_ms = gravity_ms.max(1);
        self
    }

    /// Attempt one player move. Invalid moves are rejected silently;
    /// returns whether the piece changed. Ignored while paused or after
    /// game over. `Down` only nudges the piece; it never locks it.
    pub fn apply(&mut self, mv: StackMove) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        match mv {
            StackMove::Left => self.try_shift(-1),
            StackMove::Right => self.try_shift(1),
            StackMove::Down => self.try_fall(),
            StackMove::RotateCw => self.try_rotate(),
        }
    }

    /// One gravity step: move the piece down, or lock it when it
    /// cannot move. Returns false while paused or after game over.
    pub fn gravity_tick(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        if !self.try_fall() {
            self.lock_active();
        }
        true
    }

    /// Advance the gravity accumulator by `elapsed_ms`, firing one
    /// gravity step per full gravity period accumulated. Lets a
    /// fast-beating scheduler drive wall-clock gravity. Returns whether
    /// any step fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        self.gravity_timer_ms += elapsed_ms;
        let mut advanced = false;
        while self.gravity_timer_ms >= self.gravity_ms {
            self.gravity_timer_ms -= self.gravity_ms;
            self.gravity_tick();
            advanced = true;
            if self.game_over {
                break;
            }
        }
        advanced
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Fresh well, score, and pieces. The RNG stream carries forward so
    /// consecutive games do not repeat a sequence.
    pub fn restart(&mut self) {
        let gravity_ms = self.gravity_ms;
        *self = StackGame::new(self.rng.state()).with_gravity_ms(gravity_ms);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    /// Replace the falling piece, for tests and tools. No validation.
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }

    /// Direct well access, for tests and tools.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Export the render-facing state into `snap` without allocating.
    pub fn snapshot_into(&self, snap: &mut StackSnapshot) {
        self.board.write_codes(&mut snap.board);
        snap.active = self.active;
        snap.next = self.next;
        snap.score = self.score;
        snap.lines = self.lines;
        snap.paused = self.paused;
        snap.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> StackSnapshot {
        let mut snap = StackSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn try_shift(&mut self, dcol: i8) -> bool {
        if self.fits(&self.active.shape, self.active.col + dcol, self.active.row) {
            self.active.col += dcol;
            true
        } else {
            false
        }
    }

    fn try_fall(&mut self) -> bool {
        if self.fits(&self.active.shape, self.active.col, self.active.row + 1) {
            self.active.row += 1;
            true
        } else {
            false
        }
    }

    fn try_rotate(&mut self) -> bool {
        // no wall kicks: the turned shape fits in place or not at all
        let rotated = self.active.shape.rotated_cw();
        if self.fits(&rotated, self.active.col, self.active.row) {
            self.active.shape = rotated;
            true
        } else {
            false
        }
    }

    fn fits(&self, shape: &ShapeGrid, col: i8, row: i8) -> bool {
        shape.cells().all(|(r, c)| {
            let board_col = col + c as i8;
            let board_row = row + r as i8;
            if board_col < 0 || board_col >= STACK_COLS as i8 || board_row >= STACK_ROWS as i8 {
                return false;
            }
            board_row < 0 || self.board.is_free(board_col, board_row)
        })
    }

    fn lock_active(&mut self) {
        // a rest with any cell above the visible board ends the game;
        // nothing is written on that path
        if self.active.cells().any(|(_, row)| row < 0) {
            self.game_over = true;
            return;
        }
        for (col, row) in self.active.cells() {
            self.board.set_cell(col, row, Some(self.active.kind));
        }
        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.lines += cleared;
            self.score += cleared * POINTS_PER_LINE;
        }
        self.spawn_next();
    }

    fn spawn_next(&mut self) {
        let piece = Piece::spawn(self.next);
        self.next = draw_kind(&mut self.rng);
        if !self.fits(&piece.shape, piece.col, piece.row) {
            self.game_over = true;
        }
        self.active = piece;
    }
}
