//! The 10x20 well of locked cells.
//!
//! Stored as one flat row-major array, row 0 at the top. Cells only
//! change through piece locking and row-clear compaction; the falling
//! piece is never written here until it locks.

use joycab_types::{STACK_COLS, STACK_ROWS};

use crate::pieces::PieceKind;

pub const BOARD_CELLS: usize = STACK_COLS as usize * STACK_ROWS as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<PieceKind>; BOARD_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    pub fn new() -> Board {
        Board {
            cells: [None; BOARD_CELLS],
        }
    }

    fn index(col: i8, row: i8) -> Option<usize> {
        if col < 0 || col >= STACK_COLS as i8 || row < 0 || row >= STACK_ROWS as i8 {
            return None;
        }
        Some(row as usize * STACK_COLS as usize + col as usize)
    }

    /// Cell content, or `None` when out of bounds.
    pub fn cell(&self, col: i8, row: i8) -> Option<Option<PieceKind>> {
        Self::index(col, row).map(|i| self.cells[i])
    }

    /// Write one cell. Out-of-bounds writes are refused, not clamped.
    pub fn set_cell(&mut self, col: i8, row: i8, cell: Option<PieceKind>) -> bool {
        match Self::index(col, row) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty.
    pub fn is_free(&self, col: i8, row: i8) -> bool {
        matches!(self.cell(col, row), Some(None))
    }

    pub fn is_row_full(&self, row: u8) -> bool {
        if row >= STACK_ROWS {
            return false;
        }
        let start = row as usize * STACK_COLS as usize;
        self.cells[start..start + STACK_COLS as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Clear every full row and compact the well.
    ///
    /// Rows are scanned top to bottom; each full row is removed by
    /// shifting everything above it down one row and feeding an empty
    /// row in at the top. Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> u32 {
        let cols = STACK_COLS as usize;
        let mut cleared = 0;
        for row in 0..STACK_ROWS as usize {
            if !self.is_row_full(row as u8) {
                continue;
            }
            cleared += 1;
            for dst in (1..=row).rev() {
                let src = (dst - 1) * cols;
                self.cells.copy_within(src..src + cols, dst * cols);
            }
            for cell in &mut self.cells[..cols] {
                *cell = None;
            }
        }
        cleared
    }

    pub fn clear(&mut self) {
        self.cells = [None; BOARD_CELLS];
    }

    /// Pack into a kind-code grid (0 = empty) for snapshots.
    pub fn write_codes(&self, out: &mut [[u8; STACK_COLS as usize]; STACK_ROWS as usize]) {
        for row in 0..STACK_ROWS as usize {
            for col in 0..STACK_COLS as usize {
                out[row][col] = match self.cells[row * STACK_COLS as usize + col] {
                    Some(kind) => kind.code(),
                    None => 0,
                };
            }
        }
    }

    /// Occupied cell count, for tests and diagnostics.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
