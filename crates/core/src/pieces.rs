//! Tetromino shapes and the falling piece.
//!
//! Shapes live in a square bounding box ([`ShapeGrid`]) so that
//! rotation is pure matrix work: transpose, then reverse each row.
//! Four clockwise rotations restore the grid bit for bit. There are no
//! wall kicks; a rotation that does not fit is simply rejected by the
//! game.

use joycab_types::STACK_COLS;

/// Pieces enter two rows above the visible board.
pub const SPAWN_ROW: i8 = -2;

/// The seven tetrominoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Spawn orientation, top-aligned in the minimal square box.
    pub fn spawn_shape(self) -> ShapeGrid {
        match self {
            PieceKind::I => ShapeGrid::from_rows(4, &[&[1, 1, 1, 1]]),
            PieceKind::O => ShapeGrid::from_rows(2, &[&[1, 1], &[1, 1]]),
            PieceKind::T => ShapeGrid::from_rows(3, &[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::J => ShapeGrid::from_rows(3, &[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::L => ShapeGrid::from_rows(3, &[&[0, 0, 1], &[1, 1, 1]]),
            PieceKind::S => ShapeGrid::from_rows(3, &[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::Z => ShapeGrid::from_rows(3, &[&[0, 1, 1], &[1, 1, 0]]),
        }
    }

    /// Nonzero cell code for packed board exports; 0 means empty.
    pub fn code(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::J => 4,
            PieceKind::L => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    pub fn from_code(code: u8) -> Option<PieceKind> {
        PieceKind::ALL.get(code.wrapping_sub(1) as usize).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Square 0/1 cell matrix, side 1 to 4, in a fixed 4x4 backing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGrid {
    cells: [[u8; 4]; 4],
    side: u8,
}

impl ShapeGrid {
    /// Build a `side`-by-`side` grid from explicit rows. Missing rows
    /// and short rows are zero-padded; any nonzero entry is a filled
    /// cell.
    ///
    /// # Panics
    ///
    /// When `side` is outside 1..=4 or a row overruns it.
    pub fn from_rows(side: u8, rows: &[&[u8]]) -> ShapeGrid {
        assert!((1..=4).contains(&side), "shape side {side} out of range");
        assert!(rows.len() <= side as usize, "too many shape rows");
        let mut cells = [[0u8; 4]; 4];
        for (r, row) in rows.iter().enumerate() {
            assert!(row.len() <= side as usize, "shape row {r} too wide");
            for (c, &value) in row.iter().enumerate() {
                cells[r][c] = u8::from(value != 0);
            }
        }
        ShapeGrid { cells, side }
    }

    pub fn side(&self) -> u8 {
        self.side
    }

    pub fn filled(&self, row: u8, col: u8) -> bool {
        row < self.side && col < self.side && self.cells[row as usize][col as usize] != 0
    }

    /// Transpose plus row reversal: a quarter turn clockwise about the
    /// grid's own origin.
    pub fn rotated_cw(&self) -> ShapeGrid {
        let side = self.side as usize;
        let mut out = ShapeGrid {
            cells: [[0u8; 4]; 4],
            side: self.side,
        };
        for r in 0..side {
            for c in 0..side {
                out.cells[r][c] = self.cells[side - 1 - c][r];
            }
        }
        out
    }

    /// Occupied `(row, col)` offsets within the grid.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        let side = self.side;
        (0..side)
            .flat_map(move |r| (0..side).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r as usize][c as usize] != 0)
    }
}

/// A falling piece: shape plus anchor position on the board.
///
/// `col`/`row` locate the shape box's top-left corner in board
/// coordinates; rows above the visible board are negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeGrid,
    pub col: i8,
    pub row: i8,
}

impl Piece {
    /// Spawn horizontally centered, two rows above the board.
    pub fn spawn(kind: PieceKind) -> Piece {
        let shape = kind.spawn_shape();
        let col = (STACK_COLS as i8 - shape.side() as i8) / 2;
        Piece {
            kind,
            shape,
            col,
            row: SPAWN_ROW,
        }
    }

    /// Board positions `(col, row)` of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let col = self.col;
        let row = self.row;
        self.shape
            .cells()
            .map(move |(r, c)| (col + c as i8, row + r as i8))
    }
}
