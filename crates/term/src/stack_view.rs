//! Maps a [`StackSnapshot`] into a terminal framebuffer.
//!
//! Pure, no I/O: unit tests read cells straight out of the buffer.

use joycab_core::pieces::PieceKind;
use joycab_core::snapshot::StackSnapshot;
use joycab_types::{STACK_COLS, STACK_ROWS};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Viewport { width, height }
    }
}

/// Renders the stacking game.
pub struct StackView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for StackView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio
        StackView {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const WELL_BG: Rgb = Rgb::new(28, 28, 38);

impl StackView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        StackView {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render one frame into a fresh framebuffer.
    pub fn render(&self, snap: &StackSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::default()));

        let well_w = STACK_COLS as u16 * self.cell_w;
        let well_h = STACK_ROWS as u16 * self.cell_h;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let floor = CellStyle {
            fg: Rgb::new(70, 70, 85),
            bg: WELL_BG,
            bold: false,
        };
        fb.fill_rect(start_x + 1, start_y + 1, well_w, well_h, '·', floor);
        self.draw_frame(&mut fb, start_x, start_y, frame_w, frame_h);
        self.draw_well(&mut fb, snap, start_x, start_y);
        self.draw_active(&mut fb, snap, start_x, start_y);
        self.draw_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);

        if snap.paused {
            self.draw_banner(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSE");
        } else if snap.game_over {
            self.draw_banner(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            let hint_y = start_y.saturating_add(frame_h / 2).saturating_add(2);
            let hint = "MENU RESTARTS";
            let hint_x =
                start_x.saturating_add(frame_w.saturating_sub(hint.chars().count() as u16) / 2);
            fb.put_str(hint_x, hint_y, hint, CellStyle::default());
        }

        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_well(&self, fb: &mut FrameBuffer, snap: &StackSnapshot, start_x: u16, start_y: u16) {
        for (row, cols) in snap.board.iter().enumerate() {
            for (col, &code) in cols.iter().enumerate() {
                if code != 0 {
                    self.paint_cell(fb, start_x, start_y, col as u16, row as u16, code);
                }
            }
        }
    }

    fn draw_active(&self, fb: &mut FrameBuffer, snap: &StackSnapshot, start_x: u16, start_y: u16) {
        let code = snap.active.kind.code();
        for (col, row) in snap.active.cells() {
            // rows above the well stay invisible
            if row >= 0 && col >= 0 {
                self.paint_cell(fb, start_x, start_y, col as u16, row as u16, code);
            }
        }
    }

    fn paint_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        code: u8,
    ) {
        let style = CellStyle {
            fg: code_color(code),
            bg: WELL_BG,
            bold: true,
        };
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &StackSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snap.score.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snap.lines.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, snap.next, panel_x, y);
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, kind: PieceKind, x: u16, y: u16) {
        let shape = kind.spawn_shape();
        let style = CellStyle {
            fg: code_color(kind.code()),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        for (r, c) in shape.cells() {
            fb.fill_rect(
                x + c as u16 * self.cell_w,
                y + r as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
    }

    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, style);
    }
}

fn code_color(code: u8) -> Rgb {
    match PieceKind::from_code(code) {
        Some(PieceKind::I) => Rgb::new(80, 220, 220),
        Some(PieceKind::O) => Rgb::new(240, 220, 80),
        Some(PieceKind::T) => Rgb::new(200, 120, 220),
        Some(PieceKind::J) => Rgb::new(80, 120, 220),
        Some(PieceKind::L) => Rgb::new(230, 150, 60),
        Some(PieceKind::S) => Rgb::new(100, 220, 120),
        Some(PieceKind::Z) => Rgb::new(220, 80, 80),
        None => Rgb::new(120, 120, 120),
    }
}
