//! Flushes a framebuffer to the real terminal.
//!
//! Frames are encoded into a byte buffer first (the encode functions
//! are pure and unit-testable), then written to stdout in one go. A
//! frame is diffed against the previous one and only changed spans are
//! re-sent, one cursor move per span; a size change or an explicit
//! [`TerminalRenderer::invalidate`] forces a full repaint.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    last: Option<FrameBuffer>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        TerminalRenderer::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        TerminalRenderer {
            stdout: io::stdout(),
            buf: Vec::new(),
            last: None,
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Undo [`enter`](Self::enter). Safe to call during unwinding on a
    /// half-entered terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything. Call on resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw one frame, diffing against the previous one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.as_mut() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            _ => {
                encode_full(fb, &mut self.buf)?;
                // retain a copy for the next diff, reusing the old
                // allocation when there is one
                match self.last.as_mut() {
                    Some(prev) => prev.clone_from(fb),
                    None => self.last = Some(fb.clone()),
                }
            }
        }
        if !self.buf.is_empty() {
            self.stdout.write_all(&self.buf)?;
            self.stdout.flush()?;
        }
        Ok(())
    }
}

/// Encode a full-frame repaint into `out`.
pub fn encode_full(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for cell in fb.row(y) {
            if style != Some(cell.style) {
                encode_style(out, cell.style)?;
                style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the spans where `next` differs from `prev`.
///
/// Identical frames encode to nothing at all. The two buffers must
/// have the same dimensions; the renderer falls back to
/// [`encode_full`] when they differ.
pub fn encode_diff(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<CellStyle> = None;
    let mut touched = false;
    for y in 0..next.height() {
        let prev_row = prev.row(y);
        let next_row = next.row(y);
        let mut x = 0;
        while x < next_row.len() {
            if x < prev_row.len() && prev_row[x] == next_row[x] {
                x += 1;
                continue;
            }
            // one cursor move per changed span
            out.queue(cursor::MoveTo(x as u16, y))?;
            touched = true;
            while x < next_row.len() && (x >= prev_row.len() || prev_row[x] != next_row[x]) {
                let cell = next_row[x];
                if style != Some(cell.style) {
                    encode_style(out, cell.style)?;
                    style = Some(cell.style);
                }
                out.queue(Print(cell.ch))?;
                x += 1;
            }
        }
    }
    if touched {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn encode_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
