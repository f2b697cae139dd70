//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Each frame is diffed against the previous one row by row. For every row
//! that changed, only the span between the first and last differing cell is
//! rewritten; a size change (or `invalidate`) forces a full redraw.

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
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo `enter`. Safe to call after a partial `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        let flushed = self.flush_buf();
        terminal::disable_raw_mode()?;
        flushed
    }

    /// Force the next present to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Write `fb` to the terminal, touching only what changed since the
    /// previous present.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.last.as_ref(), fb, &mut self.buf)?;
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }
        match self.last.as_mut() {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// With no previous frame, or one of a different size, the screen is
/// cleared and every row is written. Writes nothing when the frames match.
pub fn encode_frame_into(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut current_style: Option<CellStyle> = None;
    for y in 0..next.height() {
        let row = next.row(y);
        let span = match prev {
            Some(prev) => changed_span(prev.row(y), row),
            None => Some((0, row.len())),
        };
        let Some((start, end)) = span else {
            continue;
        };

        out.queue(cursor::MoveTo(start as u16, y))?;
        for cell in &row[start..end] {
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    if current_style.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Half-open range `[first, last + 1)` of differing cells, if any.
fn changed_span<T: PartialEq>(prev: &[T], next: &[T]) -> Option<(usize, usize)> {
    let first = prev.iter().zip(next).position(|(a, b)| a != b)?;
    let last = prev.iter().zip(next).rposition(|(a, b)| a != b)?;
    Some((first, last + 1))
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
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
