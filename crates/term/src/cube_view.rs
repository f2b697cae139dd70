//! CubeView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The cube is drawn as an unfolded net inside a bordered frame, with the
//! session panel (status, scramble, solution, error, key help) to its right:
//!
//! ```text
//! ┌─────────────────────────────┐
//! │        U                    │
//! │        ██████               │
//! │        ██████               │  STATUS
//! │        ██████               │  Idle
//! │ L      F      R      B      │
//! │ ██████ ██████ ██████ ██████ │  SCRAMBLE
//! │ ...                         │
//! ```

use crate::core::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, Face, Sticker, FACE_STICKERS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where things land for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeLayout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Panel origin and width, when the viewport is wide enough.
    pub panel: Option<(u16, u16, u16)>,
}

/// Preferred panel width.
const PANEL_W: u16 = 40;
/// Narrowest panel worth drawing.
const PANEL_MIN_W: u16 = 16;
const PANEL_GAP: u16 = 2;

/// Net position (column, row) of each face, in face units.
fn net_slot(face: Face) -> (u16, u16) {
    match face {
        Face::Up => (1, 0),
        Face::Left => (0, 1),
        Face::Front => (1, 1),
        Face::Right => (2, 1),
        Face::Back => (3, 1),
        Face::Down => (1, 2),
    }
}

/// A lightweight terminal renderer for the cube and its session.
pub struct CubeView {
    /// Sticker width in terminal columns.
    cell_w: u16,
    /// Sticker height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for CubeView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl CubeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn face_w(&self) -> u16 {
        3 * self.cell_w
    }

    fn face_h(&self) -> u16 {
        3 * self.cell_h
    }

    /// Horizontal distance between face origins (face + 1 column gap).
    fn pitch_x(&self) -> u16 {
        self.face_w() + 1
    }

    /// Vertical distance between face rows (label row + face).
    fn pitch_y(&self) -> u16 {
        self.face_h() + 1
    }

    pub fn layout(&self, viewport: Viewport) -> CubeLayout {
        let net_w = 4 * self.pitch_x() - 1;
        let net_h = 3 * self.pitch_y();
        let frame_w = net_w + 4;
        let frame_h = net_h + 2;

        let full = frame_w + PANEL_GAP + PANEL_W;
        let (frame_x, panel) = if viewport.width >= full {
            let x = (viewport.width - full) / 2;
            (x, Some((x + frame_w + PANEL_GAP, PANEL_W)))
        } else if viewport.width >= frame_w + PANEL_GAP + PANEL_MIN_W {
            let px = frame_w + PANEL_GAP;
            (0, Some((px, viewport.width - px)))
        } else {
            (viewport.width.saturating_sub(frame_w) / 2, None)
        };

        let frame_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        CubeLayout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel: panel.map(|(x, w)| (x, frame_y, w)),
        }
    }

    /// Top-left terminal cell of sticker `index` (0..9, row-major) of `face`.
    pub fn sticker_origin(&self, layout: &CubeLayout, face: Face, index: usize) -> (u16, u16) {
        let (col, row) = net_slot(face);
        let (r, c) = ((index / 3) as u16, (index % 3) as u16);
        let x = layout.frame_x + 2 + col * self.pitch_x() + c * self.cell_w;
        let y = layout.frame_y + 1 + row * self.pitch_y() + 1 + r * self.cell_h;
        (x, y)
    }

    /// Terminal cell of the face's letter label.
    pub fn label_origin(&self, layout: &CubeLayout, face: Face) -> (u16, u16) {
        let (col, row) = net_slot(face);
        (
            layout.frame_x + 2 + col * self.pitch_x(),
            layout.frame_y + 1 + row * self.pitch_y(),
        )
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        draw_border(fb, &layout, border);

        let label = CellStyle::fg(Rgb::new(180, 180, 200)).bold();
        for face in Face::ALL {
            let (lx, ly) = self.label_origin(&layout, face);
            fb.put_str(lx, ly, face.as_str(), label);

            let stickers = snap.cube.face(face);
            for (i, sticker) in stickers.iter().enumerate().take(FACE_STICKERS) {
                let (x, y) = self.sticker_origin(&layout, face, i);
                let (ch, style) = sticker_glyph(*sticker);
                fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
            }
        }

        if let Some((px, py, pw)) = layout.panel {
            self.draw_panel(fb, snap, viewport, px, py, pw);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        x: u16,
        mut y: u16,
        w: u16,
    ) {
        let heading = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let muted = value.dim();

        fb.put_str_clipped(x, y, w, "CUBE SOLVER", heading);
        y = y.saturating_add(2);

        fb.put_str_clipped(x, y, w, "STATUS", heading);
        y = y.saturating_add(1);
        let (status, status_style) = if snap.loading {
            ("SOLVING...", CellStyle::fg(Rgb::new(120, 170, 255)).bold())
        } else if snap.reveal_pending {
            ("Revealing solved cube...", CellStyle::fg(Rgb::new(120, 220, 140)))
        } else {
            ("Idle", value)
        };
        fb.put_str_clipped(x, y, w, status, status_style);
        y = y.saturating_add(2);

        let written = fb.put_str_clipped(x, y, w, "SCRAMBLE", heading);
        if snap.move_count > 0 {
            let count = format!(" ({})", snap.move_count);
            fb.put_str_clipped(x + written, y, w - written, &count, muted);
        }
        y = y.saturating_add(1);
        y = put_wrapped(fb, x, y, w, or_dash(&snap.scramble), value).saturating_add(1);

        fb.put_str_clipped(x, y, w, "SOLUTION", heading);
        y = y.saturating_add(1);
        let solution_style = CellStyle::fg(Rgb::new(120, 220, 140));
        y = put_wrapped(fb, x, y, w, or_dash(&snap.solution), solution_style).saturating_add(1);

        if !snap.error.is_empty() {
            let error = CellStyle::fg(Rgb::new(240, 90, 90)).bold();
            fb.put_str_clipped(x, y, w, "ERROR", error);
            y = y.saturating_add(1);
            y = put_wrapped(fb, x, y, w, &snap.error, error).saturating_add(1);
        }

        const HELP: [&str; 4] = [
            "u l f r b d  turn face",
            "SHIFT+key    prime turn",
            "SPACE scramble  ENTER solve",
            "C reset  Q quit",
        ];
        let mut hy = y;
        for line in HELP {
            if hy >= viewport.height {
                break;
            }
            fb.put_str_clipped(x, hy, w, line, muted);
            hy += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: &CubeLayout, style: CellStyle) {
    let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
    if w < 2 || h < 2 {
        return;
    }

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

/// Glyph and style for one sticker; unknown colors get a grey hatch.
pub fn sticker_glyph(sticker: Sticker) -> (char, CellStyle) {
    match sticker {
        Some(color) => ('█', CellStyle::fg(color_rgb(color))),
        None => ('░', CellStyle::fg(Rgb::new(120, 120, 120))),
    }
}

pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::White => Rgb::new(235, 235, 235),
        Color::Orange => Rgb::new(255, 140, 0),
        Color::Green => Rgb::new(0, 170, 70),
        Color::Red => Rgb::new(210, 30, 30),
        Color::Blue => Rgb::new(30, 90, 220),
        Color::Yellow => Rgb::new(245, 215, 0),
    }
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// Word-wrap `text` into `w` columns starting at row `y`; words longer than
/// a line are split. Returns the row after the last one written.
fn put_wrapped(fb: &mut FrameBuffer, x: u16, mut y: u16, w: u16, text: &str, style: CellStyle) -> u16 {
    if w == 0 {
        return y;
    }
    let mut col = 0u16;
    for word in text.split_whitespace() {
        let mut rest = word;
        while !rest.is_empty() {
            let len = rest.chars().count() as u16;
            let needs_space = col > 0;
            let room = w.saturating_sub(col + u16::from(needs_space));
            if len <= room {
                if needs_space {
                    col += 1;
                }
                col += fb.put_str_clipped(x + col, y, room, rest, style);
                rest = "";
            } else if col > 0 {
                y = y.saturating_add(1);
                col = 0;
            } else {
                let split = rest
                    .char_indices()
                    .nth(usize::from(w))
                    .map(|(i, _)| i)
                    .unwrap_or(rest.len());
                fb.put_str_clipped(x, y, w, &rest[..split], style);
                rest = &rest[split..];
                y = y.saturating_add(1);
            }
        }
    }
    if col > 0 {
        y = y.saturating_add(1);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_words() {
        let mut fb = FrameBuffer::new(8, 4);
        let next = put_wrapped(&mut fb, 0, 0, 8, "R U R' U' F", CellStyle::default());
        assert_eq!(fb.row_text(0), "R U R'  ");
        assert_eq!(fb.row_text(1), "U' F    ");
        assert_eq!(next, 2);
    }

    #[test]
    fn wrap_splits_long_words() {
        let mut fb = FrameBuffer::new(4, 4);
        let next = put_wrapped(&mut fb, 0, 0, 4, "abcdefghij", CellStyle::default());
        assert_eq!(fb.row_text(0), "abcd");
        assert_eq!(fb.row_text(1), "efgh");
        assert_eq!(fb.row_text(2), "ij  ");
        assert_eq!(next, 3);
    }

    #[test]
    fn narrow_viewport_drops_panel() {
        let view = CubeView::default();
        let layout = view.layout(Viewport::new(40, 20));
        assert!(layout.panel.is_none());
        assert_eq!(layout.frame_w, 31);
        assert_eq!(layout.frame_h, 14);
    }
}
