//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellSnapshot, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, TileColor, TilePattern, CLOCK_WARNING_SECS};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SELECTED_BG: Rgb = Rgb::new(70, 70, 90);
const HINT_BG: Rgb = Rgb::new(90, 80, 30);
const PANEL_MIN_W: u16 = 12;

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

/// Terminal renderer for the match-three board.
///
/// Each tile is `cell_w` columns wide: the pattern glyph sits in the middle
/// and the outer columns carry the cursor brackets.
pub struct GameView {
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// `cell_w` below 3 leaves no room for the cursor brackets.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (snap.width as u16 * self.cell_w + 2, snap.height as u16 + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::default());
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..snap.height {
            for x in 0..snap.width {
                self.draw_tile(fb, snap, start_x, start_y, x, y);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            let text = "GAME OVER";
            let text_w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(text_w) / 2;
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::default()).bold();
            fb.put_str(x, start_y + frame_h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, start_y: u16, x: u8, y: u8) {
        let coord = Coord::new(x, y);
        let bg = if snap.selected == Some(coord) {
            SELECTED_BG
        } else if snap.hint.is_some_and(|(a, b)| a == coord || b == coord) {
            HINT_BG
        } else {
            BOARD_BG
        };

        let px = start_x + 1 + x as u16 * self.cell_w;
        let py = start_y + 1 + y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ' ', CellStyle::new(BOARD_BG, bg));

        let (ch, style) = match snap.cell(x, y) {
            Some(tile) => tile_glyph(tile, bg),
            None => ('·', CellStyle::new(Rgb::new(90, 90, 100), bg).dim()),
        };
        fb.put_char(px + self.cell_w / 2, py, ch, style);

        if snap.cursor == coord && !snap.game_over {
            let bracket = CellStyle::new(Rgb::new(255, 255, 255), bg).bold();
            fb.put_char(px, py, '[', bracket);
            fb.put_char(px + self.cell_w - 1, py, ']', bracket);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, panel_x: u16, top: u16) {
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::default());
        let warn = CellStyle::new(Rgb::new(240, 80, 80), Rgb::default()).bold();

        let mut y = top;
        for (name, shown) in [("LEVEL", snap.level), ("SCORE", snap.score), ("GOAL", snap.score_goal)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, shown, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "TIME", label);
        let time_style = if snap.timer_secs <= CLOCK_WARNING_SECS { warn } else { value };
        fb.put_i32(panel_x, y + 1, snap.timer_secs.max(0), time_style);
        y += 3;

        let help = value.dim();
        for line in ["move  arrows", "swap  enter", "hint  ?", "quit  q"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

/// Glyph and style for a tile: color picks the foreground, pattern the glyph.
pub fn tile_glyph(tile: CellSnapshot, bg: Rgb) -> (char, CellStyle) {
    let ch = match tile.pattern {
        TilePattern::Flat => '■',
        TilePattern::Circle => '●',
        TilePattern::Cross => '✚',
        TilePattern::Square => '▣',
        TilePattern::Triangle => '▲',
        TilePattern::Star => '★',
    };
    let style = CellStyle::new(tile_color(tile.color), bg);
    if tile.pattern.is_star() {
        (ch, style.bold())
    } else {
        (ch, style)
    }
}

pub fn tile_color(color: TileColor) -> Rgb {
    match color {
        TileColor::Beige => Rgb::new(222, 200, 160),
        TileColor::Pink => Rgb::new(240, 130, 180),
        TileColor::Purple => Rgb::new(160, 100, 220),
        TileColor::LightGreen => Rgb::new(140, 220, 140),
        TileColor::Blue => Rgb::new(80, 140, 230),
        TileColor::Orange => Rgb::new(250, 160, 60),
    }
}
