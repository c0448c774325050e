//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::scores::ScoreEntry;
use crate::types::{GameMode, BOARD_HEIGHT, BOARD_WIDTH};

/// Leaderboard rows shown on the game over screen
const GAME_OVER_SCORE_ROWS: usize = 5;

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

const TEXT: CellStyle = CellStyle::fg(Rgb::WHITE);
const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const LOCKED: CellStyle = CellStyle::fg(Rgb::WHITE).on(WELL_BG);
const ACTIVE: CellStyle = CellStyle::fg(Rgb::CYAN).on(WELL_BG).bold();
const EMPTY: CellStyle = CellStyle::fg(Rgb::new(90, 90, 100)).on(WELL_BG).dim();
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));

/// A lightweight terminal renderer for the game screens.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
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

    /// Render without leaderboard data.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_scores(snap, &[], viewport, fb);
    }

    /// Render the screen for the snapshot's mode into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when the terminal size changes.
    pub fn render_into_with_scores(
        &self,
        snap: &GameSnapshot,
        scores: &[ScoreEntry],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        match snap.mode {
            GameMode::Menu => self.draw_menu(fb),
            GameMode::Playing => self.draw_playfield(fb, snap, viewport),
            GameMode::GameOver => self.draw_game_over(fb, snap, scores),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, scores: &[ScoreEntry], viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_scores(snap, scores, viewport, &mut fb);
        fb
    }

    fn draw_menu(&self, fb: &mut FrameBuffer) {
        let mid = fb.height() / 2;
        fb.put_str_centered(mid.saturating_sub(3), "TETRIS", TEXT.bold());
        fb.put_str_centered(mid, "Press ENTER to Start", TEXT);
        fb.put_str_centered(mid.saturating_add(2), "Press Q to Quit", TEXT);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, scores: &[ScoreEntry]) {
        let shown = scores.len().min(GAME_OVER_SCORE_ROWS) as u16;
        let block_h = 6 + if shown > 0 { shown + 2 } else { 0 };
        let mut y = fb.height().saturating_sub(block_h) / 2;

        fb.put_str_centered(y, "GAME OVER", CellStyle::fg(Rgb::RED).bold());
        y = y.saturating_add(2);

        let mut score_line = String::from("Score: ");
        score_line.push_str(&snap.score.to_string());
        fb.put_str_centered(y, &score_line, TEXT);
        y = y.saturating_add(2);

        fb.put_str_centered(y, "Press R to Restart", TEXT);
        y = y.saturating_add(2);

        if shown == 0 {
            return;
        }
        fb.put_str_centered(y, "TOP SCORES", TEXT.bold());
        y = y.saturating_add(1);

        // Fixed-width rows so the columns line up under the centered title.
        let name_w = 12usize;
        let row_w = (4 + name_w + 1 + 10) as u16;
        let x = fb.width().saturating_sub(row_w) / 2;
        for (i, entry) in scores.iter().take(GAME_OVER_SCORE_ROWS).enumerate() {
            let value = if entry.score == snap.score { TEXT.bold() } else { TEXT.dim() };
            let cx = fb.put_u32(x, y, i as u32 + 1, value);
            fb.put_char(cx, y, '.', value);
            let name: String = entry.name.chars().take(name_w).collect();
            fb.put_str(x + 4, y, &name, value);
            let digits = entry.score.checked_ilog10().unwrap_or(0) as u16 + 1;
            fb.put_u32(x + row_w - digits, y, entry.score, value);
            y = y.saturating_add(1);
        }
    }

    fn draw_playfield(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        draw_border(fb, start_x, start_y, frame_w, frame_h, BORDER);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let (ch, style) = if cell != 0 { ('█', LOCKED) } else { ('·', EMPTY) };
                self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, ch, style);
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                // Rows above the ceiling are not drawn.
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, '█', ACTIVE);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w, frame_h);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x.saturating_add(10) > viewport.width {
            // Too narrow for a panel: one score line under the well, if there is room.
            let below = start_y.saturating_add(frame_h);
            let cx = fb.put_str(start_x, below, "Score: ", TEXT);
            fb.put_u32(cx, below, snap.score, TEXT);
            return;
        }

        let label = TEXT.bold();
        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, TEXT);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, TEXT);
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
