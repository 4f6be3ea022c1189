//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The logical 600 x 600 display is drawn as a square region of terminal
//! cells below a one-line status bar, with the timer bar underneath. Every
//! terminal cell stands for the logical point at its center, and both drawing
//! and click mapping go through that same point, so a click always lands on the
//! tile that was drawn under the cursor.
//!
//! That sampling limits how small a tile can get. A tile is playable only if
//! some terminal cell center falls inside it; [`BoardLayout::resolves`] checks
//! this for a whole board, and boards that do not resolve are replaced by a
//! prompt to enlarge the terminal. An 80 x 24 terminal resolves boards up to
//! 22 x 22.

use crate::core::board::cell_extent;
use crate::core::{CellView, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    InputEvent, LeaderboardEntry, Phase, Point, Rect, Reveal, DISPLAY_HEIGHT, DISPLAY_WIDTH, NAME_BOX_RECT,
    PLAY_AGAIN_RECT,
};

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

/// Where the logical display sits in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
}

impl BoardLayout {
    pub fn is_empty(&self) -> bool {
        self.cols == 0 || self.rows == 0
    }

    /// Logical point at the center of terminal cell `(col, row)`.
    pub fn to_logical(&self, col: u16, row: u16) -> Option<Point> {
        if self.is_empty()
            || col < self.x
            || row < self.y
            || col >= self.x + self.cols
            || row >= self.y + self.rows
        {
            return None;
        }
        let lc = (col - self.x) as i32;
        let lr = (row - self.y) as i32;
        Some(Point::new(
            (2 * lc + 1) * DISPLAY_WIDTH / (2 * self.cols as i32),
            (2 * lr + 1) * DISPLAY_HEIGHT / (2 * self.rows as i32),
        ))
    }

    /// Terminal cell covering logical point `p`.
    pub fn to_terminal(&self, p: Point) -> Option<(u16, u16)> {
        if self.is_empty() || p.x < 0 || p.y < 0 || p.x >= DISPLAY_WIDTH || p.y >= DISPLAY_HEIGHT {
            return None;
        }
        let col = p.x * self.cols as i32 / DISPLAY_WIDTH;
        let row = p.y * self.rows as i32 / DISPLAY_HEIGHT;
        Some((self.x + col as u16, self.y + row as u16))
    }

    /// True when every tile of an `n x n` board contains at least one
    /// terminal cell center, so every tile can be drawn and clicked.
    pub fn resolves(&self, board_size: u32) -> bool {
        !self.is_empty()
            && axis_resolves(self.cols, DISPLAY_WIDTH, board_size)
            && axis_resolves(self.rows, DISPLAY_HEIGHT, board_size)
    }

    /// Terminal cells whose centers fall inside `rect`.
    pub fn cells_in(&self, rect: Rect) -> impl Iterator<Item = (u16, u16)> + '_ {
        (self.y..self.y + self.rows)
            .flat_map(move |row| (self.x..self.x + self.cols).map(move |col| (col, row)))
            .filter(move |&(col, row)| {
                self.to_logical(col, row)
                    .map_or(false, |p| rect.contains(p))
            })
    }
}

/// Whether each of `n` tile spans along one axis holds a cell center.
fn axis_resolves(cells: u16, extent: i32, board_size: u32) -> bool {
    let n = board_size.max(1) as i32;
    let size = cell_extent(DISPLAY_HEIGHT, board_size);
    let cells = cells as i32;
    (0..n).all(|k| {
        let (lo, hi) = (k * size, k * size + size - 1);
        (0..cells).any(|c| {
            let center = (2 * c + 1) * extent / (2 * cells);
            center >= lo && center < hi
        })
    })
}

const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const GRAY: Rgb = Rgb::new(155, 155, 155);
const YELLOW: Rgb = Rgb::new(255, 255, 0);
const RED: Rgb = Rgb::new(255, 0, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);
const HIDDEN_A: Rgb = Rgb::new(44, 44, 54);
const HIDDEN_B: Rgb = Rgb::new(30, 30, 38);

/// A lightweight terminal renderer for the tile game.
pub struct GameView {
    /// Terminal columns per terminal row of board, to keep tiles square.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Board placement: status line on row 0, board from row 1, timer below.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let rows = viewport
            .height
            .saturating_sub(2)
            .min(viewport.width / self.cell_w);
        let cols = rows * self.cell_w;
        BoardLayout {
            x: viewport.width.saturating_sub(cols) / 2,
            y: 1,
            cols,
            rows,
        }
    }

    /// Map a terminal click to a logical point, if it hit the display area.
    pub fn to_logical(&self, viewport: Viewport, col: u16, row: u16) -> Option<Point> {
        self.layout(viewport).to_logical(col, row)
    }

    /// Input event for a primary click at terminal cell `(col, row)`.
    ///
    /// On the home screen a click anywhere starts the game, margins included,
    /// so those clicks are forwarded at the logical origin.
    pub fn pointer_event(
        &self,
        viewport: Viewport,
        phase: Phase,
        col: u16,
        row: u16,
    ) -> Option<InputEvent> {
        match self.to_logical(viewport, col, row) {
            Some(p) => Some(InputEvent::PointerDown(p)),
            None if phase == Phase::Home => Some(InputEvent::PointerDown(Point::default())),
            None => None,
        }
    }

    /// Render the current frame into an existing framebuffer.
    ///
    /// `leaders` is only drawn on the game over screen.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        leaders: &[LeaderboardEntry],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        if layout.is_empty() {
            fb.put_str(0, 0, "terminal too small", CellStyle::new(WHITE, BLACK));
            return;
        }

        match snap.phase {
            Phase::Home => self.draw_home(fb, &layout),
            Phase::Reveal | Phase::Play | Phase::RoundEnd => {
                self.draw_status(fb, snap, viewport);
                if layout.resolves(snap.board_size) {
                    self.draw_board(fb, snap, &layout);
                } else {
                    self.draw_unresolved(fb, snap, &layout);
                }
                if snap.phase.is_timed() {
                    self.draw_timer(fb, snap, &layout);
                }
            }
            Phase::GameOver => self.draw_game_over(fb, snap, leaders, &layout),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        leaders: &[LeaderboardEntry],
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, leaders, viewport, &mut fb);
        fb
    }

    fn draw_home(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let title = CellStyle::new(WHITE, BLACK).bold();
        let hint = CellStyle::new(GRAY, BLACK).dim();
        let mid = layout.y + layout.rows / 2;
        fb.put_str_centered(layout.x, layout.cols, mid.saturating_sub(1), "Click To Play", title);
        fb.put_str_centered(layout.x, layout.cols, mid + 1, "q to quit", hint);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let label = CellStyle::new(WHITE, BLACK).bold();
        let status = format!(
            "LEVEL {}  LIVES {}  BOARD {}x{}",
            snap.level,
            snap.lives.max(0),
            snap.board_size,
            snap.board_size
        );
        fb.put_str_centered(0, viewport.width, 0, &status, label);
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        for row in layout.y..layout.y + layout.rows {
            for col in layout.x..layout.x + layout.cols {
                let Some(p) = layout.to_logical(col, row) else {
                    continue;
                };
                if let Some(cell) = snap.cell_at(p) {
                    let (ch, style) = tile_glyph(cell);
                    fb.put_char(col, row, ch, style);
                }
            }
        }
    }

    fn draw_unresolved(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        let style = CellStyle::new(YELLOW, BLACK).bold();
        let msg = format!("enlarge terminal for {0}x{0} board", snap.board_size);
        fb.put_str_centered(layout.x, layout.cols, layout.y + layout.rows / 2, &msg, style);
    }

    fn draw_timer(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        let y = layout.y + layout.rows;
        let filled = (layout.cols as f64 * snap.time_fraction()).round() as u16;
        fb.fill_rect(layout.x, y, filled, 1, '█', CellStyle::new(YELLOW, BLACK));
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        leaders: &[LeaderboardEntry],
        layout: &BoardLayout,
    ) {
        let text = CellStyle::new(WHITE, BLACK).bold();
        let left = DISPLAY_WIDTH * 10 / 33;

        self.put_logical(fb, layout, Point::new(5, 1), "Top 3", CellStyle::new(GREEN, BLACK).bold());
        for (i, entry) in leaders.iter().enumerate() {
            let p = Point::new(5, 50 * (i as i32 + 1));
            self.put_logical(fb, layout, p, &entry.to_string(), text);
        }

        self.put_logical(fb, layout, Point::new(left, DISPLAY_HEIGHT / 3), "Game Over!", text);
        let score = format!("Final score: {}", snap.score);
        self.put_logical(fb, layout, Point::new(left, DISPLAY_HEIGHT * 5 / 12), &score, text);
        self.put_logical(fb, layout, Point::new(left, DISPLAY_HEIGHT / 2), "Enter Name:", text);

        let box_style = CellStyle::new(WHITE, Rgb::new(20, 20, 20));
        for (col, row) in layout.cells_in(NAME_BOX_RECT) {
            fb.put_char(col, row, ' ', box_style);
        }
        self.put_in_rect(fb, layout, NAME_BOX_RECT, &format!("{}_", snap.name), box_style, false);

        let button = CellStyle::new(BLACK, WHITE).bold();
        for (col, row) in layout.cells_in(PLAY_AGAIN_RECT) {
            fb.put_char(col, row, ' ', button);
        }
        self.put_in_rect(fb, layout, PLAY_AGAIN_RECT, "Play Again", button, true);
    }

    fn put_logical(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        p: Point,
        s: &str,
        style: CellStyle,
    ) {
        if let Some((col, row)) = layout.to_terminal(p) {
            fb.put_str(col, row, s, style);
        }
    }

    /// Write `s` on the middle row of the cells covering `rect`.
    fn put_in_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        rect: Rect,
        s: &str,
        style: CellStyle,
        centered: bool,
    ) {
        let mut cells = layout.cells_in(rect).peekable();
        let Some(&(x0, y0)) = cells.peek() else {
            return;
        };
        let (x1, y1) = cells.fold((x0, y0), |acc, (c, r)| (acc.0.max(c), acc.1.max(r)));
        let row = y0 + (y1 - y0) / 2;
        let w = x1 - x0 + 1;
        if centered {
            fb.put_str_centered(x0, w, row, s, style);
        } else {
            let tail: String = {
                let len = s.chars().count();
                s.chars().skip(len.saturating_sub(w as usize)).collect()
            };
            fb.put_str(x0, row, &tail, style);
        }
    }
}

/// Glyph for a board cell. Hidden tiles alternate shades so tile edges stay
/// visible at terminal resolution.
fn tile_glyph(cell: &CellView) -> (char, CellStyle) {
    let pitch = (cell.rect.w + 1).max(1);
    let checker = ((cell.rect.x / pitch) + (cell.rect.y / pitch)) % 2 == 0;
    let hidden = if checker { HIDDEN_A } else { HIDDEN_B };
    match cell.reveal {
        Reveal::Hidden => ('·', CellStyle::new(Rgb::new(90, 90, 100), hidden).dim()),
        Reveal::Target | Reveal::Found => ('█', CellStyle::new(WHITE, BLACK)),
        Reveal::Wrong => ('█', CellStyle::new(RED, BLACK)),
        Reveal::Missed => ('█', CellStyle::new(YELLOW, BLACK)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_square_and_centered() {
        let view = GameView::default();
        let layout = view.layout(Viewport::new(80, 24));
        assert_eq!(layout.rows, 22);
        assert_eq!(layout.cols, 44);
        assert_eq!(layout.x, 18);
        assert_eq!(layout.y, 1);
    }

    #[test]
    fn narrow_viewport_limits_by_width() {
        let layout = GameView::default().layout(Viewport::new(20, 40));
        assert_eq!(layout.rows, 10);
        assert_eq!(layout.cols, 20);
        assert_eq!(layout.x, 0);
    }

    #[test]
    fn to_logical_rejects_outside_points() {
        let layout = GameView::default().layout(Viewport::new(80, 24));
        assert_eq!(layout.to_logical(0, 5), None);
        assert_eq!(layout.to_logical(20, 0), None);
        assert_eq!(layout.to_logical(20, 23), None);
        assert!(layout.to_logical(18, 1).is_some());
    }

    #[test]
    fn to_terminal_inverts_to_logical() {
        let layout = GameView::default().layout(Viewport::new(80, 24));
        for row in layout.y..layout.y + layout.rows {
            for col in layout.x..layout.x + layout.cols {
                let p = layout.to_logical(col, row).unwrap();
                assert_eq!(layout.to_terminal(p), Some((col, row)));
            }
        }
    }

    #[test]
    fn play_again_covers_some_cells() {
        let layout = GameView::default().layout(Viewport::new(80, 24));
        assert!(layout.cells_in(PLAY_AGAIN_RECT).count() > 0);
    }

    #[test]
    fn resolution_limit_on_a_standard_terminal() {
        let layout = GameView::default().layout(Viewport::new(80, 24));
        assert!((1..=22).all(|n| layout.resolves(n)));
        assert!(!layout.resolves(23));
    }

    #[test]
    fn margin_click_starts_only_from_home() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        assert_eq!(
            view.pointer_event(vp, Phase::Home, 2, 10),
            Some(InputEvent::PointerDown(Point::default()))
        );
        assert_eq!(view.pointer_event(vp, Phase::Play, 2, 10), None);
        assert_eq!(view.pointer_event(vp, Phase::GameOver, 79, 0), None);
        assert_eq!(
            view.pointer_event(vp, Phase::Play, 18, 1),
            view.to_logical(vp, 18, 1).map(InputEvent::PointerDown)
        );
    }

    #[test]
    fn tiny_viewport_renders_message() {
        let view = GameView::default();
        let fb = view.render(&GameSnapshot::default(), &[], Viewport::new(30, 2));
        assert!(fb.contains_text("terminal too small"));
    }
}
