//! Board module - generates and owns the tile grid
//!
//! A board is an `n x n` grid of cells stored row-major in a flat `Vec`.
//! Cell `(row, col)` lives at index `row * n + col` and covers the logical rect
//! `(col * size, row * size, size - 1, size - 1)` where `size = display_height / n`.
//! The missing unit on each side leaves a one-unit gap between neighbours for
//! outlines.
//!
//! The number of targets depends on the sublevel (`level % 3`):
//!
//! | Sublevel | Targets |
//! |----------|---------|
//! | 0 | ⌊n²/3⌋ |
//! | 1 | ⌊n²·1.25/3⌋ |
//! | 2 | ⌊n²/2⌋ |

use crate::rng::TileRng;
use crate::types::{Point, Rect, TileTag};

/// Number of targets for a board of edge `board_size` at `level`.
///
/// Sublevel 1 is computed as `5n²/12`, which is `n²·1.25/3` in integer arithmetic.
pub fn target_count(level: u32, board_size: u32) -> usize {
    let area = (board_size as usize) * (board_size as usize);
    match level % 3 {
        0 => area / 3,
        1 => area * 5 / 12,
        _ => area / 2,
    }
}

/// Edge length of one cell in logical units, gap included.
pub fn cell_extent(display_height: i32, board_size: u32) -> i32 {
    display_height / board_size.max(1) as i32
}

/// A single tile on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub rect: Rect,
    pub tag: TileTag,
    pub found: bool,
}

impl Cell {
    fn new(rect: Rect, tag: TileTag) -> Self {
        Self {
            rect,
            tag,
            found: false,
        }
    }

    pub fn is_target(&self) -> bool {
        self.tag == TileTag::Target
    }

    /// A target the player has not clicked yet.
    pub fn is_pending(&self) -> bool {
        self.is_target() && !self.found
    }
}

/// The `n x n` grid for one round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    board_size: u32,
    target_count: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// A board with no cells, used before the first round starts.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Generate a board for `level` with randomly placed targets.
    ///
    /// A `board_size` of 0 is treated as 1.
    pub fn generate(level: u32, board_size: u32, display_height: i32, rng: &mut TileRng) -> Self {
        debug_assert!(board_size > 0, "board size must be positive");
        let board_size = board_size.max(1);
        let n = board_size as usize;
        let count = target_count(level, board_size);
        let targets = rng.sample_indices(n * n, count);
        let board = Self::with_targets(board_size, display_height, &targets);
        log::debug!(
            "generated {n}x{n} board for level {level} with {} targets",
            board.target_count
        );
        board
    }

    /// Build a board with targets at the given indices.
    ///
    /// Out-of-range and duplicate indices are ignored; the stored target count is
    /// the number of cells actually tagged.
    pub fn with_targets(board_size: u32, display_height: i32, targets: &[usize]) -> Self {
        let board_size = board_size.max(1);
        let n = board_size as usize;
        let size = cell_extent(display_height, board_size);

        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let rect = Rect::new(col as i32 * size, row as i32 * size, size - 1, size - 1);
                cells.push(Cell::new(rect, TileTag::Neutral));
            }
        }

        for &idx in targets {
            if let Some(cell) = cells.get_mut(idx) {
                cell.tag = TileTag::Target;
            }
        }

        let target_count = cells.iter().filter(|c| c.is_target()).count();
        Self {
            board_size,
            target_count,
            cells,
        }
    }

    pub fn board_size(&self) -> u32 {
        self.board_size
    }

    /// Targets tagged at creation. Never recomputed.
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    pub(crate) fn cell_mut(&mut self, idx: usize) -> Option<&mut Cell> {
        self.cells.get_mut(idx)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the first cell (row-major scan) whose rect contains `p`.
    pub fn cell_index_at(&self, p: Point) -> Option<usize> {
        self.cells.iter().position(|c| c.rect.contains(p))
    }

    /// True when no target remains unfound. Holds trivially for zero targets.
    pub fn all_found(&self) -> bool {
        !self.cells.iter().any(Cell::is_pending)
    }

    pub fn found_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_target() && c.found).count()
    }

    pub fn wrong_count(&self) -> usize {
        self.cells.iter().filter(|c| c.tag == TileTag::Wrong).count()
    }

    pub fn pending_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_pending()).count()
    }
}
