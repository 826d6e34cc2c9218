use crate::types::{BOARD_LEN, Mark};

/// Tic-tac-toe board: nine cells in row-major order.
///
/// Boards are values. Placing a mark produces a new board and leaves the
/// source untouched, so snapshots stored in history never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Mark>; BOARD_LEN],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; BOARD_LEN]) -> Self {
        Self { cells }
    }

    /// Returns the mark at `index`, or `None` for an empty or out-of-range cell.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// `false` for out-of-range indices.
    pub fn is_empty_at(&self, index: usize) -> bool {
        index < BOARD_LEN && self.cells[index].is_none()
    }

    /// Returns a copy of this board with `mark` written at `index`.
    /// Caller contract: `index < BOARD_LEN`.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[index] = Some(mark);
        next
    }

    pub fn cells(&self) -> &[Option<Mark>; BOARD_LEN] {
        &self.cells
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.mark_count() == BOARD_LEN
    }
}
