use crate::board::Board;
use crate::types::Position;

/// A board snapshot and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub board: Board,
    /// `None` only for the game-start record.
    pub position: Option<Position>,
}

impl MoveRecord {
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }
}

/// Ordered move records. Index 0 is always the empty start board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    records: Vec<MoveRecord>,
}

impl History {
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::start()],
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Never true; index 0 always exists.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&MoveRecord> {
        self.records.get(step)
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Drops every record after `cursor`, appends `record` and returns its index.
    /// Caller contract: `cursor < self.len()`.
    pub fn branch_from(&mut self, cursor: usize, record: MoveRecord) -> usize {
        self.records.truncate(cursor + 1);
        self.records.push(record);
        self.records.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
