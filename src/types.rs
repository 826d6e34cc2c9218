use std::fmt;

use serde::Serialize;

pub const BOARD_WIDTH: usize = 3;
pub const BOARD_LEN: usize = BOARD_WIDTH * BOARD_WIDTH;

/// A player's mark. `X` always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark to move after `step` moves have been played.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A 1-indexed board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Caller contract: `index < BOARD_LEN`.
    pub fn from_index(index: usize) -> Self {
        Self {
            row: (index / BOARD_WIDTH) as u8 + 1,
            col: (index % BOARD_WIDTH) as u8 + 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A completed line and the mark that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinResult {
    pub mark: Mark,
    pub line: [usize; 3],
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveEntry {
    /// History index to pass back to `jump_to`.
    pub step: usize,
    pub description: String,
    /// Contract: `true` iff this entry's position equals the displayed record's position.
    pub active: bool,
}

/// Everything the page needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub cells: Vec<Option<Mark>>,
    pub winner: Option<Mark>,
    /// Contract:
    /// - Winner present: the three winning cell indices.
    /// - No winner: must be an empty list.
    pub winning_line: Vec<usize>,
    pub status: String,
    pub moves: Vec<MoveEntry>,
    pub ascending: bool,
}
