use tracing::{debug, trace};

use crate::board::Board;
use crate::config::{MoveOrder, SessionConfig};
use crate::error::RejectReason;
use crate::history::{History, MoveRecord};
use crate::rules::detect_winner;
use crate::types::{BOARD_LEN, GameView, Mark, MoveEntry, Position, WinResult};

const START_DESCRIPTION: &str = "Go to game start";

/// One game of tic-tac-toe with time travel over its move history.
///
/// The mark to move and the winner are always derived from `cursor` and the
/// displayed board; neither is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: History,
    cursor: usize,
    ascending: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_config(&SessionConfig::default())
    }

    pub fn with_config(config: &SessionConfig) -> Self {
        Self {
            history: History::new(),
            cursor: 0,
            ascending: config.order == MoveOrder::Ascending,
        }
    }

    /// Plays the current mark at `index`. Rejected moves leave the session untouched.
    pub fn apply_move(&mut self, index: usize) {
        if let Err(reason) = self.try_apply_move(index) {
            debug!(index, %reason, "move ignored");
        }
    }

    pub fn try_apply_move(&mut self, index: usize) -> Result<(), RejectReason> {
        if index >= BOARD_LEN {
            return Err(RejectReason::OutOfRange(index));
        }

        let board = *self.current_board();
        if let Some(win) = detect_winner(&board) {
            return Err(RejectReason::GameOver(win.mark));
        }
        if !board.is_empty_at(index) {
            return Err(RejectReason::Occupied(index));
        }

        let mark = self.next_mark();
        let record = MoveRecord {
            board: board.with_mark(index, mark),
            position: Some(Position::from_index(index)),
        };
        self.cursor = self.history.branch_from(self.cursor, record);
        trace!(index, %mark, step = self.cursor, "move applied");

        Ok(())
    }

    /// Moves the cursor to `step` without discarding later records.
    pub fn jump_to(&mut self, step: usize) {
        if let Err(reason) = self.try_jump_to(step) {
            debug!(step, %reason, "jump ignored");
        }
    }

    pub fn try_jump_to(&mut self, step: usize) -> Result<(), RejectReason> {
        if step >= self.history.len() {
            return Err(RejectReason::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.cursor = step;
        trace!(step, "jumped");
        Ok(())
    }

    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
    }

    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.cursor)
    }

    pub fn winner(&self) -> Option<WinResult> {
        detect_winner(self.current_board())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn current_board(&self) -> &Board {
        &self.current_record().board
    }

    pub fn current_view(&self) -> GameView {
        let board = self.current_board();
        let win = detect_winner(board);
        let status = match win {
            Some(win) => format!("Winner: {}", win.mark),
            None => format!("Next player: {}", self.next_mark()),
        };

        GameView {
            cells: board.cells().to_vec(),
            winner: win.map(|win| win.mark),
            winning_line: win.map(|win| win.line.to_vec()).unwrap_or_default(),
            status,
            moves: self.move_list(),
            ascending: self.ascending,
        }
    }

    fn move_list(&self) -> Vec<MoveEntry> {
        let active_position = self.current_record().position;
        let mut moves: Vec<MoveEntry> = self
            .history
            .records()
            .iter()
            .enumerate()
            .map(|(step, record)| MoveEntry {
                step,
                description: describe(step, record.position),
                active: record.position == active_position,
            })
            .collect();

        if !self.ascending {
            moves.reverse();
        }
        moves
    }

    fn current_record(&self) -> &MoveRecord {
        &self.history.records()[self.cursor]
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board) {
        let position = self.current_record().position;
        self.history = History::new();
        self.cursor = self
            .history
            .branch_from(0, MoveRecord { board, position });
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(step: usize, position: Option<Position>) -> String {
    match position {
        Some(pos) if step > 0 => format!("Go to move #{step}, position: {pos}"),
        _ => START_DESCRIPTION.to_string(),
    }
}
