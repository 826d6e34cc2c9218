use crate::board::Board;
use crate::types::WinResult;

/// Winning lines in priority order: rows, columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first complete line in `LINES` order, if any.
pub fn detect_winner(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some(WinResult {
            mark,
            line: [a, b, c],
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(idx, mark)| board.with_mark(idx, mark))
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(detect_winner(&Board::new()), None);
    }

    #[test]
    fn every_line_is_detected() {
        for line in LINES {
            let board = board_with(&line.map(|idx| (idx, Mark::O)));

            assert_eq!(
                detect_winner(&board),
                Some(WinResult {
                    mark: Mark::O,
                    line
                })
            );
        }
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);

        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn earlier_line_wins_when_several_are_complete() {
        // Top row and left column both complete; the row comes first.
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);

        let first = detect_winner(&board);

        assert_eq!(first.map(|win| win.line), Some([0, 1, 2]));
        assert_eq!(detect_winner(&board), first);
    }

    #[test]
    fn anti_diagonal_is_checked_last() {
        let board = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);

        assert_eq!(detect_winner(&board).map(|win| win.line), Some([2, 4, 6]));
    }
}
