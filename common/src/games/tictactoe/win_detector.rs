use super::board::Board;
use super::types::{GameStatus, Mark, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = board.cell(a)?;
        if board.cell(b) == Some(mark) && board.cell(c) == Some(mark) {
            Some(WinningLine::new(mark, line))
        } else {
            None
        }
    })
}

/// A completed line takes priority over a full board.
pub fn evaluate_termination(board: &Board) -> GameStatus {
    if let Some(mark) = check_win(board) {
        return GameStatus::Won(mark);
    }
    if board.is_full() {
        return GameStatus::Tied;
    }
    GameStatus::Active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(symbols: [&str; 9]) -> Board {
        Board::from_symbols(symbols).unwrap()
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for mark in [Mark::X, Mark::O] {
            for line in WINNING_LINES {
                let mut b = Board::new();
                for index in line {
                    b = b.with_mark(index, mark);
                }
                let found = check_win_with_line(&b).unwrap();
                assert_eq!(found.mark, mark);
                assert_eq!(found.cells, line);
                assert_eq!(evaluate_termination(&b), GameStatus::Won(mark));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let b = board(["X", "X", "O", "", "", "", "", "", ""]);
        assert_eq!(check_win(&b), None);
        assert_eq!(evaluate_termination(&b), GameStatus::Active);
    }

    #[test]
    fn test_full_board_without_line_is_tied() {
        let b = board(["X", "O", "X", "X", "O", "O", "O", "X", "X"]);
        assert_eq!(evaluate_termination(&b), GameStatus::Tied);
    }

    #[test]
    fn test_win_on_last_cell_beats_tie() {
        let b = board(["X", "O", "X", "O", "X", "O", "O", "X", "X"]);
        assert!(b.is_full());
        assert_eq!(evaluate_termination(&b), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_won_iff_some_line_fully_owned() {
        // All 3^9 cell assignments, reachable or not.
        let symbols = [None, Some(Mark::X), Some(Mark::O)];
        for code in 0..3usize.pow(9) {
            let mut cells = [None; 9];
            let mut rest = code;
            for cell in cells.iter_mut() {
                *cell = symbols[rest % 3];
                rest /= 3;
            }
            let b = Board::from_cells(cells);
            let owned = |mark: Mark| {
                WINNING_LINES
                    .iter()
                    .any(|line| line.iter().all(|&i| cells[i] == Some(mark)))
            };
            match evaluate_termination(&b) {
                GameStatus::Won(mark) => assert!(owned(mark)),
                GameStatus::Tied => {
                    assert!(b.is_full());
                    assert!(!owned(Mark::X) && !owned(Mark::O));
                }
                GameStatus::Active => {
                    assert!(!b.is_full());
                    assert!(!owned(Mark::X) && !owned(Mark::O));
                }
            }
        }
    }
}
