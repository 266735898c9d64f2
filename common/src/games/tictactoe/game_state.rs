use super::board::{Board, BOARD_SIZE};
use super::error::MoveError;
use super::types::{GameStatus, Mark, WinningLine};
use super::win_detector::{check_win_with_line, evaluate_termination};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub move_count: usize,
    pub last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::Active,
            move_count: 0,
            last_move: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Plays the mark whose turn it is.
    pub fn apply_move(&mut self, position: usize) -> Result<GameStatus, MoveError> {
        self.place_mark(self.current_mark, position)
    }

    pub fn place_mark(&mut self, mark: Mark, position: usize) -> Result<GameStatus, MoveError> {
        if !self.status.is_active() {
            return Err(MoveError::GameAlreadyOver);
        }

        if position >= BOARD_SIZE {
            return Err(MoveError::InvalidPosition(position.to_string()));
        }

        if !self.board.is_empty_cell(position) {
            return Err(MoveError::CellOccupied(position));
        }

        if mark != self.current_mark {
            return Err(MoveError::NotYourTurn);
        }

        self.board.set(position, mark);
        self.move_count += 1;
        self.last_move = Some(position);

        self.status = evaluate_termination(&self.board);

        if self.status.is_active() {
            self.current_mark = self.current_mark.opponent();
        }

        Ok(self.status)
    }

    pub fn get_winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::Won(_) => check_win_with_line(&self.board),
            _ => None,
        }
    }
}
