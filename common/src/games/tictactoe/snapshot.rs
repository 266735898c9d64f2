use serde::Serialize;

use super::board::BOARD_SIZE;
use super::error::MoveError;
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, Mark};

/// Read-only view of a game as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: [&'static str; BOARD_SIZE],
    pub current_player: Mark,
    pub game_active: bool,
    pub winner: Option<&'static str>,
    pub move_count: usize,
    pub winning_line: Option<[usize; 3]>,
}

impl From<&TicTacToeGameState> for GameSnapshot {
    fn from(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board.to_symbols(),
            current_player: state.current_mark,
            game_active: state.status.is_active(),
            winner: state.status.winner_label(),
            move_count: state.move_count,
            winning_line: state.winning_line().map(|line| line.cells),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotGameSnapshot {
    #[serde(flatten)]
    pub game: GameSnapshot,
    pub difficulty: Difficulty,
    pub human_player: Mark,
    pub bot_player: Mark,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_move: Option<usize>,
}

/// Outcome of a submitted move: the resulting state plus the rejection
/// reason and its `MoveError::code` when the move was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport<S> {
    pub accepted: bool,
    pub state: S,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
}

impl<S> MoveReport<S> {
    pub fn accepted(state: S) -> Self {
        Self {
            accepted: true,
            state,
            reason: None,
            error_code: None,
        }
    }

    pub fn rejected(state: S, error: &MoveError) -> Self {
        Self {
            accepted: false,
            state,
            reason: Some(error.to_string()),
            error_code: Some(error.code()),
        }
    }

    pub fn from_result(result: Result<S, MoveError>, current: impl FnOnce() -> S) -> Self {
        match result {
            Ok(state) => Self::accepted(state),
            Err(error) => Self::rejected(current(), &error),
        }
    }
}
