use thiserror::Error;

/// Why a move was rejected. Rejections never change the game state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("Not your turn")]
    NotYourTurn,

    #[error("Game is over")]
    GameAlreadyOver,

    #[error("No valid moves")]
    NoLegalMove,
}

impl MoveError {
    pub fn code(&self) -> &'static str {
        match self {
            MoveError::InvalidPosition(_) => "invalid_position",
            MoveError::CellOccupied(_) => "cell_occupied",
            MoveError::NotYourTurn => "not_your_turn",
            MoveError::GameAlreadyOver => "game_already_over",
            MoveError::NoLegalMove => "no_legal_move",
        }
    }
}

/// Validates a raw caller-supplied position before it reaches the engine.
pub fn parse_position(raw: i64) -> Result<usize, MoveError> {
    match usize::try_from(raw) {
        Ok(index) if index < super::board::BOARD_SIZE => Ok(index),
        _ => Err(MoveError::InvalidPosition(raw.to_string())),
    }
}
