mod board;
mod bot_controller;
mod bot_session;
mod error;
mod game_state;
mod snapshot;
mod types;
mod win_detector;

pub use board::{get_available_moves, Board, BOARD_SIZE, CENTER, CORNERS};
pub use bot_controller::{calculate_minimax_move, calculate_move, find_winning_move, BotInput, EASY_SMART_MOVE_CHANCE};
pub use bot_session::{BotGameSession, ResetOptions, TurnPhase};
pub use error::{parse_position, MoveError};
pub use game_state::TicTacToeGameState;
pub use snapshot::{BotGameSnapshot, GameSnapshot, MoveReport};
pub use types::{Difficulty, GameStatus, Mark, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate_termination, WINNING_LINES};
