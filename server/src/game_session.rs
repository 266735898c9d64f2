use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    BotGameSession, BotGameSnapshot, GameSnapshot, Mark, MoveError, MoveReport, ResetOptions,
    TicTacToeGameState,
};

use crate::server_config::GameMode;

/// The single live game served by this process.
pub enum GameSession {
    TwoPlayer(TicTacToeGameState),
    Bot(BotGameSession<SessionRng>),
}

pub type SharedGameSession = Arc<Mutex<GameSession>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SessionSnapshot {
    TwoPlayer(GameSnapshot),
    Bot(BotGameSnapshot),
}

impl SessionSnapshot {
    pub fn game(&self) -> &GameSnapshot {
        match self {
            SessionSnapshot::TwoPlayer(snapshot) => snapshot,
            SessionSnapshot::Bot(snapshot) => &snapshot.game,
        }
    }
}

impl GameSession {
    pub fn new(mode: GameMode, defaults: ResetOptions, rng: SessionRng) -> Self {
        match mode {
            GameMode::TwoPlayer => GameSession::TwoPlayer(TicTacToeGameState::new()),
            GameMode::Bot => GameSession::Bot(BotGameSession::new(defaults, rng)),
        }
    }

    /// Options only matter against the bot.
    pub fn reset(&mut self, options: ResetOptions) -> SessionSnapshot {
        match self {
            GameSession::TwoPlayer(state) => {
                state.reset();
                SessionSnapshot::TwoPlayer(GameSnapshot::from(&*state))
            }
            GameSession::Bot(session) => SessionSnapshot::Bot(session.reset(options)),
        }
    }

    pub fn apply_move(&mut self, position: usize) -> MoveReport<SessionSnapshot> {
        let result = match self {
            GameSession::TwoPlayer(state) => state.apply_move(position).map(|_| ()),
            GameSession::Bot(session) => session.make_human_move(position).map(|_| ()),
        };
        MoveReport::from_result(result.map(|_| self.snapshot()), || self.snapshot())
    }

    /// Report for input that never reached the engine.
    pub fn reject(&self, error: &MoveError) -> MoveReport<SessionSnapshot> {
        MoveReport::rejected(self.snapshot(), error)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        match self {
            GameSession::TwoPlayer(state) => SessionSnapshot::TwoPlayer(GameSnapshot::from(state)),
            GameSession::Bot(session) => SessionSnapshot::Bot(session.snapshot()),
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        match self {
            GameSession::TwoPlayer(state) => state,
            GameSession::Bot(session) => session.game(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state().status.is_active()
    }

    pub fn current_player(&self) -> Mark {
        self.state().current_mark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::{Difficulty, GameStatus};

    fn two_player() -> GameSession {
        GameSession::new(GameMode::TwoPlayer, ResetOptions::default(), SessionRng::new(1))
    }

    #[test]
    fn test_two_player_alternates_marks() {
        let mut session = two_player();
        assert!(session.apply_move(0).accepted);
        assert_eq!(session.current_player(), Mark::O);
        assert!(session.apply_move(1).accepted);
        assert_eq!(session.snapshot().game().board[..2], ["X", "O"]);
    }

    #[test]
    fn test_two_player_column_win() {
        let mut session = two_player();
        for position in [0, 1, 3, 4, 6] {
            assert!(session.apply_move(position).accepted);
        }
        assert_eq!(session.state().status, GameStatus::Won(Mark::X));
        assert_eq!(session.state().move_count, 5);
        let report = session.apply_move(8);
        assert!(!report.accepted);
        assert_eq!(report.reason.as_deref(), Some("Game is over"));
    }

    #[test]
    fn test_two_player_reset_ignores_bot_options() {
        let mut session = two_player();
        session.apply_move(4);
        let snapshot = session.reset(ResetOptions::new(Difficulty::Hard, Mark::O));
        assert!(matches!(snapshot, SessionSnapshot::TwoPlayer(_)));
        assert_eq!(snapshot.game().move_count, 0);
        assert_eq!(snapshot.game().current_player, Mark::X);
    }

    #[test]
    fn test_bot_session_answers_move() {
        let mut session = GameSession::new(
            GameMode::Bot,
            ResetOptions::new(Difficulty::Hard, Mark::X),
            SessionRng::new(1),
        );
        let report = session.apply_move(4);
        assert!(report.accepted);
        assert_eq!(report.state.game().move_count, 2);
        match report.state {
            SessionSnapshot::Bot(snapshot) => assert!(snapshot.bot_move.is_some()),
            SessionSnapshot::TwoPlayer(_) => panic!("expected bot snapshot"),
        }
    }

    #[test]
    fn test_reject_keeps_state() {
        let session = two_player();
        let report = session.reject(&MoveError::InvalidPosition("abc".to_string()));
        assert!(!report.accepted);
        assert_eq!(report.reason.as_deref(), Some("Invalid position: abc"));
        assert_eq!(report.state, session.snapshot());
    }
}
