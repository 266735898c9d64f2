use crate::games::BotRng;
use crate::{log, log_error};
use super::bot_controller::{calculate_move, BotInput};
use super::error::MoveError;
use super::game_state::TicTacToeGameState;
use super::snapshot::{BotGameSnapshot, GameSnapshot, MoveReport};
use super::types::{Difficulty, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    WaitingForHuman,
    WaitingForBot,
    GameOver,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetOptions {
    pub difficulty: Difficulty,
    pub human_mark: Mark,
}

impl ResetOptions {
    pub fn new(difficulty: Difficulty, human_mark: Mark) -> Self {
        Self { difficulty, human_mark }
    }

    /// Unknown or missing values fall back to medium difficulty and a human
    /// `X`, whatever the server started with.
    pub fn from_raw(difficulty: Option<&str>, human_symbol: Option<&str>) -> Self {
        Self {
            difficulty: difficulty.map_or_else(Difficulty::default, Difficulty::parse_or_default),
            human_mark: human_symbol.map_or_else(Mark::default, Mark::parse_or_default),
        }
    }
}

/// One game against the bot. Human moves are answered by the bot within
/// the same call.
pub struct BotGameSession<R: BotRng> {
    game: TicTacToeGameState,
    difficulty: Difficulty,
    human_mark: Mark,
    last_bot_move: Option<usize>,
    rng: R,
}

impl<R: BotRng> BotGameSession<R> {
    pub fn new(options: ResetOptions, rng: R) -> Self {
        let mut session = Self {
            game: TicTacToeGameState::new(),
            difficulty: options.difficulty,
            human_mark: options.human_mark,
            last_bot_move: None,
            rng,
        };
        session.reset(options);
        session
    }

    pub fn reset(&mut self, options: ResetOptions) -> BotGameSnapshot {
        self.game.reset();
        self.difficulty = options.difficulty;
        self.human_mark = options.human_mark;
        self.last_bot_move = None;

        if self.phase() == TurnPhase::WaitingForBot {
            self.play_bot_turn();
        }

        self.snapshot()
    }

    pub fn make_human_move(&mut self, position: usize) -> Result<BotGameSnapshot, MoveError> {
        self.game.place_mark(self.human_mark, position)?;
        self.last_bot_move = None;

        if self.phase() == TurnPhase::WaitingForBot {
            self.play_bot_turn();
        }

        Ok(self.snapshot())
    }

    /// Human move as a report; a rejection carries the unchanged state.
    pub fn apply_move(&mut self, position: usize) -> MoveReport<BotGameSnapshot> {
        let result = self.make_human_move(position);
        MoveReport::from_result(result, || self.snapshot())
    }

    pub fn make_bot_move(&mut self) -> Result<usize, MoveError> {
        match self.phase() {
            TurnPhase::GameOver => return Err(MoveError::GameAlreadyOver),
            TurnPhase::WaitingForHuman => return Err(MoveError::NotYourTurn),
            TurnPhase::WaitingForBot => {}
        }

        let bot_mark = self.bot_mark();
        let input = BotInput::new(self.game.board, bot_mark);
        let position = calculate_move(self.difficulty, &input, &mut self.rng)
            .ok_or(MoveError::NoLegalMove)?;

        self.game.place_mark(bot_mark, position)?;
        self.last_bot_move = Some(position);

        log!(
            "Bot ({}, {}) played {}, status {:?}",
            self.difficulty, bot_mark, position, self.game.status
        );

        Ok(position)
    }

    fn play_bot_turn(&mut self) {
        if let Err(e) = self.make_bot_move() {
            log_error!("Bot failed to move: {}", e);
        }
    }

    pub fn phase(&self) -> TurnPhase {
        if !self.game.status.is_active() {
            TurnPhase::GameOver
        } else if self.game.current_mark == self.human_mark {
            TurnPhase::WaitingForHuman
        } else {
            TurnPhase::WaitingForBot
        }
    }

    pub fn snapshot(&self) -> BotGameSnapshot {
        BotGameSnapshot {
            game: GameSnapshot::from(&self.game),
            difficulty: self.difficulty,
            human_player: self.human_mark,
            bot_player: self.bot_mark(),
            bot_move: self.last_bot_move,
        }
    }

    pub fn game(&self) -> &TicTacToeGameState {
        &self.game
    }

    pub fn bot_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    pub fn last_bot_move(&self) -> Option<usize> {
        self.last_bot_move
    }
}
