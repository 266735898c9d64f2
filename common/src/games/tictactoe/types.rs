use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }

    pub fn parse(value: &str) -> Option<Mark> {
        match value.trim() {
            "X" => Some(Mark::X),
            "O" => Some(Mark::O),
            _ => None,
        }
    }

    pub fn parse_or_default(value: &str) -> Mark {
        Self::parse(value).unwrap_or_default()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won(Mark),
    Tied,
}

impl GameStatus {
    pub fn is_active(self) -> bool {
        self == GameStatus::Active
    }

    /// `"X"`, `"O"` or `"Tie"` once the game is over.
    pub fn winner_label(self) -> Option<&'static str> {
        match self {
            GameStatus::Active => None,
            GameStatus::Won(mark) => Some(mark.as_str()),
            GameStatus::Tied => Some("Tie"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(value: &str) -> Option<Difficulty> {
        match value.trim() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn parse_or_default(value: &str) -> Difficulty {
        Self::parse(value).unwrap_or_default()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_mark_parse() {
        assert_eq!(Mark::parse("X"), Some(Mark::X));
        assert_eq!(Mark::parse(" O "), Some(Mark::O));
        assert_eq!(Mark::parse("x"), None);
        assert_eq!(Mark::parse(""), None);
        assert_eq!(Mark::parse_or_default("O"), Mark::O);
        assert_eq!(Mark::parse_or_default("Q"), Mark::X);
    }

    #[test]
    fn test_difficulty_falls_back_to_medium() {
        assert_eq!(Difficulty::parse_or_default("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_or_default("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::parse_or_default("impossible"), Difficulty::Medium);
        assert_eq!(Difficulty::parse_or_default(""), Difficulty::Medium);
    }

    #[test]
    fn test_winner_label() {
        assert_eq!(GameStatus::Active.winner_label(), None);
        assert_eq!(GameStatus::Won(Mark::O).winner_label(), Some("O"));
        assert_eq!(GameStatus::Tied.winner_label(), Some("Tie"));
    }
}
