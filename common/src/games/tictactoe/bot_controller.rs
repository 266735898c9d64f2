use crate::games::BotRng;
use super::board::{get_available_moves, Board, CENTER, CORNERS};
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

/// Probability that the easy bot looks for a win or a block first.
pub const EASY_SMART_MOVE_CHANCE: f64 = 0.3;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }

    fn human_mark(&self) -> Mark {
        self.bot_mark.opponent()
    }
}

/// Picks the bot's next cell, or `None` when the board has no empty cell.
pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut impl BotRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_easy_move(input, rng),
        Difficulty::Medium => calculate_medium_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

fn calculate_easy_move(input: &BotInput, rng: &mut impl BotRng) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }

    if rng.chance(EASY_SMART_MOVE_CHANCE) {
        if let Some(position) = find_smart_move(input) {
            return Some(position);
        }
    }

    choose(&available_moves, rng)
}

fn calculate_medium_move(input: &BotInput, rng: &mut impl BotRng) -> Option<usize> {
    find_smart_move(input).or_else(|| find_strategic_move(&input.board, rng))
}

/// Win if possible, otherwise block the opponent's win.
fn find_smart_move(input: &BotInput) -> Option<usize> {
    find_winning_move(&input.board, input.bot_mark)
        .or_else(|| find_winning_move(&input.board, input.human_mark()))
}

fn find_strategic_move(board: &Board, rng: &mut impl BotRng) -> Option<usize> {
    if board.is_empty_cell(CENTER) {
        return Some(CENTER);
    }

    let corners: Vec<usize> = CORNERS
        .into_iter()
        .filter(|&corner| board.is_empty_cell(corner))
        .collect();
    if let Some(corner) = choose(&corners, rng) {
        return Some(corner);
    }

    choose(&get_available_moves(board), rng)
}

pub fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    get_available_moves(board)
        .into_iter()
        .find(|&position| check_win(&board.with_mark(position, mark)) == Some(mark))
}

fn choose(candidates: &[usize], rng: &mut impl BotRng) -> Option<usize> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.pick_index(candidates.len())])
}

/// Full-depth minimax. Among equally scored moves the lowest index wins.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.bot_mark;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in get_available_moves(&input.board) {
        let board = input.board.with_mark(position, bot_mark);
        let score = minimax(board, 0, false, bot_mark);

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

fn minimax(board: Board, depth: i32, is_maximizing: bool, bot_mark: Mark) -> i32 {
    if let Some(winner) = check_win(&board) {
        return if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    let moves = get_available_moves(&board);
    if moves.is_empty() {
        return 0;
    }

    let mark = if is_maximizing { bot_mark } else { bot_mark.opponent() };
    let scores = moves
        .into_iter()
        .map(|position| minimax(board.with_mark(position, mark), depth + 1, !is_maximizing, bot_mark));

    if is_maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}
