use rand::Rng;

use crate::error::{GameError, GameResult};
use super::board::Board;
use super::search::choose_move;
use super::types::{BotType, Side};

pub fn calculate_move<R: Rng>(
    bot_type: BotType,
    board: &Board,
    side: Side,
    rng: &mut R,
) -> GameResult<usize> {
    match bot_type {
        BotType::Minimax => choose_move(board, side),
        BotType::Random => calculate_random_move(board, rng),
    }
}

fn calculate_random_move<R: Rng>(board: &Board, rng: &mut R) -> GameResult<usize> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(GameError::NoLegalMove);
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}
