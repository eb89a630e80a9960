use thiserror::Error;

use crate::game::BOARD_CELLS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cell index {index} is out of range (must be 0-{max})", max = BOARD_CELLS - 1)]
    OutOfRange { index: usize },

    #[error("cell {index} is already marked")]
    IllegalMove { index: usize },

    #[error("no legal move: the board is full")]
    NoLegalMove,

    #[error("game is already over")]
    GameOver,

    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },
}

pub type GameResult<T> = Result<T, GameError>;
