mod board;
mod bot_controller;
mod score;
mod search;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, BOARD_SIZE, Board};
pub use bot_controller::calculate_move;
pub use score::ScoreRecord;
pub use search::{DRAW_SCORE, LOSS_SCORE, MoveEvaluation, SearchReport, WIN_SCORE, analyze, choose_move};
pub use session::{AppliedMove, GameSession, SessionSettings, TurnReport};
pub use types::{BotType, Cell, Outcome, Side};
pub use win_detector::{WINNING_TRIPLES, check_win, check_win_with_line};
