//! Exhaustive minimax over the full 3x3 game tree.
//!
//! There is no pruning, no transposition table and no depth discount: every
//! reachable terminal board is visited and scored +1, 0 or -1 from the
//! automated side's point of view. A quicker win is not preferred over a slower
//! one. Pruning or caching would change which of several equally good moves is
//! returned, so neither is applied.

use crate::error::{GameError, GameResult};
use super::board::Board;
use super::types::Side;

pub const WIN_SCORE: i32 = 1;
pub const DRAW_SCORE: i32 = 0;
pub const LOSS_SCORE: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvaluation {
    pub index: usize,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: usize,
    pub best_score: i32,
    /// One entry per empty cell, ascending by index.
    pub evaluations: Vec<MoveEvaluation>,
    pub nodes_visited: u64,
}

/// Picks the move with the best guaranteed outcome for `automated_side`.
/// Ties go to the lowest index, so an empty board always yields 0.
pub fn choose_move(board: &Board, automated_side: Side) -> GameResult<usize> {
    analyze(board, automated_side).map(|report| report.best_move)
}

/// Same search as [`choose_move`], keeping the score of every candidate.
///
/// The caller's board is copied; hypothetical marks are placed and cleared on
/// the copy only.
pub fn analyze(board: &Board, automated_side: Side) -> GameResult<SearchReport> {
    let moves = board.available_moves();
    if moves.is_empty() {
        return Err(GameError::NoLegalMove);
    }

    let mut search = Search {
        board: *board,
        automated_side,
        nodes_visited: 0,
    };

    let mut evaluations = Vec::with_capacity(moves.len());
    let mut best: Option<MoveEvaluation> = None;

    for index in moves {
        let score = search.score_after(index, automated_side, false)?;
        let evaluation = MoveEvaluation { index, score };
        evaluations.push(evaluation);

        if best.is_none_or(|b| score > b.score) {
            best = Some(evaluation);
        }
    }

    let best = best.ok_or(GameError::NoLegalMove)?;
    Ok(SearchReport {
        best_move: best.index,
        best_score: best.score,
        evaluations,
        nodes_visited: search.nodes_visited,
    })
}

struct Search {
    board: Board,
    automated_side: Side,
    nodes_visited: u64,
}

impl Search {
    /// Places `side` at `index`, evaluates, and clears the cell again before
    /// any result (or error) is handed back.
    fn score_after(&mut self, index: usize, side: Side, maximizing: bool) -> GameResult<i32> {
        self.board.place(index, side)?;
        let score = self.minimax(maximizing);
        self.board.clear(index)?;
        score
    }

    fn minimax(&mut self, maximizing: bool) -> GameResult<i32> {
        self.nodes_visited += 1;

        if let Some(winner) = self.board.winner() {
            return Ok(if winner == self.automated_side {
                WIN_SCORE
            } else {
                LOSS_SCORE
            });
        }
        if self.board.is_full() {
            return Ok(DRAW_SCORE);
        }

        let side = if maximizing {
            self.automated_side
        } else {
            self.automated_side.opponent()
        };

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for index in self.board.available_moves() {
            let score = self.score_after(index, side, !maximizing)?;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        Ok(best)
    }
}
