use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{GameError, GameResult};
use super::board::Board;
use super::bot_controller::calculate_move;
use super::score::ScoreRecord;
use super::types::{BotType, Outcome, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub human_side: Side,
    pub vs_ai: bool,
    pub bot_type: BotType,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            human_side: Side::X,
            vs_ai: true,
            bot_type: BotType::Minimax,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub index: usize,
    pub side: Side,
    pub by_ai: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub moves: Vec<AppliedMove>,
    pub outcome: Outcome,
}

/// One player's seat at the board, optionally against the automated side.
///
/// X always moves first. The score is bumped exactly once per finished game.
pub struct GameSession {
    board: Board,
    current_side: Side,
    human_side: Side,
    vs_ai: bool,
    bot_type: BotType,
    active: bool,
    score: ScoreRecord,
    rng: StdRng,
}

impl GameSession {
    pub fn new(settings: SessionSettings, score: ScoreRecord) -> GameResult<Self> {
        let seed: u64 = rand::rng().random();
        Self::with_seed(settings, score, seed)
    }

    pub fn with_seed(settings: SessionSettings, score: ScoreRecord, seed: u64) -> GameResult<Self> {
        crate::debug_log!("New session with seed {}", seed);
        let mut session = Self {
            board: Board::new(),
            current_side: Side::X,
            human_side: settings.human_side,
            vs_ai: settings.vs_ai,
            bot_type: settings.bot_type,
            active: true,
            score,
            rng: StdRng::seed_from_u64(seed),
        };
        session.restart()?;
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn human_side(&self) -> Side {
        self.human_side
    }

    pub fn ai_side(&self) -> Side {
        self.human_side.opponent()
    }

    pub fn vs_ai(&self) -> bool {
        self.vs_ai
    }

    pub fn bot_type(&self) -> BotType {
        self.bot_type
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn score(&self) -> ScoreRecord {
        self.score
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.board.winning_line().map(|(_, line)| line)
    }

    /// Places the side-to-move's mark on `index`, then lets the automated
    /// side answer when it is enabled and due.
    pub fn play(&mut self, index: usize) -> GameResult<TurnReport> {
        if !self.active {
            return Err(GameError::GameOver);
        }

        let side = self.current_side;
        self.board.place(index, side)?;
        crate::debug_log!("{} placed on {} -> {}", side, index, self.board);

        let mut moves = vec![AppliedMove {
            index,
            side,
            by_ai: false,
        }];
        self.finish_turn();

        if let Some(ai_move) = self.take_ai_turn()? {
            moves.push(ai_move);
        }

        Ok(self.report(moves))
    }

    /// Empties the board with X to move. The automated side opens at once
    /// when it plays X.
    pub fn restart(&mut self) -> GameResult<TurnReport> {
        self.board.reset();
        self.current_side = Side::X;
        self.active = true;
        crate::log!(
            "Game started: human {}, vs AI {}, bot {:?}",
            self.human_side,
            self.vs_ai,
            self.bot_type
        );

        let moves = self.take_ai_turn()?.into_iter().collect();
        Ok(self.report(moves))
    }

    pub fn toggle_symbol(&mut self) -> GameResult<TurnReport> {
        self.human_side = self.human_side.opponent();
        self.restart()
    }

    /// Flips the AI switch for the running game; if the automated side is due
    /// it moves right away.
    pub fn toggle_ai(&mut self) -> GameResult<TurnReport> {
        self.vs_ai = !self.vs_ai;
        crate::log!("Vs AI: {}", if self.vs_ai { "On" } else { "Off" });

        let moves = self.take_ai_turn()?.into_iter().collect();
        Ok(self.report(moves))
    }

    pub fn reset_score(&mut self) {
        self.score.reset();
    }

    pub fn status_text(&self) -> String {
        if self.active {
            return format!("Player {}'s turn", self.current_side);
        }
        match self.board.outcome() {
            Outcome::Win(side) if side == self.human_side => "Player wins!".to_string(),
            Outcome::Win(_) => "AI wins!".to_string(),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => format!("Player {}'s turn", self.current_side),
        }
    }

    pub fn score_text(&self) -> String {
        format!(
            "Player: {} | AI: {} | Draws: {}",
            self.score.player_wins, self.score.ai_wins, self.score.draws
        )
    }

    fn take_ai_turn(&mut self) -> GameResult<Option<AppliedMove>> {
        if !self.active || !self.vs_ai || self.current_side != self.ai_side() {
            return Ok(None);
        }

        let side = self.current_side;
        let index = calculate_move(self.bot_type, &self.board, side, &mut self.rng)?;
        self.board.place(index, side)?;
        crate::debug_log!("AI {} placed on {} -> {}", side, index, self.board);
        self.finish_turn();

        Ok(Some(AppliedMove {
            index,
            side,
            by_ai: true,
        }))
    }

    /// Ends the game if the last move was terminal, otherwise passes the turn.
    fn finish_turn(&mut self) {
        match self.board.outcome() {
            Outcome::InProgress => {
                self.current_side = self.current_side.opponent();
            }
            Outcome::Win(side) => {
                self.active = false;
                if side == self.human_side {
                    self.score.player_wins = self.score.player_wins.saturating_add(1);
                } else {
                    self.score.ai_wins = self.score.ai_wins.saturating_add(1);
                }
                crate::log!("Game over: {} wins ({})", side, self.score_text());
            }
            Outcome::Draw => {
                self.active = false;
                self.score.draws = self.score.draws.saturating_add(1);
                crate::log!("Game over: draw ({})", self.score_text());
            }
        }
    }

    fn report(&self, moves: Vec<AppliedMove>) -> TurnReport {
        TurnReport {
            moves,
            outcome: self.board.outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};
    use crate::game::Cell;

    fn hotseat() -> GameSession {
        let settings = SessionSettings {
            vs_ai: false,
            ..SessionSettings::default()
        };
        GameSession::with_seed(settings, ScoreRecord::default(), 1).unwrap()
    }

    fn vs_ai(human_side: Side) -> GameSession {
        let settings = SessionSettings {
            human_side,
            ..SessionSettings::default()
        };
        GameSession::with_seed(settings, ScoreRecord::default(), 1).unwrap()
    }

    fn play_all(session: &mut GameSession, moves: &[usize]) {
        for &index in moves {
            session.play(index).unwrap();
        }
    }

    #[test]
    fn test_new_session_waits_for_x() {
        let session = vs_ai(Side::X);
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.current_side(), Side::X);
        assert!(session.is_active());
        assert_eq!(session.status_text(), "Player X's turn");
        assert_eq!(session.score_text(), "Player: 0 | AI: 0 | Draws: 0");
    }

    #[test]
    fn test_ai_answers_human_move() {
        let mut session = vs_ai(Side::X);
        let report = session.play(4).unwrap();
        assert_eq!(
            report.moves,
            vec![
                AppliedMove { index: 4, side: Side::X, by_ai: false },
                AppliedMove { index: 0, side: Side::O, by_ai: true },
            ]
        );
        assert_eq!(report.outcome, Outcome::InProgress);
        assert_eq!(session.board().to_string(), "O..|.X.|...");
        assert_eq!(session.current_side(), Side::X);
    }

    #[test]
    fn test_ai_opens_when_playing_x() {
        let session = vs_ai(Side::O);
        assert_eq!(session.board().to_string(), "X..|...|...");
        assert_eq!(session.current_side(), Side::O);
        assert_eq!(session.status_text(), "Player O's turn");
    }

    #[test]
    fn test_rejected_moves_leave_session_untouched() {
        let mut session = vs_ai(Side::X);
        session.play(4).unwrap();
        let before = *session.board();

        assert_eq!(session.play(4), Err(GameError::IllegalMove { index: 4 }));
        assert_eq!(session.play(0), Err(GameError::IllegalMove { index: 0 }));
        assert_eq!(session.play(9), Err(GameError::OutOfRange { index: 9 }));
        assert_eq!(session.board(), &before);
        assert_eq!(session.current_side(), Side::X);
    }

    #[test]
    fn test_hotseat_x_win_counts_for_player() {
        let mut session = hotseat();
        play_all(&mut session, &[0, 3, 1, 4]);
        let report = session.play(2).unwrap();

        assert_eq!(report.outcome, Outcome::Win(Side::X));
        assert_eq!(report.moves.len(), 1);
        assert!(!session.is_active());
        assert_eq!(session.winning_line(), Some([0, 1, 2]));
        assert_eq!(session.status_text(), "Player wins!");
        assert_eq!(session.score().player_wins, 1);
        assert_eq!(session.score().total_games(), 1);
    }

    #[test]
    fn test_hotseat_o_win_counts_for_ai() {
        let mut session = hotseat();
        play_all(&mut session, &[0, 3, 1, 4, 8, 5]);
        assert_eq!(session.outcome(), Outcome::Win(Side::O));
        assert_eq!(session.status_text(), "AI wins!");
        assert_eq!(session.score().ai_wins, 1);
    }

    #[test]
    fn test_hotseat_draw() {
        let mut session = hotseat();
        play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(session.outcome(), Outcome::Draw);
        assert_eq!(session.status_text(), "It's a draw!");
        assert_eq!(session.score().draws, 1);
        assert_eq!(session.winning_line(), None);
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut session = hotseat();
        play_all(&mut session, &[0, 3, 1, 4, 2]);
        assert_eq!(session.play(8), Err(GameError::GameOver));
        assert_eq!(session.score().total_games(), 1);
    }

    #[test]
    fn test_human_cannot_beat_minimax() {
        for human_side in [Side::X, Side::O] {
            let mut session = vs_ai(human_side);
            while session.is_active() {
                let index = session.board().available_moves()[0];
                session.play(index).unwrap();
            }
            assert_ne!(session.outcome(), Outcome::Win(human_side));
            assert_eq!(session.score().player_wins, 0);
            assert_eq!(session.score().total_games(), 1);
        }
    }

    #[test]
    fn test_random_bot_only_uses_free_cells() {
        let settings = SessionSettings {
            bot_type: BotType::Random,
            ..SessionSettings::default()
        };
        let mut session = GameSession::with_seed(settings, ScoreRecord::default(), 99).unwrap();
        while session.is_active() {
            let index = session.board().available_moves()[0];
            let report = session.play(index).unwrap();
            for applied in report.moves {
                assert_eq!(session.board().get(applied.index).unwrap(), Cell::from(applied.side));
            }
        }
        assert_eq!(session.score().total_games(), 1);
    }

    #[test]
    fn test_restart_keeps_score() {
        let mut session = hotseat();
        play_all(&mut session, &[0, 3, 1, 4, 2]);
        let report = session.restart().unwrap();

        assert!(report.moves.is_empty());
        assert_eq!(report.outcome, Outcome::InProgress);
        assert!(session.is_active());
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.current_side(), Side::X);
        assert_eq!(session.score().player_wins, 1);
    }

    #[test]
    fn test_toggle_symbol_restarts_with_ai_opening() {
        let mut session = vs_ai(Side::X);
        session.play(4).unwrap();
        let report = session.toggle_symbol().unwrap();

        assert_eq!(session.human_side(), Side::O);
        assert_eq!(session.ai_side(), Side::X);
        assert_eq!(
            report.moves,
            vec![AppliedMove { index: 0, side: Side::X, by_ai: true }]
        );
        assert_eq!(session.board().to_string(), "X..|...|...");
    }

    #[test]
    fn test_toggle_ai_moves_when_due() {
        let mut session = hotseat();
        session.play(4).unwrap();
        assert_eq!(session.current_side(), Side::O);

        let report = session.toggle_ai().unwrap();
        assert!(session.vs_ai());
        assert_eq!(
            report.moves,
            vec![AppliedMove { index: 0, side: Side::O, by_ai: true }]
        );
        assert_eq!(session.current_side(), Side::X);

        let report = session.toggle_ai().unwrap();
        assert!(!session.vs_ai());
        assert!(report.moves.is_empty());
    }

    #[test]
    fn test_full_counters_stay_at_max() {
        let score: ScoreRecord = YamlConfigSerializer::new()
            .deserialize("Player: 4294967295\nAI: 4294967295\nDraws: 4294967295\n")
            .unwrap();
        let settings = SessionSettings {
            vs_ai: false,
            ..SessionSettings::default()
        };
        let mut session = GameSession::with_seed(settings, score, 1).unwrap();

        play_all(&mut session, &[0, 3, 1, 4, 2]);
        assert_eq!(session.score().player_wins, u32::MAX);

        session.restart().unwrap();
        play_all(&mut session, &[0, 3, 1, 4, 8, 5]);
        assert_eq!(session.score().ai_wins, u32::MAX);

        session.restart().unwrap();
        play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(session.score().draws, u32::MAX);
        assert_eq!(session.score().total_games(), u32::MAX);
    }

    #[test]
    fn test_reset_score() {
        let score = ScoreRecord {
            player_wins: 3,
            ai_wins: 4,
            draws: 5,
        };
        let mut session = GameSession::with_seed(SessionSettings::default(), score, 5).unwrap();
        assert_eq!(session.score_text(), "Player: 3 | AI: 4 | Draws: 5");
        session.reset_score();
        assert_eq!(session.score(), ScoreRecord::default());
    }
}
