use std::fmt;
use std::str::FromStr;

use crate::error::{GameError, GameResult};
use super::types::{Cell, Outcome, Side};
use super::win_detector::{check_win, check_win_with_line};

pub const BOARD_SIZE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// 3x3 grid addressed by index 0-8 in row-major order.
///
/// Turn alternation is not enforced here; the session (or any other caller)
/// decides whose mark goes where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> GameResult<Cell> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::OutOfRange { index })
    }

    pub fn is_empty(&self, index: usize) -> GameResult<bool> {
        Ok(self.get(index)?.is_empty())
    }

    pub fn place(&mut self, index: usize, side: Side) -> GameResult<()> {
        if !self.is_empty(index)? {
            return Err(GameError::IllegalMove { index });
        }
        self.cells[index] = side.into();
        Ok(())
    }

    /// Empties a cell whatever it held; used to undo hypothetical placements.
    pub fn clear(&mut self, index: usize) -> GameResult<()> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::OutOfRange { index })?;
        *cell = Cell::Empty;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; BOARD_CELLS];
    }

    pub fn winner(&self) -> Option<Side> {
        check_win(&self.cells)
    }

    pub fn winning_line(&self) -> Option<(Side, [usize; 3])> {
        check_win_with_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(side) = self.winner() {
            Outcome::Win(side)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn count(&self, side: Side) -> usize {
        let cell = Cell::from(side);
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

/// Parses nine cells written as `X`, `O` and `.`, `_` or `-` for empty.
/// Whitespace and `|` separators are ignored, so `"XO.|...|..X"` works too.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        let mut count = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            if count == BOARD_CELLS {
                return Err(GameError::InvalidBoard {
                    reason: format!("more than {} cells in '{}'", BOARD_CELLS, s),
                });
            }
            cells[count] = match ch {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '_' | '-' => Cell::Empty,
                other => {
                    return Err(GameError::InvalidBoard {
                        reason: format!("unexpected character '{}' in '{}'", other, s),
                    });
                }
            };
            count += 1;
        }

        if count != BOARD_CELLS {
            return Err(GameError::InvalidBoard {
                reason: format!("expected {} cells, got {} in '{}'", BOARD_CELLS, count, s),
            });
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 && index % BOARD_SIZE == 0 {
                write!(f, "|")?;
            }
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}
