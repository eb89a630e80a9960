use super::types::{Cell, Side};

pub const WINNING_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Cell; 9]) -> Option<Side> {
    check_win_with_line(cells).map(|(side, _)| side)
}

/// First fully owned triple in `WINNING_TRIPLES` order. Boards with several
/// won triples cannot arise from alternating play; they resolve to the first one.
pub fn check_win_with_line(cells: &[Cell; 9]) -> Option<(Side, [usize; 3])> {
    for line in WINNING_TRIPLES {
        let [a, b, c] = line;
        let Some(side) = cells[a].side() else {
            continue;
        };
        if cells[b] == cells[a] && cells[c] == cells[a] {
            return Some((side, line));
        }
    }
    None
}
