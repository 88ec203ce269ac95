use tracing::debug;

use crate::error::PlayError;
use crate::game::{Board, Cell, Side, CELLS, WINNING_LINES};

use super::mover::Mover;
use super::random::RandomMover;

/// Lowest empty cell that would complete a line for `side`, if any.
///
/// Pass the mover's own side to find a win, the opponent's side to find the
/// cell that must be blocked.
pub fn completing_move(board: &Board, side: Side) -> Option<usize> {
    let mark = side.to_cell();
    let cells = board.cells();

    (0..CELLS).find(|&index| {
        cells[index] == Cell::Empty
            && WINNING_LINES
                .iter()
                .filter(|line| line.contains(&index))
                .any(|line| {
                    line.iter()
                        .filter(|&&other| other != index)
                        .all(|&other| cells[other] == mark)
                })
    })
}

/// One-ply look-ahead: win if possible, otherwise block, otherwise random.
pub struct HeuristicMover {
    fallback: RandomMover,
}

impl HeuristicMover {
    /// The fallback's side becomes this mover's side.
    pub fn new(fallback: RandomMover) -> Self {
        HeuristicMover { fallback }
    }
}

impl Mover for HeuristicMover {
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        let side = self.side();

        if let Some(index) = completing_move(board, side) {
            debug!(%side, index, "heuristic takes winning cell");
            return Ok(index);
        }

        if let Some(index) = completing_move(board, side.other()) {
            debug!(%side, index, "heuristic blocks opponent");
            return Ok(index);
        }

        self.fallback.choose_move(board)
    }

    fn side(&self) -> Side {
        self.fallback.side()
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell::{Empty as E, O, X};

    fn heuristic(side: Side) -> HeuristicMover {
        HeuristicMover::new(RandomMover::with_seed(side, 3))
    }

    #[test]
    fn prefers_win_over_block() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        let mut mover = heuristic(Side::X);
        assert_eq!(mover.choose_move(&board).unwrap(), 2);
    }

    #[test]
    fn blocks_opponent_win() {
        let board = Board::from_cells([X, E, E, O, O, E, E, E, X]);
        let mut mover = heuristic(Side::X);
        assert_eq!(mover.choose_move(&board).unwrap(), 5);
    }

    #[test]
    fn blocks_lowest_of_two_threats() {
        // O threatens both 2 (row) and 6 (column)
        let board = Board::from_cells([O, O, E, O, X, E, E, E, X]);
        let mut mover = heuristic(Side::X);
        assert_eq!(mover.choose_move(&board).unwrap(), 2);
    }

    #[test]
    fn wins_through_middle_of_line() {
        // O holds 2 and 6; the gap at 4 completes the anti-diagonal
        let board = Board::from_cells([X, X, O, E, E, E, O, X, E]);
        let mut mover = heuristic(Side::O);
        assert_eq!(mover.choose_move(&board).unwrap(), 4);
    }

    #[test]
    fn completing_move_ignores_blocked_lines() {
        let board = Board::from_cells([X, X, O, E, E, E, E, E, E]);
        assert_eq!(completing_move(&board, Side::X), None);
    }

    #[test]
    fn falls_back_to_random_on_quiet_board() {
        let board = Board::from_cells([X, E, E, E, O, E, E, E, E]);
        let mut mover = heuristic(Side::X);
        for _ in 0..20 {
            let index = mover.choose_move(&board).unwrap();
            assert_eq!(board.is_empty(index), Ok(true));
        }
    }

    #[test]
    fn side_and_name() {
        let mover = heuristic(Side::O);
        assert_eq!(mover.side(), Side::O);
        assert_eq!(mover.name(), "Heuristic");
    }
}
