use tracing::debug;

use crate::error::PlayError;
use crate::game::{Board, Side};

use super::mover::Mover;

/// Score of a position where the owner has completed a line.
pub const WIN_SCORE: i32 = 10;

/// Full-depth minimax mover. Never loses.
///
/// Scores are absolute from the owner's point of view: +10 for an owner line,
/// -10 for an opponent line, 0 for a full board. There is no depth discount,
/// so among equally scored moves the lowest index wins even when another move
/// would finish sooner.
pub struct MinimaxMover {
    side: Side,
}

impl MinimaxMover {
    pub fn new(side: Side) -> Self {
        MinimaxMover { side }
    }

    /// Best cell and its score for the owner, `None` on a finished board.
    pub fn best_move(&self, board: &Board) -> Option<(usize, i32)> {
        let mut scratch = *board;
        let (score, index) = self.minimax(&mut scratch, self.side);
        debug_assert_eq!(&scratch, board, "search must restore the board");
        index.map(|index| (index, score))
    }

    fn minimax(&self, board: &mut Board, to_move: Side) -> (i32, Option<usize>) {
        if board.winner(self.side) {
            return (WIN_SCORE, None);
        }
        if board.winner(self.side.other()) {
            return (-WIN_SCORE, None);
        }

        let candidates = board.empty_indexes();
        if candidates.is_empty() {
            return (0, None);
        }

        let maximizing = to_move == self.side;
        let mut best: Option<(i32, usize)> = None;

        for index in candidates {
            board.set(index, to_move);
            let (score, _) = self.minimax(board, to_move.other());
            board.clear(index);

            let improves = match best {
                None => true,
                Some((best_score, _)) if maximizing => score > best_score,
                Some((best_score, _)) => score < best_score,
            };
            if improves {
                best = Some((score, index));
            }
        }

        best.map_or((0, None), |(score, index)| (score, Some(index)))
    }
}

impl Mover for MinimaxMover {
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        let (index, score) = self.best_move(board).ok_or(PlayError::NoLegalMove)?;
        debug!(side = %self.side, index, score, "minimax move");
        Ok(index)
    }

    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
