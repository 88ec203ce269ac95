use crate::error::MoveError;

use super::board::CELLS;
use super::{Board, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Draw,
    Win(Side),
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// Where the game stands between plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Side),
    Finished(GameOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    phase: Phase,
    empty_cells: usize,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            phase: Phase::AwaitingMove(Side::X), // X starts
            empty_cells: CELLS,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose move is awaited, `None` once finished
    pub fn side_to_move(&self) -> Option<Side> {
        match self.phase {
            Phase::AwaitingMove(side) => Some(side),
            Phase::Finished(_) => None,
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.phase {
            Phase::AwaitingMove(_) => GameOutcome::InProgress,
            Phase::Finished(outcome) => outcome,
        }
    }

    /// Check if game is over
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    pub fn empty_cells(&self) -> usize {
        self.empty_cells
    }

    /// Place the side-to-move's mark at `index` and advance the phase.
    pub fn apply_move(&mut self, index: usize) -> Result<GameOutcome, MoveError> {
        let side = match self.phase {
            Phase::AwaitingMove(side) => side,
            Phase::Finished(_) => return Err(MoveError::GameOver),
        };

        self.board.place(index, side)?;
        self.empty_cells -= 1;

        // Only the side that just moved can have completed a line.
        let outcome = if self.board.winner(side) {
            GameOutcome::Win(side)
        } else if self.empty_cells == 0 {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        };

        self.phase = if outcome.is_terminal() {
            Phase::Finished(outcome)
        } else {
            Phase::AwaitingMove(side.other())
        };

        Ok(outcome)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
