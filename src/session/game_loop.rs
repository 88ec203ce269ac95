use tracing::{debug, info};

use crate::ai::Mover;
use crate::error::{MoveError, PlayError, SetupError};
use crate::game::{GameOutcome, GameState, Side};

/// One applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ply {
    /// 1-based position in the game.
    pub number: usize,
    pub side: Side,
    pub index: usize,
}

/// Drives one game between two movers. X moves first.
pub struct GameLoop {
    state: GameState,
    x: Box<dyn Mover>,
    o: Box<dyn Mover>,
    plies: usize,
}

impl GameLoop {
    pub fn new(x: Box<dyn Mover>, o: Box<dyn Mover>) -> Result<Self, SetupError> {
        for (expected, mover) in [(Side::X, &x), (Side::O, &o)] {
            if mover.side() != expected {
                return Err(SetupError::SideMismatch {
                    expected,
                    found: mover.side(),
                });
            }
        }

        info!(x = x.name(), o = o.name(), "game started");
        Ok(GameLoop {
            state: GameState::initial(),
            x,
            o,
            plies: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mover(&self, side: Side) -> &dyn Mover {
        match side {
            Side::X => self.x.as_ref(),
            Side::O => self.o.as_ref(),
        }
    }

    /// Ask the side to move for a cell and apply it.
    pub fn step(&mut self) -> Result<Ply, PlayError> {
        let side = self.state.side_to_move().ok_or(MoveError::GameOver)?;
        let mover = match side {
            Side::X => &mut self.x,
            Side::O => &mut self.o,
        };

        let index = mover.choose_move(self.state.board())?;
        let outcome = self.state.apply_move(index)?;
        self.plies += 1;

        debug!(ply = self.plies, %side, index, "move applied");
        if outcome.is_terminal() {
            info!(?outcome, plies = self.plies, "game finished");
        }

        Ok(Ply {
            number: self.plies,
            side,
            index,
        })
    }

    /// Play to the end, calling `on_ply` after every move.
    pub fn run<F>(&mut self, mut on_ply: F) -> Result<GameOutcome, PlayError>
    where
        F: FnMut(&Ply, &GameState),
    {
        while !self.state.is_finished() {
            let ply = self.step()?;
            on_ply(&ply, &self.state);
        }
        Ok(self.state.outcome())
    }
}
