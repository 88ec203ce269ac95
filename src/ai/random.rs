use std::str::FromStr;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::{PlayError, SetupError};
use crate::game::{Board, Cell, Side, CELLS};

use super::mover::Mover;

/// How the random strategy draws a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMode {
    /// Draw directly from the empty cells.
    #[default]
    Uniform,
    /// Draw from all nine cells until an empty one comes up.
    Rejection,
}

impl FromStr for SamplingMode {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(SamplingMode::Uniform),
            "rejection" => Ok(SamplingMode::Rejection),
            other => Err(SetupError::UnknownSampling(other.to_string())),
        }
    }
}

/// A mover that selects uniformly at random from empty cells.
pub struct RandomMover {
    side: Side,
    rng: StdRng,
    sampling: SamplingMode,
}

impl RandomMover {
    pub fn new(side: Side) -> Self {
        RandomMover {
            side,
            rng: StdRng::from_os_rng(),
            sampling: SamplingMode::Uniform,
        }
    }

    pub fn with_seed(side: Side, seed: u64) -> Self {
        RandomMover {
            side,
            rng: StdRng::seed_from_u64(seed),
            sampling: SamplingMode::Uniform,
        }
    }

    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    /// Pick an empty cell, `None` on a full board.
    pub fn pick(&mut self, board: &Board) -> Option<usize> {
        if board.is_full() {
            return None;
        }

        match self.sampling {
            SamplingMode::Uniform => {
                let empty = board.empty_indexes();
                Some(empty[self.rng.random_range(0..empty.len())])
            }
            SamplingMode::Rejection => loop {
                let index = self.rng.random_range(0..CELLS);
                if board.cells()[index] == Cell::Empty {
                    return Some(index);
                }
            },
        }
    }
}

impl Mover for RandomMover {
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        let index = self.pick(board).ok_or(PlayError::NoLegalMove)?;
        debug!(side = %self.side, index, "random move");
        Ok(index)
    }

    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Derive a deterministic seed for an independent stream (a side, a game).
pub fn derive_seed(base_seed: u64, stream: u64) -> u64 {
    // FNV-1a-inspired mixing for deterministic, well-distributed seeds
    let mut hash = base_seed ^ 0x517cc1b727220a95;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= stream;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= stream >> 32;
    hash
}
