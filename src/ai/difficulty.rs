use std::fmt;
use std::str::FromStr;

use crate::error::SetupError;
use crate::game::Side;

use super::heuristic::HeuristicMover;
use super::minimax::MinimaxMover;
use super::mover::Mover;
use super::random::{derive_seed, RandomMover, SamplingMode};

/// Computer difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Random moves.
    Easy,
    /// One-ply win/block, random otherwise.
    Medium,
    /// Full minimax.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Construct the mover for this tier, bound to `side`.
    pub fn build(self, side: Side, config: &StrategyConfig) -> Box<dyn Mover> {
        match self {
            Difficulty::Easy => Box::new(config.random_mover(side)),
            Difficulty::Medium => Box::new(HeuristicMover::new(config.random_mover(side))),
            Difficulty::Hard => Box::new(MinimaxMover::new(side)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(SetupError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Settings shared by the computer strategies, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub random_sampling: SamplingMode,
    /// Fixed seed for reproducible games; OS entropy when absent.
    pub seed: Option<u64>,
}

impl StrategyConfig {
    /// Same settings with a different base seed.
    pub fn with_seed(&self, seed: u64) -> Self {
        StrategyConfig {
            seed: Some(seed),
            ..self.clone()
        }
    }

    fn random_mover(&self, side: Side) -> RandomMover {
        let mover = match self.seed {
            Some(seed) => RandomMover::with_seed(side, derive_seed(seed, side as u64)),
            None => RandomMover::new(side),
        };
        mover.with_sampling(self.random_sampling)
    }
}
