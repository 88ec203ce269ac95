mod difficulty;
mod heuristic;
mod minimax;
mod mover;
mod random;

pub use difficulty::{Difficulty, StrategyConfig};
pub use heuristic::{completing_move, HeuristicMover};
pub use minimax::{MinimaxMover, WIN_SCORE};
pub use mover::Mover;
pub use random::{derive_seed, RandomMover, SamplingMode};
