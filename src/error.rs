use std::fmt;
use std::path::PathBuf;

use crate::game::Side;

/// Why a cell index was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexProblem {
    OutOfRange,
    Occupied,
}

impl fmt::Display for IndexProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexProblem::OutOfRange => write!(f, "expected 0..=8"),
            IndexProblem::Occupied => write!(f, "cell is occupied"),
        }
    }
}

/// Errors raised when applying a move to the board or game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid cell index {index}: {reason}")]
    InvalidIndex { index: usize, reason: IndexProblem },

    #[error("game is already finished")]
    GameOver,
}

impl MoveError {
    pub(crate) fn out_of_range(index: usize) -> Self {
        MoveError::InvalidIndex {
            index,
            reason: IndexProblem::OutOfRange,
        }
    }

    pub(crate) fn occupied(index: usize) -> Self {
        MoveError::InvalidIndex {
            index,
            reason: IndexProblem::Occupied,
        }
    }
}

/// Errors raised while setting up a game from user commands or options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("unknown difficulty '{0}' (expected 'easy', 'medium', or 'hard')")]
    UnknownDifficulty(String),

    #[error("unknown sampling mode '{0}' (expected 'uniform' or 'rejection')")]
    UnknownSampling(String),

    #[error("bad parameters: {0}")]
    BadParameters(String),

    #[error("mover for {found} cannot play as {expected}")]
    SideMismatch { expected: Side, found: Side },
}

/// Errors that can end a game in progress.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("no empty cell left to play")]
    NoLegalMove,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
