//! Core Tic-Tac-Toe game logic: board representation, sides, and the turn
//! state machine with an incrementally maintained empty-cell counter.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, CELLS, WINNING_LINES};
pub use player::Side;
pub use state::{GameOutcome, GameState, Phase};
