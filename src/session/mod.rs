//! Game sessions: the loop that drives two movers through one game, parsing of
//! the startup command, and multi-game arena matches.

pub mod arena;
mod command;
mod game_loop;

pub use arena::{play_match, ArenaConfig, MatchReport};
pub use command::{Command, PlayerKind};
pub use game_loop::{GameLoop, Ply};
