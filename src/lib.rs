//! # Tic-Tac-Toe
//!
//! A Tic-Tac-Toe engine where each side is a human or one of three computer
//! difficulty levels: random (`easy`), one-ply win/block (`medium`) and full
//! minimax (`hard`).
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, sides, turn state machine
//! - [`ai`] — `Mover` trait and the computer strategies
//! - [`session`] — Game loop, startup commands, arena matches
//! - [`ui`] — Console front end: renderer, human move entry
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
