//! Console collaborators: the text board renderer, the human move provider,
//! and the interactive command loop.

mod app;
mod console;
mod human;
pub mod render;

pub use app::App;
pub use console::Console;
pub use human::HumanMover;
