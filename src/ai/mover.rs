use crate::error::PlayError;
use crate::game::{Board, Side};

/// Universal interface for anything that can take a turn: computer strategies
/// and the human move provider alike.
pub trait Mover {
    /// Choose an empty cell for this mover's side on `board`.
    ///
    /// The board is lent read-only; the caller applies the returned index.
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayError>;

    /// Side this mover was bound to at construction.
    fn side(&self) -> Side;

    /// Return the mover's display name.
    fn name(&self) -> &str;
}
