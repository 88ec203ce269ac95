use crate::error::MoveError;

use super::player::Side;
use super::state::GameOutcome;

pub const CELLS: usize = 9;

/// Rows, columns and diagonals as index triples.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

/// 3x3 grid, indexed 0..=8 row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Build a board from explicit cell contents. No legality check is made on
    /// mark counts, so any position can be set up for analysis.
    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Get the cell at `index`, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check whether cell `index` holds no mark
    pub fn is_empty(&self, index: usize) -> Result<bool, MoveError> {
        self.get(index)
            .map(|cell| cell == Cell::Empty)
            .ok_or(MoveError::out_of_range(index))
    }

    /// Place `side`'s mark at `index`. The board is left untouched on error.
    pub fn place(&mut self, index: usize, side: Side) -> Result<(), MoveError> {
        if !self.is_empty(index)? {
            return Err(MoveError::occupied(index));
        }
        self.cells[index] = side.to_cell();
        Ok(())
    }

    /// Hypothetical placement during search, undone with [`Board::clear`].
    /// `index` must name an empty cell.
    pub(crate) fn set(&mut self, index: usize, side: Side) {
        debug_assert_eq!(self.cells[index], Cell::Empty, "cell {index} is taken");
        self.cells[index] = side.to_cell();
    }

    /// Retract a hypothetical placement made during search.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Indexes of empty cells, ascending
    pub fn empty_indexes(&self) -> Vec<usize> {
        (0..CELLS)
            .filter(|&index| self.cells[index] == Cell::Empty)
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Empty).count()
    }

    /// Check if any winning line is fully held by `side`
    pub fn winner(&self, side: Side) -> bool {
        let mark = side.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&index| self.cells[index] == mark))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Recompute the outcome from the cells alone.
    pub fn outcome(&self) -> GameOutcome {
        if self.winner(Side::X) {
            GameOutcome::Win(Side::X)
        } else if self.winner(Side::O) {
            GameOutcome::Win(Side::O)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
