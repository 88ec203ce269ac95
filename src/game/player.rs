use std::fmt;

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    X,
    O,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// The mark this side places on the board
    pub fn to_cell(self) -> Cell {
        match self {
            Side::X => Cell::X,
            Side::O => Cell::O,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::X => "X",
            Side::O => "O",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::X.other(), Side::O);
        assert_eq!(Side::O.other(), Side::X);
    }

    #[test]
    fn test_side_marks_differ() {
        assert_eq!(Side::X.to_cell(), Cell::X);
        assert_eq!(Side::O.to_cell(), Cell::O);
        assert_ne!(Side::X.to_cell(), Side::O.to_cell());
    }

    #[test]
    fn test_side_name() {
        assert_eq!(Side::X.name(), "X");
        assert_eq!(Side::O.to_string(), "O");
    }

    #[test]
    fn test_side_display_honours_width() {
        assert_eq!(format!("[{:<3}]", Side::X), "[X  ]");
        assert_eq!(format!("[{:>3}]", Side::O), "[  O]");
    }
}
