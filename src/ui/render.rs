use crate::game::{Board, Cell, GameOutcome};

pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '_',
        Cell::X => 'X',
        Cell::O => 'O',
    }
}

/// Render the board as a framed 3x3 grid, one row per line.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("---------\n");
    for row in board.cells().chunks(3) {
        out.push_str("| ");
        for &cell in row {
            out.push(cell_symbol(cell));
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str("---------");
    out
}

pub fn outcome_text(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::InProgress => "Game not finished".to_string(),
        GameOutcome::Draw => "Draw".to_string(),
        GameOutcome::Win(side) => format!("{side} wins"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell::{Empty as E, O, X};
    use crate::game::Side;

    #[test]
    fn test_render_empty_board() {
        assert_eq!(
            render_board(&Board::new()),
            "---------\n| _ _ _ |\n| _ _ _ |\n| _ _ _ |\n---------"
        );
    }

    #[test]
    fn test_render_marks_row_major() {
        let board = Board::from_cells([X, O, E, E, X, E, E, E, O]);
        assert_eq!(
            render_board(&board),
            "---------\n| X O _ |\n| _ X _ |\n| _ _ O |\n---------"
        );
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(outcome_text(GameOutcome::Win(Side::X)), "X wins");
        assert_eq!(outcome_text(GameOutcome::Win(Side::O)), "O wins");
        assert_eq!(outcome_text(GameOutcome::Draw), "Draw");
        assert_eq!(outcome_text(GameOutcome::InProgress), "Game not finished");
    }
}
