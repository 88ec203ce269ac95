use std::io::{BufRead, Write};

use crate::ai::Mover;
use crate::error::PlayError;
use crate::game::{Board, Side, CELLS};

use super::console::Console;

/// Human move provider. Keeps asking until a legal empty cell is entered.
pub struct HumanMover<R, W> {
    side: Side,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> HumanMover<R, W> {
    pub fn new(side: Side, console: Console<R, W>) -> Self {
        HumanMover { side, console }
    }
}

impl<R: BufRead, W: Write> Mover for HumanMover<R, W> {
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        loop {
            self.console
                .print(&format!("Make a move (You are {}): ", self.side))?;
            let line = self.console.read_line()?.ok_or(PlayError::InputClosed)?;

            let Ok(number) = line.trim().parse::<i64>() else {
                self.console.println("You should enter numbers!")?;
                continue;
            };

            let index = match usize::try_from(number) {
                Ok(index) if index < CELLS => index,
                _ => {
                    self.console
                        .println("Index should be from 0 to 8 (inclusive).")?;
                    continue;
                }
            };

            if board.is_empty(index)? {
                return Ok(index);
            }
            self.console
                .println("This cell is occupied! Choose another one!")?;
        }
    }

    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "Human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn human(input: &str) -> (HumanMover<Cursor<String>, Vec<u8>>, Console<Cursor<String>, Vec<u8>>) {
        let console = Console::new(Cursor::new(input.to_string()), Vec::new());
        (HumanMover::new(Side::X, console.clone()), console)
    }

    fn transcript(console: &Console<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn accepts_first_legal_index() {
        let (mut mover, console) = human("4\n");
        assert_eq!(mover.choose_move(&Board::new()).unwrap(), 4);
        assert_eq!(transcript(&console), "Make a move (You are X): ");
    }

    #[test]
    fn retries_until_legal() {
        let mut board = Board::new();
        board.place(0, Side::O).unwrap();
        let (mut mover, console) = human("abc\n-1\n9\n0\n 7 \n");

        assert_eq!(mover.choose_move(&board).unwrap(), 7);

        let text = transcript(&console);
        assert!(text.contains("You should enter numbers!"));
        assert_eq!(
            text.matches("Index should be from 0 to 8 (inclusive).").count(),
            2
        );
        assert!(text.contains("This cell is occupied! Choose another one!"));
        assert_eq!(text.matches("Make a move (You are X): ").count(), 5);
    }

    #[test]
    fn end_of_input_is_reported() {
        let (mut mover, _console) = human("x\n");
        assert!(matches!(
            mover.choose_move(&Board::new()),
            Err(PlayError::InputClosed)
        ));
    }

    #[test]
    fn name_and_side() {
        let (mover, _) = human("");
        assert_eq!(mover.name(), "Human");
        assert_eq!(mover.side(), Side::X);
    }
}
