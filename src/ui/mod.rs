use std::io::{BufRead, Write};

use log::debug;

use crate::base::{Board, Cell, Grid, SIZE};
use crate::error::Result;

const NO_GAME: &str = "The game has not been started yet.";

/// The console menu driver.
///
/// Holds the validated puzzle prototype and the (optional) running game.
/// Generic over the reader/writer so the whole loop can be scripted in tests.
pub struct Menu {
    prototype: Grid<Cell>,
    board: Option<Board>,
}

impl Menu {
    pub fn new(prototype: Grid<Cell>) -> Self {
        Self {
            prototype,
            board: None,
        }
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        loop {
            writeln!(output, "Select one of the options:")?;
            writeln!(output, "1 - Start a new game")?;
            writeln!(output, "2 - Place a number")?;
            writeln!(output, "3 - Remove a number")?;
            writeln!(output, "4 - Show the current game")?;
            writeln!(output, "5 - Check game status")?;
            writeln!(output, "6 - Clear the game")?;
            writeln!(output, "7 - Finish the game")?;
            writeln!(output, "8 - Quit")?;

            let Some(option) = read_number(input, output, 1, 8)? else {
                return Ok(());
            };
            match option {
                1 => self.start_game(output)?,
                2 => self.place_number(input, output)?,
                3 => self.remove_number(input, output)?,
                4 => self.show_board(output)?,
                5 => self.show_status(output)?,
                6 => self.clear_game(input, output)?,
                7 => self.finish_game(output)?,
                _ => return Ok(()),
            }
        }
    }

    fn start_game(&mut self, output: &mut impl Write) -> Result<()> {
        if self.board.is_some() {
            writeln!(output, "The game has already been started.")?;
            return Ok(());
        }
        self.board = Some(Board::new(self.prototype.clone()));
        debug!("new game started");
        writeln!(output, "The game is ready to begin!")?;
        Ok(())
    }

    fn place_number(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        let Some(board) = self.board.as_mut() else {
            writeln!(output, "{NO_GAME}")?;
            return Ok(());
        };
        writeln!(output, "Column where the number goes (0-8):")?;
        let Some(column) = read_number(input, output, 0, 8)? else {
            return Ok(());
        };
        writeln!(output, "Row where the number goes (0-8):")?;
        let Some(row) = read_number(input, output, 0, 8)? else {
            return Ok(());
        };
        writeln!(output, "Number to place at [{column},{row}] (1-9):")?;
        let Some(value) = read_number(input, output, 1, 9)? else {
            return Ok(());
        };
        if !board.set_value(column, row, value as u8)? {
            writeln!(output, "Position [{column},{row}] holds a fixed value!")?;
        }
        Ok(())
    }

    fn remove_number(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        let Some(board) = self.board.as_mut() else {
            writeln!(output, "{NO_GAME}")?;
            return Ok(());
        };
        writeln!(output, "Column of the number to remove (0-8):")?;
        let Some(column) = read_number(input, output, 0, 8)? else {
            return Ok(());
        };
        writeln!(output, "Row of the number to remove (0-8):")?;
        let Some(row) = read_number(input, output, 0, 8)? else {
            return Ok(());
        };
        if !board.clear_value(column, row)? {
            writeln!(output, "Position [{column},{row}] holds a fixed value!")?;
        }
        Ok(())
    }

    fn show_board(&self, output: &mut impl Write) -> Result<()> {
        let Some(board) = self.board.as_ref() else {
            writeln!(output, "{NO_GAME}")?;
            return Ok(());
        };
        writeln!(output, "Your game currently looks like this:")?;
        write!(output, "{}", render(board))?;
        Ok(())
    }

    fn show_status(&self, output: &mut impl Write) -> Result<()> {
        let Some(board) = self.board.as_ref() else {
            writeln!(output, "{NO_GAME}")?;
            return Ok(());
        };
        writeln!(output, "The game status is currently {}", board.status())?;
        if board.has_errors() {
            writeln!(output, "The game contains errors!")?;
        } else {
            writeln!(output, "The game contains no errors.")?;
        }
        Ok(())
    }

    fn clear_game(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        let Some(board) = self.board.as_mut() else {
            writeln!(output, "{NO_GAME}")?;
            return Ok(());
        };
        writeln!(output, "Are you sure you want to clear your game? (y/n)")?;
        loop {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => {
                    board.reset();
                    debug!("board cleared");
                    writeln!(output, "Game cleared.")?;
                    return Ok(());
                },
                "n" | "no" => return Ok(()),
                _ => writeln!(output, "Answer 'y' or 'n'.")?,
            }
        }
    }

    fn finish_game(&mut self, output: &mut impl Write) -> Result<()> {
        let Some(board) = self.board.as_ref() else {
            writeln!(output, "{NO_GAME}")?;
            return Ok(());
        };
        if !board.is_finished() {
            if board.has_errors() {
                writeln!(output, "Your game still contains errors! Check and adjust.")?;
            } else {
                writeln!(output, "Your game still has empty positions!")?;
            }
            return Ok(());
        }
        let rendered = render(board);
        debug!("game finished");
        writeln!(output, "Congratulations, you completed the game!")?;
        write!(output, "{rendered}")?;
        self.board = None;
        Ok(())
    }
}

/// Reads lines until one parses as a number in `min..=max`.
///
/// Returns `None` on end of input.
fn read_number(
    input: &mut impl BufRead,
    output: &mut impl Write,
    min: usize,
    max: usize,
) -> Result<Option<usize>> {
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (min..=max).contains(&n) => return Ok(Some(n)),
            _ => writeln!(output, "Enter a number between {min} and {max}.")?,
        }
    }
}

/// ASCII view of the board, 3×3 boxes ruled, `.` for empty cells.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..SIZE {
        if row % 3 == 0 {
            out.push_str("+-------+-------+-------+\n");
        }
        for column in 0..SIZE {
            if column % 3 == 0 {
                out.push_str("| ");
            }
            match board.cells()[(column, row)].actual() {
                Some(value) => out.push((b'0' + value) as char),
                None => out.push('.'),
            }
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str("+-------+-------+-------+\n");
    out
}
