use super::grid::Grid;
use crate::error::{Error, Result};

/// One board position: the solution digit, the player's current entry, and
/// whether the position is a pre-filled clue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    expected: u8,
    actual: Option<u8>,
    fixed: bool,
}

impl Cell {
    /// A fixed cell starts out (and stays) with `actual == Some(expected)`.
    pub fn new(expected: u8, fixed: bool) -> Self {
        Self {
            expected,
            actual: fixed.then_some(expected),
            fixed,
        }
    }

    pub fn expected(&self) -> u8 {
        self.expected
    }

    pub fn actual(&self) -> Option<u8> {
        self.actual
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Assigns unconditionally. Fixed-cell protection is the [`Board`]'s job.
    pub fn set(&mut self, value: u8) {
        self.actual = Some(value);
    }

    /// Empties unconditionally. Fixed-cell protection is the [`Board`]'s job.
    pub fn clear(&mut self) {
        self.actual = None;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Incomplete,
    Complete,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::NotStarted => write!(f, "not started"),
            GameStatus::Incomplete => write!(f, "incomplete"),
            GameStatus::Complete => write!(f, "complete"),
        }
    }
}

/// The 9×9 game board.
///
/// All state is the aggregate of the 81 cells; status, errors, and completion
/// are recomputed from the full grid on every query.
#[derive(Clone, Debug)]
pub struct Board {
    cells: Grid<Cell>,
}

impl Board {
    pub fn new(cells: Grid<Cell>) -> Self {
        Self { cells }
    }

    /// Enters `value` at `(column, row)`.
    ///
    /// Returns `Ok(false)` without mutating when the cell is fixed. An
    /// incorrect-but-valid digit is always accepted; correctness is assessed
    /// by [`Board::has_errors`], never at write time.
    pub fn set_value(&mut self, column: usize, row: usize, value: u8) -> Result<bool> {
        if !(1..=9).contains(&value) {
            return Err(Error::InvalidDigit(value));
        }
        let cell = self
            .cells
            .get_mut(column, row)
            .ok_or(Error::OutOfRange { column, row })?;
        if cell.is_fixed() {
            return Ok(false);
        }
        cell.set(value);
        Ok(true)
    }

    /// Empties `(column, row)`. Same fixed-cell contract as [`Board::set_value`].
    pub fn clear_value(&mut self, column: usize, row: usize) -> Result<bool> {
        let cell = self
            .cells
            .get_mut(column, row)
            .ok_or(Error::OutOfRange { column, row })?;
        if cell.is_fixed() {
            return Ok(false);
        }
        cell.clear();
        Ok(true)
    }

    /// Empties every non-fixed cell. Fixed cells keep their clue. Idempotent.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            if !cell.is_fixed() {
                cell.clear();
            }
        }
    }

    pub fn status(&self) -> GameStatus {
        let untouched = self
            .cells
            .iter()
            .all(|cell| cell.is_fixed() || cell.actual().is_none());
        if untouched {
            return GameStatus::NotStarted;
        }
        if self.cells.iter().any(|cell| cell.actual().is_none()) {
            return GameStatus::Incomplete;
        }
        GameStatus::Complete
    }

    /// Whether any entered digit differs from its solution. Always `false`
    /// before play starts.
    pub fn has_errors(&self) -> bool {
        if self.status() == GameStatus::NotStarted {
            return false;
        }
        self.cells
            .iter()
            .any(|cell| cell.actual().is_some_and(|value| value != cell.expected()))
    }

    pub fn is_finished(&self) -> bool {
        !self.has_errors() && self.status() == GameStatus::Complete
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<&Cell> {
        self.cells.get(column, row)
    }

    pub fn cells(&self) -> &Grid<Cell> {
        &self.cells
    }
}
