use std::path::PathBuf;

use clap::Parser;
use log::debug;
use serde::Deserialize;

use crate::base::{CELL_COUNT, Cell, Grid, SIZE};
use crate::error::{Error, Result};

/// Console Sudoku board manager.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Cell entries in the form `COL,ROW;EXPECTED,FIXED`, one per cell,
    /// e.g. `0,0;5,true`. All 81 positions must be supplied.
    #[arg(value_name = "ENTRY", conflicts_with = "file")]
    pub positions: Vec<String>,

    /// TOML puzzle file with one `[[cell]]` table per position.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct PuzzleFile {
    #[serde(rename = "cell")]
    cells: Vec<CellEntry>,
}

#[derive(Debug, Deserialize)]
struct CellEntry {
    column: usize,
    row: usize,
    expected: u8,
    fixed: bool,
}

/// Loads and validates the initial board layout.
///
/// All configuration errors surface here, before any [`Board`] exists.
///
/// [`Board`]: crate::base::Board
pub fn load(args: &Args) -> Result<Grid<Cell>> {
    let entries = if let Some(path) = &args.file {
        debug!("loading puzzle file {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let file: PuzzleFile = toml::from_str(&text)?;
        file.cells
    } else if !args.positions.is_empty() {
        args.positions
            .iter()
            .map(|entry| parse_entry(entry))
            .collect::<Result<Vec<_>>>()?
    } else {
        return Err(Error::NoPuzzle);
    };
    let prototype = build_prototype(entries)?;
    debug!("loaded all {CELL_COUNT} cell entries");
    Ok(prototype)
}

fn parse_entry(entry: &str) -> Result<CellEntry> {
    let invalid = || Error::InvalidEntry(entry.to_owned());
    let (position, value) = entry.split_once(';').ok_or_else(invalid)?;
    let (column, row) = position.split_once(',').ok_or_else(invalid)?;
    let (expected, fixed) = value.split_once(',').ok_or_else(invalid)?;
    Ok(CellEntry {
        column: column.trim().parse().map_err(|_| invalid())?,
        row: row.trim().parse().map_err(|_| invalid())?,
        expected: expected.trim().parse().map_err(|_| invalid())?,
        fixed: fixed.trim().parse().map_err(|_| invalid())?,
    })
}

fn build_prototype(entries: Vec<CellEntry>) -> Result<Grid<Cell>> {
    let mut slots: Grid<Option<Cell>> = Grid::new();
    for entry in entries {
        let CellEntry {
            column,
            row,
            expected,
            fixed,
        } = entry;
        if column >= SIZE || row >= SIZE {
            return Err(Error::OutOfRange { column, row });
        }
        if !(1..=9).contains(&expected) {
            return Err(Error::InvalidDigit(expected));
        }
        let slot = &mut slots[(column, row)];
        if slot.is_some() {
            return Err(Error::DuplicatePosition { column, row });
        }
        *slot = Some(Cell::new(expected, fixed));
    }

    let mut cells = Vec::with_capacity(CELL_COUNT);
    for row in 0..SIZE {
        for column in 0..SIZE {
            match slots[(column, row)] {
                Some(cell) => cells.push(cell),
                None => return Err(Error::MissingPosition { column, row }),
            }
        }
    }
    Ok(Grid::from_vec(cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_entries() -> Vec<String> {
        let mut entries = Vec::new();
        for row in 0..SIZE {
            for column in 0..SIZE {
                let expected = (column + row) % 9 + 1;
                let fixed = column == 0 && row == 0;
                entries.push(format!("{column},{row};{expected},{fixed}"));
            }
        }
        entries
    }

    #[test]
    fn parses_a_single_entry() {
        let entry = parse_entry("4,8;9,true").unwrap();
        assert_eq!(entry.column, 4);
        assert_eq!(entry.row, 8);
        assert_eq!(entry.expected, 9);
        assert!(entry.fixed);
    }

    #[test]
    fn rejects_malformed_entries() {
        for bad in ["", "0,0", "0;5,true", "0,0;5", "a,0;5,true", "0,0;5,maybe"] {
            match parse_entry(bad) {
                Err(Error::InvalidEntry(_)) => {},
                other => panic!("expected InvalidEntry for '{bad}', got {other:?}"),
            }
        }
    }

    #[test]
    fn loads_a_complete_position_list() {
        let args = Args {
            positions: full_entries(),
            file: None,
        };
        let prototype = load(&args).unwrap();
        let clue = prototype[(0, 0)];
        assert!(clue.is_fixed());
        assert_eq!(clue.actual(), Some(1));
        assert!(!prototype[(5, 3)].is_fixed());
        assert_eq!(prototype[(5, 3)].actual(), None);
    }

    #[test]
    fn missing_position_is_rejected() {
        let mut positions = full_entries();
        positions.retain(|entry| !entry.starts_with("7,7;"));
        let args = Args { positions, file: None };
        match load(&args) {
            Err(Error::MissingPosition { column: 7, row: 7 }) => {},
            other => panic!("expected MissingPosition, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_position_is_rejected() {
        let mut positions = full_entries();
        positions.push("3,3;1,false".to_owned());
        let args = Args { positions, file: None };
        match load(&args) {
            Err(Error::DuplicatePosition { column: 3, row: 3 }) => {},
            other => panic!("expected DuplicatePosition, got {other:?}"),
        }
    }

    #[test]
    fn out_of_domain_values_are_rejected() {
        let mut positions = full_entries();
        positions[0] = "0,0;10,true".to_owned();
        let args = Args { positions, file: None };
        match load(&args) {
            Err(Error::InvalidDigit(10)) => {},
            other => panic!("expected InvalidDigit, got {other:?}"),
        }

        let args = Args {
            positions: vec!["9,0;5,false".to_owned()],
            file: None,
        };
        match load(&args) {
            Err(Error::OutOfRange { column: 9, row: 0 }) => {},
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn empty_configuration_is_rejected() {
        let args = Args {
            positions: Vec::new(),
            file: None,
        };
        match load(&args) {
            Err(Error::NoPuzzle) => {},
            other => panic!("expected NoPuzzle, got {other:?}"),
        }
    }

    #[test]
    fn toml_file_matches_position_list() {
        let mut toml_text = String::new();
        for entry in full_entries() {
            let parsed = parse_entry(&entry).unwrap();
            toml_text.push_str(&format!(
                "[[cell]]\ncolumn = {}\nrow = {}\nexpected = {}\nfixed = {}\n\n",
                parsed.column, parsed.row, parsed.expected, parsed.fixed
            ));
        }
        let file: PuzzleFile = toml::from_str(&toml_text).unwrap();
        let from_file = build_prototype(file.cells).unwrap();

        let args = Args {
            positions: full_entries(),
            file: None,
        };
        let from_args = load(&args).unwrap();
        assert_eq!(from_file, from_args);
    }
}
