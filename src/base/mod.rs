mod board;
mod grid;

pub use board::{Board, Cell, GameStatus};
pub use grid::{CELL_COUNT, Grid, SIZE};
