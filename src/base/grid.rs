use std::ops::{Index, IndexMut};

/// Edge length of the board.
pub const SIZE: usize = 9;
/// Total number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Fixed 9×9 container indexed by `(column, row)`, both in `0..SIZE`.
///
/// Storage is row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
}

impl<T> Grid<T> {
    pub fn new() -> Self
    where
        T: Default + Clone,
    {
        Self {
            data: vec![T::default(); CELL_COUNT],
        }
    }

    /// Build from row-major data. `data` must hold exactly [`CELL_COUNT`] items.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert_eq!(data.len(), CELL_COUNT);
        Self { data }
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&T> {
        if column >= SIZE || row >= SIZE {
            return None;
        }
        self.data.get(row * SIZE + column)
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut T> {
        if column >= SIZE || row >= SIZE {
            return None;
        }
        self.data.get_mut(row * SIZE + column)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Default + Clone> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (column, row) = index;
        &self.data[row * SIZE + column]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (column, row) = index;
        &mut self.data[row * SIZE + column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_rejects_out_of_range() {
        let grid: Grid<u8> = Grid::new();
        assert!(grid.get(8, 8).is_some());
        assert!(grid.get(9, 0).is_none());
        assert!(grid.get(0, 9).is_none());
    }

    #[test]
    fn index_is_column_row() {
        let mut grid: Grid<u8> = Grid::new();
        grid[(2, 7)] = 42;
        assert_eq!(grid.get(2, 7), Some(&42));
        // Row-major: (column 2, row 7) lives at offset 7 * 9 + 2.
        assert_eq!(grid.iter().position(|&v| v == 42), Some(7 * SIZE + 2));
    }

    #[test]
    fn from_vec_round_trips() {
        let data: Vec<usize> = (0..CELL_COUNT).collect();
        let grid = Grid::from_vec(data);
        assert_eq!(grid[(0, 0)], 0);
        assert_eq!(grid[(8, 0)], 8);
        assert_eq!(grid[(0, 1)], 9);
        assert_eq!(grid[(8, 8)], CELL_COUNT - 1);
    }
}
