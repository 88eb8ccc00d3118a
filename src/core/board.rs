use serde::{Deserialize, Serialize};

/// Square grid of cells; an occupied cell holds the owning player's name.
///
/// The board serializes as a nested array of `name | null` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: Vec<Vec<Option<String>>>,
}

impl Board {
    /// Create an empty board with the given side length
    pub fn new(side: usize) -> Self {
        Self {
            cells: vec![vec![None; side]; side],
        }
    }

    /// Side length of the square grid
    pub fn side(&self) -> usize {
        self.cells.len()
    }

    /// Mark at (row, col), or None when the cell is empty or out of range
    pub fn mark(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col)?.as_deref()
    }

    /// Write a mark into an in-range cell
    pub fn place(&mut self, row: usize, col: usize, mark: String) {
        self.cells[row][col] = Some(mark);
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// The raw grid, for serialization into API responses
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.cells
    }
}
