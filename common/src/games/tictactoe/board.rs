use super::error::MoveError;
use super::types::Mark;

pub const BOARD_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Nine cells in row-major order: `index = row * 3 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Result<Mark, MoveError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(MoveError::InvalidIndex { index })
    }

    /// Returns a copy with `mark` written at `index`.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Board, MoveError> {
        if index >= BOARD_CELLS {
            return Err(MoveError::InvalidIndex { index });
        }
        let mut next = *self;
        next.cells[index] = mark;
        Ok(next)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// `(col, row)` of a cell index.
    pub fn position_of(index: usize) -> (usize, usize) {
        (index % BOARD_SIDE, index / BOARD_SIDE)
    }
}
