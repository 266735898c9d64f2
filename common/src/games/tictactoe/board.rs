use std::fmt;
use super::types::Mark;

pub const BOARD_SIZE: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// 3x3 board, cells indexed 0..8 in row-major order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Mark>; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Builds a board from `"X"`, `"O"` and `""` entries. Returns `None` on
    /// any other symbol.
    pub fn from_symbols(symbols: [&str; BOARD_SIZE]) -> Option<Self> {
        let mut cells = [None; BOARD_SIZE];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol {
                "" => None,
                other => Some(Mark::parse(other)?),
            };
        }
        Some(Self { cells })
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        index < BOARD_SIZE && self.cells[index].is_none()
    }

    /// Copy of this board with `mark` written at `index`.
    pub fn with_mark(mut self, index: usize, mark: Mark) -> Board {
        self.cells[index] = Some(mark);
        self
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn to_symbols(&self) -> [&'static str; BOARD_SIZE] {
        self.cells.map(|cell| cell.map_or("", Mark::as_str))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                f.write_str(cell.map_or(".", Mark::as_str))?;
            }
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    (0..BOARD_SIZE).filter(|&index| board.is_empty_cell(index)).collect()
}
