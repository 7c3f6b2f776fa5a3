//! Types for cells, digits and grids of a sudoku board
mod digit;
pub(crate) mod positions;
mod sudoku;

pub use self::digit::Digit;
pub use self::positions::{Block, Cell, Col, Row};
pub use self::sudoku::{Sudoku, SudokuLine};
