#![warn(missing_docs)]
//! A sudoku solving library built on per-cell candidate tracking.
//!
//! ## Overview
//!
//! Every cell of a [`Board`] carries the set of digits still consistent with
//! the assignments in its row, column and block. The [`solve`] search always
//! branches on the most constrained unassigned cell and backtracks when a
//! cell runs out of candidates.
//!
//! ## Example
//!
//! ```
//! use sudoku_csp::Sudoku;
//!
//! let sudoku_line = "1....7.9..3..2...8..96..5....53..9...1..8...26....4...3......1..4......7..7...3..";
//!
//! // Sudokus can be created from &str's in the line format or from bytes.
//! let mut sudoku = Sudoku::from_str_line(sudoku_line).unwrap();
//! // Sudoku::from_bytes(some_byte_array);
//! // Sudoku::from_bytes_slice(some_slice);
//!
//! // Solve, print or convert the sudoku to another format
//! if sudoku.solve() {
//!     println!("{}", sudoku);
//!     println!("{}", sudoku.to_str_line());
//!
//!     let cell_contents: [u8; 81] = sudoku.to_bytes();
//! }
//! ```

pub mod bitset;
mod board;
mod consts;
pub mod errors;
mod generator;
mod helper;
pub mod parse_errors;
mod solver;

pub use crate::board::{Block, Cell, Col, Digit, Row, Sudoku, SudokuLine};
pub use crate::solver::{solve, Board};
