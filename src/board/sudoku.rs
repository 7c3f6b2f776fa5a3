use crate::bitset::Set;
use crate::board::{Cell, Digit};
use crate::consts::{N_CELLS, N_HOUSES_PER_KIND};
use crate::errors::{FromBytesError, FromBytesSliceError};
use crate::parse_errors::{InvalidEntry, LineParseError};
use crate::solver::{self, Board};
use std::{fmt, ops, str};

/// The external representation of a 9x9 sudoku grid.
///
/// Cells are stored in row-major order, one byte per cell, `0` marking an
/// unassigned cell. Construction goes through one of the checked conversions,
/// so a `Sudoku` never contains entries outside `0..=9`; whether the entries
/// form a *consistent* puzzle is not checked anywhere but by solving it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from a byte array, `0` meaning unassigned.
    ///
    /// Returns an error if any entry lies outside `0..=9`.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        if bytes.iter().any(|&byte| byte > 9) {
            return Err(FromBytesError(()));
        }
        Ok(Sudoku(bytes))
    }

    /// Creates a sudoku from a byte slice, `0` meaning unassigned.
    ///
    /// Returns an error if the slice is not 81 long or any entry lies outside `0..=9`.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Ok(Sudoku::from_bytes(array)?)
    }

    /// Reads a sudoku in the line format.
    ///
    /// The line format consists of 81 characters, one per cell in row-major
    /// order: `1` to `9` for an assigned cell, `_`, `.` or `0` for an
    /// unassigned one. Anything after the 81st cell must be separated by a
    /// space or tab and is ignored as a comment.
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0;
        let mut chars = s.chars();
        while n_cells < N_CELLS {
            let ch = match chars.next() {
                Some(ch) => ch,
                None => return Err(LineParseError::NotEnoughCells(n_cells as u8)),
            };
            match ch {
                '1'..='9' => {
                    grid[n_cells] = ch as u8 - b'0';
                    n_cells += 1;
                }
                '0' | '.' | '_' => n_cells += 1,
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: n_cells as u8,
                        ch,
                    }))
                }
            }
        }
        if let Some(ch) = chars.next() {
            match ch {
                ' ' | '\t' => {}
                '0'..='9' | '.' | '_' => return Err(LineParseError::TooManyCells),
                _ => return Err(LineParseError::MissingCommentDelimiter),
            }
        }
        Ok(Sudoku(grid))
    }

    /// Returns the cell contents as a byte array, `0` meaning unassigned.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the line representation of this sudoku. It dereferences into a `&str`.
    pub fn to_str_line(&self) -> SudokuLine {
        let mut line = [0; N_CELLS];
        for (chr, &num) in line.iter_mut().zip(self.0.iter()) {
            *chr = match num {
                0 => b'.',
                num => num + b'0',
            };
        }
        SudokuLine(line)
    }

    /// Returns an iterator over the cells, going from left to right, top to
    /// bottom. `None` marks an unassigned cell.
    pub fn iter(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.0.iter().map(|&num| match num {
            0 => None,
            num => Some(num),
        })
    }

    /// Number of assigned cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Checks whether every cell is assigned and every row, column and block
    /// contains each digit exactly once.
    pub fn is_solved(&self) -> bool {
        let mut row_digits = [Set::NONE; N_HOUSES_PER_KIND];
        let mut col_digits = [Set::NONE; N_HOUSES_PER_KIND];
        let mut block_digits = [Set::NONE; N_HOUSES_PER_KIND];
        for cell in Cell::all() {
            let digit = match self.get(cell) {
                Some(digit) => digit,
                None => return false,
            };
            row_digits[cell.row().as_index()] |= digit;
            col_digits[cell.col().as_index()] |= digit;
            block_digits[cell.block().as_index()] |= digit;
        }
        row_digits
            .iter()
            .chain(col_digits.iter())
            .chain(block_digits.iter())
            .all(Set::is_full)
    }

    /// Tries to find a solution and fills it in. Returns `true` if a solution
    /// was found.
    ///
    /// The sudoku is only overwritten if the search succeeds. Use [`Board`]
    /// and [`solve`](crate::solve) directly to observe the search state.
    pub fn solve(&mut self) -> bool {
        let mut board = Board::new(*self);
        if solver::solve(&mut board) {
            *self = board.into_grid();
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn get(self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cell in Cell::all() {
            match (cell.row().get(), cell.col().get()) {
                (0, 0) => (),
                (3, 0) | (6, 0) => f.write_str("\n\n")?, // separate bands
                (_, 0) => f.write_str("\n")?,
                (_, 3) | (_, 6) => f.write_str(" ")?, // separate stacks
                _ => (),
            }
            match self.0[cell.as_index()] {
                0 => f.write_str("_")?,
                num => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

/// Line representation of a sudoku, as returned by [`Sudoku::to_str_line`].
#[derive(Copy, Clone)]
pub struct SudokuLine([u8; N_CELLS]);

impl ops::Deref for SudokuLine {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        str::from_utf8(&self.0).expect("line representation is always ascii")
    }
}

impl fmt::Display for SudokuLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self)
    }
}

impl fmt::Debug for SudokuLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Sudoku;
    use serde::de::{Error, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    // human readable formats carry the line representation,
    // binary ones the raw cell bytes
    impl Serialize for Sudoku {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_str_line())
            } else {
                serializer.serialize_bytes(&self.0)
            }
        }
    }

    struct SudokuVisitor;

    impl<'de> Visitor<'de> for SudokuVisitor {
        type Value = Sudoku;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a sudoku as a line of 81 cells or as 81 raw bytes")
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
            Sudoku::from_str_line(v).map_err(E::custom)
        }

        fn visit_bytes<E: Error>(self, v: &[u8]) -> Result<Self::Value, E> {
            Sudoku::from_bytes_slice(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Sudoku, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(SudokuVisitor)
            } else {
                deserializer.deserialize_bytes(SudokuVisitor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_parse_roundtrip() {
        let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
        let sudoku = Sudoku::from_str_line(line).unwrap();
        assert_eq!(&*sudoku.to_str_line(), line);
        assert_eq!(sudoku.n_clues(), 32);
    }

    #[test]
    fn line_parse_accepts_all_placeholders_and_comments() {
        let with_comment = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.. some comment";
        let with_zeros = "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
        let with_underscores = "__3_2_6__9__3_5__1__18_64____81_29__7_______8__67_82____26_95__8__2_3__9__5_1_3__";
        let reference = Sudoku::from_str_line(with_zeros).unwrap();
        assert_eq!(Sudoku::from_str_line(with_comment).unwrap(), reference);
        assert_eq!(Sudoku::from_str_line(with_underscores).unwrap(), reference);
    }

    #[test]
    fn line_parse_rejects_malformed_input() {
        let bad_char = "..3.2.6..9..3.5..1..18.64....81.29..7..x....8..67.82....26.95..8..2.3..9..5.1.3..";
        match Sudoku::from_str_line(bad_char) {
            Err(LineParseError::InvalidEntry(entry)) => {
                assert_eq!(entry.cell, 39);
                assert_eq!(entry.ch, 'x');
                assert_eq!(entry.row(), 4);
                assert_eq!(entry.col(), 3);
            }
            other => panic!("expected invalid entry error, got {:?}", other),
        }

        let short = "..3.2.6..";
        assert_eq!(
            Sudoku::from_str_line(short),
            Err(LineParseError::NotEnoughCells(9))
        );

        let long = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..1";
        assert_eq!(Sudoku::from_str_line(long), Err(LineParseError::TooManyCells));

        let unseparated_comment = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..comment";
        assert_eq!(
            Sudoku::from_str_line(unseparated_comment),
            Err(LineParseError::MissingCommentDelimiter)
        );
    }

    #[test]
    fn byte_conversions_validate_their_input() {
        let mut bytes = [0; 81];
        bytes[17] = 10;
        assert!(Sudoku::from_bytes(bytes).is_err());

        assert!(matches!(
            Sudoku::from_bytes_slice(&[0; 80]),
            Err(FromBytesSliceError::WrongLength(80))
        ));

        bytes[17] = 9;
        let sudoku = Sudoku::from_bytes(bytes).unwrap();
        assert_eq!(sudoku.to_bytes(), bytes);
        assert_eq!(Sudoku::from_bytes_slice(&bytes[..]).unwrap(), sudoku);
    }

    #[test]
    fn display_uses_block_layout() {
        let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        let shown = sudoku.to_string();
        assert_eq!(shown.lines().count(), 11);
        assert!(shown.lines().next().unwrap().starts_with("___ ___ ___"));
    }
}
