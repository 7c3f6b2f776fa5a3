//! Candidate-tracking board state and the backtracking search over it.

use crate::bitset::Set;
use crate::board::{Cell, Digit, Sudoku};
use crate::consts::N_HOUSES_PER_KIND;
use crate::helper::CellArray;
use crunchy::unroll;

/// A sudoku grid together with the set of digits still possible in every cell.
///
/// The board is the single unit of state the search mutates in place. For an
/// unassigned cell the candidate set contains exactly the digits not assigned
/// to any cell in the same row, column or block. For an assigned cell the
/// candidate set is stale and not read again until the cell is unassigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Sudoku,
    candidates: CellArray<Set<Digit>>,
}

impl Board {
    /// Creates a board for the given grid with freshly computed candidate sets.
    pub fn new(sudoku: Sudoku) -> Board {
        let mut board = Board {
            grid: sudoku,
            candidates: CellArray([Set::ALL; 81]),
        };
        board.recompute_candidates();
        board
    }

    /// The grid in its current state of assignment.
    pub fn grid(&self) -> &Sudoku {
        &self.grid
    }

    /// Consumes the board and returns the grid.
    pub fn into_grid(self) -> Sudoku {
        self.grid
    }

    /// The set of digits still possible in `cell`.
    ///
    /// Only meaningful while the cell is unassigned.
    pub fn candidates(&self, cell: Cell) -> Set<Digit> {
        self.candidates[cell]
    }

    /// Recomputes every candidate set from the current assignments.
    ///
    /// Resets each cell to all nine digits, then rules out every digit
    /// assigned somewhere in the cell's row, column or block. Callable at any
    /// time and idempotent. This is the only way to restore candidate sets
    /// after unassigning a cell, single eliminations are not reversible.
    pub fn recompute_candidates(&mut self) {
        let mut row_solved = [Set::NONE; N_HOUSES_PER_KIND];
        let mut col_solved = [Set::NONE; N_HOUSES_PER_KIND];
        let mut block_solved = [Set::NONE; N_HOUSES_PER_KIND];
        for cell in Cell::all() {
            if let Some(digit) = self.grid.get(cell) {
                row_solved[cell.row().as_index()] |= digit;
                col_solved[cell.col().as_index()] |= digit;
                block_solved[cell.block().as_index()] |= digit;
            }
        }

        // elimination pass, unrolled. Runs once per backtrack step.
        unroll! {
            for row in 0..9 {
                for col in 0..9 {
                    let cell = Cell::new((row * 9 + col) as u8);
                    let eliminated =
                        row_solved[row] | col_solved[col] | block_solved[cell.block().as_index()];
                    self.candidates[cell] = Set::ALL.without(eliminated);
                }
            }
        }
    }

    /// Rules `digit` out of the candidate sets of every cell sharing a row,
    /// column or block with `cell`, after `cell` was assigned `digit`.
    ///
    /// The peer set includes `cell` itself as well as other assigned cells.
    /// Those eliminations are no-ops, their candidate sets are stale.
    pub(crate) fn eliminate_from_peers(&mut self, cell: Cell, digit: Digit) {
        for peer in cell.peers() {
            self.candidates[peer].remove(digit);
        }
    }

    #[inline]
    pub(crate) fn assign(&mut self, cell: Cell, digit: Digit) {
        self.grid.0[cell.as_index()] = digit.get();
    }

    #[inline]
    pub(crate) fn clear(&mut self, cell: Cell) {
        self.grid.0[cell.as_index()] = 0;
    }
}

// The search raises a bar from 1 to 9 and scans the grid in row-major order
// for the first unassigned cell whose candidate count does not exceed it.
// That is the same cell a minimum-remaining-values selection would pick, with
// ties broken by cell order. Digits are tried in ascending order. A failed
// trial unassigns the cell and recomputes all candidate sets, which undoes
// the eliminations of the whole abandoned subtree in one sweep.

/// Fills every unassigned cell of the board such that all sudoku constraints
/// hold. Returns `true` if the search succeeded.
///
/// On `false` the board is left in the partial state of the last abandoned
/// branch. That state is unspecified, the return value alone signals the
/// outcome.
pub fn solve(board: &mut Board) -> bool {
    for bar in 1..=9 {
        for cell in Cell::all() {
            if board.grid.get(cell).is_some() {
                continue;
            }
            let candidates = board.candidates(cell);
            if candidates.len() > bar {
                continue;
            }
            for digit in candidates {
                board.assign(cell, digit);
                board.eliminate_from_peers(cell, digit);
                if solve(board) {
                    return true;
                }
                board.clear(cell);
                board.recompute_candidates();
            }
            // every candidate failed, some earlier assignment must be wrong
            return false;
        }
    }
    // no cell below any bar means no unassigned cell is left
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Sudoku {
        Sudoku::from_str_line(line).unwrap()
    }

    #[test]
    fn candidates_of_fresh_board() {
        let mut line = String::from("123456...");
        line.push_str(&".".repeat(72));
        let board = Board::new(parse(&line));

        // remaining cell in the first row
        let cell = Cell::new(6);
        let left: Vec<u8> = board.candidates(cell).into_iter().map(Digit::get).collect();
        assert_eq!(left, [7, 8, 9]);

        // cell below the 1, in the same block as 1, 2, 3
        let cell = Cell::new(9);
        let left: Vec<u8> = board.candidates(cell).into_iter().map(Digit::get).collect();
        assert_eq!(left, [4, 5, 6, 7, 8, 9]);

        // cell sharing no house with any of the givens
        let cell = Cell::new(79);
        assert!(board.candidates(cell).is_full());
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut board = Board::new(parse(
            "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
        ));
        let once = board.clone();
        board.recompute_candidates();
        assert_eq!(board, once);
    }

    #[test]
    fn elimination_matches_recomputation() {
        let sudoku = parse(
            "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
        );
        let mut eliminated = Board::new(sudoku);
        let mut recomputed = eliminated.clone();

        let cell = Cell::new(0);
        let digit = eliminated
            .candidates(cell)
            .into_iter()
            .next()
            .expect("cell 0 is unassigned and the puzzle is solvable");

        eliminated.assign(cell, digit);
        eliminated.eliminate_from_peers(cell, digit);

        recomputed.assign(cell, digit);
        recomputed.recompute_candidates();

        for cell in Cell::all() {
            if eliminated.grid.get(cell).is_some() {
                continue;
            }
            assert_eq!(eliminated.candidates(cell), recomputed.candidates(cell));
        }
    }

    #[test]
    fn empty_candidate_set_fails_the_branch() {
        // the last cell of the first row can hold nothing: 1 to 8 fill its
        // row, the 9 below it covers its column
        let mut line = String::from("12345678.........9");
        line.push_str(&".".repeat(63));
        let mut board = Board::new(parse(&line));

        assert!(board.candidates(Cell::new(8)).is_empty());
        assert!(!solve(&mut board));
    }

    #[test]
    fn solve_keeps_assignments_and_satisfies_constraints() {
        let sudoku = parse(
            "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
        );
        let mut board = Board::new(sudoku);
        assert!(solve(&mut board));
        assert!(board.grid().is_solved());
        for cell in Cell::all() {
            if let Some(digit) = sudoku.get(cell) {
                assert_eq!(board.grid().get(cell), Some(digit));
            }
        }
    }
}
