//! Random grid generation.
//!
//! Generation is done by randomized solving of the empty grid: the search
//! picks cells exactly like [`solve`](crate::solve) but tries the candidate
//! digits in shuffled order, so every run walks a different branch first.

use crate::board::{Cell, Digit, Sudoku};
use crate::solver::Board;
use rand::seq::SliceRandom;
use rand::Rng;

impl Sudoku {
    /// Generates a random, fully assigned sudoku grid.
    pub fn generate_filled() -> Sudoku {
        let mut board = Board::new(Sudoku([0; 81]));
        let filled = fill_randomized(&mut board, &mut rand::thread_rng());
        debug_assert!(filled, "an empty grid always completes");
        board.into_grid()
    }
}

fn fill_randomized<R: Rng>(board: &mut Board, rng: &mut R) -> bool {
    for bar in 1..=9 {
        for cell in Cell::all() {
            if board.grid().get(cell).is_some() {
                continue;
            }
            let candidates = board.candidates(cell);
            if candidates.len() > bar {
                continue;
            }
            let mut digits: Vec<Digit> = candidates.into_iter().collect();
            digits.shuffle(rng);
            for &digit in &digits {
                board.assign(cell, digit);
                board.eliminate_from_peers(cell, digit);
                if fill_randomized(board, rng) {
                    return true;
                }
                board.clear(cell);
                board.recompute_candidates();
            }
            return false;
        }
    }
    true
}
