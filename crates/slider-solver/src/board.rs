//! Immutable sliding-puzzle board and its derived heuristics.
//!
//! A `Board` is a snapshot: every transform (`twin`, `neighbors`) returns a
//! fresh board and leaves the original untouched. Heuristics are recomputed
//! on every call rather than cached.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Label of the blank cell
pub const BLANK: u32 = 0;

/// Neighbor list; a blank has at most four orthogonal moves
pub type Neighbors = SmallVec<[Board; 4]>;

/// Error returned when a grid of rows is not square
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// An N-by-N puzzle configuration, stored row-major.
///
/// The board does not check that its labels are a permutation of
/// `0..N*N`; a malformed grid simply produces consistent but meaningless
/// heuristics. See [`Board::is_permutation`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct Board {
    dim: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Build a board from owned rows.
    ///
    /// # Panics
    ///
    /// Panics if the grid is empty or not square. Use `Board::try_from` to
    /// get a `ShapeError` instead.
    pub fn new(rows: Vec<Vec<u32>>) -> Self {
        match Self::try_from(rows) {
            Ok(board) => board,
            Err(e) => panic!("invalid board shape: {e}"),
        }
    }

    /// Build a board by copying borrowed rows.
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        Self::new(rows.to_vec())
    }

    /// The solved board of dimension `dim`: 1..N*N-1 in row-major order,
    /// blank last.
    pub fn goal(dim: usize) -> Self {
        assert!(dim >= 1, "board dimension must be at least 1");
        let len = dim * dim;
        let cells = (1..len as u32).chain(std::iter::once(BLANK)).collect();
        Self { dim, cells }
    }

    fn from_cells(dim: usize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), dim * dim);
        Self { dim, cells }
    }

    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Label at (row, col), or `None` outside the grid
    pub fn tile(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.dim || col >= self.dim {
            return None;
        }
        Some(self.cells[row * self.dim + col])
    }

    /// Copy of the grid as rows
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.dim).map(|row| row.to_vec()).collect()
    }

    /// Row-major index of the first blank cell
    pub fn blank_index(&self) -> Option<usize> {
        self.cells.iter().position(|&v| v == BLANK)
    }

    /// Number of non-blank tiles not in their goal cell
    pub fn hamming(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(i, &v)| v != BLANK && v as usize != i + 1)
            .count()
    }

    /// Sum of the grid distances of every non-blank tile from its goal cell
    pub fn manhattan(&self) -> usize {
        let n = self.dim;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != BLANK)
            .map(|(i, &v)| {
                let (row, col) = (i / n, i % n);
                let target = v as usize - 1;
                row.abs_diff(target / n) + col.abs_diff(target % n)
            })
            .sum()
    }

    /// True when the blank sits in the last cell and every tile is home
    pub fn is_goal(&self) -> bool {
        self.cells.last() == Some(&BLANK) && self.manhattan() == 0
    }

    /// The board with the first pair of horizontally adjacent non-blank
    /// tiles swapped.
    ///
    /// Exactly one of a board and its twin can reach the goal, which is
    /// what the solver exploits to detect unsolvable inputs. For `N <= 1`
    /// there is nothing to swap and the twin equals the board.
    pub fn twin(&self) -> Board {
        let n = self.dim;
        for row in 0..n {
            for col in 1..n {
                let i = row * n + col;
                if self.cells[i] != BLANK && self.cells[i - 1] != BLANK {
                    return self.swapped(i, i - 1);
                }
            }
        }
        self.clone()
    }

    /// All boards reachable by sliding one tile into the blank.
    ///
    /// Order is blank-up, blank-down, blank-left, blank-right.
    pub fn neighbors(&self) -> Neighbors {
        let mut out = Neighbors::new();
        let Some(blank) = self.blank_index() else {
            return out;
        };
        let n = self.dim;
        let (row, col) = (blank / n, blank % n);

        if row > 0 {
            out.push(self.swapped(blank, blank - n));
        }
        if row + 1 < n {
            out.push(self.swapped(blank, blank + n));
        }
        if col > 0 {
            out.push(self.swapped(blank, blank - 1));
        }
        if col + 1 < n {
            out.push(self.swapped(blank, blank + 1));
        }
        out
    }

    /// Whether the labels are exactly `0..N*N`, each once
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.cells.len()];
        for &v in &self.cells {
            match seen.get_mut(v as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// Closed-form solvability from the inversion count.
    ///
    /// Odd N: solvable iff the inversion count is even. Even N: solvable iff
    /// inversions plus the blank's row (counted from the top) is odd.
    /// Only meaningful for permutation boards.
    pub fn is_solvable_by_parity(&self) -> bool {
        let inversions = self.count_inversions();
        if self.dim % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row = self.blank_index().map_or(0, |i| i / self.dim);
            (inversions + blank_row) % 2 == 1
        }
    }

    fn count_inversions(&self) -> usize {
        let tiles: Vec<u32> = self.cells.iter().copied().filter(|&v| v != BLANK).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &v)| tiles[i + 1..].iter().filter(|&&next| next < v).count())
            .sum()
    }

    fn swapped(&self, a: usize, b: usize) -> Board {
        let mut cells = self.cells.clone();
        cells.swap(a, b);
        Board::from_cells(self.dim, cells)
    }
}

impl TryFrom<Vec<Vec<u32>>> for Board {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        let dim = rows.len();
        if dim == 0 {
            return Err(ShapeError::Empty);
        }
        let mut cells = Vec::with_capacity(dim * dim);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != dim {
                return Err(ShapeError::Ragged {
                    row,
                    len: values.len(),
                    expected: dim,
                });
            }
            cells.extend(values);
        }
        Ok(Self::from_cells(dim, cells))
    }
}

impl From<Board> for Vec<Vec<u32>> {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let largest = (self.cells.len() as u32).saturating_sub(1);
        let width = largest.to_string().len().max(2);
        writeln!(f, "{}", self.dim)?;
        for row in self.cells.chunks(self.dim) {
            for &val in row {
                write!(f, "{:>width$} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u32]]) -> Board {
        Board::new(rows.iter().map(|r| r.to_vec()).collect())
    }

    /// Count cells where two boards differ
    fn diff_cells(a: &Board, b: &Board) -> Vec<usize> {
        (0..a.cells.len()).filter(|&i| a.cells[i] != b.cells[i]).collect()
    }

    #[test]
    fn test_goal_board() {
        let goal = Board::goal(3);
        assert_eq!(goal, board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]));
        assert!(goal.is_goal());
        assert_eq!(goal.hamming(), 0);
        assert_eq!(goal.manhattan(), 0);
        assert!(Board::goal(1).is_goal());
    }

    #[test]
    fn test_hamming_and_manhattan() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        assert_eq!(b.hamming(), 5);
        assert_eq!(b.manhattan(), 10);
        assert!(!b.is_goal());
    }

    #[test]
    fn test_hamming_ignores_blank_position() {
        // Only the blank and 8 are displaced: 8 counts, the blank does not
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]);
        assert_eq!(b.hamming(), 1);
        assert_eq!(b.manhattan(), 1);
    }

    #[test]
    fn test_is_goal_matches_zero_manhattan() {
        for b in [
            Board::goal(4),
            board(&[&[1, 2], &[0, 3]]),
            board(&[&[0, 1], &[2, 3]]),
            board(&[&[2, 1], &[3, 0]]),
        ] {
            assert_eq!(b.is_goal(), b.manhattan() == 0, "{b}");
        }
    }

    #[test]
    fn test_construction_owns_its_copy() {
        let mut rows = vec![vec![1, 2], vec![3, 0]];
        let b = Board::from_rows(&rows);
        rows[0][0] = 3;
        rows[1][0] = 1;
        assert!(b.is_goal());
        assert_eq!(b.tile(0, 0), Some(1));
    }

    #[test]
    fn test_neighbor_counts() {
        // Corner, edge, interior
        let corner = board(&[&[0, 1, 2], &[3, 4, 5], &[6, 7, 8]]);
        let edge = board(&[&[1, 0, 2], &[3, 4, 5], &[6, 7, 8]]);
        let interior = board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        assert_eq!(corner.neighbors().len(), 2);
        assert_eq!(edge.neighbors().len(), 3);
        assert_eq!(interior.neighbors().len(), 4);
    }

    #[test]
    fn test_neighbors_differ_by_one_blank_swap() {
        let b = board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        let blank = b.blank_index().unwrap();
        for next in b.neighbors() {
            let changed = diff_cells(&b, &next);
            assert_eq!(changed.len(), 2);
            assert!(changed.contains(&blank));
            let moved_to = next.blank_index().unwrap();
            let (r1, c1) = (blank / 3, blank % 3);
            let (r2, c2) = (moved_to / 3, moved_to % 3);
            assert_eq!(r1.abs_diff(r2) + c1.abs_diff(c2), 1);
        }
        // Source board is unchanged
        assert_eq!(b, board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]));
    }

    #[test]
    fn test_twin_swaps_first_adjacent_pair() {
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]);
        assert_eq!(b.twin(), board(&[&[2, 1, 3], &[4, 5, 6], &[7, 8, 0]]));

        // Blank splits the first row, so the swap falls to the second row
        let b = board(&[&[1, 0, 3], &[4, 2, 5], &[7, 8, 6]]);
        assert_eq!(b.twin(), board(&[&[1, 0, 3], &[2, 4, 5], &[7, 8, 6]]));

        // Blank at the start of the row still leaves a pair in that row
        let b = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        assert_eq!(b.twin(), board(&[&[0, 3, 1], &[4, 2, 5], &[7, 8, 6]]));
    }

    #[test]
    fn test_twin_of_single_cell_is_identity() {
        let b = Board::goal(1);
        assert_eq!(b.twin(), b);
    }

    #[test]
    fn test_twin_flips_parity() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        assert_ne!(b.is_solvable_by_parity(), b.twin().is_solvable_by_parity());
        let b = Board::goal(4);
        assert!(b.is_solvable_by_parity());
        assert!(!b.twin().is_solvable_by_parity());
    }

    #[test]
    fn test_is_permutation() {
        assert!(Board::goal(3).is_permutation());
        assert!(!board(&[&[1, 1], &[3, 0]]).is_permutation());
        assert!(!board(&[&[1, 2], &[4, 0]]).is_permutation());
    }

    #[test]
    fn test_try_from_rejects_bad_shapes() {
        assert_eq!(Board::try_from(Vec::new()), Err(ShapeError::Empty));
        assert_eq!(
            Board::try_from(vec![vec![1, 2], vec![0]]),
            Err(ShapeError::Ragged {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_display_format() {
        let b = board(&[&[1, 2], &[3, 0]]);
        assert_eq!(b.to_string(), "2\n 1  2 \n 3  0 \n");

        let wide = Board::goal(4).to_string();
        assert!(wide.starts_with("4\n 1  2  3  4 \n"));
        assert!(wide.ends_with("13 14 15  0 \n"));
    }

    #[test]
    fn test_serde_rows() {
        let b = board(&[&[1, 2], &[3, 0]]);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "[[1,2],[3,0]]");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
        assert!(serde_json::from_str::<Board>("[[1,2],[3]]").is_err());
    }
}
