//! Big Road layout.
//!
//! The grid is always recomputed from the full history; nothing is cached
//! between calls.

use crate::{HandResult, RoadConfig, Side};
use serde::{Deserialize, Serialize};

/// One decisive hand on the road, carrying the ties dealt just before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bead {
    pub winner: Side,
    pub tie_count: u32,
}

/// Folds ties into the bead that follows them. Returns the beads and the
/// count of ties left over at the end of the history.
pub fn beads(history: &[HandResult]) -> (Vec<Bead>, u32) {
    let mut out = Vec::new();
    let mut ties = 0u32;
    for hand in history {
        match hand.winner.side() {
            Some(winner) => {
                out.push(Bead {
                    winner,
                    tie_count: ties,
                });
                ties = 0;
            }
            None => ties += 1,
        }
    }
    (out, ties)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Bead>>,
    /// Ties at the end of the history with no decisive hand after them.
    /// They are not drawn on the grid.
    pub trailing_ties: u32,
    /// Beads that did not fit once the grid saturated.
    pub dropped: usize,
}

impl RoadGrid {
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            trailing_ties: 0,
            dropped: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Bead> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col].as_ref()
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    fn place(&mut self, row: usize, col: usize, bead: Bead) {
        let slot = &mut self.cells[row * self.cols + col];
        debug_assert!(slot.is_none(), "road cell ({row}, {col}) overwritten");
        *slot = Some(bead);
    }

    pub fn bead_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// One past the right-most column holding a bead.
    pub fn occupied_columns(&self) -> usize {
        (0..self.cols)
            .rev()
            .find(|col| (0..self.rows).any(|row| self.is_occupied(row, *col)))
            .map(|col| col + 1)
            .unwrap_or(0)
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<&Bead>> + '_ {
        (0..self.cols).map(move |col| self.get(row, col))
    }
}

/// Lays `history` out on a `config.rows` x `config.cols` Big Road.
///
/// A repeat winner goes below the last bead, or to its right when the column
/// is full or the cell below is taken. A change of winner goes to row 0 of
/// the left-most column whose top cell is still free. Beads that fall off
/// the right edge are dropped and leave the cursor where it was.
pub fn compute_grid(history: &[HandResult], config: &RoadConfig) -> RoadGrid {
    let mut grid = RoadGrid::empty(config.rows, config.cols);
    let (beads, trailing_ties) = beads(history);
    grid.trailing_ties = trailing_ties;
    if grid.rows == 0 || grid.cols == 0 {
        grid.dropped = beads.len();
        return grid;
    }

    let mut iter = beads.into_iter();
    let Some(first) = iter.next() else {
        return grid;
    };
    grid.place(0, 0, first);
    let (mut last_row, mut last_col) = (0usize, 0usize);
    let mut prev = first.winner;

    for bead in iter {
        let target = if bead.winner == prev {
            let below = last_row + 1;
            if below < grid.rows && !grid.is_occupied(below, last_col) {
                Some((below, last_col))
            } else {
                Some((last_row, last_col + 1)).filter(|(_, col)| *col < grid.cols)
            }
        } else {
            (0..grid.cols)
                .find(|col| !grid.is_occupied(0, *col))
                .map(|col| (0, col))
        };

        // The winner still changes even when the bead is dropped.
        prev = bead.winner;
        match target {
            Some((row, col)) if !grid.is_occupied(row, col) => {
                grid.place(row, col, bead);
                last_row = row;
                last_col = col;
            }
            _ => grid.dropped += 1,
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_gives_empty_grid() {
        let grid = compute_grid(&[], &RoadConfig::default());
        assert_eq!(grid.bead_count(), 0);
        assert_eq!(grid.occupied_columns(), 0);
        assert!(grid.get(0, 0).is_none());
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let grid = RoadGrid::empty(6, 60);
        assert!(grid.get(6, 0).is_none());
        assert!(grid.get(0, 60).is_none());
    }
}
