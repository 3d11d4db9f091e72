//! Minimum-cost assignment over a square matrix of pairing costs and bye
//! slots.
//!
//! One exact solver (Kuhn-Munkres) covers every roster size; there is no
//! small-matrix permutation path and no greedy fallback.

use ordered_float::OrderedFloat;
use pathfinding::kuhn_munkres::kuhn_munkres_min;
use pathfinding::matrix::Matrix;

use crate::cost::Cost;

/// What a row was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Matched with the anchor-group member at this column index.
    Paired(usize),
    /// Landed on a bye slot.
    Bye,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub row: usize,
    pub slot: Slot,
    pub cost: Cost,
}

/// A `size x size` cost matrix whose first `real_columns` columns are
/// pairings against the anchor group and whose remaining columns are bye
/// slots for the row attendee.
pub struct AssignmentProblem {
    matrix: Matrix<OrderedFloat<Cost>>,
    real_columns: usize,
}

impl AssignmentProblem {
    /// `size` rows, `real_columns <= size` pairing columns; the rest are
    /// bye slots priced per row.
    pub fn build(
        size: usize,
        real_columns: usize,
        mut pair_cost: impl FnMut(usize, usize) -> Cost,
        mut bye_cost: impl FnMut(usize) -> Cost,
    ) -> AssignmentProblem {
        debug_assert!(real_columns <= size);
        let matrix = Matrix::from_fn(size, size, |(row, col)| {
            if col < real_columns {
                OrderedFloat(pair_cost(row, col))
            } else {
                OrderedFloat(bye_cost(row))
            }
        });
        AssignmentProblem {
            matrix,
            real_columns,
        }
    }

    /// Solves the assignment and reports one slot per row, in row order.
    /// Deterministic for identical inputs.
    pub fn solve(&self) -> Vec<Assignment> {
        if self.matrix.rows == 0 {
            return Vec::new();
        }
        let (_, columns) = kuhn_munkres_min(&self.matrix);
        columns
            .into_iter()
            .enumerate()
            .map(|(row, col)| Assignment {
                row,
                slot: if col < self.real_columns {
                    Slot::Paired(col)
                } else {
                    Slot::Bye
                },
                cost: self.matrix[(row, col)].into_inner(),
            })
            .collect()
    }
}
