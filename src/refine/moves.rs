//! Single-step boundary moves.

use super::objective::{col_pair_max, corner_max, row_pair_max};
use crate::grid::LoadGrid;
use crate::partition::Partition;
use crate::statistic::BlockStatistic;

/// A unit shift of one or two boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Shift the row boundary by the given step.
    Row(isize),
    /// Shift the column boundary by the given step.
    Col(isize),
    /// Shift the row and the column boundary together.
    Diagonal(isize, isize),
}

/// Order in which moves are tried at each visit. The first improving
/// move wins and the rest are skipped.
pub const MOVE_ORDER: [Move; 8] = [
    Move::Row(1),
    Move::Row(-1),
    Move::Col(1),
    Move::Col(-1),
    Move::Diagonal(-1, -1),
    Move::Diagonal(-1, 1),
    Move::Diagonal(1, -1),
    Move::Diagonal(1, 1),
];

/// A move that was applied because it lowered its local objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedMove {
    /// The move that was kept.
    pub mv: Move,
    /// Local objective before the move.
    pub before: u64,
    /// Local objective after the move (`after < before`).
    pub after: u64,
}

impl Move {
    /// Binds the move to the boundaries of the visit site, or `None` when
    /// the site has no boundary on an axis the move shifts.
    fn at(self, row: Option<usize>, col: Option<usize>) -> Option<Target> {
        match (self, row, col) {
            (Move::Row(d), Some(i), _) => Some(Target::Row { i, d }),
            (Move::Col(d), _, Some(j)) => Some(Target::Col { j, d }),
            (Move::Diagonal(dr, dc), Some(i), Some(j)) => Some(Target::Corner { i, j, dr, dc }),
            _ => None,
        }
    }
}

/// A move resolved against concrete boundary indices.
#[derive(Debug, Clone, Copy)]
enum Target {
    Row { i: usize, d: isize },
    Col { j: usize, d: isize },
    Corner { i: usize, j: usize, dr: isize, dc: isize },
}

impl Target {
    /// Whether every touched boundary stays in range after the shift.
    fn is_feasible(self, partition: &Partition, grid: &LoadGrid) -> bool {
        let row_ok = |i, d| Partition::can_shift(&partition.row_boundaries, i, d, grid.rows());
        let col_ok = |j, d| Partition::can_shift(&partition.col_boundaries, j, d, grid.cols());
        match self {
            Target::Row { i, d } => row_ok(i, d),
            Target::Col { j, d } => col_ok(j, d),
            Target::Corner { i, j, dr, dc } => row_ok(i, dr) && col_ok(j, dc),
        }
    }

    /// Shifts the touched boundaries by `sign` times the move's steps.
    fn shift(self, partition: &mut Partition, sign: isize) {
        let (row, col) = match self {
            Target::Row { i, d } => (Some((i, d)), None),
            Target::Col { j, d } => (None, Some((j, d))),
            Target::Corner { i, j, dr, dc } => (Some((i, dr)), Some((j, dc))),
        };
        if let Some((i, d)) = row {
            partition.row_boundaries[i] = partition.row_boundaries[i].wrapping_add_signed(sign * d);
        }
        if let Some((j, d)) = col {
            partition.col_boundaries[j] = partition.col_boundaries[j].wrapping_add_signed(sign * d);
        }
    }

    /// The local objective this move is judged by.
    fn objective<S: BlockStatistic>(self, statistic: &S, partition: &Partition) -> u64 {
        match self {
            Target::Row { i, .. } => row_pair_max(statistic, partition, i),
            Target::Col { j, .. } => col_pair_max(statistic, partition, j),
            Target::Corner { i, j, .. } => corner_max(statistic, partition, i, j),
        }
    }
}

/// Tries one move at the visit site `(row, col)`.
///
/// Infeasible moves are rejected without evaluation. A feasible move is
/// applied, its local objective recomputed against the shifted
/// boundaries, and kept only on a strict decrease; otherwise every
/// touched boundary is restored.
pub fn try_move<S: BlockStatistic>(
    statistic: &S,
    partition: &mut Partition,
    mv: Move,
    row: Option<usize>,
    col: Option<usize>,
) -> Option<AcceptedMove> {
    let target = mv.at(row, col)?;
    if !target.is_feasible(partition, statistic.grid()) {
        return None;
    }

    let before = target.objective(statistic, partition);
    target.shift(partition, 1);
    let after = target.objective(statistic, partition);
    if after < before {
        return Some(AcceptedMove { mv, before, after });
    }
    target.shift(partition, -1);
    None
}

/// Visits one site: tries [`MOVE_ORDER`] and keeps the first improving
/// move.
///
/// `row` / `col` name the row and column boundary at this site. Either
/// may be `None` when that axis has no boundaries, in which case only
/// moves along the other axis are tried.
pub fn visit<S: BlockStatistic>(
    statistic: &S,
    partition: &mut Partition,
    row: Option<usize>,
    col: Option<usize>,
) -> Option<AcceptedMove> {
    MOVE_ORDER
        .iter()
        .find_map(|&mv| try_move(statistic, partition, mv, row, col))
}
