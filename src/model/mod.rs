//! In-memory formation grid.
//!
//! Owns the row/position layout, per-slot weight storage, and the running
//! per-row totals. Every mutation is validated here; the shell layers its
//! prompting policy on top but never bypasses these checks.

mod snapshot;
mod weight;

pub use snapshot::{FormationSnapshot, RowSnapshot};
pub use weight::Weight;

use crate::error::{FormationError, Result};

/// Most rows a formation may have.
pub const MAX_ROWS: usize = 10;

/// Most positions a single row may have.
pub const MAX_POSITIONS: usize = 8;

/// Lightest admissible musician, checked against the raw reading.
pub const MIN_WEIGHT: f64 = 45.0;

/// Heaviest admissible musician, checked against the raw reading.
pub const MAX_WEIGHT: f64 = 200.0;

/// Per-position share of a row's weight cap, in tenths. A row's total may
/// not exceed this times its position count (an average of 100.0).
pub const CAP_TENTHS_PER_POSITION: u32 = 1_000;

/// One position in a row: empty, or holding one musician's weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Vacant,
    Occupied(Weight),
}

impl Slot {
    pub fn is_vacant(self) -> bool {
        matches!(self, Slot::Vacant)
    }

    pub fn is_occupied(self) -> bool {
        !self.is_vacant()
    }

    /// The held weight, if any.
    pub fn weight(self) -> Option<Weight> {
        match self {
            Slot::Vacant => None,
            Slot::Occupied(w) => Some(w),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    slots: Vec<Slot>,
    // Running total of occupied weights, updated on every mutation rather
    // than recomputed. Integer tenths, so it tracks the slots exactly.
    total: Weight,
}

impl Row {
    fn new(positions: usize) -> Row {
        Row {
            slots: vec![Slot::Vacant; positions],
            total: Weight::ZERO,
        }
    }

    fn cap(&self) -> Weight {
        Weight::from_tenths(CAP_TENTHS_PER_POSITION * self.slots.len() as u32)
    }
}

/// The formation grid: up to [`MAX_ROWS`] rows, each with its own position
/// count. Constructed once at startup and mutated only through
/// [`add_musician`](Formation::add_musician) and
/// [`remove_musician`](Formation::remove_musician).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formation {
    rows: Vec<Row>,
}

impl Formation {
    /// Build a formation from per-row position counts. All slots start
    /// vacant and every row total starts at zero.
    pub fn new(position_counts: &[usize]) -> Result<Formation> {
        if position_counts.is_empty() || position_counts.len() > MAX_ROWS {
            return Err(FormationError::InvalidRowCount {
                rows: position_counts.len(),
                max: MAX_ROWS,
            });
        }
        for (row, &positions) in position_counts.iter().enumerate() {
            if positions == 0 || positions > MAX_POSITIONS {
                return Err(FormationError::InvalidPositionCount {
                    row,
                    positions,
                    max: MAX_POSITIONS,
                });
            }
        }
        Ok(Formation {
            rows: position_counts.iter().map(|&p| Row::new(p)).collect(),
        })
    }

    /// Number of rows in the formation.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of positions in the given row.
    pub fn positions_in(&self, row: usize) -> Result<usize> {
        Ok(self.row(row)?.slots.len())
    }

    /// State of a single slot.
    pub fn slot(&self, row: usize, position: usize) -> Result<Slot> {
        let (r, p) = self.check_bounds(row, position)?;
        Ok(self.rows[r].slots[p])
    }

    /// Running weight total for the given row.
    pub fn row_total(&self, row: usize) -> Result<Weight> {
        Ok(self.row(row)?.total)
    }

    /// Maximum total weight the given row may hold.
    pub fn row_cap(&self, row: usize) -> Result<Weight> {
        Ok(self.row(row)?.cap())
    }

    /// Seat a musician. The raw weight is range-checked, then truncated to
    /// one decimal place and checked against the row's cap; only a fully
    /// admissible weight mutates any state. Returns the stored weight.
    pub fn add_musician(&mut self, row: usize, position: usize, weight: f64) -> Result<Weight> {
        let (r, p) = self.check_bounds(row, position)?;
        if self.rows[r].slots[p].is_occupied() {
            return Err(FormationError::SlotOccupied { row: r, position: p });
        }
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(FormationError::WeightOutOfRange {
                weight,
                min: MIN_WEIGHT,
                max: MAX_WEIGHT,
            });
        }
        let stored = Weight::from_reading(weight);
        let projected = self.rows[r].total + stored;
        let cap = self.rows[r].cap();
        if projected > cap {
            return Err(FormationError::CapacityExceeded {
                row: r,
                weight: stored,
                projected,
                cap,
            });
        }
        self.rows[r].slots[p] = Slot::Occupied(stored);
        self.rows[r].total = projected;
        tracing::debug!(row = r, position = p, weight = %stored, "musician added");
        Ok(stored)
    }

    /// Vacate a slot, returning the weight that was stored there.
    pub fn remove_musician(&mut self, row: usize, position: usize) -> Result<Weight> {
        let (r, p) = self.check_bounds(row, position)?;
        let removed = match self.rows[r].slots[p] {
            Slot::Vacant => return Err(FormationError::SlotVacant { row: r, position: p }),
            Slot::Occupied(w) => w,
        };
        self.rows[r].slots[p] = Slot::Vacant;
        self.rows[r].total -= removed;
        tracing::debug!(row = r, position = p, weight = %removed, "musician removed");
        Ok(removed)
    }

    /// Read-only view of every row, for rendering.
    pub fn snapshot(&self) -> FormationSnapshot {
        FormationSnapshot::capture(self)
    }

    /// Display letter for a row index (`A` for row 0).
    pub fn row_label(row: usize) -> char {
        (b'A' + row as u8) as char
    }

    fn row(&self, row: usize) -> Result<&Row> {
        self.rows.get(row).ok_or(FormationError::RowOutOfRange {
            row,
            rows: self.rows.len(),
        })
    }

    fn check_bounds(&self, row: usize, position: usize) -> Result<(usize, usize)> {
        let positions = self.row(row)?.slots.len();
        if position >= positions {
            return Err(FormationError::PositionOutOfRange {
                row,
                position,
                positions,
            });
        }
        Ok((row, position))
    }
}
