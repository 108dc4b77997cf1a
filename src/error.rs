//! Error types for formation operations.
//!
//! Every mutation failure is recoverable: the session reports it and keeps
//! running. The split between "retry the field" and "abandon the operation"
//! lives in the shell, not here.

use thiserror::Error;

use crate::model::Weight;

/// Errors produced by the formation model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FormationError {
    /// Formation constructed with a row count outside the allowed range.
    #[error("formation must have between 1 and {max} rows, got {rows}")]
    InvalidRowCount { rows: usize, max: usize },

    /// A row was given a position count outside the allowed range.
    #[error("row {row} must have between 1 and {max} positions, got {positions}")]
    InvalidPositionCount {
        row: usize,
        positions: usize,
        max: usize,
    },

    /// Row index past the end of the formation.
    #[error("row index {row} is out of range (formation has {rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    /// Position index past the end of its row.
    #[error("position {position} is out of range (row {row} has {positions} positions)")]
    PositionOutOfRange {
        row: usize,
        position: usize,
        positions: usize,
    },

    /// Target slot already holds a musician; no overwrite.
    #[error("there is already a musician at row {row}, position {position}")]
    SlotOccupied { row: usize, position: usize },

    /// Target slot is already vacant.
    #[error("row {row}, position {position} is already vacant")]
    SlotVacant { row: usize, position: usize },

    /// Weight outside the admissible range, checked on the raw value
    /// before truncation.
    #[error("weight {weight} is outside the allowed range of {min} to {max}")]
    WeightOutOfRange { weight: f64, min: f64, max: f64 },

    /// Admitting the weight would push the row past its average-weight cap.
    #[error("adding {weight} would raise row {row} to {projected} (cap is {cap})")]
    CapacityExceeded {
        row: usize,
        weight: Weight,
        projected: Weight,
        cap: Weight,
    },
}

impl FormationError {
    /// True for the index errors the shell retries in place.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            FormationError::RowOutOfRange { .. } | FormationError::PositionOutOfRange { .. }
        )
    }
}

/// Convenience result type for formation operations.
pub type Result<T> = std::result::Result<T, FormationError>;
