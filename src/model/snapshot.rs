//! Read-only view of the formation for rendering.

use super::{Formation, Slot, Weight};

/// Point-in-time copy of every row's state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormationSnapshot {
    rows: Vec<RowSnapshot>,
}

/// One row as seen by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSnapshot {
    /// Display letter (`A` for the first row).
    pub label: char,
    /// Ordered slot states; vacancy is a distinct state, not a zero weight.
    pub slots: Vec<Slot>,
    /// Running total of occupied weights.
    pub total: Weight,
    /// Total divided by the row's position count. The denominator is the
    /// full position count, not the occupied count, to match the cap.
    pub average: f64,
}

impl FormationSnapshot {
    pub(super) fn capture(formation: &Formation) -> FormationSnapshot {
        let rows = formation
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let average = if row.slots.is_empty() {
                    0.0
                } else {
                    row.total.to_f64() / row.slots.len() as f64
                };
                RowSnapshot {
                    label: Formation::row_label(index),
                    slots: row.slots.clone(),
                    total: row.total,
                    average,
                }
            })
            .collect();
        FormationSnapshot { rows }
    }

    pub fn rows(&self) -> &[RowSnapshot] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_uses_total_position_count() {
        let mut formation = Formation::new(&[4]).unwrap();
        formation.add_musician(0, 0, 100.0).unwrap();
        formation.add_musician(0, 1, 100.0).unwrap();

        let snapshot = formation.snapshot();
        let row = &snapshot.rows()[0];
        // Two musicians totalling 200.0 across a four-position row: the
        // average divides by 4, not by the 2 occupied slots.
        assert_eq!(row.total, Weight::from_tenths(2_000));
        assert_eq!(row.average, 50.0);
    }

    #[test]
    fn test_snapshot_distinguishes_vacancy() {
        let mut formation = Formation::new(&[2]).unwrap();
        formation.add_musician(0, 1, 45.0).unwrap();

        let snapshot = formation.snapshot();
        let row = &snapshot.rows()[0];
        assert_eq!(row.label, 'A');
        assert_eq!(row.slots[0], Slot::Vacant);
        assert_eq!(row.slots[1], Slot::Occupied(Weight::from_tenths(450)));
    }
}
