//! Remove command: vacate a slot.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::error::FormationError;
use crate::model::Formation;
use crate::shell::Prompter;

/// Prompt for a row and position, then vacate the slot. An already-vacant
/// slot abandons the remove; bad indices re-prompt.
pub fn execute_remove<R: BufRead, W: Write>(
    formation: &mut Formation,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let row = prompter.read_row(formation.row_count())?;
    let positions = formation.positions_in(row)?;
    let position = prompter.read_position(positions)?;

    match formation.remove_musician(row, position) {
        Ok(_) => prompter.success_line("Musician removed.")?,
        Err(FormationError::SlotVacant { .. }) => {
            prompter.error_line("That position is vacant")?
        }
        Err(err) => prompter.error_line(err)?,
    }
    Ok(())
}
