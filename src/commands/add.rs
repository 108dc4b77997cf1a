//! Add command: seat a musician.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::error::FormationError;
use crate::model::Formation;
use crate::shell::Prompter;

/// Prompt for a row, position, and weight, then seat the musician.
///
/// Field-level problems (bad letter, out-of-range position or weight,
/// unparseable numbers) re-prompt the same field. Rule violations, meaning
/// an occupied slot or a blown weight cap, abandon the whole add instead
/// of re-prompting.
pub fn execute_add<R: BufRead, W: Write>(
    formation: &mut Formation,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let row = prompter.read_row(formation.row_count())?;
    let positions = formation.positions_in(row)?;
    let position = prompter.read_position(positions)?;

    // Checked before asking for a weight, matching the prompt order: an
    // occupied slot cancels the add without a pointless weight prompt.
    if formation.slot(row, position)?.is_occupied() {
        prompter.error_line("There is already a musician there")?;
        return Ok(());
    }

    let weight = prompter.read_weight()?;
    match formation.add_musician(row, position, weight) {
        Ok(_) => prompter.success_line("Musician added.")?,
        Err(FormationError::CapacityExceeded { .. }) => {
            prompter.error_line("That would exceed the average weight limit")?
        }
        Err(err) => prompter.error_line(err)?,
    }
    Ok(())
}
