//! Print command: render the current assignment.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::config::DisplayConfig;
use crate::model::Formation;
use crate::shell::render::render_snapshot;
use crate::shell::Prompter;

/// Render every row with its totals, framed by blank lines.
pub fn execute_print<R: BufRead, W: Write>(
    formation: &Formation,
    prompter: &mut Prompter<R, W>,
    display: &DisplayConfig,
) -> Result<()> {
    prompter.blank()?;
    let table = render_snapshot(&formation.snapshot(), display);
    for line in table.lines() {
        prompter.line(line)?;
    }
    prompter.blank()?;
    Ok(())
}
