//! Formation setup at session start.
//!
//! Layout sources, in precedence order: CLI flags, config-file defaults,
//! interactive prompts. Prompting goes through dialoguer when a user is
//! attended and through the session's own reader otherwise, so piped input
//! can drive setup the same way it drives the command loop.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use console::user_attended;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::config::Config;
use crate::model::{Formation, MAX_POSITIONS, MAX_ROWS};
use crate::shell::Prompter;

/// Layout options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    /// Row count; positions are still prompted per row.
    pub rows: Option<usize>,
    /// Full per-row position counts; skips prompting entirely.
    pub positions: Option<Vec<usize>>,
}

/// Build the starting formation from flags, config defaults, or prompts.
pub fn build_formation<R: BufRead, W: Write>(
    options: SetupOptions,
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<Formation> {
    if let Some(positions) = options.positions {
        if let Some(rows) = options.rows {
            if rows != positions.len() {
                bail!(
                    "--rows {} does not match the {} row(s) given by --positions",
                    rows,
                    positions.len()
                );
            }
        }
        return Formation::new(&positions).context("invalid --positions layout");
    }

    if options.rows.is_none() && !config.formation.positions.is_empty() {
        match Formation::new(&config.formation.positions) {
            Ok(formation) => return Ok(formation),
            Err(err) => {
                tracing::warn!("ignoring invalid formation defaults in config: {err}");
            }
        }
    }

    let counts = if user_attended() {
        prompt_layout_attended(options.rows)?
    } else {
        prompt_layout(options.rows, prompter)?
    };
    Formation::new(&counts).context("prompted layout failed validation")
}

/// Gather the layout through dialoguer prompts.
fn prompt_layout_attended(rows: Option<usize>) -> Result<Vec<usize>> {
    let rows = match rows {
        Some(n) => n,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Number of rows (1 to {MAX_ROWS})"))
            .validate_with(|n: &usize| {
                if (1..=MAX_ROWS).contains(n) {
                    Ok(())
                } else {
                    Err(format!("must be between 1 and {MAX_ROWS}"))
                }
            })
            .interact_text()?,
    };
    if !(1..=MAX_ROWS).contains(&rows) {
        bail!("--rows must be between 1 and {MAX_ROWS}, got {rows}");
    }

    let mut counts = Vec::with_capacity(rows);
    for row in 0..rows {
        let positions: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Positions in row {} (1 to {MAX_POSITIONS})",
                Formation::row_label(row)
            ))
            .validate_with(|n: &usize| {
                if (1..=MAX_POSITIONS).contains(n) {
                    Ok(())
                } else {
                    Err(format!("must be between 1 and {MAX_POSITIONS}"))
                }
            })
            .interact_text()?;
        counts.push(positions);
    }
    Ok(counts)
}

/// Gather the layout through the injected reader, for piped sessions.
fn prompt_layout<R: BufRead, W: Write>(
    rows: Option<usize>,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<usize>> {
    let rows = match rows {
        Some(n) if (1..=MAX_ROWS).contains(&n) => n,
        Some(n) => bail!("--rows must be between 1 and {MAX_ROWS}, got {n}"),
        None => prompter.read_count("Please enter number of rows: ", 1, MAX_ROWS)?,
    };

    let mut counts = Vec::with_capacity(rows);
    for row in 0..rows {
        let prompt = format!(
            "Please enter number of positions in row {}: ",
            Formation::row_label(row)
        );
        counts.push(prompter.read_count(&prompt, 1, MAX_POSITIONS)?);
    }
    Ok(counts)
}
