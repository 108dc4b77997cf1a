//! Prompting over an injected reader/writer pair.
//!
//! Input is whitespace-token based: several answers may arrive on one line
//! and are consumed in order, so scripted (piped) sessions work the same as
//! attended ones. Range and format errors re-prompt the same field; running
//! out of input entirely is fatal and bubbles up to the caller.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use console::style;

use crate::model::{MAX_WEIGHT, MIN_WEIGHT};

/// Typed, validated reads over a reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Prompter<R, W> {
        Prompter {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Print a prompt and return the next whitespace-delimited token.
    pub fn next_token(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read input")?;
            if read == 0 {
                bail!("input stream exhausted");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Read an integer within `min..=max`, re-prompting until valid.
    pub fn read_count(&mut self, prompt: &str, min: usize, max: usize) -> Result<usize> {
        loop {
            let token = self.next_token(prompt)?;
            match token.parse::<usize>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                Ok(_) => self.error_line("Out of range, try again")?,
                Err(_) => self.error_line("Invalid input, try again")?,
            }
        }
    }

    /// Read a row letter, re-prompting until it names an existing row.
    /// Returns the 0-based row index.
    pub fn read_row(&mut self, rows: usize) -> Result<usize> {
        loop {
            let token = self.next_token("Please enter row letter: ")?;
            let Some(letter) = token.chars().next() else {
                continue;
            };
            let index = (letter.to_ascii_uppercase() as usize).wrapping_sub('A' as usize);
            if index < rows {
                return Ok(index);
            }
            self.error_line("Out of range, try again")?;
        }
    }

    /// Read a 1-based position number for a row with `positions` slots,
    /// re-prompting until in range. Returns the 0-based index.
    pub fn read_position(&mut self, positions: usize) -> Result<usize> {
        let prompt = format!("Please enter position number (1 to {positions}): ");
        Ok(self.read_count(&prompt, 1, positions)? - 1)
    }

    /// Read a raw weight, re-prompting while it is unparseable or outside
    /// the admissible range. The raw (untruncated) value is returned.
    pub fn read_weight(&mut self) -> Result<f64> {
        let prompt = format!("Please enter weight ({MIN_WEIGHT:.1} to {MAX_WEIGHT:.1}): ");
        loop {
            let token = self.next_token(&prompt)?;
            match token.parse::<f64>() {
                Ok(w) if (MIN_WEIGHT..=MAX_WEIGHT).contains(&w) => return Ok(w),
                Ok(_) => self.error_line("Out of range, try again")?,
                Err(_) => self.error_line("Invalid input, try again")?,
            }
        }
    }

    /// Write a line of output.
    pub fn line(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Write a success line with a green check mark.
    pub fn success_line(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{} {text}", style("✓").green())?;
        Ok(())
    }

    /// Write an error line with a red cross.
    pub fn error_line(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{} {text}", style("✗").red())?;
        Ok(())
    }
}
