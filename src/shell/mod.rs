//! Interactive session loop.
//!
//! The session owns the formation and a [`Prompter`] over injected
//! reader/writer handles, and dispatches the four commands until the user
//! exits or the input stream runs dry.

pub mod prompt;
pub mod render;

pub use prompt::Prompter;

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::commands;
use crate::config::DisplayConfig;
use crate::model::Formation;

/// One of the four session commands, selected by the first character of an
/// input token, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Print,
    Exit,
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('A') => Ok(Command::Add),
            Some('R') => Ok(Command::Remove),
            Some('P') => Ok(Command::Print),
            Some('X') => Ok(Command::Exit),
            _ => Err(format!("invalid option: {s}")),
        }
    }
}

/// An interactive session over a formation.
pub struct Session<R, W> {
    formation: Formation,
    prompter: Prompter<R, W>,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(formation: Formation, prompter: Prompter<R, W>, display: DisplayConfig) -> Self {
        Session {
            formation,
            prompter,
            display,
        }
    }

    /// Run the command loop until exit. Errors only on I/O failure or an
    /// exhausted input stream; every model-level failure is reported and
    /// the loop keeps going.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let token = self
                .prompter
                .next_token("(A)dd, (R)emove, (P)rint, e(X)it: ")?;
            match token.parse::<Command>() {
                Ok(Command::Add) => {
                    commands::execute_add(&mut self.formation, &mut self.prompter)?
                }
                Ok(Command::Remove) => {
                    commands::execute_remove(&mut self.formation, &mut self.prompter)?
                }
                Ok(Command::Print) => {
                    commands::execute_print(&self.formation, &mut self.prompter, &self.display)?
                }
                Ok(Command::Exit) => {
                    self.prompter.line("Exit")?;
                    return Ok(());
                }
                Err(_) => self.prompter.error_line("Invalid option, try again")?,
            }
        }
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    /// Consume the session, releasing the formation (and the prompter's
    /// borrows) for inspection.
    pub fn into_formation(self) -> Formation {
        self.formation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parses_first_character() {
        assert_eq!("A".parse::<Command>(), Ok(Command::Add));
        assert_eq!("add".parse::<Command>(), Ok(Command::Add));
        assert_eq!("r".parse::<Command>(), Ok(Command::Remove));
        assert_eq!("Print".parse::<Command>(), Ok(Command::Print));
        assert_eq!("x".parse::<Command>(), Ok(Command::Exit));
        assert!("quit".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }
}
