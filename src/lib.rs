#![forbid(unsafe_code)]

//! # bandhour
//!
//! Row-and-position seating tracker for a marching band, with per-row
//! average-weight limits enforced on every mutation.
//!
//! The library half is the formation model plus the session plumbing the
//! `bandhour` binary wires to stdin/stdout. Input and output are injected,
//! so a whole session can be driven from byte buffers:
//!
//! ```rust
//! use bandhour::{config::DisplayConfig, Formation, Prompter, Session};
//!
//! # fn main() -> anyhow::Result<()> {
//! let formation = Formation::new(&[4, 5])?;
//! let script = b"A B 1 98.6 P X\n";
//! let mut out = Vec::new();
//! let prompter = Prompter::new(&script[..], &mut out);
//!
//! let mut session = Session::new(formation, prompter, DisplayConfig::default());
//! session.run()?;
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod shell;

// Re-exports
pub use config::Config;
pub use error::{FormationError, Result};
pub use model::{
    Formation, FormationSnapshot, RowSnapshot, Slot, Weight, MAX_POSITIONS, MAX_ROWS, MAX_WEIGHT,
    MIN_WEIGHT,
};
pub use shell::{Command, Prompter, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
