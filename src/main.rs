#![forbid(unsafe_code)]
//! bandhour command line interface

use std::io;
use std::path::PathBuf;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use bandhour::commands::{build_formation, SetupOptions};
use bandhour::{Config, Prompter, Session};

#[derive(Parser)]
#[command(name = "bandhour")]
#[command(about = "Row-and-position seating tracker with per-row weight limits")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "bandhour.config.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Per-row position counts, comma separated (skips interactive setup)
    #[arg(long, value_delimiter = ',')]
    positions: Option<Vec<usize>>,

    /// Number of rows; positions are prompted for each row
    #[arg(long)]
    rows: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::discover()
    };

    println!("{}", style("Welcome to the Band of the Hour").bold());
    println!("--------------------------------");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let options = SetupOptions {
        rows: cli.rows,
        positions: cli.positions,
    };
    let formation = build_formation(options, &config, &mut prompter)?;

    let mut session = Session::new(formation, prompter, config.display);
    session.run()
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "bandhour=debug" } else { "bandhour=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
