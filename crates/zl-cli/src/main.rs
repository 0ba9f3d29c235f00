//! Batch generator for 0-level character sheets.

mod config;
mod error;
mod generate;
mod loader;
mod output;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::{
    DEFAULT_AUGURS, DEFAULT_COUNT, DEFAULT_OCCUPATIONS, DEFAULT_OUTPUT, DEFAULT_WEAPONS,
    Destination, OutputFormat, RunConfig, TablePaths,
};

#[derive(Parser)]
#[command(
    name = "zlgen",
    about = "Generate a batch of 0-level characters from occupation, weapon and birth augur tables",
    version
)]
struct Cli {
    /// Number of characters to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Directory containing the CSV tables
    #[arg(short, long, default_value = ".")]
    tables: PathBuf,

    /// Occupation table, relative to the tables directory
    #[arg(long, default_value = DEFAULT_OCCUPATIONS)]
    occupations: PathBuf,

    /// Weapon table, relative to the tables directory
    #[arg(long, default_value = DEFAULT_WEAPONS)]
    weapons: PathBuf,

    /// Birth augur table, relative to the tables directory
    #[arg(long, default_value = DEFAULT_AUGURS)]
    augurs: PathBuf,

    /// Output file; an existing file is never overwritten
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// RNG seed for a reproducible batch
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// More log output on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        let tables = TablePaths::in_dir(&self.tables, &self.occupations, &self.weapons, &self.augurs);
        let destination = if self.stdout {
            Destination::Stdout
        } else {
            Destination::File(self.output)
        };
        RunConfig::default()
            .with_count(self.count)
            .with_seed(self.seed)
            .with_tables(tables)
            .with_format(self.format)
            .with_destination(destination)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match generate::run(&cli.into_config()) {
        Ok(Some(path)) => println!("File generated at {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
