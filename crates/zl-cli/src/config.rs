//! Run configuration assembled from the command line.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Default occupation table file name.
pub const DEFAULT_OCCUPATIONS: &str = "occupation csv.csv";
/// Default weapon table file name.
pub const DEFAULT_WEAPONS: &str = "Weapons_Table.csv";
/// Default birth augur table file name.
pub const DEFAULT_AUGURS: &str = "Birth_Augur_Table.csv";
/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "ICC_0-Level_sheet.txt";
/// Characters per batch when not specified.
pub const DEFAULT_COUNT: usize = 4;

/// How the batch is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The plain-text character sheet layout.
    #[default]
    Text,
    /// A pretty-printed JSON array of sheets.
    Json,
}

/// Where the rendered batch goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Print to standard output.
    Stdout,
    /// Write a new file; an existing one is never overwritten.
    File(PathBuf),
}

/// Locations of the three CSV tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePaths {
    pub occupations: PathBuf,
    pub weapons: PathBuf,
    pub augurs: PathBuf,
}

impl TablePaths {
    /// Resolve file names against a directory. Absolute names are kept.
    pub fn in_dir(dir: &Path, occupations: &Path, weapons: &Path, augurs: &Path) -> Self {
        Self {
            occupations: dir.join(occupations),
            weapons: dir.join(weapons),
            augurs: dir.join(augurs),
        }
    }
}

impl Default for TablePaths {
    fn default() -> Self {
        Self::in_dir(
            Path::new("."),
            Path::new(DEFAULT_OCCUPATIONS),
            Path::new(DEFAULT_WEAPONS),
            Path::new(DEFAULT_AUGURS),
        )
    }
}

/// Configuration for one batch.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Characters to generate (at least 1).
    pub count: usize,
    /// RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Input tables.
    pub tables: TablePaths,
    /// Output rendering.
    pub format: OutputFormat,
    /// Output target.
    pub destination: Destination,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: None,
            tables: TablePaths::default(),
            format: OutputFormat::Text,
            destination: Destination::File(PathBuf::from(DEFAULT_OUTPUT)),
        }
    }
}

impl RunConfig {
    /// Set the batch size (at least 1).
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count.max(1);
        self
    }

    /// Set or clear the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the table locations.
    pub fn with_tables(mut self, tables: TablePaths) -> Self {
        self.tables = tables;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output target.
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }
}
