use std::path::PathBuf;

use tracing::info;

use zl_core::{Generator, RngRoller};

use crate::config::{Destination, RunConfig};
use crate::error::CliError;
use crate::{loader, output};

/// Load tables, generate the batch and deliver it.
///
/// Returns the file written, or `None` when printing to stdout. Nothing is
/// written unless every character in the batch was generated.
pub fn run(config: &RunConfig) -> Result<Option<PathBuf>, CliError> {
    let tables = loader::load_tables(&config.tables)?;

    let mut roller = match config.seed {
        Some(seed) => RngRoller::from_seed(seed),
        None => RngRoller::from_entropy(),
    };
    info!(count = config.count, seed = ?config.seed, "generating batch");
    let sheets = Generator::new(&tables).generate_batch(config.count, &mut roller)?;

    let content = output::render(&sheets, config.format)?;
    match &config.destination {
        Destination::Stdout => {
            print!("{content}");
            Ok(None)
        }
        Destination::File(path) => output::write_unique(path, &content).map(Some),
    }
}
