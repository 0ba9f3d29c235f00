//! Rendering and writing a finished batch.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use zl_core::{CharacterSheet, render_batch};

use crate::config::OutputFormat;
use crate::error::CliError;

/// Render sheets in the requested format.
pub fn render(sheets: &[CharacterSheet], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_batch(sheets)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(sheets)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// `report.txt` becomes `report_<n>.txt`.
fn numbered(path: &Path, n: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{n}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{n}"),
    };
    path.with_file_name(name)
}

/// Write `content` to `path`, or to the first free `<stem>_<n><ext>` if
/// `path` is taken. Missing parent directories are created. Returns the
/// path actually written.
pub fn write_unique(path: &Path, content: &str) -> Result<PathBuf, CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CliError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut candidate = path.to_path_buf();
    let mut counter = 0;
    loop {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(file) => {
                fill(file, &candidate, content)?;
                if counter > 0 {
                    warn!(
                        requested = %path.display(),
                        written = %candidate.display(),
                        "output file exists, wrote to a new name"
                    );
                }
                info!(path = %candidate.display(), bytes = content.len(), "wrote batch");
                return Ok(candidate);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                counter += 1;
                candidate = numbered(path, counter);
            }
            Err(source) => {
                return Err(CliError::Write {
                    path: candidate,
                    source,
                });
            }
        }
    }
}

/// Write all of `content` to `sink`, which was just created at `path`.
/// A partly written file is removed.
fn fill(mut sink: impl Write, path: &Path, content: &str) -> Result<(), CliError> {
    let written = sink.write_all(content.as_bytes());
    drop(sink);
    written.map_err(|source| {
        if let Err(e) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %e, "could not remove partial output");
        }
        CliError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}
