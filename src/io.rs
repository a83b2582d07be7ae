//! File helpers for converting Markdown documents.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::process::convert_str;

/// Errors raised while converting files.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convert the Markdown file at `input` and write HTML to `output`.
///
/// The output file is created or truncated only after the input has been read,
/// so a missing or unreadable input leaves `output` untouched.
///
/// # Errors
/// Returns [`ConvertError::MissingInput`] when `input` does not exist, and a
/// read or write error when file access fails.
pub fn convert_file(input: &Path, output: &Path) -> Result<(), ConvertError> {
    if !input.exists() {
        return Err(ConvertError::MissingInput(input.to_path_buf()));
    }
    let text = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(input = %input.display(), bytes = text.len(), "read markdown");

    let html = convert_str(&text);
    write_html(output, &html).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(output = %output.display(), bytes = html.len(), "wrote html");
    Ok(())
}

fn write_html(path: &Path, html: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(html.as_bytes())?;
    writer.flush()
}
