use crate::models::ProfileRecord;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the profile dataset
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset loader task failed: {0}")]
    Task(String),
}

/// Parse a header-first CSV profile table from any reader.
///
/// Column order is free, unknown columns are ignored and short rows are
/// padded with absent values.
pub fn read_dataset<R: Read>(reader: R) -> Result<Vec<ProfileRecord>, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(reader);

    let records = csv_reader
        .deserialize::<ProfileRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(records)
}

/// Load the full dataset from a file on disk.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<ProfileRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_dataset(BufReader::new(file))?;
    tracing::debug!("Loaded {} profile records from {}", records.len(), path.display());

    Ok(records)
}
