//! Failure taxonomy for a generation run.
//!
//! Every failure is fatal: either the whole output file is written or
//! nothing is.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {message}")]
    ParseJson { path: PathBuf, message: String },

    #[error("failed to write output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Deserialize with JSON-path context in the error message.
pub fn parse_json_with_path<T: DeserializeOwned>(
    path: &Path,
    src: &str,
) -> Result<T, GenerateError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| {
        let json_path = err.path().to_string();
        GenerateError::ParseJson {
            path: path.to_path_buf(),
            message: format!("at JSON path {json_path} → {}", err.into_inner()),
        }
    })
}
