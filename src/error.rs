use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LunchError {
    #[error("The restaurant table is empty")]
    EmptyTable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Cannot parse store file {path}: {source}")]
    MalformedStore { path: PathBuf, source: csv::Error },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, LunchError>;
