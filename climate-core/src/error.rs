use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the data access layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The measurement table holds no rows, so there is no latest date to
    /// anchor a rolling window on.
    #[error("measurement table is empty")]
    EmptyDataset,

    /// A date stored in the database does not match `YYYY-MM-DD`.
    #[error("malformed date '{0}' in measurement table")]
    MalformedDate(String),

    #[error("failed to open database '{path}'")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
