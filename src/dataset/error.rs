use std::path::PathBuf;
use thiserror::Error;

/// Errors reading or writing annotated datasets.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be read or written.
    #[error("failed to access dataset '{path}': {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A row did not match the expected column layout.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        reason: String,
    },

    /// The prediction list does not line up with the annotations.
    #[error("{annotations} annotations but {predictions} predictions")]
    LengthMismatch {
        /// Number of annotations.
        annotations: usize,
        /// Number of predictions.
        predictions: usize,
    },
}
