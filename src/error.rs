use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for all analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that abort an analysis run.
///
/// Both variants are unrecoverable at the point of detection: downstream
/// aggregation assumes a complete, consistent dataset, so no partial dataset
/// is ever returned.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// An experiment identifier without the expected delimiter structure.
    /// This must be fixed at the source data.
    #[error("malformed experiment identifier: {experiment:?}")]
    MalformedIdentifier { experiment: String },

    /// A benchmark file that is missing, unreadable, or not parseable as csv.
    #[error("can't read benchmark file {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
