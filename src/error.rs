use std::path::PathBuf;

/// Fatal failures while obtaining the log lines. Any of these aborts the run
/// before a single record is produced.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("File does not exist. Verify the error_log path you provided is correct")]
    NotFound { path: PathBuf },

    #[error("Unable to open the error_log file. Is the file readable by this user?")]
    Unreadable {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("We were unable to get the file data. Ensure the file has data, the path is correct, and the permissions are correct.")]
    Empty,
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
