use thiserror::Error;

/// Failures surfaced by the song repository.
///
/// The HTTP layer maps `NotFound` to 404 and everything else to a
/// generic internal failure.
#[derive(Debug, Error)]
pub enum SongError {
    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error("{0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl SongError {
    /// Short outcome label used for operation metrics
    pub fn outcome(&self) -> &'static str {
        match self {
            SongError::Invariant(_) => "invariant",
            SongError::NotFound(_) => "not_found",
            SongError::Database(_) => "error",
        }
    }
}
