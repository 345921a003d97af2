use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures surfaced by cloudphoto operations.
///
/// Storage errors are never retried; each command decides whether a
/// failure is fatal or a per-item warning.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file is missing, unreadable, or incomplete.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required argument is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// No matching albums, photos, or local directory.
    #[error("{0}")]
    NotFound(String),

    /// A transfer to the local filesystem failed.
    #[error("error downloading photo '{key}': {source}")]
    Download {
        key: String,
        #[source]
        source: BoxError,
    },

    /// Any other object-store request failure.
    #[error("object storage request failed: {source}")]
    Storage {
        #[source]
        source: BoxError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn storage(source: impl Into<BoxError>) -> Self {
        Self::Storage {
            source: source.into(),
        }
    }

    pub fn download(key: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Download {
            key: key.into(),
            source: source.into(),
        }
    }
}
