// crates/restatlas-core/src/error.rs

use thiserror::Error;

/// Errors produced while loading the country directory.
///
/// A failed fetch is terminal for the session: the caller surfaces the
/// message once (via [`crate::FetchStatus`]) and keeps working with an
/// empty collection. There are no retries.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// The provider answered with a non-2xx status.
    #[error("country provider returned HTTP status {0}")]
    Http(u16),

    /// The request never produced a usable response.
    #[cfg(feature = "fetch")]
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The payload was not a valid country array.
    #[error("invalid country payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A local snapshot file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = AtlasError> = std::result::Result<T, E>;
