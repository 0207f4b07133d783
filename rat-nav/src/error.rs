use snafu::prelude::*;

use crate::key::DestinationKey;

/// Failures reported by [`NavRouter`](crate::NavRouter).
///
/// Both variants are configuration mistakes, not transient conditions.
/// Retrying the same call yields the same error.
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("destination already registered: {key}"))]
    DuplicateKey { key: DestinationKey },

    #[snafu(display("no destination registered for key: {key}"))]
    KeyNotFound { key: String },
}

impl Error {
    /// The key the failed operation was called with.
    pub fn key(&self) -> &str {
        match self {
            Error::DuplicateKey { key } => key.as_str(),
            Error::KeyNotFound { key } => key.as_str(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
