//! Errors surfaced by terminals and by session release.

use std::sync::Arc;

/// Failure reported by a terminal operator or by [`Session::release`](crate::Session::release).
///
/// `Error` is cheap to clone so a [`fail`](crate::build::fail) source can hand the
/// same failure to every session it opens.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The terminal needs at least one element and the sequence had none.
    #[error("contains no elements")]
    Empty,
    /// `element_at` (or a container accessor) was asked for a missing position.
    #[error("index {index} out of range")]
    OutOfRange { index: usize },
    /// A failure raised while releasing a session.
    #[error(transparent)]
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an arbitrary error (or message) as a release failure.
    ///
    /// ```rust
    /// use pullseq::Error;
    ///
    /// let err = Error::other("disk went away");
    /// assert_eq!(err.to_string(), "disk went away");
    /// ```
    pub fn other<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Other(Arc::from(error.into()))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Error::Empty)
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Keep the first failure, logging the one that loses.
pub(crate) fn first_error(first: Result<()>, second: Result<()>) -> Result<()> {
    match (first, second) {
        (Err(e), Err(discarded)) => {
            tracing::debug!(error = %discarded, "discarding secondary release error");
            Err(e)
        }
        (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
        (Ok(()), Ok(())) => Ok(()),
    }
}
