use std::marker::PhantomData;

use crate::{Error, Sequence, Session, error::Result};

/// A sequence with no elements whose sessions fail on release.
///
/// Appended to the end of an otherwise successful chain, it defers a failure
/// until the caller releases.
pub struct Fail<T> {
    error: Error,
    _phantom: PhantomData<fn() -> T>,
}

/// Create a sequence that is immediately exhausted and reports `error` on release.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let seq = repeat(1, 2).concat(fail(Error::other("truncated")));
/// let err = to_vec(&seq).unwrap_err();
/// assert_eq!(err.to_string(), "truncated");
/// ```
pub fn fail<T>(error: Error) -> Fail<T> {
    Fail {
        error,
        _phantom: PhantomData,
    }
}

impl<T> Clone for Fail<T> {
    fn clone(&self) -> Self {
        fail(self.error.clone())
    }
}

impl<T> Sequence for Fail<T> {
    type Item = T;
    type Session = FailSession<T>;

    fn open(&self) -> Self::Session {
        FailSession {
            error: self.error.clone(),
            _phantom: PhantomData,
        }
    }
}

pub struct FailSession<T> {
    error: Error,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Session for FailSession<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        None
    }

    fn release(&mut self) -> Result<()> {
        Err(self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_is_empty_and_errors_every_release() {
        let mut session = fail::<i32>(Error::Empty).open();
        assert_eq!(session.pull(), None);
        assert!(session.release().unwrap_err().is_empty());
        assert!(session.release().unwrap_err().is_empty());
    }
}
