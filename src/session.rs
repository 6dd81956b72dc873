//! The pull/release protocol.
//!
//! A [`Session`] is a single-use cursor: callers [`pull`](Session::pull) values
//! until it reports `None`, then [`release`](Session::release) it. Release is
//! where deferred failures surface, so a session that yielded every value it
//! had can still fail.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let data = [1, 2, 3];
//! let mut session = from_slice(&data).open();
//! assert_eq!(session.pull(), Some(1));
//! assert_eq!(session.pull(), Some(2));
//! assert_eq!(session.pull(), Some(3));
//! assert_eq!(session.pull(), None);
//! assert_eq!(session.pull(), None);
//! assert!(session.release().is_ok());
//! ```

use crate::{error::Result, iter::SessionIter};

/// A stateful, single-use cursor over a sequence.
///
/// Implementors uphold three rules:
/// - once `pull` returns `None` it keeps returning `None`;
/// - `release` may be called at any time, any number of times, including
///   before the first pull;
/// - `release` releases every session this one opened, even when an earlier
///   one fails, and reports the first failure.
pub trait Session {
    type Item;

    /// Produce the next value, or `None` once the sequence is exhausted.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Release the resources held by this session and every session it owns.
    fn release(&mut self) -> Result<()>;

    /// Drive the session with `for` loops and iterator adapters.
    fn into_iter(self) -> SessionIter<Self>
    where
        Self: Sized,
    {
        SessionIter::new(self)
    }

    fn boxed<'a>(self) -> Box<dyn Session<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<S> Session for Box<S>
where
    S: Session + ?Sized,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        (**self).pull()
    }

    fn release(&mut self) -> Result<()> {
        (**self).release()
    }
}

impl<S> Session for &'_ mut S
where
    S: Session + ?Sized,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        (**self).pull()
    }

    fn release(&mut self) -> Result<()> {
        (**self).release()
    }
}

impl<L, R> Session for either::Either<L, R>
where
    L: Session,
    R: Session<Item = L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        match self {
            either::Either::Left(l) => l.pull(),
            either::Either::Right(r) => r.pull(),
        }
    }

    fn release(&mut self) -> Result<()> {
        match self {
            either::Either::Left(l) => l.release(),
            either::Either::Right(r) => r.release(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{fail, from_slice, repeat};
    use crate::{Error, Sequence};
    use either::Either;

    #[test]
    fn test_boxed_session_forwards() {
        let mut session = repeat('x', 2).open().boxed();
        assert_eq!(session.pull(), Some('x'));
        assert_eq!(session.pull(), Some('x'));
        assert_eq!(session.pull(), None);
        assert!(session.release().is_ok());
    }

    #[test]
    fn test_either_session_uses_active_side() {
        let data = [1, 2];
        let mut left: Either<_, crate::build::FailSession<i32>> =
            Either::Left(from_slice(&data).open());
        assert_eq!(left.pull(), Some(1));
        assert!(left.release().is_ok());

        let mut right: Either<crate::build::SliceSession<'_, i32>, _> =
            Either::Right(fail::<i32>(Error::other("boom")).open());
        assert_eq!(right.pull(), None);
        assert_eq!(right.release().unwrap_err().to_string(), "boom");
    }

    #[test]
    fn test_release_before_pull_is_allowed() {
        let data = [7];
        let mut session = from_slice(&data).open();
        assert!(session.release().is_ok());
        assert!(session.release().is_ok());
    }
}
