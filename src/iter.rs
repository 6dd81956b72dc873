//! Iterator adapter for live sessions.
//!
//! [`SessionIter`] lets a [`Session`] be driven by `for` loops and the std
//! iterator adapters, and keeps the session around so it can still be
//! released afterwards.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let data = [1, 2, 3, 4];
//! let mut iter = from_slice(&data).open().into_iter();
//! let firsts: Vec<_> = (&mut iter).take(2).collect();
//! assert_eq!(firsts, vec![1, 2]);
//! assert!(!iter.is_exhausted());
//! assert!(iter.finish().is_ok());
//! ```

use crate::{Session, error::Result};

/// Iterator adapter for a [`Session`].
///
/// Both `SessionIter` and `&mut SessionIter` implement `Iterator`, so values
/// can be taken without consuming the wrapper and the session released later
/// with [`finish`](SessionIter::finish).
pub struct SessionIter<S> {
    session: S,
    exhausted: bool,
}

impl<S> SessionIter<S>
where
    S: Session,
{
    pub fn new(session: S) -> Self {
        Self {
            session,
            exhausted: false,
        }
    }

    /// Check if the session has reported exhaustion.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Release the session and report its release result.
    pub fn finish(mut self) -> Result<()> {
        self.session.release()
    }

    /// Give back the session without releasing it.
    pub fn into_inner(self) -> S {
        self.session
    }
}

impl<S> Iterator for SessionIter<S>
where
    S: Session,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.session.pull();
        self.exhausted = value.is_none();
        value
    }
}

impl<S> std::iter::FusedIterator for SessionIter<S> where S: Session {}
