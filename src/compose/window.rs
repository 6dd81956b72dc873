//! Positional slicing: [`Skip`] and [`Take`].

use crate::{Sequence, Session, error::Result};

/// Discards a fixed number of leading elements.
#[derive(Debug, Clone)]
pub struct Skip<S> {
    source: S,
    count: usize,
}

/// Create a sequence without the first `count` elements of `source`.
///
/// Skipping past the end yields an empty sequence.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let data = [1, 3, 5, 7, 9];
/// assert_eq!(to_vec(skip(from_slice(&data), 3)).unwrap(), vec![7, 9]);
/// assert_eq!(len(skip(from_slice(&data), 10)).unwrap(), 0);
/// ```
pub fn skip<S: Sequence>(source: S, count: usize) -> Skip<S> {
    Skip { source, count }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Session = SkipSession<S::Session>;

    fn open(&self) -> Self::Session {
        SkipSession {
            source: self.source.open(),
            remaining: self.count,
        }
    }
}

pub struct SkipSession<S> {
    source: S,
    remaining: usize,
}

impl<S: Session> Session for SkipSession<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.source.pull()?;
        }
        self.source.pull()
    }

    fn release(&mut self) -> Result<()> {
        self.source.release()
    }
}

/// Yields at most a fixed number of elements.
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    limit: usize,
}

/// Create a sequence of at most the first `limit` elements of `source`.
///
/// Once `limit` elements are out, the source is not pulled again.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let data = [1, 3, 5, 7, 9];
/// assert_eq!(to_vec(take(from_slice(&data), 3)).unwrap(), vec![1, 3, 5]);
/// ```
pub fn take<S: Sequence>(source: S, limit: usize) -> Take<S> {
    Take { source, limit }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Session = TakeSession<S::Session>;

    fn open(&self) -> Self::Session {
        TakeSession {
            source: self.source.open(),
            remaining: self.limit,
        }
    }
}

pub struct TakeSession<S> {
    source: S,
    remaining: usize,
}

impl<S: Session> Session for TakeSession<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.source.pull()
    }

    fn release(&mut self) -> Result<()> {
        self.source.release()
    }
}
