use crate::{Sequence, Session, error::Result};

/// Sequence whose sessions come from a closure returning a fresh iterator.
pub struct FromFn<F>(F);

/// Create a sequence from a closure producing an iterable.
///
/// The closure runs once per `open`, so each session sees the closure's
/// current view of the data.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let evens = from_fn(|| (0..10).step_by(2));
/// assert_eq!(to_vec(&evens).unwrap(), vec![0, 2, 4, 6, 8]);
/// ```
pub fn from_fn<I, F>(f: F) -> FromFn<F>
where
    I: IntoIterator,
    F: Fn() -> I,
{
    FromFn(f)
}

impl<I, F> Sequence for FromFn<F>
where
    I: IntoIterator,
    F: Fn() -> I,
{
    type Item = I::Item;
    type Session = IterSession<I::IntoIter>;

    fn open(&self) -> Self::Session {
        IterSession::new((self.0)())
    }
}

/// Session over a std iterator. Release never fails.
pub struct IterSession<I> {
    iter: std::iter::Fuse<I>,
}

impl<I: Iterator> IterSession<I> {
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: iter.into_iter().fuse(),
        }
    }
}

impl<I: Iterator> Session for IterSession<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_from_fn_calls_closure_per_open() {
        let opened = Cell::new(0);
        let seq = from_fn(|| {
            opened.set(opened.get() + 1);
            vec![1, 2]
        });
        let mut a = seq.open();
        let _b = seq.open();
        assert_eq!(opened.get(), 2);
        assert_eq!(a.pull(), Some(1));
        assert_eq!(a.pull(), Some(2));
        assert_eq!(a.pull(), None);
    }

    #[test]
    fn test_iter_session_stays_exhausted() {
        let mut flip = true;
        let unfused = std::iter::from_fn(move || {
            flip = !flip;
            flip.then_some(1)
        });
        let mut session = IterSession::new(unfused);
        assert_eq!(session.pull(), None);
        assert_eq!(session.pull(), None);
    }
}
