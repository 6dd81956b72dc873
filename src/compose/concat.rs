use crate::{Sequence, Session, error::Result, error::first_error};

/// Yields every element of the first sequence, then every element of the second.
///
/// Created via [`concat`] or [`Sequence::concat`].
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

/// Run the first sequence to exhaustion, then continue with the second.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let seq = concat(from_vec(vec![1, 2]), repeat(3, 2));
/// assert_eq!(to_vec(&seq).unwrap(), vec![1, 2, 3, 3]);
/// ```
pub fn concat<A, B>(first: A, second: B) -> Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Concat { first, second }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Session = ConcatSession<A::Session, B::Session>;

    fn open(&self) -> Self::Session {
        ConcatSession::new(self.first.open(), self.second.open())
    }
}

/// Session for [`Concat`]. Both inner sessions stay open until release.
pub struct ConcatSession<A, B> {
    first: A,
    second: B,
    first_done: bool,
}

impl<A, B> ConcatSession<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            first_done: false,
        }
    }
}

impl<A, B> Session for ConcatSession<A, B>
where
    A: Session,
    B: Session<Item = A::Item>,
{
    type Item = A::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        if !self.first_done {
            match self.first.pull() {
                Some(value) => return Some(value),
                None => self.first_done = true, // never pull the first again
            }
        }
        self.second.pull()
    }

    fn release(&mut self) -> Result<()> {
        let first = self.first.release();
        let second = self.second.release();
        first_error(first, second)
    }
}
