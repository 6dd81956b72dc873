use std::marker::PhantomData;

use crate::{Sequence, Session, error::Result};

/// Yields one value a fixed number of times.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    count: usize,
}

/// Create a sequence yielding `value` exactly `count` times.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// assert_eq!(to_vec(repeat("hi", 2)).unwrap(), vec!["hi", "hi"]);
/// assert_eq!(len(repeat(0, 0)).unwrap(), 0);
/// ```
pub fn repeat<T: Clone>(value: T, count: usize) -> Repeat<T> {
    Repeat { value, count }
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;
    type Session = RepeatSession<T>;

    fn open(&self) -> Self::Session {
        RepeatSession {
            value: self.value.clone(),
            remaining: self.count,
        }
    }
}

pub struct RepeatSession<T> {
    value: T,
    remaining: usize,
}

impl<T: Clone> Session for RepeatSession<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.value.clone())
    }

    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A sequence with no elements.
pub struct Empty<T>(PhantomData<fn() -> T>);

pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Session = EmptySession<T>;

    fn open(&self) -> Self::Session {
        EmptySession(PhantomData)
    }
}

pub struct EmptySession<T>(PhantomData<fn() -> T>);

impl<T> Session for EmptySession<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        None
    }

    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_counts_down() {
        let mut session = repeat(7u8, 2).open();
        assert_eq!(session.pull(), Some(7));
        assert_eq!(session.pull(), Some(7));
        assert_eq!(session.pull(), None);
        assert_eq!(session.pull(), None);
    }

    #[test]
    fn test_repeat_zero_is_exhausted() {
        let mut session = repeat("x", 0).open();
        assert_eq!(session.pull(), None);
        assert!(session.release().is_ok());
    }

    #[test]
    fn test_repeat_sessions_restart() {
        let seq = repeat(1, 1);
        assert_eq!(seq.open().pull(), Some(1));
        assert_eq!(seq.open().pull(), Some(1));
    }

    #[test]
    fn test_empty() {
        let mut session = empty::<String>().open();
        assert_eq!(session.pull(), None);
        assert!(session.release().is_ok());
    }
}
