use std::rc::Rc;

use crate::{Sequence, Session, error::Result};

/// Sequence over borrowed contiguous storage.
///
/// Sessions walk an index over the slice and clone each element out.
#[derive(Debug, Clone, Copy)]
pub struct FromSlice<'a, T> {
    items: &'a [T],
}

/// Create a sequence over a borrowed slice.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let data = vec![1, 2, 3];
/// assert_eq!(sum(from_slice(&data)).unwrap(), 6);
/// ```
pub fn from_slice<T: Clone>(items: &[T]) -> FromSlice<'_, T> {
    FromSlice { items }
}

impl<'a, T: Clone> Sequence for FromSlice<'a, T> {
    type Item = T;
    type Session = SliceSession<'a, T>;

    fn open(&self) -> Self::Session {
        SliceSession {
            items: self.items,
            index: 0,
        }
    }
}

pub struct SliceSession<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<T: Clone> Session for SliceSession<'_, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let value = self.items.get(self.index)?.clone();
        self.index += 1;
        Some(value)
    }

    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Sequence over owned storage shared by every session it opens.
#[derive(Debug)]
pub struct FromVec<T> {
    items: Rc<[T]>,
}

// Derive would require `T: Clone`.
impl<T> Clone for FromVec<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

/// Create a sequence that owns its elements.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let words = from_vec(vec!["a".to_string(), "b".to_string()]);
/// assert_eq!(last(&words).unwrap(), "b");
/// ```
pub fn from_vec<T: Clone>(items: Vec<T>) -> FromVec<T> {
    FromVec {
        items: Rc::from(items),
    }
}

impl<T: Clone> Sequence for FromVec<T> {
    type Item = T;
    type Session = VecSession<T>;

    fn open(&self) -> Self::Session {
        VecSession {
            items: Rc::clone(&self.items),
            index: 0,
        }
    }
}

pub struct VecSession<T> {
    items: Rc<[T]>,
    index: usize,
}

impl<T: Clone> Session for VecSession<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let value = self.items.get(self.index)?.clone();
        self.index += 1;
        Some(value)
    }

    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_session_yields_in_order_then_stays_exhausted() {
        let data = [3, 1, 2];
        let mut session = from_slice(&data).open();
        assert_eq!(session.pull(), Some(3));
        assert_eq!(session.pull(), Some(1));
        assert_eq!(session.pull(), Some(2));
        assert_eq!(session.pull(), None);
        assert_eq!(session.pull(), None);
        assert!(session.release().is_ok());
    }

    #[test]
    fn test_empty_slice() {
        let data: [u8; 0] = [];
        let mut session = from_slice(&data).open();
        assert_eq!(session.pull(), None);
    }

    #[test]
    fn test_vec_sessions_share_storage() {
        let seq = from_vec(vec!['a', 'b']);
        let copy = seq.clone();
        let mut a = seq.open();
        let mut b = copy.open();
        assert_eq!(a.pull(), Some('a'));
        assert_eq!(b.pull(), Some('a'));
        assert_eq!(a.pull(), Some('b'));
        assert_eq!(a.pull(), None);
        assert_eq!(b.pull(), Some('b'));
    }
}
