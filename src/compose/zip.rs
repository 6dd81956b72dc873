use std::rc::Rc;

use crate::{Sequence, Session, error::Result, error::first_error};

/// Pairs elements of two sequences positionally.
///
/// Created via [`zip`] or [`Sequence::zip`].
pub struct Zip<A, B, F> {
    first: A,
    second: B,
    zipper: Rc<F>,
}

/// Create a sequence of `zipper(a, b)` for positionally matched elements.
///
/// The result is as long as the shorter input; it never pads.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let (odds, evens) = ([1, 3, 5, 7, 9], [2, 4, 6]);
/// let sums = zip(from_slice(&odds), from_slice(&evens), |a, b| a + b);
/// assert_eq!(to_vec(&sums).unwrap(), vec![3, 7, 11]);
/// ```
pub fn zip<A, B, R, F>(first: A, second: B, zipper: F) -> Zip<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: Fn(A::Item, B::Item) -> R,
{
    Zip {
        first,
        second,
        zipper: Rc::new(zipper),
    }
}

impl<A, B, R, F> Sequence for Zip<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: Fn(A::Item, B::Item) -> R,
{
    type Item = R;
    type Session = ZipSession<A::Session, B::Session, F>;

    fn open(&self) -> Self::Session {
        ZipSession {
            first: self.first.open(),
            second: self.second.open(),
            zipper: Rc::clone(&self.zipper),
            done: false,
        }
    }
}

pub struct ZipSession<A, B, F> {
    first: A,
    second: B,
    zipper: Rc<F>,
    done: bool,
}

impl<A, B, R, F> Session for ZipSession<A, B, F>
where
    A: Session,
    B: Session,
    F: Fn(A::Item, B::Item) -> R,
{
    type Item = R;

    fn pull(&mut self) -> Option<R> {
        if self.done {
            return None;
        }
        let first = self.first.pull();
        let second = self.second.pull();
        match (first, second) {
            (Some(a), Some(b)) => Some((self.zipper)(a, b)),
            _ => {
                // either side running out ends the pairing for good
                self.done = true;
                None
            }
        }
    }

    fn release(&mut self) -> Result<()> {
        let first = self.first.release();
        let second = self.second.release();
        first_error(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::build::from_slice;
    use crate::testing::Probe;

    #[test]
    fn test_zip_truncates_to_shorter() {
        let (a, b) = ([1, 2, 3], ["x", "y"]);
        let mut session = zip(from_slice(&a), from_slice(&b), |n, s| format!("{s}{n}")).open();
        assert_eq!(session.pull().as_deref(), Some("x1"));
        assert_eq!(session.pull().as_deref(), Some("y2"));
        assert_eq!(session.pull(), None);
    }

    #[test]
    fn test_zip_stays_exhausted_even_if_other_side_has_more() {
        let first = Probe::new(vec![1]);
        let second = Probe::new(vec![10, 20, 30]);
        let mut session = zip(&first, &second, |a, b| a + b).open();
        assert_eq!(session.pull(), Some(11));
        assert_eq!(session.pull(), None);
        assert_eq!(session.pull(), None);
        assert_eq!(second.pulls(), 2);
    }

    #[test]
    fn test_zip_release_prefers_first_error() {
        let first = Probe::failing(Vec::<i32>::new(), Error::other("left"));
        let second = Probe::failing(Vec::<i32>::new(), Error::other("right"));
        let mut session = zip(&first, &second, |a, b| a * b).open();
        assert_eq!(session.pull(), None);
        assert_eq!(session.release().unwrap_err().to_string(), "left");
        assert_eq!(second.releases(), 1);
    }
}
