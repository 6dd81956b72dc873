use std::{collections::HashSet, hash::Hash, rc::Rc};

use crate::{Sequence, Session, error::Result};

/// Keeps the elements that satisfy a predicate.
///
/// Created via [`filter`] or [`Sequence::filter`].
pub struct Filter<S, F> {
    source: S,
    predicate: Rc<F>,
}

/// Create a sequence of the elements of `source` for which `predicate` holds.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let data = [1, 3, 5, 7, 9];
/// let seq = filter(from_slice(&data), |x| *x > 1 && *x < 9);
/// assert_eq!(to_vec(&seq).unwrap(), vec![3, 5, 7]);
/// ```
pub fn filter<S, F>(source: S, predicate: F) -> Filter<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    Filter {
        source,
        predicate: Rc::new(predicate),
    }
}

impl<S, F> Sequence for Filter<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Session = FilterSession<S::Session, F>;

    fn open(&self) -> Self::Session {
        FilterSession {
            source: self.source.open(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

pub struct FilterSession<S, F> {
    source: S,
    predicate: Rc<F>,
}

impl<S, F> Session for FilterSession<S, F>
where
    S: Session,
    F: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        loop {
            let value = self.source.pull()?;
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
    }

    fn release(&mut self) -> Result<()> {
        self.source.release()
    }
}

/// Drops elements equal to one already yielded, keeping first occurrences.
///
/// Created via [`distinct`] or [`Sequence::distinct`].
#[derive(Debug, Clone)]
pub struct Distinct<S> {
    source: S,
}

/// Create a sequence of the distinct elements of `source` in first-seen order.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let data = [1, 5, 5, 9, 5];
/// assert_eq!(to_vec(distinct(from_slice(&data))).unwrap(), vec![1, 5, 9]);
/// ```
pub fn distinct<S>(source: S) -> Distinct<S>
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    Distinct { source }
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;
    type Session = DistinctSession<S::Session>;

    fn open(&self) -> Self::Session {
        DistinctSession {
            source: self.source.open(),
            seen: HashSet::new(),
        }
    }
}

pub struct DistinctSession<S: Session> {
    source: S,
    seen: HashSet<S::Item>,
}

impl<S> Session for DistinctSession<S>
where
    S: Session,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        loop {
            let value = self.source.pull()?;
            if self.seen.insert(value.clone()) {
                return Some(value);
            }
        }
    }

    fn release(&mut self) -> Result<()> {
        self.source.release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::build::from_slice;
    use crate::testing::Probe;

    #[test]
    fn test_filter_skips_non_matching() {
        let data = [1, 2, 3, 4, 5, 6];
        let mut session = filter(from_slice(&data), |x| x % 3 == 0).open();
        assert_eq!(session.pull(), Some(3));
        assert_eq!(session.pull(), Some(6));
        assert_eq!(session.pull(), None);
        assert_eq!(session.pull(), None);
    }

    #[test]
    fn test_filter_nothing_matches() {
        let data = [1, 2];
        let mut session = filter(from_slice(&data), |_| false).open();
        assert_eq!(session.pull(), None);
    }

    #[test]
    fn test_filter_is_lazy() {
        let probe = Probe::new(vec![1, 2, 3, 4]);
        let seq = filter(&probe, |x| *x >= 2);
        assert_eq!(probe.opens(), 0);
        let mut session = seq.open();
        assert_eq!(session.pull(), Some(2));
        assert_eq!(probe.pulls(), 2);
    }

    #[test]
    fn test_filter_forwards_release_error() {
        let probe = Probe::failing(vec![1], Error::other("closed"));
        let mut session = filter(&probe, |_| true).open();
        assert_eq!(session.release().unwrap_err().to_string(), "closed");
        assert_eq!(probe.releases(), 1);
    }

    #[test]
    fn test_distinct_keeps_first_occurrences() {
        let data = ["b", "a", "b", "c", "a"];
        let mut session = distinct(from_slice(&data)).open();
        assert_eq!(session.pull(), Some("b"));
        assert_eq!(session.pull(), Some("a"));
        assert_eq!(session.pull(), Some("c"));
        assert_eq!(session.pull(), None);
    }

    #[test]
    fn test_distinct_sessions_have_their_own_seen_set() {
        let data = [1, 1, 2];
        let seq = distinct(from_slice(&data));
        let mut a = seq.open();
        assert_eq!(a.pull(), Some(1));
        let mut b = seq.open();
        assert_eq!(b.pull(), Some(1));
        assert_eq!(a.pull(), Some(2));
        assert_eq!(b.pull(), Some(2));
    }
}
