//! Projecting elements: one-to-one with [`Select`], one-to-many with [`SelectMany`].

use std::rc::Rc;

use crate::{Error, Sequence, Session, error::Result, error::first_error};

/// Maps each element through a selector.
///
/// Created via [`select`] or [`Sequence::select`].
pub struct Select<S, F> {
    source: S,
    selector: Rc<F>,
}

/// Create a sequence whose elements are `selector` applied to those of `source`.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let data = [1, 2, 3];
/// let seq = select(from_slice(&data), |x| x.to_string());
/// assert_eq!(to_vec(&seq).unwrap(), vec!["1", "2", "3"]);
/// ```
pub fn select<S, R, F>(source: S, selector: F) -> Select<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R,
{
    Select {
        source,
        selector: Rc::new(selector),
    }
}

impl<S, R, F> Sequence for Select<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R,
{
    type Item = R;
    type Session = SelectSession<S::Session, F>;

    fn open(&self) -> Self::Session {
        SelectSession {
            source: self.source.open(),
            selector: Rc::clone(&self.selector),
        }
    }
}

pub struct SelectSession<S, F> {
    source: S,
    selector: Rc<F>,
}

impl<S, R, F> Session for SelectSession<S, F>
where
    S: Session,
    F: Fn(S::Item) -> R,
{
    type Item = R;

    fn pull(&mut self) -> Option<R> {
        self.source.pull().map(|value| (self.selector)(value))
    }

    fn release(&mut self) -> Result<()> {
        self.source.release()
    }
}

/// Maps each element to an inner sequence and flattens the results.
///
/// Created via [`select_many`] or [`Sequence::select_many`].
pub struct SelectMany<S, F> {
    source: S,
    selector: Rc<F>,
}

/// Create a sequence that drains the inner sequence `selector` returns for each
/// element of `source`, in order. `None` contributes no elements.
///
/// If releasing an inner session fails, the flattened sequence ends there and
/// reports that failure on release.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let data = [1usize, 2, 3];
/// let seq = select_many(from_slice(&data), |n| (n != 2).then(|| repeat(n, n)));
/// assert_eq!(to_vec(&seq).unwrap(), vec![1, 3, 3, 3]);
/// ```
pub fn select_many<S, R, F>(source: S, selector: F) -> SelectMany<S, F>
where
    S: Sequence,
    R: Sequence,
    F: Fn(S::Item) -> Option<R>,
{
    SelectMany {
        source,
        selector: Rc::new(selector),
    }
}

impl<S, R, F> Sequence for SelectMany<S, F>
where
    S: Sequence,
    R: Sequence,
    F: Fn(S::Item) -> Option<R>,
{
    type Item = R::Item;
    type Session = SelectManySession<S::Session, F, R>;

    fn open(&self) -> Self::Session {
        SelectManySession {
            source: self.source.open(),
            selector: Rc::clone(&self.selector),
            current: None,
            error: None,
            source_done: false,
        }
    }
}

/// Session for [`SelectMany`]; `R` is the inner sequence type.
pub struct SelectManySession<S, F, R: Sequence> {
    source: S,
    selector: Rc<F>,
    current: Option<R::Session>,
    // Sticky: once an inner release fails the session reports exhaustion.
    error: Option<Error>,
    source_done: bool,
}

impl<S, R, F> Session for SelectManySession<S, F, R>
where
    S: Session,
    R: Sequence,
    F: Fn(S::Item) -> Option<R>,
{
    type Item = R::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        if self.error.is_some() {
            return None;
        }
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(value) = inner.pull() {
                    return Some(value);
                }
                let released = inner.release();
                self.current = None;
                tracing::trace!("inner sequence exhausted");
                if let Err(e) = released {
                    self.error = Some(e);
                    return None;
                }
            }
            if self.source_done {
                return None;
            }
            match self.source.pull() {
                Some(value) => {
                    if let Some(inner) = (self.selector)(value) {
                        self.current = Some(inner.open());
                    }
                }
                None => {
                    self.source_done = true;
                    return None;
                }
            }
        }
    }

    fn release(&mut self) -> Result<()> {
        let source = self.source.release();
        let current = match self.current.take() {
            Some(mut inner) => inner.release(),
            None => Ok(()),
        };
        let released = first_error(source, current);
        match &self.error {
            Some(e) => {
                if let Err(discarded) = released {
                    tracing::debug!(error = %discarded, "discarding release error behind inner failure");
                }
                Err(e.clone())
            }
            None => released,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{fail, from_slice, from_vec, repeat};
    use crate::testing::Probe;

    #[test]
    fn test_select_maps_each_element() {
        let data = [1, 2];
        let mut session = select(from_slice(&data), |x| x * 100).open();
        assert_eq!(session.pull(), Some(100));
        assert_eq!(session.pull(), Some(200));
        assert_eq!(session.pull(), None);
    }

    #[test]
    fn test_select_forwards_release() {
        let probe = Probe::failing(vec![1], Error::other("src"));
        let mut session = select(&probe, |x| x + 1).open();
        assert_eq!(session.pull(), Some(2));
        assert_eq!(session.release().unwrap_err().to_string(), "src");
    }

    #[test]
    fn test_select_many_flattens_in_order() {
        let data = [vec![1, 2], vec![], vec![3]];
        let mut session = select_many(from_slice(&data), |v| Some(from_vec(v))).open();
        assert_eq!(session.pull(), Some(1));
        assert_eq!(session.pull(), Some(2));
        assert_eq!(session.pull(), Some(3));
        assert_eq!(session.pull(), None);
        assert_eq!(session.pull(), None);
        assert!(session.release().is_ok());
    }

    #[test]
    fn test_select_many_skips_none() {
        let data = [0, 1, 0, 2];
        let seq = select_many(from_slice(&data), |n| (n > 0).then(|| repeat('x', n)));
        let mut session = seq.open();
        let mut count = 0;
        while session.pull().is_some() {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_select_many_releases_each_inner_when_exhausted() {
        let inner = Probe::new(vec!['a']);
        let data = [1, 2];
        let mut session = select_many(from_slice(&data), |_| Some(&inner)).open();
        assert_eq!(session.pull(), Some('a'));
        assert_eq!(inner.releases(), 0);
        assert_eq!(session.pull(), Some('a'));
        assert_eq!(inner.releases(), 1);
        assert_eq!(session.pull(), None);
        assert_eq!(inner.releases(), 2);
    }

    #[test]
    fn test_select_many_inner_error_is_sticky() {
        let source = Probe::new(vec![1, 2, 3]);
        let mut session = select_many(&source, |n| {
            if n == 2 {
                Some(repeat(n, 1).concat(fail(Error::other("inner"))).boxed())
            } else {
                Some(repeat(n, 1).boxed())
            }
        })
        .open();
        assert_eq!(session.pull(), Some(1));
        assert_eq!(session.pull(), Some(2));
        assert_eq!(session.pull(), None);
        assert_eq!(session.pull(), None);
        // 3 is never reached
        assert_eq!(source.pulls(), 2);
        assert_eq!(session.release().unwrap_err().to_string(), "inner");
        assert_eq!(source.releases(), 1);
    }

    #[test]
    fn test_select_many_release_mid_inner_releases_inner() {
        let inner = Probe::new(vec![1, 2, 3]);
        let data = [()];
        let mut session = select_many(from_slice(&data), |_| Some(&inner)).open();
        assert_eq!(session.pull(), Some(1));
        assert!(session.release().is_ok());
        assert_eq!(inner.releases(), 1);
    }

    #[test]
    fn test_select_many_reports_source_release_error() {
        let source = Probe::failing(vec![1], Error::other("outer"));
        let mut session = select_many(&source, |n| Some(repeat(n, 2))).open();
        assert_eq!(session.pull(), Some(1));
        assert_eq!(session.pull(), Some(1));
        assert_eq!(session.pull(), None);
        assert_eq!(session.release().unwrap_err().to_string(), "outer");
    }

    #[test]
    fn test_select_many_double_release_keeps_sticky_error() {
        let source = Probe::failing(vec![1, 2], Error::other("outer"));
        let mut session =
            select_many(&source, |n| Some(repeat(n, 1).concat(fail(Error::other("inner"))))).open();
        assert_eq!(session.pull(), Some(1));
        assert_eq!(session.pull(), None);
        assert_eq!(session.release().unwrap_err().to_string(), "inner");
        assert_eq!(session.release().unwrap_err().to_string(), "inner");
        assert_eq!(source.releases(), 2);
    }
}
