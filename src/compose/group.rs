//! Grouping elements by key.
//!
//! Grouping cannot stream: every element must be seen before any group is
//! complete. [`Group`] therefore drains its source on the first pull, then
//! hands the finished groups out one at a time like any other session.

use std::{hash::Hash, rc::Rc};

use either::Either;
use indexmap::IndexMap;

use crate::{
    Sequence, Session,
    build::{FailSession, FromSlice, IterSession, fail, from_slice},
    compose::ConcatSession,
    error::Result,
};

/// A key and the elements that produced it, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<T, K> {
    pub key: K,
    pub values: Vec<T>,
}

impl<T, K> Grouping<T, K> {
    /// The members of this group as a sequence.
    pub fn seq(&self) -> FromSlice<'_, T>
    where
        T: Clone,
    {
        from_slice(&self.values)
    }
}

/// Buckets elements by a key selector.
///
/// Created via [`group`] or [`Sequence::group`].
pub struct Group<S, F> {
    source: S,
    key: Rc<F>,
}

/// Create a sequence of [`Grouping`]s, one per distinct key, in the order each
/// key was first produced.
///
/// If releasing the source fails during the drain, every group is still
/// yielded and the failure is reported when this session is released.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let data = [1, 2, 3, 4, 5];
/// let groups = to_vec(group(from_slice(&data), |x| x % 2)).unwrap();
/// assert_eq!(groups[0].key, 1);
/// assert_eq!(groups[0].values, vec![1, 3, 5]);
/// assert_eq!(groups[1].key, 0);
/// assert_eq!(groups[1].values, vec![2, 4]);
/// ```
pub fn group<S, K, F>(source: S, key: F) -> Group<S, F>
where
    S: Sequence,
    K: Eq + Hash,
    F: Fn(&S::Item) -> K,
{
    Group {
        source,
        key: Rc::new(key),
    }
}

impl<S, K, F> Sequence for Group<S, F>
where
    S: Sequence,
    K: Eq + Hash,
    F: Fn(&S::Item) -> K,
{
    type Item = Grouping<S::Item, K>;
    type Session = GroupSession<S::Session, F, K>;

    fn open(&self) -> Self::Session {
        GroupSession {
            state: GroupState::Pending(self.source.open()),
            key: Rc::clone(&self.key),
        }
    }
}

type Groups<T, K> = IterSession<std::vec::IntoIter<Grouping<T, K>>>;

type Materialized<T, K> =
    Either<Groups<T, K>, ConcatSession<Groups<T, K>, FailSession<Grouping<T, K>>>>;

// The source stays in `Pending` until the drain finishes, so an unwinding
// key selector still leaves it reachable for release.
enum GroupState<S: Session, K> {
    Pending(S),
    Ready(Materialized<S::Item, K>),
}

pub struct GroupSession<S: Session, F, K> {
    state: GroupState<S, K>,
    key: Rc<F>,
}

fn materialize<S, K, F>(source: &mut S, key: &F) -> Materialized<S::Item, K>
where
    S: Session,
    K: Eq + Hash,
    F: Fn(&S::Item) -> K,
{
    let mut buckets: IndexMap<K, Vec<S::Item>> = IndexMap::new();
    while let Some(value) = source.pull() {
        buckets.entry(key(&value)).or_default().push(value);
    }
    let groups: Vec<_> = buckets
        .into_iter()
        .map(|(key, values)| Grouping { key, values })
        .collect();
    tracing::trace!(groups = groups.len(), "materialized groups");

    let ready = IterSession::new(groups);
    match source.release() {
        Ok(()) => Either::Left(ready),
        Err(e) => Either::Right(ConcatSession::new(ready, fail(e).open())),
    }
}

impl<S, K, F> Session for GroupSession<S, F, K>
where
    S: Session,
    K: Eq + Hash,
    F: Fn(&S::Item) -> K,
{
    type Item = Grouping<S::Item, K>;

    fn pull(&mut self) -> Option<Self::Item> {
        if let GroupState::Pending(source) = &mut self.state {
            let groups = materialize(source, &*self.key);
            self.state = GroupState::Ready(groups);
        }
        match &mut self.state {
            GroupState::Ready(groups) => groups.pull(),
            GroupState::Pending(_) => None,
        }
    }

    fn release(&mut self) -> Result<()> {
        match &mut self.state {
            GroupState::Pending(source) => source.release(),
            GroupState::Ready(groups) => groups.release(),
        }
    }
}
