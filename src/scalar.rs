//! Terminal operators that drain a sequence into a single result.
//!
//! Every terminal opens exactly one session, pulls as far as it needs to, and
//! releases the session on every exit path. A release failure always wins over
//! the computed result: if the session fails to release, the terminal returns
//! that error and the result is discarded.
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let data = [1, 3, 5, 7, 9];
//! let greeting = fold(from_slice(&data), "Hello!".to_string(), |acc, e| acc + &e.to_string());
//! assert_eq!(greeting.unwrap(), "Hello!13579");
//!
//! let empty: [i32; 0] = [];
//! assert!(first(from_slice(&empty)).unwrap_err().is_empty());
//! ```

use std::iter::Sum;

use crate::{Error, Sequence, Session, error::Result};

/// An open session that is released no matter how the terminal exits.
struct Opened<S: Session> {
    session: Option<S>,
}

impl<S: Session> Opened<S> {
    fn new<Q>(sequence: Q) -> Self
    where
        Q: Sequence<Session = S>,
    {
        Self {
            session: Some(sequence.open()),
        }
    }

    fn pull(&mut self) -> Option<S::Item> {
        self.session.as_mut()?.pull()
    }

    /// Release the session; its failure replaces `result`.
    fn finish<T>(mut self, result: Result<T>) -> Result<T> {
        let released = match self.session.take() {
            Some(mut session) => session.release(),
            None => Ok(()),
        };
        released.and(result)
    }
}

impl<S: Session> Drop for Opened<S> {
    fn drop(&mut self) {
        // Only reached when a terminal unwinds before `finish`.
        if let Some(mut session) = self.session.take() {
            if let Err(e) = session.release() {
                tracing::warn!(error = %e, "release failed while unwinding");
            }
        }
    }
}

/// Whether every element satisfies `predicate`. Empty sequences are vacuously true.
pub fn all<Q, F>(sequence: Q, mut predicate: F) -> Result<bool>
where
    Q: Sequence,
    F: FnMut(&Q::Item) -> bool,
{
    let mut opened = Opened::new(sequence);
    while let Some(value) = opened.pull() {
        if !predicate(&value) {
            return opened.finish(Ok(false));
        }
    }
    opened.finish(Ok(true))
}

/// Whether some element satisfies `predicate`.
pub fn any<Q, F>(sequence: Q, mut predicate: F) -> Result<bool>
where
    Q: Sequence,
    F: FnMut(&Q::Item) -> bool,
{
    let mut opened = Opened::new(sequence);
    while let Some(value) = opened.pull() {
        if predicate(&value) {
            return opened.finish(Ok(true));
        }
    }
    opened.finish(Ok(false))
}

/// Whether some element equals `target`.
pub fn contains<Q>(sequence: Q, target: &Q::Item) -> Result<bool>
where
    Q: Sequence,
    Q::Item: PartialEq,
{
    any(sequence, |value| value == target)
}

/// The element at zero-based `index`.
///
/// Fails with [`Error::OutOfRange`] when the sequence has `index` or fewer elements.
pub fn element_at<Q: Sequence>(sequence: Q, index: usize) -> Result<Q::Item> {
    let mut opened = Opened::new(sequence);
    let mut position = 0;
    while let Some(value) = opened.pull() {
        if position == index {
            return opened.finish(Ok(value));
        }
        position += 1;
    }
    opened.finish(Err(Error::OutOfRange { index }))
}

/// The first element, or [`Error::Empty`].
pub fn first<Q: Sequence>(sequence: Q) -> Result<Q::Item> {
    let mut opened = Opened::new(sequence);
    let value = opened.pull().ok_or(Error::Empty);
    opened.finish(value)
}

/// The first element, or the default value when empty.
pub fn first_or_default<Q>(sequence: Q) -> Result<Q::Item>
where
    Q: Sequence,
    Q::Item: Default,
{
    let mut opened = Opened::new(sequence);
    let value = opened.pull().unwrap_or_default();
    opened.finish(Ok(value))
}

/// The last element, or [`Error::Empty`].
pub fn last<Q: Sequence>(sequence: Q) -> Result<Q::Item> {
    let mut opened = Opened::new(sequence);
    let mut latest = None;
    while let Some(value) = opened.pull() {
        latest = Some(value);
    }
    opened.finish(latest.ok_or(Error::Empty))
}

/// The last element, or the default value when empty.
pub fn last_or_default<Q>(sequence: Q) -> Result<Q::Item>
where
    Q: Sequence,
    Q::Item: Default,
{
    let mut opened = Opened::new(sequence);
    let mut latest = None;
    while let Some(value) = opened.pull() {
        latest = Some(value);
    }
    opened.finish(Ok(latest.unwrap_or_default()))
}

/// Left-to-right accumulation starting from `seed`.
pub fn fold<Q, A, F>(sequence: Q, seed: A, mut f: F) -> Result<A>
where
    Q: Sequence,
    F: FnMut(A, Q::Item) -> A,
{
    let mut opened = Opened::new(sequence);
    let mut acc = seed;
    while let Some(value) = opened.pull() {
        acc = f(acc, value);
    }
    opened.finish(Ok(acc))
}

/// Left-to-right accumulation seeded with the first element.
///
/// Fails with [`Error::Empty`] on an empty sequence.
pub fn reduce<Q, F>(sequence: Q, mut f: F) -> Result<Q::Item>
where
    Q: Sequence,
    F: FnMut(Q::Item, Q::Item) -> Q::Item,
{
    let mut opened = Opened::new(sequence);
    let Some(mut acc) = opened.pull() else {
        return opened.finish(Err(Error::Empty));
    };
    while let Some(value) = opened.pull() {
        acc = f(acc, value);
    }
    opened.finish(Ok(acc))
}

/// Number of elements. Drains the sequence.
pub fn len<Q: Sequence>(sequence: Q) -> Result<usize> {
    fold(sequence, 0, |count, _| count + 1)
}

/// Sum of all elements; the additive identity when empty.
pub fn sum<Q>(sequence: Q) -> Result<Q::Item>
where
    Q: Sequence,
    Q::Item: Sum<Q::Item>,
{
    let mut opened = Opened::new(sequence);
    let total: Q::Item = std::iter::from_fn(|| opened.pull()).sum();
    opened.finish(Ok(total))
}

/// The greatest element; the earliest wins ties. Fails with [`Error::Empty`] when empty.
///
/// Incomparable elements (a float `NaN`) never replace the current best.
pub fn max<Q>(sequence: Q) -> Result<Q::Item>
where
    Q: Sequence,
    Q::Item: PartialOrd,
{
    reduce(sequence, |best, value| if value > best { value } else { best })
}

/// The least element; the earliest wins ties. Fails with [`Error::Empty`] when empty.
///
/// Incomparable elements (a float `NaN`) never replace the current best.
pub fn min<Q>(sequence: Q) -> Result<Q::Item>
where
    Q: Sequence,
    Q::Item: PartialOrd,
{
    reduce(sequence, |best, value| if value < best { value } else { best })
}

/// Collect every element in order.
pub fn to_vec<Q: Sequence>(sequence: Q) -> Result<Vec<Q::Item>> {
    fold(sequence, Vec::new(), |mut values, value| {
        values.push(value);
        values
    })
}

/// Visit every element in order.
pub fn for_each<Q, F>(sequence: Q, mut f: F) -> Result<()>
where
    Q: Sequence,
    F: FnMut(Q::Item),
{
    fold(sequence, (), |(), value| f(value))
}
