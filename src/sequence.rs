//! Reusable sequence factories.
//!
//! A [`Sequence`] opens independent [`Session`]s on demand. Composition
//! operators take sequences and return new sequences; nothing is pulled until
//! a session of the composed sequence is.
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let data = [1, 3, 5, 7, 9];
//! let middle = from_slice(&data).filter(|x| *x > 1 && *x < 9);
//!
//! assert_eq!(to_vec(&middle).unwrap(), vec![3, 5, 7]);
//! // Opening again recomputes from the same source.
//! assert_eq!(len(&middle).unwrap(), 3);
//! ```

use std::{hash::Hash, rc::Rc};

use crate::{
    Session,
    compose::{
        Concat, Distinct, Filter, Group, Select, SelectMany, Skip, Take, Zip, concat, distinct,
        filter, group, select, select_many, skip, take, zip,
    },
};

/// A reusable handle to a sequence of `Item`s.
///
/// `open` never consumes the handle; each call yields a fresh session that
/// starts from the beginning.
pub trait Sequence {
    type Item;
    type Session: Session<Item = Self::Item>;

    /// Open a fresh session over this sequence.
    fn open(&self) -> Self::Session;

    /// Yield every element of `self`, then every element of `other`.
    fn concat<B>(self, other: B) -> Concat<Self, B>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
    {
        concat(self, other)
    }

    /// Drop elements equal to one already yielded.
    fn distinct(self) -> Distinct<Self>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        distinct(self)
    }

    /// Keep only elements matching `predicate`.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> bool,
    {
        filter(self, predicate)
    }

    /// Map each element through `selector`.
    fn select<R, F>(self, selector: F) -> Select<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> R,
    {
        select(self, selector)
    }

    /// Map each element to an inner sequence and yield the inner elements.
    ///
    /// Elements mapped to `None` contribute nothing.
    fn select_many<R, F>(self, selector: F) -> SelectMany<Self, F>
    where
        Self: Sized,
        R: Sequence,
        F: Fn(Self::Item) -> Option<R>,
    {
        select_many(self, selector)
    }

    /// Discard the first `count` elements.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        skip(self, count)
    }

    /// Yield at most `limit` elements.
    fn take(self, limit: usize) -> Take<Self>
    where
        Self: Sized,
    {
        take(self, limit)
    }

    /// Pair elements with `other` positionally, stopping at the shorter side.
    fn zip<B, R, F>(self, other: B, zipper: F) -> Zip<Self, B, F>
    where
        Self: Sized,
        B: Sequence,
        F: Fn(Self::Item, B::Item) -> R,
    {
        zip(self, other, zipper)
    }

    /// Bucket elements by `key`, in first-seen key order.
    fn group<K, F>(self, key: F) -> Group<Self, F>
    where
        Self: Sized,
        K: Eq + Hash,
        F: Fn(&Self::Item) -> K,
    {
        group(self, key)
    }

    /// Erase the concrete type of this sequence.
    fn boxed<'a>(self) -> BoxedSequence<'a, Self::Item>
    where
        Self: Sized + 'a,
        Self::Session: 'a,
    {
        BoxedSequence::new(self)
    }
}

impl<S> Sequence for &'_ S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Session = S::Session;

    fn open(&self) -> Self::Session {
        (**self).open()
    }
}

impl<S> Sequence for Rc<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Session = S::Session;

    fn open(&self) -> Self::Session {
        (**self).open()
    }
}

/// A type-erased sequence whose sessions are boxed.
///
/// Useful when a `select_many` selector must return sequences of different
/// shapes for different elements.
pub struct BoxedSequence<'a, T> {
    open: Box<dyn Fn() -> Box<dyn Session<Item = T> + 'a> + 'a>,
}

impl<'a, T> BoxedSequence<'a, T> {
    pub fn new<S>(sequence: S) -> Self
    where
        S: Sequence<Item = T> + 'a,
        S::Session: 'a,
    {
        Self {
            open: Box::new(move || -> Box<dyn Session<Item = T> + 'a> {
                Box::new(sequence.open())
            }),
        }
    }
}

impl<'a, T> Sequence for BoxedSequence<'a, T> {
    type Item = T;
    type Session = Box<dyn Session<Item = T> + 'a>;

    fn open(&self) -> Self::Session {
        (self.open)()
    }
}
