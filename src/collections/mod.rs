//! Storage adapters that plug into the iteration protocol.
//!
//! Containers expose capabilities as small independent traits instead of a
//! hierarchy of concrete types: a list is [`Indexable`], a dictionary is
//! [`Keyed`], a set has [`Membership`], and only the mutable variants add the
//! `*Mut` traits. A shared reference to any container is a
//! [`Sequence`](crate::Sequence), so every operator works on containers
//! directly.
//!
//! ```rust
//! use pullseq::prelude::*;
//! use pullseq::collections::{Frozen, Indexable, ListMut, SliceList};
//!
//! let mut list = SliceList::new();
//! list.add(3);
//! list.add(1);
//! list.insert_at(1, 2).unwrap();
//!
//! let frozen = Frozen::new(list);
//! assert_eq!(frozen.value_at(1), Some(&2));
//! assert_eq!(to_vec(&frozen).unwrap(), vec![3, 2, 1]);
//! ```

mod dict;
mod frozen;
mod list;
mod set;

pub use dict::{DictSession, HashDict, KeyValuePair};
pub use frozen::Frozen;
pub use list::SliceList;
pub use set::HashedSet;

use crate::error::Result;

/// Construction options shared by every container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    initial_capacity: usize,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `capacity` elements up front.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn capacity(&self) -> usize {
        self.initial_capacity
    }
}

/// Anything that knows how many elements it holds.
pub trait Container {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Positional read access.
pub trait Indexable: Container {
    type Item;

    fn value_at(&self, index: usize) -> Option<&Self::Item>;
}

/// Positional mutation.
///
/// `insert_at(len, v)` appends. Positions past the end fail with
/// [`Error::OutOfRange`](crate::Error::OutOfRange) and leave the list unchanged.
pub trait ListMut: Indexable {
    fn add(&mut self, value: Self::Item);

    fn insert_at(&mut self, index: usize, value: Self::Item) -> Result<()>;

    /// Remove and return the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<Self::Item>;
}

/// Keyed read access.
pub trait Keyed: Container {
    type Key;
    type Value;

    fn contains_key(&self, key: &Self::Key) -> bool;

    fn value(&self, key: &Self::Key) -> Option<&Self::Value>;
}

/// Keyed mutation.
pub trait KeyedMut: Keyed {
    /// Insert or replace, returning the previous value.
    fn add(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;
}

/// Set membership.
pub trait Membership: Container {
    type Item;

    fn contains(&self, value: &Self::Item) -> bool;
}

/// Set mutation.
pub trait MembershipMut: Membership {
    /// Returns `false` if the value was already present.
    fn add(&mut self, value: Self::Item) -> bool;

    /// Returns `false` if the value was absent.
    fn remove(&mut self, value: &Self::Item) -> bool;

    fn clear(&mut self);
}
