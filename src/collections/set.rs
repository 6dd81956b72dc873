use std::hash::Hash;

use indexmap::IndexSet;

use crate::{
    Sequence,
    build::IterSession,
    collections::{Container, Membership, MembershipMut, Options},
};

/// A hash set that iterates in insertion order.
#[derive(Debug, Clone)]
pub struct HashedSet<T> {
    members: IndexSet<T>,
}

impl<T: Eq + Hash> HashedSet<T> {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            members: IndexSet::with_capacity(options.capacity()),
        }
    }
}

impl<T: Eq + Hash> Default for HashedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for HashedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<T> Container for HashedSet<T> {
    fn len(&self) -> usize {
        self.members.len()
    }
}

impl<T: Eq + Hash> Membership for HashedSet<T> {
    type Item = T;

    fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }
}

impl<T: Eq + Hash> MembershipMut for HashedSet<T> {
    fn add(&mut self, value: T) -> bool {
        self.members.insert(value)
    }

    fn remove(&mut self, value: &T) -> bool {
        self.members.shift_remove(value)
    }

    fn clear(&mut self) {
        self.members.clear();
    }
}

type Members<'a, T> = std::iter::Cloned<indexmap::set::Iter<'a, T>>;

impl<'a, T: Clone> Sequence for &'a HashedSet<T> {
    type Item = T;
    type Session = IterSession<Members<'a, T>>;

    fn open(&self) -> Self::Session {
        let set: &'a HashedSet<T> = *self;
        IterSession::new(set.members.iter().cloned())
    }
}
