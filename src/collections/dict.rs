use std::hash::Hash;

use indexmap::IndexMap;

use crate::{
    Sequence, Session,
    build::from_fn,
    collections::{Container, Keyed, KeyedMut, Options},
    error::Result,
};

/// One entry of a dictionary, as yielded by its sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyValuePair<K, V> {
    pub key: K,
    pub value: V,
}

/// A hash-keyed dictionary that iterates in insertion order.
#[derive(Debug, Clone)]
pub struct HashDict<K, V> {
    entries: IndexMap<K, V>,
}

impl<K: Eq + Hash, V> HashDict<K, V> {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            entries: IndexMap::with_capacity(options.capacity()),
        }
    }

    /// The keys, in insertion order.
    pub fn keys(&self) -> impl Sequence<Item = K> + '_
    where
        K: Clone,
    {
        from_fn(move || self.entries.keys().cloned())
    }

    /// The values, in key insertion order.
    pub fn values(&self) -> impl Sequence<Item = V> + '_
    where
        V: Clone,
    {
        from_fn(move || self.entries.values().cloned())
    }
}

impl<K: Eq + Hash, V> Default for HashDict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for HashDict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K, V> Container for HashDict<K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Eq + Hash, V> Keyed for HashDict<K, V> {
    type Key = K;
    type Value = V;

    fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn value(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }
}

impl<K: Eq + Hash, V> KeyedMut for HashDict<K, V> {
    fn add(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        // keep the remaining entries in insertion order
        self.entries.shift_remove(key)
    }
}

impl<'a, K: Clone, V: Clone> Sequence for &'a HashDict<K, V> {
    type Item = KeyValuePair<K, V>;
    type Session = DictSession<'a, K, V>;

    fn open(&self) -> Self::Session {
        let dict: &'a HashDict<K, V> = *self;
        DictSession {
            entries: dict.entries.iter(),
        }
    }
}

pub struct DictSession<'a, K, V> {
    entries: indexmap::map::Iter<'a, K, V>,
}

impl<K: Clone, V: Clone> Session for DictSession<'_, K, V> {
    type Item = KeyValuePair<K, V>;

    fn pull(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(key, value)| KeyValuePair {
            key: key.clone(),
            value: value.clone(),
        })
    }

    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}
