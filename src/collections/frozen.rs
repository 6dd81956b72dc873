use crate::{
    Sequence,
    collections::{Container, Indexable, Keyed, Membership},
};

/// Read-only view of a container.
///
/// Forwards every read capability of the wrapped container and none of its
/// mutation traits, so a `Frozen<SliceList<T>>` can be indexed and iterated
/// but not changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frozen<C> {
    inner: C,
}

impl<C> Frozen<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    /// Give back the wrapped container, mutable again.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Container> Container for Frozen<C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<C: Indexable> Indexable for Frozen<C> {
    type Item = C::Item;

    fn value_at(&self, index: usize) -> Option<&Self::Item> {
        self.inner.value_at(index)
    }
}

impl<C: Keyed> Keyed for Frozen<C> {
    type Key = C::Key;
    type Value = C::Value;

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.inner.contains_key(key)
    }

    fn value(&self, key: &Self::Key) -> Option<&Self::Value> {
        self.inner.value(key)
    }
}

impl<C: Membership> Membership for Frozen<C> {
    type Item = C::Item;

    fn contains(&self, value: &Self::Item) -> bool {
        self.inner.contains(value)
    }
}

impl<'a, C> Sequence for &'a Frozen<C>
where
    &'a C: Sequence,
{
    type Item = <&'a C as Sequence>::Item;
    type Session = <&'a C as Sequence>::Session;

    fn open(&self) -> Self::Session {
        let frozen: &'a Frozen<C> = *self;
        (&frozen.inner).open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{HashDict, HashedSet, KeyValuePair, SliceList};
    use crate::scalar::{first, to_vec};

    #[test]
    fn test_frozen_list_forwards_reads() {
        let frozen = Frozen::new(SliceList::from(vec![5, 6]));
        assert_eq!(frozen.len(), 2);
        assert_eq!(frozen.value_at(0), Some(&5));
        assert_eq!(to_vec(&frozen).unwrap(), vec![5, 6]);
    }

    #[test]
    fn test_frozen_dict_forwards_reads() {
        let dict: HashDict<u8, char> = [(1, 'a'), (2, 'b')].into_iter().collect();
        let frozen = Frozen::new(dict);
        assert!(frozen.contains_key(&2));
        assert_eq!(frozen.value(&1), Some(&'a'));
        assert_eq!(
            first(&frozen).unwrap(),
            KeyValuePair { key: 1, value: 'a' }
        );
    }

    #[test]
    fn test_frozen_set_forwards_reads() {
        let frozen = Frozen::new(HashedSet::from_iter(["x", "y"]));
        assert!(frozen.contains(&"y"));
        assert!(!frozen.is_empty());
        assert_eq!(frozen.get_ref().len(), 2);
        assert_eq!(frozen.into_inner().len(), 2);
    }
}
