use crate::{
    Error, Sequence,
    build::{FromSlice, SliceSession, from_slice},
    collections::{Container, Indexable, ListMut, Options},
    error::Result,
};

/// An ordered list backed by a `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceList<T> {
    values: Vec<T>,
}

impl<T> SliceList<T> {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            values: Vec::with_capacity(options.capacity()),
        }
    }

    /// Reverse the list in place.
    pub fn reverse(&mut self) {
        self.values.reverse();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn seq(&self) -> FromSlice<'_, T>
    where
        T: Clone,
    {
        from_slice(&self.values)
    }
}

impl<T> Default for SliceList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SliceList<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T> FromIterator<T> for SliceList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Container for SliceList<T> {
    fn len(&self) -> usize {
        self.values.len()
    }
}

impl<T> Indexable for SliceList<T> {
    type Item = T;

    fn value_at(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }
}

impl<T> ListMut for SliceList<T> {
    fn add(&mut self, value: T) {
        self.values.push(value);
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.values.len() {
            return Err(Error::OutOfRange { index });
        }
        self.values.insert(index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.values.len() {
            return Err(Error::OutOfRange { index });
        }
        Ok(self.values.remove(index))
    }
}

impl<'a, T: Clone> Sequence for &'a SliceList<T> {
    type Item = T;
    type Session = SliceSession<'a, T>;

    fn open(&self) -> Self::Session {
        let list: &'a SliceList<T> = *self;
        list.seq().open()
    }
}
