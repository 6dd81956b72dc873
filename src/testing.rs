//! Instrumented sources for exercising release propagation in tests.

use std::{cell::Cell, rc::Rc};

use crate::{Error, Sequence, Session, error::Result};

/// A source that counts pulls, opens, and releases across all its sessions.
pub(crate) struct Probe<T> {
    items: Vec<T>,
    error: Option<Error>,
    counters: Rc<Counters>,
}

#[derive(Default)]
struct Counters {
    opens: Cell<usize>,
    pulls: Cell<usize>,
    releases: Cell<usize>,
}

impl<T: Clone> Probe<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items,
            error: None,
            counters: Rc::default(),
        }
    }

    /// Yields `items`, then fails every release with `error`.
    pub(crate) fn failing(items: Vec<T>, error: Error) -> Self {
        Self {
            error: Some(error),
            ..Self::new(items)
        }
    }

    pub(crate) fn opens(&self) -> usize {
        self.counters.opens.get()
    }

    pub(crate) fn pulls(&self) -> usize {
        self.counters.pulls.get()
    }

    pub(crate) fn releases(&self) -> usize {
        self.counters.releases.get()
    }
}

impl<T: Clone> Sequence for Probe<T> {
    type Item = T;
    type Session = ProbeSession<T>;

    fn open(&self) -> Self::Session {
        self.counters.opens.set(self.counters.opens.get() + 1);
        ProbeSession {
            items: self.items.clone().into_iter(),
            error: self.error.clone(),
            counters: Rc::clone(&self.counters),
        }
    }
}

pub(crate) struct ProbeSession<T> {
    items: std::vec::IntoIter<T>,
    error: Option<Error>,
    counters: Rc<Counters>,
}

impl<T> Session for ProbeSession<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        self.counters.pulls.set(self.counters.pulls.get() + 1);
        self.items.next()
    }

    fn release(&mut self) -> Result<()> {
        self.counters.releases.set(self.counters.releases.get() + 1);
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}
