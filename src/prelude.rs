//! Commonly used imports
//!
//! Use `use pullseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Error, Grouping, Sequence, Session};

// Sources
pub use crate::build::{empty, fail, from_fn, from_slice, from_vec, repeat};

// Composition
pub use crate::compose::{concat, distinct, filter, group, select, select_many, skip, take, zip};

// Terminals
pub use crate::scalar::{
    all, any, contains, element_at, first, first_or_default, fold, for_each, last,
    last_or_default, len, max, min, reduce, sum, to_vec,
};
