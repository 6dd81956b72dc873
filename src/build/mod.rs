//! Building sequences from scratch
//!
//! This module provides the source constructors every pipeline starts from.

mod fail;
mod func;
mod repeat;
mod slice;

pub use fail::{Fail, FailSession, fail};
pub use func::{FromFn, IterSession, from_fn};
pub use repeat::{Empty, EmptySession, Repeat, RepeatSession, empty, repeat};
pub use slice::{FromSlice, FromVec, SliceSession, VecSession, from_slice, from_vec};
