//! Combining sequences together
//!
//! Every operator here takes sequences and returns a new [`Sequence`](crate::Sequence)
//! without pulling anything. Work happens only when a session of the result
//! is pulled, one element at a time, all the way down to the source.

mod concat;
mod filter;
mod group;
mod select;
mod window;
mod zip;

pub use concat::{Concat, ConcatSession, concat};
pub use filter::{Distinct, DistinctSession, Filter, FilterSession, distinct, filter};
pub use group::{Group, GroupSession, Grouping, group};
pub use select::{Select, SelectMany, SelectManySession, SelectSession, select, select_many};
pub use window::{Skip, SkipSession, Take, TakeSession, skip, take};
pub use zip::{Zip, ZipSession, zip};
