//! # Pullseq: Lazy, Composable Pull-Based Sequences
//!
//! Build pipelines over sequences that do no work until a value is pulled,
//! and that surface cleanup failures instead of swallowing them.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: A reusable factory that opens fresh sessions
//! - **[`Session`]**: A single-use cursor you `pull()` from and then `release()`
//!
//! ## Key Features
//!
//! - **Lazy**: Composition builds new sequences; nothing is pulled until a terminal runs
//! - **Composable**: `concat`, `distinct`, `filter`, `select`, `select_many`, `skip`,
//!   `take`, `zip`, `group`
//! - **Honest cleanup**: Every operator releases the sessions it opened and forwards
//!   the first release failure to the caller
//!
//! ## Example
//!
//! ```
//! use pullseq::prelude::*;
//!
//! let data = [1, 3, 5, 7, 9];
//! let evens = [2, 4, 6];
//!
//! // Sum pairwise, drop the first pair, then total what is left
//! let pipeline = from_slice(&data)
//!     .zip(from_slice(&evens), |a, b| a + b) // 3, 7, 11
//!     .skip(1);                              // 7, 11
//!
//! assert_eq!(sum(&pipeline).unwrap(), 18);
//! assert_eq!(to_vec(&pipeline).unwrap(), vec![7, 11]);
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`from_slice(items)`](build::from_slice) / [`from_vec(items)`](build::from_vec) - Walk existing storage
//! - [`repeat(value, n)`](build::repeat) - Yield one value `n` times
//! - [`fail(error)`](build::fail) - Yield nothing, fail on release
//!
//! **Terminals:**
//! - [`to_vec`](scalar::to_vec), [`sum`](scalar::sum), [`fold`](scalar::fold),
//!   [`first`](scalar::first), [`max`](scalar::max), and the rest of [`scalar`]

pub mod build;
pub mod collections;
pub mod compose;
mod error;
mod iter;
pub mod prelude;
pub mod scalar;
mod sequence;
mod session;

#[cfg(test)]
mod testing;

pub use compose::Grouping;
pub use collections::KeyValuePair;
pub use error::{Error, Result};
pub use iter::SessionIter;
pub use sequence::{BoxedSequence, Sequence};
pub use session::Session;
