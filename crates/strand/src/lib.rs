//! A pull-based lazy sequence engine.
//!
//! Everything in this crate is built on a three-operation pull protocol:
//! [`Cursor::has_next`] reports whether a current element exists,
//! [`Cursor::get`] reads it without consuming it, and [`Cursor::advance`]
//! discards it and moves on. Sources borrow caller-owned storage, adapters
//! wrap other cursors by value, and nothing is computed before it is pulled.
//!
//! Optional capabilities are structural rather than declared: a cursor is
//! [`Counted`] when it can report its exact remaining length in constant
//! time, [`Reversible`] when it can produce a mirror over the same remaining
//! range, and duplicable when it is [`Clone`]. Every adapter forwards a
//! capability exactly when its inputs have it and its own logic preserves
//! it, so deep pipelines keep their capabilities without any per-stage
//! opt-in.
//!
//! Pipelines can be spelled two ways which produce identical cursors:
//! fluent combinator methods, or sourceless [`stage`] descriptors bound to
//! a source with [`Cursor::pipe`].
//!
//! ```
//! use strand::{algo, stage, Cursor, Slice};
//!
//! let values = [1, 2, 3, 4, 5, 6];
//!
//! let even = Slice::new(&values)
//!     .filter(|n| **n % 2 == 0)
//!     .map(|n| *n * 10);
//! let even: Vec<i32> = algo::collect(even);
//! assert_eq!(even, vec![20, 40, 60]);
//!
//! let total = Slice::new(&values).map(|n| *n).pipe(stage::sum());
//! assert_eq!(total, 21);
//! ```

#![deny(missing_docs)]

pub mod algo;
mod bridge;
mod bytes;
mod cached;
mod chain;
mod counted;
mod cross;
mod cursor;
mod error;
mod filter;
mod map;
mod once;
mod pair;
mod pairs;
mod slice;
mod span;
pub mod stage;
mod take;
mod zip;

pub use crate::bridge::Iter;
pub use crate::bytes::NulTerminated;
pub use crate::cached::Cached;
pub use crate::chain::Chain;
pub use crate::counted::WithCount;
pub use crate::cross::Cross;
pub use crate::cursor::{Counted, Cursor, Reversible};
pub use crate::error::Error;
pub use crate::filter::Filter;
pub use crate::map::Map;
pub use crate::once::Once;
pub use crate::pair::Pair;
pub use crate::pairs::UnorderedPairs;
pub use crate::slice::{RevSlice, Slice};
pub use crate::span::{RevSpan, Span, Step, Unbounded};
pub use crate::take::Take;
pub use crate::zip::Zip;
