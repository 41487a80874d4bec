// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Smartcoll Collections
//!
//! A uniform functional algebra over four collection shapes. Each shape
//! wraps a standard host collection and exposes the same contract
//! (transformation, predicate queries, filtering, folding, joining) plus
//! the operations specific to its structure.
//!
//! ## Modules
//!
//! - `collection`: the `SmartCollection` capability set shared by the
//!   element-based shapes, and `NumericCollection` helpers (`sum`,
//!   `product`, `min_value`, `max_value`, `increment_each`,
//!   `decrement_each`) for numeric elements.
//! - `seq`: `SmartSeq`, the ordered sequence (`head`, `tail`, `take`,
//!   `drop`, `zip_with`, `intersperse`, `flatten`, ...).
//! - `set`: `SmartSet` (hashed) and `SmartSortedSet` (ordered) with the
//!   `SmartSetOps` algebra (`union`, `intersection`, `difference`, subset
//!   and superset queries).
//! - `queue`: `SmartQueue`, a FIFO queue (`offer`, `poll`, `peek`, ...).
//! - `map`: `SmartMap`, a key-value mapping with entry-wise algebra plus
//!   `merge_with`, `swap` and `is_bijective`.
//! - `functions` / `predicates`: ready-made closures for the algebra.
//! - `error`: `CollectionError`.
//!
//! ## Ownership
//!
//! A decorator owns its host collection. Operations taking `&self` return
//! fresh collections that share nothing with the receiver; operations
//! taking `&mut self` mutate in place and hand the receiver back for
//! chaining. Decorators are plain values: they are `Send`/`Sync` exactly
//! when their elements are, and concurrent mutation needs external
//! synchronization like any other owned collection.
//!
//! ```rust
//! use smartcoll_collections::prelude::*;
//!
//! let mut seq = SmartSeq::from([1, 2, 2, 3]);
//! seq.remove_duplicates().intersperse(0);
//! assert_eq!(seq.join(" "), "1 0 2 0 3");
//! assert_eq!(seq.sum(), Ok(6));
//! ```

pub mod collection;
pub mod error;
pub mod functions;
pub mod map;
pub mod predicates;
pub mod queue;
pub mod seq;
pub mod set;

pub use error::CollectionError;

/// Glob-importable set of the decorator types and traits.
pub mod prelude {
    pub use crate::{
        collection::{NumericCollection, SmartCollection},
        error::CollectionError,
        map::SmartMap,
        queue::SmartQueue,
        seq::{Nested, SmartSeq},
        set::{SmartSet, SmartSetOps, SmartSortedSet},
    };
}
