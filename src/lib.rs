//! Narrow - sequence operators that specialize on what their input can do.
//!
//! Every operator (`any`, `all`, `filter`, `distinct`, `order_by`, `first`,
//! `last`, `take`, `skip`, ...) is resolved at compile time against the
//! richest capability tier of the input type:
//!
//! | Tier | Trait | Extra capability |
//! |------|-------|------------------|
//! | `Plain` | `Sequence` | ordered enumeration |
//! | `Counted` | `Countable` | O(1) element count |
//! | `Indexed` | `Indexable` | O(1) positional access |
//! | `Listed` | `MutableList` | in-place removal and reordering |
//!
//! At run time each operator branches on element count: empty inputs return
//! the canonical empty result, single-element inputs return the source, and
//! inputs at or below the configured threshold use allocation-free pairwise
//! scans before falling back to the general algorithms.
//!
//! # Quick Start
//!
//! ```
//! use narrow::{distinct, filter, first};
//!
//! let numbers = vec![5, 3, 3, 7];
//!
//! let unique = distinct(&numbers);
//! assert_eq!(unique.to_vec(), vec![5, 3, 7]);
//!
//! let all_positive = filter(&numbers, |x| *x > 0);
//! assert!(all_positive.is_source());
//!
//! assert_eq!(first(&numbers), Ok(&5));
//! ```
//!
//! Results borrow the input. A result that hands back the source keeps the
//! source borrowed for as long as it lives, so the input cannot be mutated
//! underneath it.

pub mod capability;
pub mod comparer;
pub mod config;
pub mod empty;
pub mod error;
pub mod ops;
pub mod selection;
pub mod view;

pub use capability::{capability_of, Capability, Countable, Indexable, MutableList, Sequence};
pub use comparer::{ByKey, Comparer, Descending, EqualityComparer, Natural};
pub use config::Config;
pub use empty::EmptySequence;
pub use error::{Error, Result};
pub use ops::in_place::{
    distinct_in_place, filter_in_place, order_in_place_by, skip_in_place, sort_in_place,
    take_in_place,
};
pub use ops::{
    all, any, any_element, contains, contains_by, count, distinct, distinct_by, distinct_by_key,
    element_at, element_at_or_default, filter, first, first_or_default, last, last_or_default,
    order_by, order_by_descending, order_by_with, skip, take, try_skip, try_take, Operators,
};
pub use selection::Selection;
pub use view::{filtered, Filtered};
