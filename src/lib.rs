//! A priority queue backed by a binary heap, ordered either by the elements'
//! own [`Ord`] implementation or by a total order supplied at construction.
//!
//! The heap is a *min*-heap under its order: [`BinaryHeap::peek`] and
//! [`BinaryHeap::extract_min`] yield the least element. A max-heap is just a
//! min-heap under a [`Reversed`] order.
//!
//! ```
//! use ordheap::{BinaryHeap, Reversed, OrdTotalOrder};
//!
//! let mut heap = BinaryHeap::new();
//! heap.add(6).unwrap();
//! heap.add(1).unwrap();
//! heap.add(3).unwrap();
//! assert_eq!(heap.peek(), Some(&1));
//!
//! let mut max = BinaryHeap::with_order(Reversed(OrdTotalOrder::default()));
//! max.add(10).unwrap();
//! max.add(20).unwrap();
//! assert_eq!(max.extract_min(), Ok(Some(20)));
//! ```
//!
//! Element types that are neither [`Ord`] nor given an explicit order are
//! rejected when the heap is named, not when it is used:
//!
//! ```compile_fail
//! use ordheap::BinaryHeap;
//!
//! struct Point { x: i32, y: i32 }
//!
//! let mut heap = BinaryHeap::new();
//! heap.add(Point { x: 1, y: 2 }).unwrap();
//! ```
//!
//! Where the order is only known at runtime, [`OptionalOrder`] defers that
//! rejection to the first comparison; see its documentation.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "error_in_core", feature(error_in_core))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::bool_assert_comparison, clippy::useless_vec))]

extern crate alloc;

mod polyfill;

pub mod binary_heap;
pub mod default;
mod error;
pub mod order;

pub use binary_heap::{BinaryHeap, INITIAL_CAPACITY};
pub use default::OrdTotalOrder;
pub use error::{HeapError, HeapErrorKind};
pub use order::{DynOrder, OptionalOrder, Reversed};

use core::cmp::Ordering;

/// A total order over values of type `T`.
///
/// Implementations must be consistent for the lifetime of any heap that uses
/// them: reflexive, antisymmetric and transitive over every element that is
/// ever inserted. Violating this is a logic error; the heap stays memory safe
/// but may yield elements out of order.
///
/// Every closure or function of the shape `Fn(&T, &T) -> Ordering` is a
/// `TotalOrder<T>`.
pub trait TotalOrder<T: ?Sized> {
    /// Three-way comparison of `this` against `that`.
    fn cmp(&self, this: &T, that: &T) -> Ordering;

    /// Tests for `this == that` under this total order.
    fn eq(&self, this: &T, that: &T) -> bool {
        TotalOrder::cmp(self, this, that).is_eq()
    }

    /// Tests for `this < that` under this total order.
    fn lt(&self, this: &T, that: &T) -> bool {
        TotalOrder::cmp(self, this, that).is_lt()
    }
    /// Tests for `this <= that` under this total order.
    fn le(&self, this: &T, that: &T) -> bool {
        TotalOrder::cmp(self, this, that).is_le()
    }
    /// Tests for `this > that` under this total order.
    fn gt(&self, this: &T, that: &T) -> bool {
        TotalOrder::cmp(self, this, that).is_gt()
    }
    /// Tests for `this >= that` under this total order.
    fn ge(&self, this: &T, that: &T) -> bool {
        TotalOrder::cmp(self, this, that).is_ge()
    }
}

impl<T: ?Sized, F> TotalOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self(this, that)
    }
}

/// Resolves how two elements of a heap compare.
///
/// This is the seam a [`BinaryHeap`] goes through for every comparison it
/// makes. Closures, [`OrdTotalOrder`] and [`Reversed`] are comparators that
/// never fail; an [`OptionalOrder`] fails with
/// [`HeapErrorKind::NotComparable`] while it has no order to delegate to.
///
/// A custom [`TotalOrder`] type can drive a heap by implementing this trait
/// too, usually with `Ok(TotalOrder::cmp(self, this, that))`, or by being
/// wrapped in [`OptionalOrder::some`].
pub trait Comparator<T: ?Sized> {
    /// Three-way comparison of `this` against `that`.
    ///
    /// # Errors
    ///
    /// Returns an error if no ordering can be resolved for the two elements.
    fn compare(&self, this: &T, that: &T) -> Result<Ordering, HeapError>;

    /// Tests for `this < that`, strictly.
    ///
    /// # Errors
    ///
    /// As for [`compare`](Comparator::compare).
    fn less(&self, this: &T, that: &T) -> Result<bool, HeapError> {
        self.compare(this, that).map(Ordering::is_lt)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, this: &T, that: &T) -> Result<Ordering, HeapError> {
        Ok(self(this, that))
    }
}

#[cfg(test)]
#[allow(dead_code)] // Not used in all configurations
pub(crate) mod test_helpers {
    /// Copied from `std::test_helpers::test_rng`, since these tests rely on the
    /// seed not being the same for every RNG invocation too.
    #[track_caller]
    pub(crate) fn test_rng() -> rand_xorshift::XorShiftRng {
        use std::hash::{BuildHasher, Hash, Hasher};
        let mut hasher = std::collections::hash_map::RandomState::new().build_hasher();
        std::panic::Location::caller().hash(&mut hasher);
        let hc64 = hasher.finish();
        let seed_vec =
            hc64.to_le_bytes().into_iter().chain(0u8..8).collect::<alloc::vec::Vec<u8>>();
        let seed: [u8; 16] = seed_vec.as_slice().try_into().unwrap();
        rand::SeedableRng::from_seed(seed)
    }
}
