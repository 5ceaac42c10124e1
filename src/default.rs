//! The natural order: comparisons that defer to the element type's own [`Ord`]
//! implementation.
//!
//! This is the order a [`BinaryHeap`](crate::BinaryHeap) uses when none is
//! supplied, which makes `BinaryHeap::new()` a plain min-heap.

use crate::{Comparator, HeapError, TotalOrder};
use core::{cmp::Ordering, fmt, marker::PhantomData};

/// A zero-sized total order that delegates to the [`Ord`] implementation
/// of its type parameter `T`.
pub struct OrdTotalOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> Default for OrdTotalOrder<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Clone for OrdTotalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for OrdTotalOrder<T> {}

impl<T: ?Sized> fmt::Debug for OrdTotalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdTotalOrder")
    }
}

impl<T: ?Sized + Ord> TotalOrder<T> for OrdTotalOrder<T> {
    // Delegate to `T`'s implementation of [`Ord`].
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        Ord::cmp(this, that)
    }

    // Overridden so that `T`'s [`PartialEq`] and [`PartialOrd`] are used
    // directly; for consistent implementations this changes nothing.

    fn eq(&self, this: &T, that: &T) -> bool {
        this == that
    }

    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
}

impl<T: ?Sized + Ord> Comparator<T> for OrdTotalOrder<T> {
    #[inline]
    fn compare(&self, this: &T, that: &T) -> Result<Ordering, HeapError> {
        Ok(Ord::cmp(this, that))
    }

    #[inline]
    fn less(&self, this: &T, that: &T) -> Result<bool, HeapError> {
        Ok(this < that)
    }
}
