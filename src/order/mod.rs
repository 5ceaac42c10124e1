//! Orders that adapt or stand in for a [`TotalOrder`].

use crate::{Comparator, HeapError, HeapErrorKind, TotalOrder};
use alloc::boxed::Box;
use core::{cmp::Ordering, fmt};

#[cfg(test)]
mod tests;

/// Reverses the wrapped total order.
///
/// A [`BinaryHeap`](crate::BinaryHeap) under `Reversed(order)` extracts the
/// *greatest* element under `order` first.
///
/// ```
/// use ordheap::{BinaryHeap, OrdTotalOrder, Reversed};
///
/// let mut heap = BinaryHeap::with_order(Reversed(OrdTotalOrder::default()));
/// for x in [10, 20, 15] {
///     heap.add(x).unwrap();
/// }
/// assert_eq!(heap.peek(), Some(&20));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<O>(pub O);

impl<T: ?Sized, O: TotalOrder<T>> TotalOrder<T> for Reversed<O> {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        TotalOrder::cmp(&self.0, that, this)
    }
}

impl<T: ?Sized, O: TotalOrder<T>> Comparator<T> for Reversed<O> {
    #[inline]
    fn compare(&self, this: &T, that: &T) -> Result<Ordering, HeapError> {
        Ok(TotalOrder::cmp(self, this, that))
    }
}

/// A total order that may not have been configured yet.
///
/// The element type is not required to be [`Ord`]. While no order is set,
/// every comparison fails with [`HeapErrorKind::NotComparable`]. A heap only
/// compares once it holds two elements, so the failure surfaces on the second
/// insertion rather than at construction:
///
/// ```
/// use ordheap::{BinaryHeap, DynOrder, HeapErrorKind};
///
/// struct Person { age: u32 }
///
/// let mut heap: BinaryHeap<Person, DynOrder<Person>> = BinaryHeap::default();
/// assert_eq!(heap.add(Person { age: 12 }), Ok(true));
///
/// let err = heap.add(Person { age: 7 }).unwrap_err();
/// assert_eq!(err.kind(), HeapErrorKind::NotComparable);
/// assert_eq!(heap.len(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionalOrder<O>(Option<O>);

/// An [`OptionalOrder`] over a boxed comparison function, chosen at runtime.
pub type DynOrder<T> = OptionalOrder<Box<dyn Fn(&T, &T) -> Ordering>>;

impl<O> OptionalOrder<O> {
    /// No order; comparisons fail until one is [`set`](Self::set).
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Wraps `order`.
    #[must_use]
    pub const fn some(order: O) -> Self {
        Self(Some(order))
    }

    /// Whether an order is configured.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// The configured order, if any.
    #[must_use]
    pub fn get(&self) -> Option<&O> {
        self.0.as_ref()
    }

    /// Configures `order`, returning the one it replaces.
    ///
    /// Only reachable before the order is handed to a heap; a heap never
    /// exposes its order mutably, since that could silently invalidate the
    /// heap property.
    pub fn set(&mut self, order: O) -> Option<O> {
        self.0.replace(order)
    }
}

impl<T: ?Sized> DynOrder<T> {
    /// Boxes `f` as the configured order.
    ///
    /// ```
    /// use ordheap::{BinaryHeap, DynOrder};
    ///
    /// let mut heap = BinaryHeap::with_order(DynOrder::boxed(|a: &u8, b: &u8| b.cmp(a)));
    /// heap.add(1).unwrap();
    /// heap.add(9).unwrap();
    /// assert_eq!(heap.peek(), Some(&9));
    /// ```
    #[must_use]
    pub fn boxed<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::some(Box::new(f))
    }
}

impl<O> Default for OptionalOrder<O> {
    fn default() -> Self {
        Self::none()
    }
}

impl<O> From<Option<O>> for OptionalOrder<O> {
    fn from(order: Option<O>) -> Self {
        Self(order)
    }
}

impl<O> fmt::Debug for OptionalOrder<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("OptionalOrder(Some(..))"),
            None => f.write_str("OptionalOrder(None)"),
        }
    }
}

impl<T: ?Sized, O: TotalOrder<T>> Comparator<T> for OptionalOrder<O> {
    fn compare(&self, this: &T, that: &T) -> Result<Ordering, HeapError> {
        match &self.0 {
            Some(order) => Ok(TotalOrder::cmp(order, this, that)),
            None => Err(HeapErrorKind::NotComparable.into()),
        }
    }
}
