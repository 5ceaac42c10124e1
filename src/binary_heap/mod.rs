//! A priority queue implemented with a binary heap.
//!
//! Insertion and extraction of the least element are *O*(log(*n*)). Peeking
//! at the least element is *O*(1). The backing store starts with room for
//! [`INITIAL_CAPACITY`] elements and doubles whenever it fills up, so insertion
//! is amortized *O*(log(*n*)) including growth.
//!
//! # Examples
//!
//! Scheduling jobs by deadline, earliest first, with an explicit order over a
//! type that has no natural one:
//!
//! ```
//! use ordheap::BinaryHeap;
//!
//! #[derive(Debug, PartialEq)]
//! struct Job {
//!     name: &'static str,
//!     deadline: u32,
//! }
//!
//! let mut jobs = BinaryHeap::with_order(|a: &Job, b: &Job| a.deadline.cmp(&b.deadline));
//!
//! jobs.add(Job { name: "report", deadline: 30 })?;
//! jobs.add(Job { name: "backup", deadline: 10 })?;
//! jobs.add(Job { name: "deploy", deadline: 20 })?;
//!
//! let mut order = Vec::new();
//! while let Some(job) = jobs.extract_min()? {
//!     order.push(job.name);
//! }
//! assert_eq!(order, ["backup", "deploy", "report"]);
//! # Ok::<(), ordheap::HeapError>(())
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::mem::ManuallyDrop;
use core::ptr;

use alloc::slice;
use alloc::vec::{self, Vec};

use crate::{Comparator, HeapError, HeapErrorKind, OrdTotalOrder};


/// Number of slots a heap allocates when it is constructed.
pub const INITIAL_CAPACITY: usize = 8;

/// A priority queue implemented with a binary heap.
///
/// This is a min-heap under the order `O`: the root, and so [`peek`] and
/// [`extract_min`], is always an element that no other element compares less
/// than. Elements that compare equal are extracted in an unspecified order.
///
/// `O` defaults to [`OrdTotalOrder`], the element type's own [`Ord`]. Any
/// closure `Fn(&T, &T) -> Ordering` can be supplied instead with
/// [`with_order`].
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item changes while it is in the heap.
/// The behavior resulting from such a logic error is not specified, but will
/// not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use ordheap::BinaryHeap;
///
/// let mut heap = BinaryHeap::new();
///
/// // Nothing to look at yet.
/// assert_eq!(heap.peek(), None);
///
/// heap.add(5)?;
/// heap.add(7)?;
/// heap.add(3)?;
/// heap.add(4)?;
///
/// assert_eq!(heap.peek(), Some(&3));
/// assert_eq!(heap.len(), 4);
///
/// // The slots in heap order: a valid heap, not a sorted sequence.
/// assert_eq!(heap.to_contents(), [3, 4, 5, 7]);
///
/// assert_eq!(heap.extract_min()?, Some(3));
/// assert_eq!(heap.peek(), Some(&4));
/// assert_eq!(heap.len(), 3);
/// # Ok::<(), ordheap::HeapError>(())
/// ```
///
/// # Time complexity
///
/// | [add]          | [extract_min]  | [peek] |
/// |----------------|----------------|--------|
/// | *O*(log(*n*))~ | *O*(log(*n*))  | *O*(1) |
///
/// The value for `add` is amortized over the growth of the backing store.
///
/// [peek]: BinaryHeap::peek
/// [`peek`]: BinaryHeap::peek
/// [add]: BinaryHeap::add
/// [extract_min]: BinaryHeap::extract_min
/// [`extract_min`]: BinaryHeap::extract_min
/// [`with_order`]: BinaryHeap::with_order
pub struct BinaryHeap<T, O = OrdTotalOrder<T>> {
    data: Vec<T>,
    order: O,
}

impl<T: Clone, O: Clone> Clone for BinaryHeap<T, O> {
    fn clone(&self) -> Self {
        // Keep the source's capacity; a heap's storage never shrinks.
        let mut data = Vec::with_capacity(self.data.capacity());
        data.extend_from_slice(&self.data);
        BinaryHeap { data, order: self.order.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.order.clone_from(&source.order);
    }
}

impl<T, O: Default> Default for BinaryHeap<T, O> {
    /// Creates an empty `BinaryHeap` under `O`'s default order.
    #[inline]
    fn default() -> BinaryHeap<T, O> {
        BinaryHeap::with_order(O::default())
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty `BinaryHeap` ordered by `T`'s [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordheap::BinaryHeap;
    /// let mut heap = BinaryHeap::new();
    /// heap.add(4).unwrap();
    /// ```
    #[must_use]
    pub fn new() -> BinaryHeap<T> {
        BinaryHeap::with_order(OrdTotalOrder::default())
    }
}

impl<T, O> BinaryHeap<T, O> {
    /// Creates an empty `BinaryHeap` ordered by `order`.
    ///
    /// # Examples
    ///
    /// A max-heap over integers:
    ///
    /// ```
    /// use ordheap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::with_order(|a: &i32, b: &i32| b.cmp(a));
    /// heap.add(10).unwrap();
    /// heap.add(20).unwrap();
    /// heap.add(15).unwrap();
    /// assert_eq!(heap.peek(), Some(&20));
    /// ```
    #[must_use]
    pub fn with_order(order: O) -> BinaryHeap<T, O> {
        BinaryHeap::with_capacity_and_order(INITIAL_CAPACITY, order)
    }

    /// Creates an empty `BinaryHeap` ordered by `order` with room for at least
    /// `capacity` elements before it first grows.
    #[must_use]
    pub fn with_capacity_and_order(capacity: usize, order: O) -> BinaryHeap<T, O> {
        BinaryHeap { data: Vec::with_capacity(capacity), order }
    }

    /// Returns the least item in the binary heap, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordheap::BinaryHeap;
    /// let mut heap = BinaryHeap::new();
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.add(6).unwrap();
    /// heap.add(1).unwrap();
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the number of elements in the binary heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the binary heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the binary heap can hold before its
    /// backing store is next grown.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The order this heap compares its elements by.
    #[must_use]
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns a slice of the live elements in heap-array order.
    ///
    /// Slot `0` holds the least element and the children of slot `i` are
    /// slots `2 * i + 1` and `2 * i + 2`; beyond that the layout is an
    /// implementation detail and is *not* sorted.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Copies the live elements out in heap-array order.
    ///
    /// See [`as_slice`](Self::as_slice) for what that order means. Repeated
    /// calls with no mutation in between return the same sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordheap::BinaryHeap;
    /// let mut heap = BinaryHeap::new();
    /// for x in [6, 1, 3, 2] {
    ///     heap.add(x).unwrap();
    /// }
    /// assert_eq!(heap.to_contents(), [1, 2, 3, 6]);
    /// ```
    #[must_use]
    pub fn to_contents(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.to_vec()
    }

    /// Returns an iterator visiting all values in heap-array order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Consumes the `BinaryHeap` and returns the underlying vector in
    /// heap-array order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Clears the binary heap, returning an iterator over the removed elements
    /// in heap-array order. Capacity is retained.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { iter: self.data.drain(..) }
    }

    /// Drops all items from the binary heap. Capacity is retained.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Doubles the backing store. Live elements keep their slots.
    ///
    /// Capacity stays the initial capacity (or 1, from empty) times a power
    /// of two, independent of `Vec`'s own growth strategy.
    fn grow(&mut self) {
        let additional = self.data.capacity().max(1);
        self.data.reserve_exact(additional);
    }
}

impl<T, O: Comparator<T>> BinaryHeap<T, O> {
    /// Inserts `item`, returning `Ok(true)`.
    ///
    /// `item` may be given as a bare `T` or as an `Option<T>`; `None` stands
    /// for an absent element and is rejected.
    ///
    /// When `T` is itself an `Option`, a bare `None` is ambiguous and will not
    /// infer. Use [`push`](Self::push) to insert `None` as an element, or
    /// spell out `None::<T>` to pass the absent element.
    ///
    /// # Errors
    ///
    /// - [`HeapErrorKind::NullElement`] if `item` is `None`.
    /// - [`HeapErrorKind::NotComparable`] if the heap's order cannot compare
    ///   `item` with the elements it has to be sifted past.
    ///
    /// On error the heap is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordheap::{BinaryHeap, HeapErrorKind};
    ///
    /// let mut heap = BinaryHeap::new();
    /// assert_eq!(heap.add(3), Ok(true));
    ///
    /// let err = heap.add(None).unwrap_err();
    /// assert_eq!(err.kind(), HeapErrorKind::NullElement);
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn add(&mut self, item: impl Into<Option<T>>) -> Result<bool, HeapError> {
        let item = item.into().ok_or_else(|| HeapError::from(HeapErrorKind::NullElement))?;
        self.push(item)?;
        Ok(true)
    }

    /// Pushes an item onto the binary heap.
    ///
    /// # Errors
    ///
    /// [`HeapErrorKind::NotComparable`] if the heap's order cannot compare
    /// `item` with the elements it has to be sifted past. On error the heap is
    /// left unchanged.
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)) comparisons. When the backing store is full it is first
    /// doubled, which is *O*(*n*) but amortizes to *O*(1) per push.
    pub fn push(&mut self, item: T) -> Result<(), HeapError> {
        let pos = self.len();
        let target = self.sift_up_target(&item, pos)?;

        if pos == self.data.capacity() {
            self.grow();
        }
        self.data.push(item);

        // SAFETY: `item` was just pushed to slot `pos`, so pos < self.len(),
        //  and `target` is `pos` or one of its ancestors.
        unsafe { self.sift_up(target, pos) };
        Ok(())
    }

    /// Removes the least item from the binary heap and returns it, or `None`
    /// if it is empty.
    ///
    /// # Errors
    ///
    /// [`HeapErrorKind::NotComparable`] if the heap's order cannot compare
    /// the elements that have to be reordered. On error the heap is left
    /// unchanged and nothing is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordheap::BinaryHeap;
    /// let mut heap = BinaryHeap::new();
    /// heap.add(10)?;
    /// heap.add(3)?;
    ///
    /// assert_eq!(heap.extract_min()?, Some(3));
    /// assert_eq!(heap.extract_min()?, Some(10));
    /// assert_eq!(heap.extract_min()?, None);
    /// assert!(heap.is_empty());
    /// # Ok::<(), ordheap::HeapError>(())
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `extract_min` on a heap containing *n* elements
    /// is *O*(log(*n*)).
    pub fn extract_min(&mut self) -> Result<Option<T>, HeapError> {
        let end = match self.len() {
            0 => return Ok(None),
            1 => return Ok(self.data.pop()),
            len => len - 1,
        };

        let target = self.sift_down_target(end)?;
        // Moves the last element into the root slot.
        let min = self.data.swap_remove(0);

        // SAFETY: self.len() == end >= 1 and `target` was chosen among the
        //  slots below `end`.
        unsafe { self.sift_down(target) };
        Ok(Some(min))
    }

    /// Same as [`extract_min`](Self::extract_min).
    ///
    /// # Errors
    ///
    /// As for [`extract_min`](Self::extract_min).
    #[inline]
    pub fn pop(&mut self) -> Result<Option<T>, HeapError> {
        self.extract_min()
    }

    /// Pushes every item of `iter`, stopping at the first error.
    ///
    /// # Errors
    ///
    /// As for [`push`](Self::push); items before the failing one stay in the
    /// heap, the failing one and any after it are dropped.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), HeapError> {
        iter.into_iter().try_for_each(|item| self.push(item))
    }

    /// Consumes the `BinaryHeap` and returns a vector sorted in ascending
    /// order under the heap's order.
    ///
    /// # Errors
    ///
    /// As for [`extract_min`](Self::extract_min).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordheap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::new();
    /// heap.try_extend([1, 2, 4, 5, 7])?;
    /// heap.add(6)?;
    /// heap.add(3)?;
    ///
    /// assert_eq!(heap.into_sorted_vec()?, [1, 2, 3, 4, 5, 6, 7]);
    /// # Ok::<(), ordheap::HeapError>(())
    /// ```
    pub fn into_sorted_vec(mut self) -> Result<Vec<T>, HeapError> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.extract_min()? {
            sorted.push(item);
        }
        Ok(sorted)
    }

    // Sifting is split in two. The `*_target` half walks the path the moving
    // element would take, making every comparison without touching the
    // store, and is the only half that can fail. The other half then moves
    // the elements along that path using a `Hole`: the moving element is
    // taken out, the others are shifted into the hole, and the element is
    // written back at the end. No comparison (and so no user code) runs while
    // the hole is open.

    /// Finds the slot an element placed at `pos` rises to.
    ///
    /// Walks up while `item` compares strictly less than the parent, so it
    /// stops below the first ancestor it does not beat, equal ones included.
    fn sift_up_target(&self, item: &T, mut pos: usize) -> Result<usize, HeapError> {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.order.less(item, &self.data[parent])? {
                break;
            }
            pos = parent;
        }
        Ok(pos)
    }

    /// Finds the slot the element at `end` sinks to when it replaces the
    /// root of the heap `data[..end]`.
    ///
    /// At each level the right child is chosen only if it is less than both
    /// the left child and the moving element; otherwise the left child is
    /// chosen if it is less than the moving element. Neither means the
    /// element stays.
    fn sift_down_target(&self, end: usize) -> Result<usize, HeapError> {
        let item = &self.data[end];
        let mut pos = 0;

        loop {
            let left = 2 * pos + 1;
            if left >= end {
                break;
            }
            let right = left + 1;

            pos = if right < end
                && self.order.less(&self.data[right], &self.data[left])?
                && self.order.less(&self.data[right], item)?
            {
                right
            } else if self.order.less(&self.data[left], item)? {
                left
            } else {
                break;
            };
        }
        Ok(pos)
    }
}

impl<T, O> BinaryHeap<T, O> {
    /// Moves the element at `pos` up to `target`, shifting each ancestor in
    /// between down one level.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()` and that `target` is
    /// `pos` or an ancestor of it.
    unsafe fn sift_up(&mut self, target: usize, pos: usize) {
        // SAFETY: The caller guarantees that pos < self.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > target {
            let parent = (hole.pos() - 1) / 2;

            // SAFETY: hole.pos() > target >= 0, so parent < hole.pos() is a
            //  valid index distinct from the hole.
            unsafe { hole.move_to(parent) };
        }
        debug_assert_eq!(hole.pos(), target);
    }

    /// Moves the element at the root down to `target`, shifting each
    /// descendant on the way up one level.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `target < self.len()`.
    unsafe fn sift_down(&mut self, target: usize) {
        debug_assert!(target < self.len());

        // SAFETY: target < self.len(), so the heap is not empty.
        let mut hole = unsafe { Hole::new(&mut self.data, 0) };

        // Numbering slots from one, the ancestors of slot `node` are exactly
        // its right shifts, so the path from the root is read off its bits.
        let node = target + 1;
        let depth = (usize::BITS - 1 - node.leading_zeros()) as usize;
        for shift in (0..depth).rev() {
            // SAFETY: every right shift of `node` names an ancestor of
            //  `target` (or `target` itself), each below the current hole.
            unsafe { hole.move_to((node >> shift) - 1) };
        }
        debug_assert_eq!(hole.pos(), target);
    }
}

/// A slot of the heap whose element has been taken out and is carried
/// along while other elements are shifted into the slot.
///
/// Dropping the `Hole` writes the carried element into whichever slot is
/// open at that point, so the slice is whole again even on unwind.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Opens a hole at `pos`, taking its element out.
    ///
    /// # Safety
    ///
    /// `pos` must be within `data`.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFETY: The caller guarantees that pos < data.len(). The element
        //  read here is written back exactly once, when the hole drops.
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Shifts the element at `index` into the hole, which moves to `index`.
    ///
    /// # Safety
    ///
    /// `index` must be within the slice and must differ from the hole.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        // SAFETY: Both slots are in bounds and distinct, so the copy does
        //  not overlap; afterwards `index` holds the stale duplicate.
        unsafe {
            let base = self.data.as_mut_ptr();
            let from: *const T = base.add(index);
            ptr::copy_nonoverlapping(from, base.add(self.pos), 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: `pos` is always in bounds and holds a stale duplicate, so
        //  overwriting it with the carried element neither leaks nor drops
        //  twice.
        unsafe {
            let slot = self.data.get_unchecked_mut(self.pos);
            ptr::copy_nonoverlapping(&*self.elt, slot, 1);
        }
    }
}

/// An iterator over the elements of a `BinaryHeap`, in heap-array order.
///
/// This `struct` is created by [`BinaryHeap::iter()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `BinaryHeap`, in heap-array
/// order.
///
/// This `struct` is created by [`BinaryHeap::into_iter()`]
/// (provided by the [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// A draining iterator over the elements of a `BinaryHeap`, in heap-array
/// order.
///
/// This `struct` is created by [`BinaryHeap::drain()`].
#[derive(Debug)]
pub struct Drain<'a, T: 'a> {
    iter: vec::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T, O> From<BinaryHeap<T, O>> for Vec<T> {
    /// Converts a `BinaryHeap<T>` into a `Vec<T>` in heap-array order.
    fn from(heap: BinaryHeap<T, O>) -> Vec<T> {
        heap.data
    }
}

impl<T, O> IntoIterator for BinaryHeap<T, O> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of
    /// the binary heap in heap-array order. The binary heap cannot be used
    /// after calling this.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, O> IntoIterator for &'a BinaryHeap<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
