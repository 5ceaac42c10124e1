use core::fmt::{self, Display};

/// The error type for fallible [`BinaryHeap`](crate::BinaryHeap) operations.
///
/// A heap operation that returns an error leaves the heap exactly as it found
/// it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HeapError {
    kind: HeapErrorKind,
}

impl HeapError {
    pub(crate) const fn new(kind: HeapErrorKind) -> Self {
        Self { kind }
    }

    /// Details about the cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> HeapErrorKind {
        self.kind
    }
}

/// Details of what caused a [`HeapError`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum HeapErrorKind {
    /// An absent (`None`) element was offered to [`BinaryHeap::add`].
    ///
    /// [`BinaryHeap::add`]: crate::BinaryHeap::add
    NullElement,

    /// Two elements had to be compared but the heap has no ordering to
    /// compare them by.
    NotComparable,
}

impl From<HeapErrorKind> for HeapError {
    #[inline]
    fn from(kind: HeapErrorKind) -> Self {
        Self::new(kind)
    }
}

impl Display for HeapError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(match self.kind {
            HeapErrorKind::NullElement => "the element can not be null",
            HeapErrorKind::NotComparable => {
                "elements must be comparable or an ordering must be supplied"
            }
        })
    }
}

#[cfg(any(feature = "std", feature = "error_in_core"))]
impl crate::polyfill::Error for HeapError {}
