//! Sequences: input ranges and output cursors.
//!
//! Input ranges are consumed by value. Host slices are `Copy` views, so
//! passing `&v[..]` twice (as data and as stencil) costs nothing; iterator
//! adaptors declare how many times they can be walked.
//!
//! | Type | Role | Tag |
//! |------|------|-----|
//! | `&[T]`, `&[T; N]`, `&Vec<T>` | input | `RandomAccess` x `Host` |
//! | [`SinglePass<I>`] | input | `SinglePass` x `Host` |
//! | [`Forward<I>`] | input | `Forward` x `Host` |
//! | [`Bidirectional<I>`] | input | `Bidirectional` x `Host` |
//! | [`SliceCursor`] | output | `RandomAccess` x `Host` |
//! | [`BackInserter`] | output | `SinglePass` x `Host` |

use core::iter::{Cloned, Peekable};
use core::slice;

use crate::tag::{self, Capability, Host};

// =============================================================================
// Traits
// =============================================================================

/// A finite, ordered, half-open range read front to back.
pub trait InputRange: Capability + Sized {
    type Item;
    type Cursor: Iterator<Item = Self::Item>;

    /// `true` when the range has no elements.
    ///
    /// Takes `&mut self` so single-pass ranges can look ahead without
    /// losing the element.
    fn is_empty(&mut self) -> bool;

    fn into_cursor(self) -> Self::Cursor;
}

/// An input range backed by one contiguous slice.
pub trait ContiguousRange: InputRange {
    fn as_slice(&self) -> &[Self::Item];

    fn len(&self) -> usize {
        self.as_slice().len()
    }
}

/// Write position in a destination sequence.
///
/// Algorithms return the cursor after their last write, i.e. one past the
/// last written element.
pub trait OutputCursor<T>: Capability {
    fn put(&mut self, value: T);

    /// Elements written through this cursor so far.
    fn written(&self) -> usize;
}

/// An output cursor over contiguous storage.
pub trait ContiguousCursor<T>: OutputCursor<T> {
    /// Storage not yet written.
    fn unwritten(&mut self) -> &mut [T];

    /// Mark the first `n` unwritten slots as written.
    fn advance(&mut self, n: usize);
}

// =============================================================================
// Host slices
// =============================================================================

macro_rules! host_slice_range {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Capability for $ty {
                type Traversal = tag::RandomAccess;
                type Residency = Host;
            }

            impl<$($generics)*> InputRange for $ty
            where
                T: Clone,
            {
                type Item = T;
                type Cursor = Cloned<slice::Iter<'a, T>>;

                #[inline]
                fn is_empty(&mut self) -> bool {
                    <[T]>::is_empty(&self[..])
                }

                #[inline]
                fn into_cursor(self) -> Self::Cursor {
                    self.iter().cloned()
                }
            }

            impl<$($generics)*> ContiguousRange for $ty
            where
                T: Clone,
            {
                #[inline]
                fn as_slice(&self) -> &[T] {
                    &self[..]
                }
            }
        )*
    };
}

host_slice_range! {
    ['a, T] &'a [T],
    ['a, T, const N: usize] &'a [T; N],
}

#[cfg(feature = "alloc")]
host_slice_range! {
    ['a, T] &'a alloc::vec::Vec<T>,
}

// =============================================================================
// Iterator adaptors
// =============================================================================

/// Any iterator, walked exactly once.
pub struct SinglePass<I: Iterator> {
    inner: Peekable<I>,
}

impl<I: Iterator> SinglePass<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self { inner: iter.into_iter().peekable() }
    }
}

impl<I: Iterator> Capability for SinglePass<I> {
    type Traversal = tag::SinglePass;
    type Residency = Host;
}

impl<I: Iterator> InputRange for SinglePass<I> {
    type Item = I::Item;
    type Cursor = Peekable<I>;

    fn is_empty(&mut self) -> bool {
        self.inner.peek().is_none()
    }

    fn into_cursor(self) -> Self::Cursor {
        self.inner
    }
}

/// Emptiness of a multi-pass iterator.
///
/// Decided by `size_hint` when it is conclusive; otherwise one element is
/// pulled from a clone, so that element is produced twice overall.
fn clone_is_empty<I: Iterator + Clone>(iter: &I) -> bool {
    match iter.size_hint() {
        (0, Some(0)) => true,
        (0, _) => iter.clone().next().is_none(),
        _ => false,
    }
}

/// A cloneable iterator: each clone is an independent forward pass.
#[derive(Debug, Clone)]
pub struct Forward<I> {
    inner: I,
}

impl<I: Iterator + Clone> Forward<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self { inner: iter.into_iter() }
    }
}

impl<I: Iterator + Clone> Capability for Forward<I> {
    type Traversal = tag::Forward;
    type Residency = Host;
}

impl<I: Iterator + Clone> InputRange for Forward<I> {
    type Item = I::Item;
    type Cursor = I;

    fn is_empty(&mut self) -> bool {
        clone_is_empty(&self.inner)
    }

    fn into_cursor(self) -> Self::Cursor {
        self.inner
    }
}

/// A cloneable double-ended iterator.
#[derive(Debug, Clone)]
pub struct Bidirectional<I> {
    inner: I,
}

impl<I: DoubleEndedIterator + Clone> Bidirectional<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self { inner: iter.into_iter() }
    }

    /// The same range walked back to front.
    pub fn reversed(self) -> Bidirectional<core::iter::Rev<I>> {
        Bidirectional { inner: self.inner.rev() }
    }
}

impl<I: DoubleEndedIterator + Clone> Capability for Bidirectional<I> {
    type Traversal = tag::Bidirectional;
    type Residency = Host;
}

impl<I: DoubleEndedIterator + Clone> InputRange for Bidirectional<I> {
    type Item = I::Item;
    type Cursor = I;

    fn is_empty(&mut self) -> bool {
        clone_is_empty(&self.inner)
    }

    fn into_cursor(self) -> Self::Cursor {
        self.inner
    }
}

// =============================================================================
// Output cursors
// =============================================================================

/// Writes into a host slice from the front.
///
/// Writing past the end panics with the usual index-out-of-bounds message.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(slice: &'a mut [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Index one past the last written element.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The written prefix.
    pub fn into_written(self) -> &'a mut [T] {
        &mut self.slice[..self.pos]
    }
}

impl<'a, T> From<&'a mut [T]> for SliceCursor<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        Self::new(slice)
    }
}

impl<T> Capability for SliceCursor<'_, T> {
    type Traversal = tag::RandomAccess;
    type Residency = Host;
}

impl<T> OutputCursor<T> for SliceCursor<'_, T> {
    #[inline]
    fn put(&mut self, value: T) {
        self.slice[self.pos] = value;
        self.pos += 1;
    }

    fn written(&self) -> usize {
        self.pos
    }
}

impl<T> ContiguousCursor<T> for SliceCursor<'_, T> {
    fn unwritten(&mut self) -> &mut [T] {
        &mut self.slice[self.pos..]
    }

    fn advance(&mut self, n: usize) {
        assert!(n <= self.slice.len() - self.pos, "advance past end of destination");
        self.pos += n;
    }
}

/// Appends to any `Extend` container, one element at a time.
#[derive(Debug)]
pub struct BackInserter<'a, C> {
    target: &'a mut C,
    count: usize,
}

/// Shorthand for [`BackInserter::new`].
pub fn back_inserter<C>(target: &mut C) -> BackInserter<'_, C> {
    BackInserter::new(target)
}

impl<'a, C> BackInserter<'a, C> {
    pub fn new(target: &'a mut C) -> Self {
        Self { target, count: 0 }
    }
}

impl<C> Capability for BackInserter<'_, C> {
    type Traversal = tag::SinglePass;
    type Residency = Host;
}

impl<T, C: Extend<T>> OutputCursor<T> for BackInserter<'_, C> {
    #[inline]
    fn put(&mut self, value: T) {
        self.target.extend(core::iter::once(value));
        self.count += 1;
    }

    fn written(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pass_peek_keeps_first_element() {
        let mut range = SinglePass::new([7, 8]);
        assert!(!range.is_empty());
        assert_eq!(range.into_cursor().collect::<Vec<_>>(), vec![7, 8]);
    }

    #[test]
    fn forward_is_empty_does_not_consume() {
        let mut range = Forward::new(1..3);
        assert!(!range.is_empty());
        assert_eq!(range.into_cursor().sum::<i32>(), 3);
        assert!(Forward::new(0..0).is_empty());
    }

    #[test]
    fn forward_exact_size_is_empty_reads_nothing() {
        let reads = core::cell::Cell::new(0);
        let data = [1, 2, 3];
        let mut range = Forward::new(data.iter().inspect(|_| reads.set(reads.get() + 1)));
        assert!(!range.is_empty());
        assert_eq!(reads.get(), 0);
        assert_eq!(range.into_cursor().count(), 3);
        assert_eq!(reads.get(), 3);
    }

    #[test]
    fn unknown_size_falls_back_to_clone() {
        let mut odd = Forward::new((0..4).filter(|x| x % 2 == 1));
        assert!(!odd.is_empty());
        let mut none = Bidirectional::new((0..4).filter(|x| *x > 9));
        assert!(none.is_empty());
    }

    #[test]
    fn slice_cursor_tracks_position() {
        let mut buf = [0u8; 4];
        let mut cursor = SliceCursor::new(&mut buf);
        cursor.put(1);
        cursor.put(2);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.unwritten().len(), 2);
        assert_eq!(cursor.into_written(), &[1, 2]);
    }

    #[test]
    #[should_panic]
    fn slice_cursor_overflow_panics() {
        let mut buf = [0u8; 1];
        let mut cursor = SliceCursor::new(&mut buf);
        cursor.put(1);
        cursor.put(2);
    }

    #[test]
    fn back_inserter_counts() {
        let mut out = Vec::new();
        let mut cursor = back_inserter(&mut out);
        OutputCursor::<i32>::put(&mut cursor, 5);
        assert_eq!(OutputCursor::<i32>::written(&cursor), 1);
        assert_eq!(out, vec![5]);
    }
}
