//! Device-resident sequences.
//!
//! [`DeviceVec`] stands in for accelerator memory: storage stays in process,
//! but its views carry the `Device` residency, so the dispatcher treats them
//! the way it would treat a remote buffer. Moving data in or out goes through
//! the algorithms (`copy` from a host slice into [`DeviceVec::cursor`]) or the
//! explicit [`DeviceVec::from_host`] / [`DeviceVec::to_host`] transfers.

use alloc::vec::Vec;
use core::ops::Range;

use crate::range::{ContiguousCursor, ContiguousRange, InputRange, OutputCursor, SliceCursor};
use crate::tag::{Capability, Device, RandomAccess};

/// Owned device buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceVec<T> {
    buf: Vec<T>,
}

impl<T> DeviceVec<T> {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Uploads a host slice.
    pub fn from_host(host: &[T]) -> Self
    where
        T: Clone,
    {
        Self { buf: host.to_vec() }
    }

    /// `len` copies of `value`.
    pub fn filled(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        Self { buf: alloc::vec![value; len] }
    }

    /// Downloads the whole buffer.
    pub fn to_host(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buf.clone()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Drops everything past `len`, typically the unwritten tail after a
    /// filtering algorithm.
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Read view over the whole buffer.
    pub fn range(&self) -> DeviceRange<'_, T> {
        DeviceRange { slice: &self.buf }
    }

    /// Read view over `bounds`.
    pub fn subrange(&self, bounds: Range<usize>) -> DeviceRange<'_, T> {
        DeviceRange { slice: &self.buf[bounds] }
    }

    /// Write cursor at the start of the buffer.
    pub fn cursor(&mut self) -> DeviceCursor<'_, T> {
        DeviceCursor { inner: SliceCursor::new(&mut self.buf) }
    }
}

impl<T> From<Vec<T>> for DeviceVec<T> {
    fn from(buf: Vec<T>) -> Self {
        Self { buf }
    }
}

/// Borrowed, read-only device range.
#[derive(Debug)]
pub struct DeviceRange<'a, T> {
    slice: &'a [T],
}

impl<T> Clone for DeviceRange<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DeviceRange<'_, T> {}

impl<T> Capability for DeviceRange<'_, T> {
    type Traversal = RandomAccess;
    type Residency = Device;
}

impl<'a, T: Clone> InputRange for DeviceRange<'a, T> {
    type Item = T;
    type Cursor = core::iter::Cloned<core::slice::Iter<'a, T>>;

    fn is_empty(&mut self) -> bool {
        self.slice.is_empty()
    }

    fn into_cursor(self) -> Self::Cursor {
        self.slice.iter().cloned()
    }
}

impl<T: Clone> ContiguousRange for DeviceRange<'_, T> {
    fn as_slice(&self) -> &[T] {
        self.slice
    }
}

/// Write cursor into a [`DeviceVec`].
#[derive(Debug)]
pub struct DeviceCursor<'a, T> {
    inner: SliceCursor<'a, T>,
}

impl<T> DeviceCursor<'_, T> {
    /// Index one past the last written element.
    pub fn position(&self) -> usize {
        self.inner.position()
    }
}

impl<T> Capability for DeviceCursor<'_, T> {
    type Traversal = RandomAccess;
    type Residency = Device;
}

impl<T> OutputCursor<T> for DeviceCursor<'_, T> {
    #[inline]
    fn put(&mut self, value: T) {
        self.inner.put(value);
    }

    fn written(&self) -> usize {
        self.inner.position()
    }
}

impl<T> ContiguousCursor<T> for DeviceCursor<'_, T> {
    fn unwritten(&mut self) -> &mut [T] {
        self.inner.unwritten()
    }

    fn advance(&mut self, n: usize) {
        self.inner.advance(n);
    }
}
