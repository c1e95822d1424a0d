// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowVec` type and its inherent API.
//!
//! `GrowVec<T>` owns a single heap block of `capacity` slots and tracks a
//! logical length. Methods that can allocate are fallible and report
//! [`Error::AllocFailed`]; methods that only move ownership never allocate.

mod block;
#[cfg(not(feature = "unsafe-maybe-uninit"))]
mod boxed;
#[cfg(feature = "unsafe-maybe-uninit")]
mod maybe_uninit;

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
    mem,
};

/// A heap-allocated, growable vector with fallible allocation.
///
/// `GrowVec<T>` stores its elements in one contiguous block of `capacity`
/// slots and tracks a logical length `len ∈ 0..=capacity`:
///
/// - there is no block at all iff `capacity == 0`;
/// - the prefix `[0..len)` holds the live elements;
/// - the tail `[len..capacity)` is allocated but its contents are unspecified;
/// - exactly one `GrowVec` owns a given block, and moving transfers it whole.
///
/// # Growth policy
///
/// [`push`](GrowVec::push) on a full vector reallocates to `1` slot when the
/// capacity is `0`, and to `2 * capacity` otherwise. The live prefix is moved
/// into the new block in order, and the old block is released. This gives
/// amortized `O(1)` appends, `O(len)` for a single growth step, and `O(N)`
/// total copying for `N` appends starting from empty.
///
/// Growth is the only operation that moves existing elements. No other method
/// reallocates: [`clear`](GrowVec::clear) and [`pop`](GrowVec::pop) keep the
/// block.
///
/// # Copy and move
///
/// - [`try_clone`](GrowVec::try_clone) / [`Clone`] allocate a block sized to
///   the source's **capacity** (not its length) and clone the live prefix.
/// - [`try_clone_from`](GrowVec::try_clone_from) builds the copy first and
///   leaves `self` untouched if allocation fails.
/// - [`take`](GrowVec::take) / [`move_from`](GrowVec::move_from) transfer the
///   block in `O(1)` and leave the source empty with capacity `0`.
///
/// # Element bounds
///
/// - In the **default backend**, every slot of the block holds a constructed
///   `T`, so methods that create or vacate slots ([`with_len`], [`push`],
///   [`pop`], [`clear`], [`try_clone`]) require `T: Default`.
/// - With the `unsafe-maybe-uninit` backend enabled, only [`with_len`] needs
///   `T: Default`.
///
/// [`with_len`]: GrowVec::with_len
/// [`push`]: GrowVec::push
/// [`pop`]: GrowVec::pop
/// [`clear`]: GrowVec::clear
/// [`try_clone`]: GrowVec::try_clone
///
/// # Examples
///
/// ```rust
/// use grow_vec::{Error, GrowVec};
///
/// let mut v: GrowVec<i32> = GrowVec::new();
/// v.push(10).unwrap();
/// v.push(20).unwrap();
/// assert_eq!(v.get(1), Ok(&20));
/// assert_eq!(v.get(2), Err(Error::OutOfRange { index: 2, len: 2 }));
///
/// let copy = v.try_clone().unwrap();
/// v.clear();
/// assert_eq!(copy.as_slice(), &[10, 20]);
/// assert_eq!(v.capacity(), 2);
/// ```
#[cfg(not(feature = "unsafe-maybe-uninit"))]
pub struct GrowVec<T> {
    pub(crate) buf: Option<Box<[T]>>,
    pub(crate) len: usize,
}
#[cfg(feature = "unsafe-maybe-uninit")]
pub struct GrowVec<T> {
    pub(crate) buf: Option<Box<[core::mem::MaybeUninit<T>]>>,
    pub(crate) len: usize,
}

impl<T> GrowVec<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: None, len: 0 }
    }

    /// Returns the number of slots in the storage block (`0` if there is none).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.as_ref().map_or(0, |block| block.len())
    }

    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of pushes that will not reallocate.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`, even when `index` is
    /// within the allocated capacity.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Moves the contents out of `self`, leaving it empty with capacity `0`.
    ///
    /// `O(1)`; never allocates.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Drops the current contents of `self` and moves `src`'s block, length
    /// and capacity into it. `src` is left empty with capacity `0`.
    ///
    /// `O(1)` plus the cost of dropping `self`'s old elements; never allocates.
    #[inline]
    pub fn move_from(&mut self, src: &mut Self) {
        *self = src.take();
    }

    /// Capacity of the block the next growth step will allocate.
    pub(crate) fn next_capacity(&self) -> Result<usize, Error> {
        match self.capacity() {
            0 => Ok(1),
            cap => cap.checked_mul(2).ok_or(Error::AllocFailed {
                requested: usize::MAX,
            }),
        }
    }
}

impl<T> Default for GrowVec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for GrowVec<T> {}
impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
