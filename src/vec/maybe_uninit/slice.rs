// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::{mem::MaybeUninit, slice};

impl<T> GrowVec<T> {
    /// Returns the live prefix as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        let slots = self.slots();
        // SAFETY: `slots[..len]` is initialized by invariant, `len <= slots.len()`,
        // and `MaybeUninit<T>` has the same layout as `T`. The returned borrow
        // is tied to `&self`.
        unsafe { slice::from_raw_parts(slots.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the live prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        let slots = self.slots_mut();
        // SAFETY: as in `as_slice`; the unique borrow of `self` guarantees
        // no other reference into the block exists.
        unsafe { slice::from_raw_parts_mut(slots.as_mut_ptr().cast::<T>(), len) }
    }

    /// Every slot of the block. Empty when there is no block.
    #[inline]
    pub(crate) fn slots(&self) -> &[MaybeUninit<T>] {
        self.buf.as_deref().unwrap_or_default()
    }

    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self.buf.as_deref_mut().unwrap_or_default()
    }
}
