// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{block::try_alloc_block, GrowVec},
};

// Core imports
use core::mem::MaybeUninit;

impl<T: Clone> GrowVec<T> {
    /// Clones the vector into a new block sized to `self.capacity()`.
    ///
    /// Only the live prefix is cloned. A vector without a block clones to one
    /// without a block. If an element's `clone` panics, the elements cloned so
    /// far and the new block are released.
    ///
    /// Returns [`Error::AllocFailed`] if the block cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let capacity = self.capacity();
        if capacity == 0 {
            return Ok(Self::new());
        }
        let mut out = Self {
            buf: Some(try_alloc_block(capacity, MaybeUninit::uninit)?),
            len: 0,
        };
        for item in self.as_slice() {
            let len = out.len;
            out.slots_mut()[len].write(item.clone());
            out.len = len + 1;
        }
        Ok(out)
    }

    /// Replaces `self` with a clone of `src`.
    ///
    /// The clone is built before `self` is touched, so on
    /// [`Error::AllocFailed`] `self` keeps its previous contents.
    pub fn try_clone_from(&mut self, src: &Self) -> Result<(), Error> {
        *self = src.try_clone()?;
        Ok(())
    }
}

/// Panics if the copy cannot be allocated. See [`GrowVec::try_clone`].
impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(v) => v,
            Err(e) => panic!("GrowVec::clone: {e}"),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.try_clone_from(source) {
            panic!("GrowVec::clone_from: {e}");
        }
    }
}
