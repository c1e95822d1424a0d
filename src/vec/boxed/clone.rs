// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{block::try_alloc_block, GrowVec},
};

impl<T: Clone + Default> GrowVec<T> {
    /// Clones the vector into a new block sized to `self.capacity()`.
    ///
    /// Only the live prefix is cloned; the copy's spare slots are
    /// default-initialized. A vector without a block clones to one without a
    /// block.
    ///
    /// Returns [`Error::AllocFailed`] if the block cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let capacity = self.capacity();
        if capacity == 0 {
            return Ok(Self::new());
        }
        let mut block = try_alloc_block(capacity, T::default)?;
        block[..self.len].clone_from_slice(self.as_slice());
        Ok(Self {
            buf: Some(block),
            len: self.len,
        })
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
impl<T: Clone + Default> Clone for GrowVec<T> {
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
