// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{block::try_alloc_block, GrowVec},
};

impl<T: Default> GrowVec<T> {
    /// Constructs a vector of `n` default-initialized elements.
    ///
    /// Allocates exactly `n` slots, so `len() == capacity() == n`. Every element
    /// is constructed with `T::default()`; this is not a capacity reservation.
    /// `n == 0` yields an empty vector without a block.
    ///
    /// Returns [`Error::AllocFailed`] if the block cannot be allocated.
    pub fn with_len(n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Ok(Self::new());
        }
        let block = try_alloc_block(n, T::default)?;
        Ok(Self {
            buf: Some(block),
            len: n,
        })
    }
}
