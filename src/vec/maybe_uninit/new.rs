// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{block::try_alloc_block, GrowVec},
};

// Core imports
use core::mem::MaybeUninit;

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
        let mut v = Self {
            buf: Some(try_alloc_block(n, MaybeUninit::uninit)?),
            len: 0,
        };
        // `len` tracks progress so a panicking `T::default` drops only what was built.
        while v.len < n {
            let len = v.len;
            v.slots_mut()[len].write(T::default());
            v.len = len + 1;
        }
        Ok(v)
    }
}
