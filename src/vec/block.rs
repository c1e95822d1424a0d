// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fallible allocation of storage blocks, shared by both backends.

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

/// Allocates a block of exactly `capacity` slots, each produced by `fill`.
///
/// Returns [`Error::AllocFailed`] if the allocator refuses the request or the
/// byte size of the block overflows. If `fill` panics, the slots written so far
/// and the block itself are released.
pub(crate) fn try_alloc_block<S>(
    capacity: usize,
    fill: impl FnMut() -> S,
) -> Result<Box<[S]>, Error> {
    let mut block = Vec::new();
    block
        .try_reserve_exact(capacity)
        .map_err(|_| Error::AllocFailed {
            requested: capacity,
        })?;
    block.resize_with(capacity, fill);
    Ok(block.into_boxed_slice())
}
