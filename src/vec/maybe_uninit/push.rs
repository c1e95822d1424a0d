// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{block::try_alloc_block, GrowVec},
};

// Core imports
use core::mem::MaybeUninit;

impl<T> GrowVec<T> {
    /// Appends `value`, growing the block first if `len == capacity`.
    ///
    /// Returns [`Error::AllocFailed`] if growth cannot allocate; the vector is
    /// left unchanged and `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        let len = self.len;
        if len == self.capacity() {
            self.grow()?;
        }
        self.slots_mut()[len].write(value);
        self.len = len + 1;
        Ok(())
    }

    /// Reallocates to the next capacity and moves the live prefix across.
    fn grow(&mut self) -> Result<(), Error> {
        let mut block = try_alloc_block(self.next_capacity()?, MaybeUninit::uninit)?;
        let len = self.len;
        // The old block gets the new block's uninitialized slots in exchange, and
        // dropping a `MaybeUninit` block never drops its contents.
        block[..len].swap_with_slice(&mut self.slots_mut()[..len]);
        self.buf = Some(block);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::GrowVec;

    // NOTE: NoDefault does NOT implement Default on purpose.
    #[derive(Clone, PartialEq, Eq, Debug)]
    struct NoDefault(u8);

    #[test]
    fn test_push_non_default_type() {
        let mut v: GrowVec<NoDefault> = GrowVec::new();
        for i in 0..5 {
            v.push(NoDefault(i)).unwrap();
        }
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.get(4), Ok(&NoDefault(4)));
        assert_eq!(v.pop(), Some(NoDefault(4)));

        let copy = v.try_clone().unwrap();
        v.clear();
        assert_eq!(copy.len(), 4);
        assert_eq!(copy.capacity(), 8);
        assert_eq!(copy[3], NoDefault(3));
    }
}
