// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowVec`](crate::GrowVec).
//!
//! `v[i]` mirrors slice behavior: it panics when `i >= len`, regardless of
//! capacity. Use [`GrowVec::get`](crate::GrowVec::get) for a fallible lookup.

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::ops::{Index, IndexMut};

impl<T> Index<usize> for GrowVec<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}

impl<T> IndexMut<usize> for GrowVec<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::GrowVec;

    fn three() -> GrowVec<i32> {
        let mut v = GrowVec::new();
        v.push(1).unwrap();
        v.push(2).unwrap();
        v.push(3).unwrap();
        v
    }

    #[test]
    fn test_index_and_index_mut() {
        let mut v = three();
        assert_eq!(v[0], 1);
        assert_eq!(v[2], 3);
        v[1] = 20;
        assert_eq!(v.as_slice(), &[1, 20, 3]);
    }

    #[test]
    #[should_panic]
    fn test_index_at_len_panics() {
        let v = three();
        let _ = v[3];
    }

    #[test]
    #[should_panic]
    fn test_index_within_capacity_but_past_len_panics() {
        let mut v = three();
        assert_eq!(v.capacity(), 4);
        v[3] = 4;
    }

    #[test]
    #[should_panic]
    fn test_index_empty_panics() {
        let v: GrowVec<i32> = GrowVec::new();
        let _ = v[0];
    }
}
