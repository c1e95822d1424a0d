// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `grow-vec`
//!
//! A `no_std` + `alloc`, heap-allocated, growable vector with **fallible
//! allocation** and a predictable doubling growth policy, **with no `unsafe` by
//! default**.
//!
//! The core type, [`GrowVec<T>`], owns a single contiguous storage block of
//! `capacity` slots and tracks a logical length `len ∈ 0..=capacity`. Appending
//! to a full vector reallocates to twice the capacity (starting at `1`), so
//! capacities always follow `0, 1, 2, 4, 8, ...` unless the vector was built
//! with an explicit length or copied from another vector.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want allocation failures reported as values instead of aborting.
//! - You want the capacity sequence to be exactly predictable.
//! - You want a vector whose copies preserve the source's capacity.
//!
//! It may not be the best fit if:
//!
//! - You need iterators, insertion, or the rest of the `Vec` API.
//! - You need custom allocators or inline small-buffer storage.
//!
//! ## Backends and safety
//!
//! Two internal backends are selected by the `unsafe-maybe-uninit`
//! feature flag:
//!
//! - **Default backend (safe)**:
//!   - Storage is `Box<[T]>`; every slot of the block holds a constructed `T`.
//!   - The crate is `#![forbid(unsafe_code)]`.
//!   - Operations that allocate ([`GrowVec::with_len`], [`GrowVec::push`],
//!     [`GrowVec::try_clone`]) require `T: Default` to fill fresh slots.
//!
//! - **`unsafe-maybe-uninit` backend**:
//!   - Storage is `Box<[core::mem::MaybeUninit<T>]>`.
//!   - A small amount of internal `unsafe` is used to treat only the
//!     `[0..len)` prefix as initialized.
//!   - [`GrowVec::push`] and [`GrowVec::try_clone`] no longer require
//!     `T: Default`. [`GrowVec::with_len`] still does, because it constructs
//!     every element eagerly.
//!
//! In both backends, the **public API is fully safe**.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `GrowVec<T>`.
//!
//! - `unsafe-maybe-uninit`
//!   - Switches the internal storage to `Box<[MaybeUninit<T>]>`.
//!
//! ## Errors and panics
//!
//! - Allocation failures return [`Error::AllocFailed`] and leave the vector
//!   unchanged ([`GrowVec::push`], [`GrowVec::with_len`],
//!   [`GrowVec::try_clone`], [`GrowVec::try_clone_from`]).
//! - [`GrowVec::get`] / [`GrowVec::get_mut`] return [`Error::OutOfRange`] for
//!   `index >= len`. Indexing (`v[i]`) **panics** instead, like slices.
//! - [`Clone::clone`] panics if the copy cannot be allocated; use
//!   [`GrowVec::try_clone`] to observe the failure.
//!
//! ## Example
//!
//! ```rust
//! use grow_vec::GrowVec;
//!
//! let mut v: GrowVec<u32> = GrowVec::new();
//! v.push(1).unwrap();
//! v.push(2).unwrap();
//! v.push(3).unwrap();
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(v.capacity(), 4);
//!
//! let moved = v.take();
//! assert_eq!(moved.len(), 3);
//! assert_eq!((v.len(), v.capacity()), (0, 0));
//! ```

#![cfg_attr(not(feature = "unsafe-maybe-uninit"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use vec::GrowVec;
