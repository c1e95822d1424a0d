// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Invariants for the default (safe) backend:
// - `buf` is `None` iff the capacity is `0`.
// - `0 <= len <= capacity` always holds.
// - Every slot of `buf` holds a constructed `T`; slots in `buf[len..]` hold
//   `T::default()` or a value that was moved/cleared out, and are never
//   visible through the public API.

mod as_ptr;
mod clear;
mod clone;
mod new;
mod pop;
mod push;
mod slice;
