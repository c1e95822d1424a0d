// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Invariants for the `unsafe-maybe-uninit` backend:
// - `buf` is `None` iff the capacity is `0`.
// - `0 <= len <= capacity` always holds.
// - Elements in `buf[..len]` are initialized `T` values owned by the vector.
// - Elements in `buf[len..]` are logically uninitialized and must never be
//   read or dropped as `T`.
// - All public methods maintain these invariants.

mod as_ptr;
mod clear;
mod clone;
mod drop;
mod new;
mod pop;
mod push;
mod slice;
