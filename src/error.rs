// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowVec`.
//!
//! These errors represent allocation and bounds conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`GrowVec`](crate::GrowVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A storage block could not be obtained from the allocator.
    ///
    /// Also returned when the block size in bytes would overflow `isize`,
    /// or when doubling the capacity would overflow `usize`.
    AllocFailed {
        /// Number of element slots requested.
        requested: usize,
    },
    /// An index was not within the live range `0..len`.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the vector at the time of the request.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed { requested } => {
                write!(f, "allocation of {requested} elements failed")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange { index: 3, len: 3 });
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::AllocFailed { requested: 8 }.to_string(),
            "allocation of 8 elements failed"
        );
        assert_eq!(
            Error::OutOfRange { index: 5, len: 2 }.to_string(),
            "index 5 out of range for length 2"
        );
    }
}
