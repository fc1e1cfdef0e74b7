//! Error type for layout calibration.

use thiserror::Error;

/// Errors raised while building a packed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackError {
    /// The corpus needs more bits than a single register holds.
    #[error(
        "corpus requires {required_bits} bits, exceeding {register_bits}-bit register; \
         consider filtering the corpus or using a multi-register extension"
    )]
    CapacityExceeded {
        /// Sum of all per-letter slot widths the corpus demands.
        required_bits: u32,
        /// Width of the target register.
        register_bits: u32,
    },
}

/// Result alias for fallible packing operations.
pub type Result<T> = std::result::Result<T, PackError>;
