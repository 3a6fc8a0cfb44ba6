//! C-compatible status codes.
//!
//! [`VwStatus`] is a `repr(i32)` enum returned by the checked exports.
//! Conversions from the Rust error types are provided.

use vwpcm_core::DecodeError;

/// C-compatible status code returned by checked FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VwStatus {
    /// Success.
    Ok = 0,
    /// An argument is null, misaligned, or otherwise invalid.
    InvalidArgument = -1,
    /// A caller-provided buffer is too small for the sample count.
    BufferTooSmall = -2,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&DecodeError> for VwStatus {
    fn from(e: &DecodeError) -> Self {
        match e {
            DecodeError::SourceTooShort { .. } | DecodeError::DestinationTooShort { .. } => {
                VwStatus::BufferTooSmall
            }
            DecodeError::SampleCountOverflow { .. } => VwStatus::InvalidArgument,
        }
    }
}
