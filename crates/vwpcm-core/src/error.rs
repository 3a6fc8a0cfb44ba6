//! Decode error types.
//!
//! Only the checked entry points produce these. The unchecked decode used
//! by the C boundary treats size mismatches as a caller contract violation
//! and never reports them.

use std::error::Error;
use std::fmt;

/// Errors from the checked decode entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The source byte buffer holds fewer than `2 * num_samples` bytes.
    SourceTooShort {
        /// Bytes needed for the requested sample count.
        required: usize,
        /// Bytes actually supplied.
        available: usize,
    },
    /// The destination buffer holds fewer than `num_samples` floats.
    DestinationTooShort {
        /// Floats needed for the requested sample count.
        required: usize,
        /// Floats actually supplied.
        available: usize,
    },
    /// `2 * num_samples` does not fit in `usize`.
    SampleCountOverflow {
        /// The requested sample count.
        num_samples: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceTooShort {
                required,
                available,
            } => {
                write!(
                    f,
                    "source too short: need {required} bytes, have {available}"
                )
            }
            Self::DestinationTooShort {
                required,
                available,
            } => {
                write!(
                    f,
                    "destination too short: need {required} samples, have {available}"
                )
            }
            Self::SampleCountOverflow { num_samples } => {
                write!(f, "sample count {num_samples} overflows the source byte length")
            }
        }
    }
}

impl Error for DecodeError {}
