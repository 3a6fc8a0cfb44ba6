//! Provisioning error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while provisioning buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProvisionError {
    /// A [`ProvisionerConfig`](crate::ProvisionerConfig) failed validation.
    InvalidConfig {
        /// What was wrong.
        reason: String,
    },
    /// The request exceeds the configured `max_request_bytes`.
    RequestTooLarge {
        /// Number of bytes requested.
        requested: usize,
        /// Configured cap.
        limit: usize,
    },
    /// Header plus request cannot be described as a memory layout.
    LayoutOverflow {
        /// Number of bytes requested.
        requested: usize,
    },
    /// The global allocator returned null.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
    },
}

impl fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid provisioner config: {reason}"),
            Self::RequestTooLarge { requested, limit } => {
                write!(
                    f,
                    "request too large: {requested} bytes, limit {limit} bytes"
                )
            }
            Self::LayoutOverflow { requested } => {
                write!(f, "cannot lay out a block for {requested} bytes")
            }
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory allocating {requested} bytes")
            }
        }
    }
}

impl Error for ProvisionError {}
