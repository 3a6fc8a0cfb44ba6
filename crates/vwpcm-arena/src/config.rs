//! Provisioner configuration parameters.

use crate::error::ProvisionError;

/// Configuration for the buffer provisioner.
///
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvisionerConfig {
    /// Alignment, in bytes, of every pointer handed to the host.
    ///
    /// Default: 16, enough for `f32`/`i16` access and 128-bit SIMD loads.
    /// Must be a power of two and at least `align_of::<usize>()`. Also the
    /// size of the per-block header.
    pub align: usize,

    /// Largest request, in bytes, passed on to the allocator.
    ///
    /// Larger requests fail with [`ProvisionError::RequestTooLarge`]
    /// without touching the allocator.
    pub max_request_bytes: usize,
}

impl ProvisionerConfig {
    /// Default pointer alignment.
    pub const DEFAULT_ALIGN: usize = 16;

    /// Default request cap: the most a layout with the default alignment
    /// and header can describe.
    pub const DEFAULT_MAX_REQUEST_BYTES: usize = Self::max_addressable(Self::DEFAULT_ALIGN);

    /// Default configuration, usable in `static` initializers.
    pub const DEFAULT: Self = Self {
        align: Self::DEFAULT_ALIGN,
        max_request_bytes: Self::DEFAULT_MAX_REQUEST_BYTES,
    };

    /// Create a config with the given alignment and the largest request cap
    /// that alignment allows.
    pub const fn with_align(align: usize) -> Self {
        Self {
            align,
            max_request_bytes: Self::max_addressable(align),
        }
    }

    /// Largest `n` such that a header of `align` bytes plus `n` bytes,
    /// rounded up to `align`, still fits in `isize::MAX`.
    pub const fn max_addressable(align: usize) -> usize {
        let limit = isize::MAX as usize;
        match align.checked_mul(2) {
            Some(slack) if slack <= limit => limit - slack,
            _ => 0,
        }
    }

    /// Check every invariant documented on the fields.
    pub fn validate(&self) -> Result<(), ProvisionError> {
        if !self.align.is_power_of_two() {
            return Err(ProvisionError::InvalidConfig {
                reason: format!("align {} is not a power of two", self.align),
            });
        }
        if self.align < std::mem::align_of::<usize>() {
            return Err(ProvisionError::InvalidConfig {
                reason: format!(
                    "align {} is below the header's own alignment {}",
                    self.align,
                    std::mem::align_of::<usize>()
                ),
            });
        }
        let ceiling = Self::max_addressable(self.align);
        if self.max_request_bytes > ceiling {
            return Err(ProvisionError::InvalidConfig {
                reason: format!(
                    "max_request_bytes {} exceeds the addressable limit {ceiling} for align {}",
                    self.max_request_bytes, self.align
                ),
            });
        }
        Ok(())
    }
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
