//! The buffer provisioner: allocate by size, release by address.
//!
//! A [`Provisioner`] is a stateless front for the global allocator. It
//! holds only its configuration, so a single `static` instance can serve
//! any number of threads without locking.

use std::ptr::NonNull;

use crate::config::ProvisionerConfig;
use crate::error::ProvisionError;
use crate::raw;

/// Allocates header-tagged byte regions and releases them by address.
#[derive(Clone, Debug)]
pub struct Provisioner {
    config: ProvisionerConfig,
}

impl Provisioner {
    /// A provisioner with [`ProvisionerConfig::DEFAULT`].
    pub const DEFAULT: Self = Self {
        config: ProvisionerConfig::DEFAULT,
    };

    /// Create a provisioner, validating `config`.
    pub fn new(config: ProvisionerConfig) -> Result<Self, ProvisionError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ProvisionerConfig {
        &self.config
    }

    /// Bytes of bookkeeping in front of every returned pointer.
    pub fn header_bytes(&self) -> usize {
        self.config.align
    }

    /// Allocate a region of at least `num_bytes` bytes.
    ///
    /// The returned pointer is aligned to `config().align` and its contents
    /// are uninitialized. A zero-byte request still yields a distinct,
    /// releasable pointer. Failures are reported once and never retried.
    pub fn allocate(&self, num_bytes: usize) -> Result<NonNull<u8>, ProvisionError> {
        let align = self.config.align;
        if num_bytes > self.config.max_request_bytes {
            tracing::warn!(
                num_bytes,
                limit = self.config.max_request_bytes,
                "allocation request above cap"
            );
            return Err(ProvisionError::RequestTooLarge {
                requested: num_bytes,
                limit: self.config.max_request_bytes,
            });
        }
        let layout = raw::block_layout(num_bytes, align).ok_or_else(|| {
            tracing::warn!(num_bytes, align, "allocation layout overflow");
            ProvisionError::LayoutOverflow {
                requested: num_bytes,
            }
        })?;
        #[allow(unsafe_code)]
        // SAFETY: layout was produced by block_layout for these arguments.
        let ptr = unsafe { raw::alloc_block(layout, num_bytes, align) };
        match ptr {
            Some(ptr) => {
                tracing::trace!(num_bytes, ptr = ?ptr.as_ptr(), "allocated");
                Ok(ptr)
            }
            None => {
                tracing::warn!(num_bytes, "allocator returned null");
                Err(ProvisionError::OutOfMemory {
                    requested: num_bytes,
                })
            }
        }
    }

    /// Return a region to the allocator.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by [`allocate`](Self::allocate) on a
    /// provisioner with the same `align`, and must not have been released
    /// already. Neither condition is checked.
    #[allow(unsafe_code)]
    pub unsafe fn release(&self, ptr: NonNull<u8>) {
        tracing::trace!(ptr = ?ptr.as_ptr(), "released");
        // SAFETY: forwarded caller contract.
        unsafe { raw::free_block(ptr, self.config.align) };
    }

    /// Size originally requested for a live region.
    ///
    /// # Safety
    ///
    /// Same contract as [`release`](Self::release).
    #[allow(unsafe_code)]
    pub unsafe fn allocated_size(&self, ptr: NonNull<u8>) -> usize {
        // SAFETY: forwarded caller contract.
        unsafe { raw::recorded_size(ptr, self.config.align) }
    }
}

impl Default for Provisioner {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;

    #[test]
    fn allocate_release_round_trip() {
        let p = Provisioner::default();
        for n in [1usize, 2, 255, 256, 4096, 1 << 20] {
            let ptr = p.allocate(n).unwrap();
            unsafe {
                assert_eq!(p.allocated_size(ptr), n);
                p.release(ptr);
            }
        }
    }

    #[test]
    fn pointers_are_aligned() {
        let p = Provisioner::new(ProvisionerConfig::with_align(64)).unwrap();
        let ptr = p.allocate(100).unwrap();
        assert_eq!(ptr.as_ptr() as usize % 64, 0);
        unsafe { p.release(ptr) };
    }

    #[test]
    fn region_is_writable_end_to_end() {
        let p = Provisioner::default();
        let n = 1000;
        let ptr = p.allocate(n).unwrap();
        unsafe {
            let bytes = std::slice::from_raw_parts_mut(ptr.as_ptr(), n);
            bytes.fill(0xA5);
            assert!(bytes.iter().all(|&b| b == 0xA5));
            assert_eq!(p.allocated_size(ptr), n);
            p.release(ptr);
        }
    }

    #[test]
    fn zero_byte_request_is_releasable() {
        let p = Provisioner::default();
        let a = p.allocate(0).unwrap();
        let b = p.allocate(0).unwrap();
        assert_ne!(a, b);
        unsafe {
            assert_eq!(p.allocated_size(a), 0);
            p.release(a);
            p.release(b);
        }
    }

    #[test]
    fn live_regions_do_not_overlap() {
        let p = Provisioner::default();
        let a = p.allocate(64).unwrap();
        let b = p.allocate(64).unwrap();
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        assert!(hi.as_ptr() as usize >= lo.as_ptr() as usize + 64);
        unsafe {
            p.release(a);
            p.release(b);
        }
    }

    #[test]
    fn request_above_cap_fails_without_allocating() {
        let p = Provisioner::new(ProvisionerConfig {
            align: 16,
            max_request_bytes: 1024,
        })
        .unwrap();
        assert_eq!(
            p.allocate(1025),
            Err(ProvisionError::RequestTooLarge {
                requested: 1025,
                limit: 1024
            })
        );
        let ptr = p.allocate(1024).unwrap();
        unsafe { p.release(ptr) };
    }

    #[test]
    fn absurd_request_fails_with_sentinel_error() {
        let p = Provisioner::default();
        assert!(matches!(
            p.allocate(usize::MAX),
            Err(ProvisionError::RequestTooLarge { .. })
        ));
    }

    #[test]
    fn exhausting_request_reports_out_of_memory() {
        let p = Provisioner::default();
        // Within the layout limit but far beyond any real address space.
        let huge = ProvisionerConfig::DEFAULT_MAX_REQUEST_BYTES;
        assert_eq!(
            p.allocate(huge),
            Err(ProvisionError::OutOfMemory { requested: huge })
        );
        // State is intact afterwards.
        let ptr = p.allocate(16).unwrap();
        unsafe { p.release(ptr) };
    }

    #[test]
    fn invalid_config_rejected() {
        assert!(Provisioner::new(ProvisionerConfig::with_align(3)).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_reasonable_size_round_trips(n in 0usize..65_536, shift in 3u32..8) {
                let p = Provisioner::new(ProvisionerConfig::with_align(1 << shift)).unwrap();
                let ptr = p.allocate(n).unwrap();
                prop_assert_eq!(ptr.as_ptr() as usize % (1usize << shift), 0);
                unsafe {
                    prop_assert_eq!(p.allocated_size(ptr), n);
                    p.release(ptr);
                }
            }
        }
    }
}
