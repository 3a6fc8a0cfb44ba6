//! Buffer provisioning FFI: allocate and release raw host-visible memory.
//!
//! Both exports forward to one process-wide [`Provisioner`] with the
//! default configuration. It holds no mutable state, so no lock is taken.

use std::ffi::c_void;
use std::ptr::{self, NonNull};

use vwpcm_arena::Provisioner;

static PROVISIONER: Provisioner = Provisioner::DEFAULT;

/// Allocate `num_bytes` bytes for the host.
///
/// Returns a 16-byte aligned pointer, or null if the request cannot be
/// satisfied. A zero-byte request returns a unique pointer that must still
/// be passed to [`vw_free`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn vw_alloc(num_bytes: usize) -> *mut c_void {
    ffi_guard!(ptr::null_mut(), {
        match PROVISIONER.allocate(num_bytes) {
            Ok(p) => p.as_ptr().cast(),
            Err(_) => ptr::null_mut(),
        }
    })
}

/// Release memory obtained from [`vw_alloc`].
///
/// Null is a no-op. Any other pointer not returned by `vw_alloc`, or one
/// already released, is undefined behavior.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn vw_free(ptr: *mut c_void) {
    ffi_guard!((), {
        if let Some(p) = NonNull::new(ptr.cast::<u8>()) {
            // SAFETY: p came from vw_alloc and is live per caller contract.
            unsafe { PROVISIONER.release(p) };
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_free_round_trip() {
        for n in [0usize, 1, 2, 256, 4096, 1 << 16] {
            let p = vw_alloc(n);
            assert!(!p.is_null());
            assert_eq!(p as usize % 16, 0);
            vw_free(p);
        }
    }

    #[test]
    fn free_null_is_noop() {
        vw_free(ptr::null_mut());
    }

    #[test]
    fn absurd_request_returns_null() {
        assert!(vw_alloc(usize::MAX).is_null());
        assert!(vw_alloc(isize::MAX as usize).is_null());
        // Later allocations are unaffected.
        let p = vw_alloc(64);
        assert!(!p.is_null());
        vw_free(p);
    }

    #[test]
    #[allow(unsafe_code)]
    fn memory_is_usable() {
        let p = vw_alloc(8).cast::<u8>();
        assert!(!p.is_null());
        unsafe {
            for i in 0..8 {
                p.add(i).write(i as u8);
            }
            assert_eq!(std::slice::from_raw_parts(p, 8), &[0, 1, 2, 3, 4, 5, 6, 7]);
        }
        vw_free(p.cast());
    }
}
