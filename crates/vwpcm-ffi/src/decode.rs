//! PCM16 decode FFI.
//!
//! `vw_pcm16sleDecode` is the real-time path: no status, no bounds checks,
//! nothing beyond the decode loop itself. `vw_pcm16sleDecodeChecked` takes
//! explicit buffer lengths and reports mismatches as [`VwStatus`] codes.

use std::slice;

use vwpcm_core::{decode, decode_into, required_src_bytes};

use crate::status::VwStatus;

/// Longest byte slice Rust can describe.
const MAX_SRC_BYTES: usize = isize::MAX as usize;
/// Longest `f32` slice Rust can describe.
const MAX_DST_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<f32>();

/// Decode `num_samples` little-endian signed 16-bit samples from `src` into
/// normalized floats in `dst`.
///
/// `src` must hold `2 * num_samples` readable bytes and `dst` room for
/// `num_samples` 4-byte aligned floats; neither is checked. When
/// `num_samples` is 0, or larger than any `f32` buffer could be, neither
/// pointer is dereferenced.
#[export_name = "vw_pcm16sleDecode"]
#[allow(unsafe_code)]
pub extern "C" fn vw_pcm16sle_decode(src: *const u8, dst: *mut f32, num_samples: usize) {
    ffi_guard!((), {
        if num_samples == 0 {
            return;
        }
        if num_samples > MAX_DST_SAMPLES {
            return;
        }
        let Some(src_len) = required_src_bytes(num_samples) else {
            return;
        };
        // SAFETY: src points to src_len readable bytes per caller contract.
        let src = unsafe { slice::from_raw_parts(src, src_len) };
        // SAFETY: dst points to num_samples writable, aligned f32 slots per
        // caller contract and does not overlap src.
        let dst = unsafe { slice::from_raw_parts_mut(dst, num_samples) };
        decode_into(src, dst);
    })
}

/// Checked variant of `vw_pcm16sleDecode`.
///
/// `src_len` is the readable length of `src` in bytes, `dst_len` the
/// capacity of `dst` in floats. Returns `VW_STATUS_OK` on success,
/// `VW_STATUS_BUFFER_TOO_SMALL` if either buffer cannot hold `num_samples`
/// samples, and `VW_STATUS_INVALID_ARGUMENT` for null or misaligned
/// pointers or lengths no buffer can have. Nothing is written on failure.
#[export_name = "vw_pcm16sleDecodeChecked"]
#[allow(unsafe_code)]
pub extern "C" fn vw_pcm16sle_decode_checked(
    src: *const u8,
    src_len: usize,
    dst: *mut f32,
    dst_len: usize,
    num_samples: usize,
) -> i32 {
    ffi_guard!({
        if num_samples == 0 {
            return VwStatus::Ok as i32;
        }
        if src.is_null() || dst.is_null() {
            return VwStatus::InvalidArgument as i32;
        }
        if !dst.is_aligned() {
            return VwStatus::InvalidArgument as i32;
        }
        if src_len > MAX_SRC_BYTES || dst_len > MAX_DST_SAMPLES {
            return VwStatus::InvalidArgument as i32;
        }

        // SAFETY: src points to src_len readable bytes per caller contract.
        let src = unsafe { slice::from_raw_parts(src, src_len) };
        // SAFETY: dst is non-null, aligned, and points to dst_len writable
        // f32 slots per caller contract.
        let dst = unsafe { slice::from_raw_parts_mut(dst, dst_len) };
        match decode(src, dst, num_samples) {
            Ok(()) => VwStatus::Ok as i32,
            Err(e) => VwStatus::from(&e) as i32,
        }
    })
}
