//! C ABI exports for the vwpcm audio worklet helpers.
//!
//! A browser audio worklet cannot reach into this module's linear memory
//! on its own terms, so it stages buffers through three calls:
//!
//! ```text
//! vw_alloc(2 * n)         -> src   host writes PCM16LE bytes into src
//! vw_alloc(4 * n)         -> dst
//! vw_pcm16sleDecode(src, dst, n)   host reads n f32 samples from dst
//! vw_free(src); vw_free(dst)
//! ```
//!
//! This crate may contain `unsafe` code, as may `vwpcm-arena`;
//! `vwpcm-core` allows it in one audited helper only. Every export runs
//! under [`ffi_guard!`] so a Rust panic never unwinds into the host.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
// Exports dereference host-supplied pointers under their documented contracts.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

/// Run an export body, converting an unwinding panic into a failure value.
///
/// The one-argument form returns [`VwStatus::Panicked`](status::VwStatus)
/// as `i32`; the two-argument form returns the given fallback instead, for
/// exports whose C signature has no status slot.
#[macro_export]
macro_rules! ffi_guard {
    ($body:block) => {
        $crate::ffi_guard!($crate::status::VwStatus::Panicked as i32, $body)
    };
    ($on_panic:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(payload) => {
                $crate::log_panic(&*payload);
                $on_panic
            }
        }
    };
}

pub mod buffer;
pub mod decode;
pub mod status;

pub use buffer::{vw_alloc, vw_free};
pub use decode::{vw_pcm16sle_decode, vw_pcm16sle_decode_checked};
pub use status::VwStatus;

/// Log a caught panic payload. Used by [`ffi_guard!`].
#[doc(hidden)]
pub fn log_panic(payload: &(dyn std::any::Any + Send)) {
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>");
    tracing::error!(panic = message, "panic caught at FFI boundary");
}
