//! vwpcm: PCM16 decoding and buffer provisioning for browser audio worklets.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! vwpcm sub-crates. Rust callers usually need only this crate; the host
//! runtime talks to the C exports in [`ffi`].
//!
//! # Quick start
//!
//! ```rust
//! use vwpcm::prelude::*;
//!
//! // Three samples: i16::MIN, 0, i16::MAX, little-endian.
//! let src = [0x00, 0x80, 0x00, 0x00, 0xFF, 0x7F];
//! let mut dst = [0.0f32; 3];
//! decode(&src, &mut dst, 3).unwrap();
//! assert_eq!(dst, [-1.0, 0.0, 32767.0 / 32768.0]);
//!
//! // Stage a buffer the way the host does.
//! let provisioner = Provisioner::default();
//! let ptr = provisioner.allocate(src.len()).unwrap();
//! unsafe { provisioner.release(ptr) };
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`codec`] | `vwpcm-core` | Sample scaling, decode paths, `DecodeError` |
//! | [`arena`] | `vwpcm-arena` | `Provisioner`, `ProvisionerConfig`, `ProvisionError` |
//! | [`ffi`] | `vwpcm-ffi` | `vw_alloc`, `vw_free`, `vw_pcm16sleDecode`, `VwStatus` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// PCM16 decoding (`vwpcm-core`).
pub use vwpcm_core as codec;

/// Buffer provisioning (`vwpcm-arena`).
pub use vwpcm_arena as arena;

/// C ABI exports (`vwpcm-ffi`).
pub use vwpcm_ffi as ffi;

/// Common imports for typical vwpcm usage.
///
/// ```rust
/// use vwpcm::prelude::*;
/// ```
pub mod prelude {
    // Decoding
    pub use vwpcm_core::{decode, decode_into, decode_with, pcm16_to_f32, DecodePath, Pcm16};

    // Provisioning
    pub use vwpcm_arena::{Provisioner, ProvisionerConfig};

    // Errors
    pub use vwpcm_arena::ProvisionError;
    pub use vwpcm_core::DecodeError;
}
