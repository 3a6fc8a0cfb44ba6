//! PCM16 sample decoding for the vwpcm audio worklet helpers.
//!
//! This is the leaf crate with zero internal dependencies. It turns raw
//! little-endian signed 16-bit PCM bytes into normalized `f32` samples in
//! `[-1.0, 1.0)`, the representation Web Audio render callbacks consume.
//!
//! # Decode paths
//!
//! ```text
//! decode / decode_with
//! ├── DecodePath::Native    reinterpret &[u8] as &[i16] (LE host, aligned source)
//! └── DecodePath::Portable  assemble lo | hi << 8 byte by byte (any host)
//! ```
//!
//! Both paths produce bit-identical output for identical input bytes; the
//! native path is only a speed specialization and silently falls back to
//! the portable one whenever its preconditions do not hold.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod decode;
pub mod error;
pub mod sample;

pub use decode::{
    decode, decode_into, decode_with, host_is_little_endian, native_path_available,
    required_src_bytes, DecodePath,
};
pub use error::DecodeError;
pub use sample::{pcm16_to_f32, Pcm16, PCM16_SCALE};
