//! Test utilities and PCM fixtures for vwpcm development.
//!
//! Everything here produces raw little-endian PCM16 byte streams of the
//! kind a host writes into an input buffer before calling the decoder.
//! Generators are deterministic so failures reproduce.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{full_range_samples, le_bytes, noise_samples, sine_samples, AlignedBytes};
