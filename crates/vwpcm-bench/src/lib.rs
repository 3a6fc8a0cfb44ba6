//! Benchmark inputs for the vwpcm decoder and provisioner.
//!
//! - [`render_block`]: one block of seeded noise as PCM16LE bytes.
//! - [`BLOCK_SIZES`]: sample counts covering a single render quantum up to
//!   a one-second 48 kHz buffer.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vwpcm_test_utils::{le_bytes, noise_samples, AlignedBytes};

/// Sample counts exercised by the decode benchmarks.
///
/// 128 is the Web Audio render quantum; 48_000 is one second at 48 kHz.
pub const BLOCK_SIZES: [usize; 4] = [128, 1024, 8192, 48_000];

/// `n` samples of seeded noise as PCM16LE bytes, with the chosen start
/// alignment so both decode paths can be measured.
pub fn render_block(n: usize, seed: u64, aligned: bool) -> AlignedBytes {
    let bytes = le_bytes(&noise_samples(n, seed));
    if aligned {
        AlignedBytes::even(&bytes)
    } else {
        AlignedBytes::odd(&bytes)
    }
}
