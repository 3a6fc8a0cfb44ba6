//! Reusable PCM16 fixtures.
//!
//! - [`full_range_samples`]: every `i16` value once, in ascending order.
//! - [`sine_samples`]: a quantized sine tone.
//! - [`noise_samples`]: seeded uniform noise over the whole `i16` range.
//! - [`AlignedBytes`]: a byte buffer with a chosen start alignment.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Encode samples as the little-endian byte stream the decoder consumes.
pub fn le_bytes(samples: &[i16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * 2);
    for s in samples {
        out.extend_from_slice(&s.to_le_bytes());
    }
    out
}

/// All 65536 `i16` values from `i16::MIN` to `i16::MAX`.
pub fn full_range_samples() -> Vec<i16> {
    (i16::MIN..=i16::MAX).collect()
}

/// `len` samples of a sine tone at `freq_hz`, sampled at `sample_rate`,
/// scaled to `amplitude` (0.0..=1.0 of full scale) and rounded to `i16`.
pub fn sine_samples(len: usize, freq_hz: f64, sample_rate: f64, amplitude: f64) -> Vec<i16> {
    let peak = amplitude.clamp(0.0, 1.0) * i16::MAX as f64;
    (0..len)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (peak * (2.0 * std::f64::consts::PI * freq_hz * t).sin()).round() as i16
        })
        .collect()
}

/// `len` samples of uniform noise from a `ChaCha8` stream seeded with `seed`.
pub fn noise_samples(len: usize, seed: u64) -> Vec<i16> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.next_u32() as u16 as i16).collect()
}

/// Owned bytes whose visible slice starts at a chosen alignment parity.
///
/// The decoder's fast path depends on whether the source is 2-byte
/// aligned, so tests need both shapes regardless of where the allocator
/// happens to place a `Vec<u8>`.
pub struct AlignedBytes {
    backing: Vec<u8>,
    start: usize,
    len: usize,
}

impl AlignedBytes {
    /// Copy `bytes` so that the resulting slice starts on an even address.
    pub fn even(bytes: &[u8]) -> Self {
        Self::with_parity(bytes, 0)
    }

    /// Copy `bytes` so that the resulting slice starts on an odd address.
    pub fn odd(bytes: &[u8]) -> Self {
        Self::with_parity(bytes, 1)
    }

    fn with_parity(bytes: &[u8], parity: usize) -> Self {
        let mut backing = vec![0u8; bytes.len() + 1];
        let start = if (backing.as_ptr() as usize) % 2 == parity {
            0
        } else {
            1
        };
        backing[start..start + bytes.len()].copy_from_slice(bytes);
        Self {
            backing,
            start,
            len: bytes.len(),
        }
    }

    /// The aligned view.
    pub fn as_slice(&self) -> &[u8] {
        &self.backing[self.start..self.start + self.len]
    }
}
