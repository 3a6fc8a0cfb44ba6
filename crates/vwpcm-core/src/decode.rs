//! PCM16 little-endian to `f32` decoding.
//!
//! [`decode`] is the checked entry point: it validates both buffer lengths
//! against the requested sample count before touching either. [`decode_into`]
//! skips the error reporting and is what the C boundary calls once it has
//! built slices of the documented sizes.
//!
//! The source is always read as little-endian. On little-endian hosts an
//! aligned source is reinterpreted in place as `&[i16]`; everywhere else the
//! bytes are assembled explicitly. Both paths funnel through
//! [`pcm16_to_f32`], so they cannot drift apart numerically.

use crate::error::DecodeError;
use crate::sample::{pcm16_to_f32, Pcm16};

/// Which inner loop a decode call uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodePath {
    /// Native on little-endian hosts, portable elsewhere.
    #[default]
    Auto,
    /// Reinterpret the source as native `i16` words.
    ///
    /// Falls back to [`DecodePath::Portable`] when the host is big-endian
    /// or the source is not 2-byte aligned.
    Native,
    /// Assemble every sample from its two bytes, low byte first.
    Portable,
}

/// Whether the host stores multi-byte integers least-significant byte first.
#[inline]
pub const fn host_is_little_endian() -> bool {
    cfg!(target_endian = "little")
}

/// Number of source bytes needed for `num_samples` samples.
///
/// Returns `None` if the byte count overflows `usize`.
#[inline]
pub const fn required_src_bytes(num_samples: usize) -> Option<usize> {
    num_samples.checked_mul(2)
}

/// Whether [`DecodePath::Native`] would actually take the reinterpretation
/// fast path for this source buffer.
pub fn native_path_available(src: &[u8]) -> bool {
    as_native_words(src).is_some()
}

/// Decode `num_samples` samples from `src` into `dst[..num_samples]`.
///
/// `src` must hold at least `2 * num_samples` bytes and `dst` at least
/// `num_samples` floats. Elements of `dst` past `num_samples` are not
/// touched. A zero sample count reads and writes nothing.
pub fn decode(src: &[u8], dst: &mut [f32], num_samples: usize) -> Result<(), DecodeError> {
    decode_with(DecodePath::Auto, src, dst, num_samples)
}

/// Like [`decode`], with an explicit inner loop.
///
/// Every [`DecodePath`] produces bit-identical output for the same bytes.
pub fn decode_with(
    path: DecodePath,
    src: &[u8],
    dst: &mut [f32],
    num_samples: usize,
) -> Result<(), DecodeError> {
    let required = required_src_bytes(num_samples)
        .ok_or(DecodeError::SampleCountOverflow { num_samples })?;
    if src.len() < required {
        return Err(DecodeError::SourceTooShort {
            required,
            available: src.len(),
        });
    }
    if dst.len() < num_samples {
        return Err(DecodeError::DestinationTooShort {
            required: num_samples,
            available: dst.len(),
        });
    }
    run(path, &src[..required], &mut dst[..num_samples]);
    Ok(())
}

/// Decode `dst.len()` samples from the front of `src` without reporting
/// size mismatches.
///
/// Callers are expected to pass `src.len() >= 2 * dst.len()`. If `src` is
/// shorter, only the whole samples it contains are written and the rest of
/// `dst` is left as it was. Trailing source bytes are ignored.
#[inline]
pub fn decode_into(src: &[u8], dst: &mut [f32]) {
    debug_assert!(
        src.len() / 2 >= dst.len(),
        "source holds {} samples, destination wants {}",
        src.len() / 2,
        dst.len()
    );
    run(DecodePath::Auto, src, dst);
}

fn run(path: DecodePath, src: &[u8], dst: &mut [f32]) {
    match path {
        DecodePath::Portable => decode_portable(src, dst),
        DecodePath::Auto | DecodePath::Native => match as_native_words(src) {
            Some(words) => decode_native(words, dst),
            None => decode_portable(src, dst),
        },
    }
}

#[inline]
fn decode_portable(src: &[u8], dst: &mut [f32]) {
    for (out, pair) in dst.iter_mut().zip(src.chunks_exact(2)) {
        *out = Pcm16::from_le_bytes([pair[0], pair[1]]).to_f32();
    }
}

#[inline]
fn decode_native(words: &[i16], dst: &mut [f32]) {
    for (out, &word) in dst.iter_mut().zip(words) {
        *out = pcm16_to_f32(word);
    }
}

/// View `src` as native-endian `i16` words, if that view equals the
/// little-endian reading and covers every whole sample in `src`.
#[allow(unsafe_code)]
fn as_native_words(src: &[u8]) -> Option<&[i16]> {
    if !host_is_little_endian() {
        return None;
    }
    // SAFETY: every bit pattern is a valid i16, and `align_to` only places
    // correctly aligned, in-bounds elements in the middle slice.
    let (prefix, words, _) = unsafe { src.align_to::<i16>() };
    if prefix.is_empty() && words.len() == src.len() / 2 {
        Some(words)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le_bytes(samples: &[i16]) -> Vec<u8> {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    #[test]
    fn decodes_boundary_values() {
        let src = [0x00, 0x80, 0x00, 0x00, 0xFF, 0x7F];
        let mut dst = [f32::NAN; 3];
        decode(&src, &mut dst, 3).unwrap();
        assert_eq!(dst, [-1.0, 0.0, 0.999_969_482_421_875]);
    }

    #[test]
    fn zero_samples_touches_nothing() {
        let mut dst = [7.0f32; 4];
        decode(&[], &mut dst, 0).unwrap();
        assert_eq!(dst, [7.0; 4]);

        let mut empty: [f32; 0] = [];
        decode(&[], &mut empty, 0).unwrap();
    }

    #[test]
    fn only_prefix_of_destination_written() {
        let src = le_bytes(&[16384, -16384]);
        let mut dst = [9.0f32; 4];
        decode(&src, &mut dst, 2).unwrap();
        assert_eq!(dst, [0.5, -0.5, 9.0, 9.0]);
    }

    #[test]
    fn short_source_is_rejected_before_writing() {
        let mut dst = [1.0f32; 2];
        let err = decode(&[0x00, 0x40, 0x00], &mut dst, 2).unwrap_err();
        assert_eq!(
            err,
            DecodeError::SourceTooShort {
                required: 4,
                available: 3
            }
        );
        assert_eq!(dst, [1.0, 1.0]);
    }

    #[test]
    fn short_destination_is_rejected() {
        let src = le_bytes(&[1, 2, 3]);
        let mut dst = [0.0f32; 2];
        let err = decode(&src, &mut dst, 3).unwrap_err();
        assert_eq!(
            err,
            DecodeError::DestinationTooShort {
                required: 3,
                available: 2
            }
        );
    }

    #[test]
    fn overflowing_sample_count_is_rejected() {
        let mut dst = [0.0f32; 1];
        let err = decode(&[], &mut dst, usize::MAX).unwrap_err();
        assert_eq!(
            err,
            DecodeError::SampleCountOverflow {
                num_samples: usize::MAX
            }
        );
    }

    #[test]
    fn trailing_odd_byte_ignored() {
        let mut src = le_bytes(&[-32768, 32767]);
        src.push(0xAB);
        let mut dst = [0.0f32; 2];
        decode(&src, &mut dst, 2).unwrap();
        assert_eq!(dst, [-1.0, 32767.0 / 32768.0]);
    }

    #[test]
    fn misaligned_source_falls_back_and_matches() {
        // Offset by one byte so the source cannot be aligned for i16.
        let mut backing = vec![0u8];
        backing.extend(le_bytes(&[-2, -1, 0, 1, 2, 1000, -1000]));
        let src = if backing.as_ptr() as usize % 2 == 0 {
            &backing[1..]
        } else {
            &backing[..backing.len() - 1]
        };
        let n = src.len() / 2;

        let mut native = vec![0.0f32; n];
        let mut portable = vec![0.0f32; n];
        decode_with(DecodePath::Native, src, &mut native, n).unwrap();
        decode_with(DecodePath::Portable, src, &mut portable, n).unwrap();
        assert_eq!(native, portable);
    }

    #[test]
    fn native_path_available_only_on_little_endian_aligned() {
        let words = [0i16; 4];
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_ne_bytes()).collect();
        let aligned = if bytes.as_ptr() as usize % 2 == 0 {
            &bytes[..]
        } else {
            &bytes[1..7]
        };
        assert_eq!(native_path_available(aligned), host_is_little_endian());
    }

    #[test]
    fn decode_into_fills_whole_destination() {
        let src = le_bytes(&[8192, -8192, 0]);
        let mut dst = [1.0f32; 3];
        decode_into(&src, &mut dst);
        assert_eq!(dst, [0.25, -0.25, 0.0]);
    }

    #[test]
    fn repeated_decode_is_identical() {
        let src = le_bytes(&[123, -456, 7890, -32768, 32767]);
        let mut a = [0.0f32; 5];
        let mut b = [0.0f32; 5];
        decode(&src, &mut a, 5).unwrap();
        decode(&src, &mut b, 5).unwrap();
        assert_eq!(a.map(f32::to_bits), b.map(f32::to_bits));
    }

    #[test]
    fn required_src_bytes_checks_overflow() {
        assert_eq!(required_src_bytes(0), Some(0));
        assert_eq!(required_src_bytes(128), Some(256));
        assert_eq!(required_src_bytes(usize::MAX), None);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_sample_decodes_to_exact_quotient(
                samples in proptest::collection::vec(any::<i16>(), 0..512),
            ) {
                let src = le_bytes(&samples);
                let mut dst = vec![0.0f32; samples.len()];
                decode(&src, &mut dst, samples.len()).unwrap();
                for (&s, &x) in samples.iter().zip(&dst) {
                    prop_assert_eq!(x, s as f32 / 32768.0);
                }
            }

            #[test]
            fn paths_are_bit_identical(
                bytes in proptest::collection::vec(any::<u8>(), 0..1024),
                offset in 0usize..2,
            ) {
                let src = &bytes[offset.min(bytes.len())..];
                let n = src.len() / 2;
                let mut auto = vec![0.0f32; n];
                let mut native = vec![0.0f32; n];
                let mut portable = vec![0.0f32; n];
                decode_with(DecodePath::Auto, src, &mut auto, n).unwrap();
                decode_with(DecodePath::Native, src, &mut native, n).unwrap();
                decode_with(DecodePath::Portable, src, &mut portable, n).unwrap();
                let bits = |v: &[f32]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
                prop_assert_eq!(bits(&auto), bits(&portable));
                prop_assert_eq!(bits(&native), bits(&portable));
            }
        }
    }
}
