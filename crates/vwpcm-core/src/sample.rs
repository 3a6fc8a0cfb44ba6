//! Signed 16-bit PCM samples and their normalized `f32` form.

/// Divisor mapping a signed 16-bit sample onto `[-1.0, 1.0)`.
///
/// `i16::MIN` maps to exactly `-1.0`; `i16::MAX` maps to `32767 / 32768`,
/// never `1.0`. The scale is a power of two, so the division is exact for
/// every `i16` input.
pub const PCM16_SCALE: f32 = 32768.0;

/// Normalize a signed 16-bit sample.
#[inline(always)]
pub fn pcm16_to_f32(v: i16) -> f32 {
    v as f32 / PCM16_SCALE
}

/// One signed 16-bit PCM sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Pcm16(pub i16);

impl Pcm16 {
    /// Most negative sample, decodes to `-1.0`.
    pub const MIN: Self = Self(i16::MIN);
    /// Most positive sample, decodes to `0.999969482421875`.
    pub const MAX: Self = Self(i16::MAX);
    /// Silence.
    pub const ZERO: Self = Self(0);

    /// Assemble a sample from its little-endian byte pair.
    ///
    /// Built from explicit shifts so the result never depends on the
    /// host's byte order.
    #[inline(always)]
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        let raw = (bytes[0] as u16) | ((bytes[1] as u16) << 8);
        Self(raw as i16)
    }

    /// Little-endian byte pair for this sample.
    #[inline]
    pub fn to_le_bytes(self) -> [u8; 2] {
        let raw = self.0 as u16;
        [raw as u8, (raw >> 8) as u8]
    }

    /// Normalized `f32` value in `[-1.0, 1.0)`.
    #[inline(always)]
    pub fn to_f32(self) -> f32 {
        pcm16_to_f32(self.0)
    }
}

impl From<i16> for Pcm16 {
    fn from(v: i16) -> Self {
        Self(v)
    }
}

impl From<Pcm16> for f32 {
    fn from(s: Pcm16) -> Self {
        s.to_f32()
    }
}
