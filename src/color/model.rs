use crate::{
    color::ycbcr::ycbcr_to_rgb,
    foundation::error::{DrawError, DrawResult},
    foundation::math::{M, narrow16, widen8},
};

/// Premultiplied RGBA with 16 bits per channel.
///
/// Invariant for well-formed colors: `r`, `g` and `b` never exceed `a`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Color {
    /// Red, premultiplied.
    pub r: u16,
    /// Green, premultiplied.
    pub g: u16,
    /// Blue, premultiplied.
    pub b: u16,
    /// Alpha.
    pub a: u16,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Fully opaque white; as a mask this means full coverage.
    pub const OPAQUE: Self = Self::new(0xffff, 0xffff, 0xffff, 0xffff);

    /// Build a color from premultiplied channels without checking the invariant.
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from premultiplied channels, rejecting any channel larger than alpha.
    pub fn try_new(r: u16, g: u16, b: u16, a: u16) -> DrawResult<Self> {
        if r > a || g > a || b > a {
            return Err(DrawError::validation(format!(
                "premultiplied channels ({r}, {g}, {b}) must not exceed alpha {a}"
            )));
        }
        Ok(Self::new(r, g, b, a))
    }

    /// Widen premultiplied 8-bit channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_u32(widen8(r), widen8(g), widen8(b), widen8(a))
    }

    /// Premultiply and widen straight-alpha 8-bit channels.
    ///
    /// The operation order (`c * 0x101 * a / 0xff`) is shared with the non-premultiplied fast
    /// paths so both produce identical values.
    pub fn from_nrgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let sa = u32::from(a);
        Self::from_u32(
            widen8(r) * sa / 0xff,
            widen8(g) * sa / 0xff,
            widen8(b) * sa / 0xff,
            widen8(a),
        )
    }

    /// Coverage `a` replicated into every channel.
    pub fn from_alpha8(a: u8) -> Self {
        let a = widen8(a);
        Self::from_u32(a, a, a, a)
    }

    /// Decode an opaque luma/chroma triple.
    pub fn from_ycbcr(y: u8, cb: u8, cr: u8) -> Self {
        let (r, g, b) = ycbcr_to_rgb(y, cb, cr);
        Self::from_rgba8(r, g, b, 0xff)
    }

    /// Narrow working values to channels; inputs are expected to be at most `0xffff`.
    pub(crate) fn from_u32(r: u32, g: u32, b: u32, a: u32) -> Self {
        Self::new(r as u16, g as u16, b as u16, a as u16)
    }

    /// Channels widened to `u32` for intermediate arithmetic.
    pub fn channels(self) -> [u32; 4] {
        [
            u32::from(self.r),
            u32::from(self.g),
            u32::from(self.b),
            u32::from(self.a),
        ]
    }

    /// Premultiplied 8-bit channels (truncating).
    pub fn to_rgba8(self) -> [u8; 4] {
        let [r, g, b, a] = self.channels();
        [narrow16(r), narrow16(g), narrow16(b), narrow16(a)]
    }

    /// Straight-alpha 8-bit channels.
    pub fn to_nrgba8(self) -> [u8; 4] {
        let [r, g, b, a] = self.channels();
        if a == M {
            return [narrow16(r), narrow16(g), narrow16(b), 0xff];
        }
        if a == 0 {
            return [0, 0, 0, 0];
        }
        [
            narrow16(r * M / a),
            narrow16(g * M / a),
            narrow16(b * M / a),
            narrow16(a),
        ]
    }

    /// Whether the premultiplied invariant holds.
    pub fn is_premultiplied(self) -> bool {
        self.r <= self.a && self.g <= self.a && self.b <= self.a
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/model.rs"]
mod tests;
