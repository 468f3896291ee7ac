//! Pixel access contract and the concrete buffer layouts the dispatcher knows about.

pub(crate) mod alpha;
pub(crate) mod interop;
pub(crate) mod nrgba;
pub(crate) mod rgba;
pub(crate) mod rgba64;
pub(crate) mod uniform;
pub(crate) mod ycbcr;

use crate::{
    color::model::Color,
    foundation::error::{DrawError, DrawResult},
    foundation::geom::Rect,
};

pub use alpha::AlphaImage;
pub use nrgba::NrgbaImage;
pub use rgba::RgbaImage;
pub use rgba64::Rgba64Image;
pub use uniform::Uniform;
pub use ycbcr::{SubsampleRatio, YCbCrImage};

/// A borrowed view of a buffer's concrete layout, matched on by the dispatcher.
///
/// Buffers that return [`Kind::Other`] are only ever accessed through [`Image::at`].
#[derive(Clone, Copy, Debug)]
pub enum Kind<'a> {
    /// Solid color of unbounded extent.
    Uniform(&'a Uniform),
    /// Packed premultiplied RGBA8.
    Rgba(&'a RgbaImage),
    /// Packed straight-alpha RGBA8.
    Nrgba(&'a NrgbaImage),
    /// Planar luma/chroma.
    YCbCr(&'a YCbCrImage),
    /// Single-channel coverage.
    Alpha(&'a AlphaImage),
    /// Anything else.
    Other,
}

/// A readable pixel source.
pub trait Image {
    /// The rectangle of valid pixel coordinates.
    fn bounds(&self) -> Rect;

    /// Premultiplied color at `(x, y)`. Coordinates outside [`Image::bounds`] read as
    /// transparent for stored buffers.
    fn at(&self, x: i32, y: i32) -> Color;

    /// Concrete layout, for fast-path selection.
    fn kind(&self) -> Kind<'_> {
        Kind::Other
    }
}

/// A pixel source that can also be written.
pub trait ImageMut: Image {
    /// Store `c` at `(x, y)`. Writes outside [`Image::bounds`] are ignored.
    fn set(&mut self, x: i32, y: i32, c: Color);

    /// The packed premultiplied RGBA8 storage behind this buffer, if that is its layout.
    fn as_rgba_mut(&mut self) -> Option<&mut RgbaImage> {
        None
    }
}

impl<T: Image + ?Sized> Image for &T {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn at(&self, x: i32, y: i32) -> Color {
        (**self).at(x, y)
    }

    fn kind(&self) -> Kind<'_> {
        (**self).kind()
    }
}

/// Validate `rect`/`stride`/`len` for an interleaved buffer of `channels` elements per pixel
/// and return the number of elements the storage needs.
pub(crate) fn check_layout(
    rect: Rect,
    stride: usize,
    channels: usize,
    len: usize,
) -> DrawResult<usize> {
    let width = rect.dx() as usize;
    let height = rect.dy() as usize;
    let row = width
        .checked_mul(channels)
        .ok_or_else(|| DrawError::layout("row size overflow"))?;
    if height > 0 && stride < row {
        return Err(DrawError::layout(format!(
            "stride {stride} is shorter than a row of {row} elements"
        )));
    }
    let needed = match height {
        0 => 0,
        h => stride
            .checked_mul(h - 1)
            .and_then(|v| v.checked_add(row))
            .ok_or_else(|| DrawError::layout("buffer size overflow"))?,
    };
    if len < needed {
        return Err(DrawError::layout(format!(
            "pixel storage holds {len} elements, {needed} required for {width}x{height}"
        )));
    }
    Ok(needed)
}

/// Element offset of `(x, y)` in an interleaved buffer. Caller guarantees `(x, y)` is in `rect`.
#[inline]
pub(crate) fn interleaved_offset(rect: Rect, stride: usize, channels: usize, x: i32, y: i32) -> usize {
    (y - rect.min.y) as usize * stride + (x - rect.min.x) as usize * channels
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/layout.rs"]
mod tests;
