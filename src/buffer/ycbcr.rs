use crate::{
    buffer::{Image, Kind},
    color::model::Color,
    foundation::error::{DrawError, DrawResult},
    foundation::geom::{Point, Rect},
};

/// Horizontal/vertical chroma resolution relative to luma.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum SubsampleRatio {
    /// Chroma at full resolution.
    #[default]
    R444,
    /// Chroma halved horizontally.
    R422,
    /// Chroma halved on both axes.
    R420,
}

impl SubsampleRatio {
    /// Chroma plane size for a luma rectangle.
    fn chroma_size(self, rect: Rect) -> (usize, usize) {
        let half_w = ((rect.max.x + 1) >> 1) - (rect.min.x >> 1);
        let half_h = ((rect.max.y + 1) >> 1) - (rect.min.y >> 1);
        let (w, h) = match self {
            Self::R444 => (rect.dx(), rect.dy()),
            Self::R422 => (half_w, rect.dy()),
            Self::R420 => (half_w, half_h),
        };
        if rect.is_empty() {
            (0, 0)
        } else {
            (w as usize, h as usize)
        }
    }
}

/// Planar luma/chroma image. Always fully opaque, and read-only as far as compositing goes.
///
/// Chroma sample coordinates use floor halving (`x >> 1`), so rectangles need not start at
/// an even coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YCbCrImage {
    pub(crate) y: Vec<u8>,
    pub(crate) cb: Vec<u8>,
    pub(crate) cr: Vec<u8>,
    pub(crate) y_stride: usize,
    pub(crate) c_stride: usize,
    pub(crate) ratio: SubsampleRatio,
    pub(crate) rect: Rect,
}

impl YCbCrImage {
    /// Allocate black planes covering `rect` (luma 0, neutral chroma).
    pub fn new(rect: Rect, ratio: SubsampleRatio) -> Self {
        let (cw, ch) = ratio.chroma_size(rect);
        let y_stride = rect.dx() as usize;
        Self {
            y: vec![0; y_stride * rect.dy() as usize],
            cb: vec![128; cw * ch],
            cr: vec![128; cw * ch],
            y_stride,
            c_stride: cw,
            ratio,
            rect,
        }
    }

    /// Wrap existing planes. Strides are in bytes.
    pub fn from_planes(
        rect: Rect,
        ratio: SubsampleRatio,
        y: Vec<u8>,
        y_stride: usize,
        cb: Vec<u8>,
        cr: Vec<u8>,
        c_stride: usize,
    ) -> DrawResult<Self> {
        super::check_layout(rect, y_stride, 1, y.len())?;
        let (cw, ch) = ratio.chroma_size(rect);
        if ch > 0 && c_stride < cw {
            return Err(DrawError::layout(format!(
                "chroma stride {c_stride} is shorter than a chroma row of {cw}"
            )));
        }
        let needed = if ch == 0 { 0 } else { c_stride * (ch - 1) + cw };
        if cb.len() < needed || cr.len() < needed {
            return Err(DrawError::layout(format!(
                "chroma planes hold {}/{} bytes, {needed} required",
                cb.len(),
                cr.len()
            )));
        }
        Ok(Self {
            y,
            cb,
            cr,
            y_stride,
            c_stride,
            ratio,
            rect,
        })
    }

    /// The subsampling layout.
    pub fn ratio(&self) -> SubsampleRatio {
        self.ratio
    }

    /// Index of the luma sample for `(x, y)`, which must lie inside the bounds.
    pub fn y_offset(&self, x: i32, y: i32) -> usize {
        (y - self.rect.min.y) as usize * self.y_stride + (x - self.rect.min.x) as usize
    }

    /// Index of the chroma samples for `(x, y)`, which must lie inside the bounds.
    pub fn c_offset(&self, x: i32, y: i32) -> usize {
        let min = self.rect.min;
        match self.ratio {
            SubsampleRatio::R444 => {
                (y - min.y) as usize * self.c_stride + (x - min.x) as usize
            }
            SubsampleRatio::R422 => {
                (y - min.y) as usize * self.c_stride + ((x >> 1) - (min.x >> 1)) as usize
            }
            SubsampleRatio::R420 => {
                ((y >> 1) - (min.y >> 1)) as usize * self.c_stride
                    + ((x >> 1) - (min.x >> 1)) as usize
            }
        }
    }

    /// Store a luma sample; ignored outside the bounds.
    pub fn set_luma(&mut self, x: i32, y: i32, v: u8) {
        if Point::new(x, y).is_in(self.rect) {
            let i = self.y_offset(x, y);
            self.y[i] = v;
        }
    }

    /// Store the chroma pair shared by `(x, y)`; ignored outside the bounds.
    pub fn set_chroma(&mut self, x: i32, y: i32, cb: u8, cr: u8) {
        if Point::new(x, y).is_in(self.rect) {
            let i = self.c_offset(x, y);
            self.cb[i] = cb;
            self.cr[i] = cr;
        }
    }

    /// The `(Y, Cb, Cr)` triple that decodes to the pixel at `(x, y)`.
    pub fn ycbcr_at(&self, x: i32, y: i32) -> Option<(u8, u8, u8)> {
        if !Point::new(x, y).is_in(self.rect) {
            return None;
        }
        let ci = self.c_offset(x, y);
        Some((self.y[self.y_offset(x, y)], self.cb[ci], self.cr[ci]))
    }
}

impl Image for YCbCrImage {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn at(&self, x: i32, y: i32) -> Color {
        match self.ycbcr_at(x, y) {
            Some((yy, cb, cr)) => Color::from_ycbcr(yy, cb, cr),
            None => Color::TRANSPARENT,
        }
    }

    fn kind(&self) -> Kind<'_> {
        Kind::YCbCr(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/ycbcr.rs"]
mod tests;
