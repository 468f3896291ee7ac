use crate::{
    buffer::{Image, ImageMut, check_layout, interleaved_offset},
    color::model::Color,
    foundation::error::DrawResult,
    foundation::geom::{Point, Rect},
};

/// Premultiplied RGBA with 16 bits per channel.
///
/// No fast path targets this layout, so compositing into it always runs the generic loop and
/// keeps full 16-bit precision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rgba64Image {
    pix: Vec<u16>,
    stride: usize,
    rect: Rect,
}

impl Rgba64Image {
    /// Allocate a transparent buffer covering `rect`.
    pub fn new(rect: Rect) -> Self {
        let stride = rect.dx() as usize * 4;
        Self {
            pix: vec![0; stride * rect.dy() as usize],
            stride,
            rect,
        }
    }

    /// Wrap existing storage. `stride` counts `u16` elements.
    pub fn from_raw(rect: Rect, stride: usize, pix: Vec<u16>) -> DrawResult<Self> {
        check_layout(rect, stride, 4, pix.len())?;
        Ok(Self { pix, stride, rect })
    }

    /// Raw channel values.
    pub fn pix(&self) -> &[u16] {
        &self.pix
    }
}

impl Image for Rgba64Image {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn at(&self, x: i32, y: i32) -> Color {
        if !Point::new(x, y).is_in(self.rect) {
            return Color::TRANSPARENT;
        }
        let i = interleaved_offset(self.rect, self.stride, 4, x, y);
        Color::new(self.pix[i], self.pix[i + 1], self.pix[i + 2], self.pix[i + 3])
    }
}

impl ImageMut for Rgba64Image {
    fn set(&mut self, x: i32, y: i32, c: Color) {
        if !Point::new(x, y).is_in(self.rect) {
            return;
        }
        let i = interleaved_offset(self.rect, self.stride, 4, x, y);
        self.pix[i..i + 4].copy_from_slice(&[c.r, c.g, c.b, c.a]);
    }
}
