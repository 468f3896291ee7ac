use crate::{
    buffer::{Image, ImageMut, Kind, check_layout, interleaved_offset},
    color::model::Color,
    foundation::error::DrawResult,
    foundation::geom::{Point, Rect},
};

/// Single-channel 8-bit coverage, typically used as a mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaImage {
    pub(crate) pix: Vec<u8>,
    pub(crate) stride: usize,
    pub(crate) rect: Rect,
}

impl AlphaImage {
    /// Allocate a zero-coverage buffer covering `rect`.
    pub fn new(rect: Rect) -> Self {
        let stride = rect.dx() as usize;
        Self {
            pix: vec![0; stride * rect.dy() as usize],
            stride,
            rect,
        }
    }

    /// Wrap existing coverage storage. `stride` is in bytes.
    pub fn from_raw(rect: Rect, stride: usize, pix: Vec<u8>) -> DrawResult<Self> {
        check_layout(rect, stride, 1, pix.len())?;
        Ok(Self { pix, stride, rect })
    }

    /// Raw coverage bytes.
    pub fn pix(&self) -> &[u8] {
        &self.pix
    }

    /// Distance in bytes between vertically adjacent pixels.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Byte offset of the pixel at `(x, y)`, which must lie inside the bounds.
    pub fn pix_offset(&self, x: i32, y: i32) -> usize {
        interleaved_offset(self.rect, self.stride, 1, x, y)
    }

    /// Coverage at `(x, y)`, zero outside the bounds.
    pub fn alpha_at(&self, x: i32, y: i32) -> u8 {
        if Point::new(x, y).is_in(self.rect) {
            self.pix[self.pix_offset(x, y)]
        } else {
            0
        }
    }

    /// Store coverage at `(x, y)`; ignored outside the bounds.
    pub fn set_alpha(&mut self, x: i32, y: i32, a: u8) {
        if Point::new(x, y).is_in(self.rect) {
            let i = self.pix_offset(x, y);
            self.pix[i] = a;
        }
    }
}

impl Image for AlphaImage {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn at(&self, x: i32, y: i32) -> Color {
        Color::from_alpha8(self.alpha_at(x, y))
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Alpha(self)
    }
}

impl ImageMut for AlphaImage {
    fn set(&mut self, x: i32, y: i32, c: Color) {
        self.set_alpha(x, y, c.to_rgba8()[3]);
    }
}
