use crate::{
    buffer::{Image, ImageMut, Kind, check_layout, interleaved_offset},
    color::model::Color,
    foundation::error::DrawResult,
    foundation::geom::{Point, Rect},
};

/// Packed straight-alpha (non-premultiplied) RGBA, one byte per channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NrgbaImage {
    pub(crate) pix: Vec<u8>,
    pub(crate) stride: usize,
    pub(crate) rect: Rect,
}

impl NrgbaImage {
    /// Allocate a transparent buffer covering `rect`.
    pub fn new(rect: Rect) -> Self {
        let stride = rect.dx() as usize * 4;
        Self {
            pix: vec![0; stride * rect.dy() as usize],
            stride,
            rect,
        }
    }

    /// Wrap existing straight-alpha storage. `stride` is in bytes.
    pub fn from_raw(rect: Rect, stride: usize, pix: Vec<u8>) -> DrawResult<Self> {
        check_layout(rect, stride, 4, pix.len())?;
        Ok(Self { pix, stride, rect })
    }

    /// Raw straight-alpha bytes.
    pub fn pix(&self) -> &[u8] {
        &self.pix
    }

    /// Distance in bytes between vertically adjacent pixels.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Byte offset of the pixel at `(x, y)`, which must lie inside the bounds.
    pub fn pix_offset(&self, x: i32, y: i32) -> usize {
        interleaved_offset(self.rect, self.stride, 4, x, y)
    }

    /// Store straight-alpha bytes at `(x, y)`; ignored outside the bounds.
    pub fn set_nrgba8(&mut self, x: i32, y: i32, px: [u8; 4]) {
        if Point::new(x, y).is_in(self.rect) {
            let i = self.pix_offset(x, y);
            self.pix[i..i + 4].copy_from_slice(&px);
        }
    }
}

impl Image for NrgbaImage {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn at(&self, x: i32, y: i32) -> Color {
        if !Point::new(x, y).is_in(self.rect) {
            return Color::TRANSPARENT;
        }
        let i = self.pix_offset(x, y);
        let p = &self.pix[i..i + 4];
        Color::from_nrgba8(p[0], p[1], p[2], p[3])
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Nrgba(self)
    }
}

impl ImageMut for NrgbaImage {
    fn set(&mut self, x: i32, y: i32, c: Color) {
        self.set_nrgba8(x, y, c.to_nrgba8());
    }
}
