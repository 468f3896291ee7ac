use crate::{
    buffer::{Image, ImageMut, Kind, check_layout, interleaved_offset},
    color::model::Color,
    foundation::error::DrawResult,
    foundation::geom::{Point, Rect},
};

/// Packed premultiplied RGBA, one byte per channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    pub(crate) pix: Vec<u8>,
    pub(crate) stride: usize,
    pub(crate) rect: Rect,
}

impl RgbaImage {
    /// Allocate a transparent buffer covering `rect`.
    pub fn new(rect: Rect) -> Self {
        let stride = rect.dx() as usize * 4;
        Self {
            pix: vec![0; stride * rect.dy() as usize],
            stride,
            rect,
        }
    }

    /// Wrap existing premultiplied storage. `stride` is in bytes.
    pub fn from_raw(rect: Rect, stride: usize, pix: Vec<u8>) -> DrawResult<Self> {
        check_layout(rect, stride, 4, pix.len())?;
        Ok(Self { pix, stride, rect })
    }

    /// Raw premultiplied bytes.
    pub fn pix(&self) -> &[u8] {
        &self.pix
    }

    /// Mutable raw premultiplied bytes.
    pub fn pix_mut(&mut self) -> &mut [u8] {
        &mut self.pix
    }

    /// Distance in bytes between vertically adjacent pixels.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Consume the buffer, returning its storage.
    pub fn into_raw(self) -> Vec<u8> {
        self.pix
    }

    /// Byte offset of the pixel at `(x, y)`, which must lie inside the bounds.
    pub fn pix_offset(&self, x: i32, y: i32) -> usize {
        interleaved_offset(self.rect, self.stride, 4, x, y)
    }

    /// Premultiplied bytes of the pixel at `(x, y)`, or `None` outside the bounds.
    pub fn rgba8_at(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if !Point::new(x, y).is_in(self.rect) {
            return None;
        }
        let i = self.pix_offset(x, y);
        Some([self.pix[i], self.pix[i + 1], self.pix[i + 2], self.pix[i + 3]])
    }

    /// Overwrite every pixel with `c`.
    pub fn fill(&mut self, c: Color) {
        let px = c.to_rgba8();
        let row = self.rect.dx() as usize * 4;
        for y in 0..self.rect.dy() as usize {
            let start = y * self.stride;
            for chunk in self.pix[start..start + row].chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
    }
}

impl Image for RgbaImage {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn at(&self, x: i32, y: i32) -> Color {
        match self.rgba8_at(x, y) {
            Some([r, g, b, a]) => Color::from_rgba8(r, g, b, a),
            None => Color::TRANSPARENT,
        }
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Rgba(self)
    }
}

impl ImageMut for RgbaImage {
    fn set(&mut self, x: i32, y: i32, c: Color) {
        if !Point::new(x, y).is_in(self.rect) {
            return;
        }
        let i = self.pix_offset(x, y);
        self.pix[i..i + 4].copy_from_slice(&c.to_rgba8());
    }

    fn as_rgba_mut(&mut self) -> Option<&mut RgbaImage> {
        Some(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/rgba.rs"]
mod tests;
