//! Conversions between the crate's buffers and `image` crate buffers.
//!
//! `image::RgbaImage` stores straight alpha, so it maps onto [`NrgbaImage`] directly and onto
//! [`RgbaImage`] through (un)premultiplication.

use crate::{
    buffer::{AlphaImage, Image, NrgbaImage, RgbaImage},
    color::model::Color,
    foundation::error::{DrawError, DrawResult},
    foundation::geom::Rect,
};

fn rect_for(width: u32, height: u32) -> DrawResult<Rect> {
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(DrawError::layout(format!(
            "{width}x{height} exceeds the addressable coordinate range"
        )));
    }
    Ok(Rect::from_size(width, height))
}

impl NrgbaImage {
    /// Copy a straight-alpha `image` buffer; the result is anchored at the origin.
    pub fn from_image(img: &image::RgbaImage) -> DrawResult<Self> {
        let (w, h) = img.dimensions();
        Self::from_raw(rect_for(w, h)?, w as usize * 4, img.as_raw().clone())
    }
}

impl RgbaImage {
    /// Premultiply a straight-alpha `image` buffer.
    pub fn from_straight(img: &image::RgbaImage) -> DrawResult<Self> {
        let (w, h) = img.dimensions();
        let mut out = Self::new(rect_for(w, h)?);
        for (d, s) in out.pix.chunks_exact_mut(4).zip(img.as_raw().chunks_exact(4)) {
            d.copy_from_slice(&Color::from_nrgba8(s[0], s[1], s[2], s[3]).to_rgba8());
        }
        Ok(out)
    }

    /// Un-premultiply into a straight-alpha `image` buffer sized to the bounds.
    pub fn to_straight(&self) -> image::RgbaImage {
        let r = self.rect;
        image::RgbaImage::from_fn(r.dx() as u32, r.dy() as u32, |x, y| {
            let c = self.at(r.min.x + x as i32, r.min.y + y as i32);
            image::Rgba(c.to_nrgba8())
        })
    }
}

impl AlphaImage {
    /// Use luma as coverage.
    pub fn from_luma(img: &image::GrayImage) -> DrawResult<Self> {
        let (w, h) = img.dimensions();
        Self::from_raw(rect_for(w, h)?, w as usize, img.as_raw().clone())
    }

    /// Use the alpha channel of a straight-alpha buffer as coverage.
    pub fn from_alpha_channel(img: &image::RgbaImage) -> DrawResult<Self> {
        let (w, h) = img.dimensions();
        let pix = img.as_raw().chunks_exact(4).map(|p| p[3]).collect();
        Self::from_raw(rect_for(w, h)?, w as usize, pix)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/interop.rs"]
mod tests;
