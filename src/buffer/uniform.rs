use crate::{
    buffer::{Image, Kind},
    color::model::Color,
    foundation::geom::Rect,
};

/// A solid color of effectively unbounded extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Uniform {
    /// The premultiplied color returned for every coordinate.
    pub color: Color,
}

impl Uniform {
    const EXTENT: i32 = 1_000_000_000;

    /// Wrap a premultiplied color.
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Full-coverage source or mask.
    pub fn opaque() -> Self {
        Self::new(Color::OPAQUE)
    }

    /// Zero-coverage source or mask.
    pub fn transparent() -> Self {
        Self::new(Color::TRANSPARENT)
    }
}

impl Image for Uniform {
    fn bounds(&self) -> Rect {
        Rect::new(-Self::EXTENT, -Self::EXTENT, Self::EXTENT, Self::EXTENT)
    }

    fn at(&self, _x: i32, _y: i32) -> Color {
        self.color
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Uniform(self)
    }
}
