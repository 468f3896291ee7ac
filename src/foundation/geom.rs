//! Integer geometry: points, half-open rectangles and the clipping step shared by every
//! compositing call.

use std::ops::{Add, Sub};

/// An integer `(x, y)` pair, used both as a pixel coordinate and as a translation.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Point {
    /// Horizontal coordinate, increasing to the right.
    pub x: i32,
    /// Vertical coordinate, increasing downwards.
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Build a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether `self` lies inside the half-open rectangle `r`.
    pub fn is_in(self, r: Rect) -> bool {
        r.min.x <= self.x && self.x < r.max.x && r.min.y <= self.y && self.y < r.max.y
    }
}

// Translations saturate instead of wrapping. Clipping does its own arithmetic in `i64`.
impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// A half-open rectangle: `min` is inclusive, `max` is exclusive.
///
/// A rectangle is empty iff `min.x >= max.x || min.y >= max.y`. Empty rectangles carry no
/// pixels, and all empty rectangles compare as empty regardless of their corners.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rect {
    /// Top-left corner (inclusive).
    pub min: Point,
    /// Bottom-right corner (exclusive).
    pub max: Point,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Build a rectangle from two corners, swapping coordinates so that `min <= max`.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// A `width x height` rectangle anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        Self::new(0, 0, w, h)
    }

    /// Width; negative values are reported as 0.
    pub fn dx(self) -> i32 {
        (self.max.x - self.min.x).max(0)
    }

    /// Height; negative values are reported as 0.
    pub fn dy(self) -> i32 {
        (self.max.y - self.min.y).max(0)
    }

    /// Whether the rectangle contains no pixels.
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Translate by `p`.
    pub fn add(self, p: Point) -> Self {
        Self {
            min: self.min + p,
            max: self.max + p,
        }
    }

    /// Translate by `-p`.
    pub fn sub(self, p: Point) -> Self {
        Self {
            min: self.min - p,
            max: self.max - p,
        }
    }

    /// The largest rectangle contained by both `self` and `other`.
    ///
    /// Returns [`Rect::ZERO`] when the two do not overlap.
    pub fn intersect(self, other: Self) -> Self {
        let r = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Self::ZERO } else { r }
    }

    /// Whether `self` and `other` share at least one pixel.
    pub fn overlaps(self, other: Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Whether every pixel of `self` is also in `other`. Empty rectangles are inside anything.
    pub fn is_in(self, other: Self) -> bool {
        if self.is_empty() {
            return true;
        }
        other.min.x <= self.min.x
            && self.max.x <= other.max.x
            && other.min.y <= self.min.y
            && self.max.y <= other.max.y
    }
}

/// Result of [`clip_and_shift`]: the drawable rectangle and the source/mask points realigned
/// with its (possibly moved) top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clipped {
    /// Destination rectangle, inside every participating buffer.
    pub r: Rect,
    /// Source point aligned with `r.min`.
    pub sp: Point,
    /// Mask point aligned with `r.min`.
    pub mp: Point,
}

/// Rectangle corners `[x0, y0, x1, y1]` widened to `i64`, where any `i32` translation is exact.
type Wide = [i64; 4];

fn widen(r: Rect) -> Wide {
    [
        i64::from(r.min.x),
        i64::from(r.min.y),
        i64::from(r.max.x),
        i64::from(r.max.y),
    ]
}

fn translate(r: Wide, dx: i64, dy: i64) -> Wide {
    [r[0] + dx, r[1] + dy, r[2] + dx, r[3] + dy]
}

fn meet(a: Wide, b: Wide) -> Wide {
    [a[0].max(b[0]), a[1].max(b[1]), a[2].min(b[2]), a[3].min(b[3])]
}

fn narrow(v: i64) -> Option<i32> {
    i32::try_from(v).ok()
}

fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Clip `r` against the destination, source and (optional) mask bounds, each translated into
/// destination space, and shift `sp`/`mp` by however far `r.min` moved.
///
/// The intersection is computed in `i64`, so offsets near the ends of the `i32` range never
/// wrap or saturate into a bogus overlap. An empty result comes back as [`Rect::ZERO`].
pub fn clip_and_shift(
    dst: Rect,
    r: Rect,
    src: Rect,
    sp: Point,
    mask: Option<Rect>,
    mp: Point,
) -> Clipped {
    let empty = Clipped {
        r: Rect::ZERO,
        sp,
        mp,
    };
    let (ox, oy) = (i64::from(r.min.x), i64::from(r.min.y));

    let mut out = meet(widen(r), widen(dst));
    out = meet(
        out,
        translate(widen(src), ox - i64::from(sp.x), oy - i64::from(sp.y)),
    );
    if let Some(mask) = mask {
        out = meet(
            out,
            translate(widen(mask), ox - i64::from(mp.x), oy - i64::from(mp.y)),
        );
    }
    if out[0] >= out[2] || out[1] >= out[3] {
        return empty;
    }

    let (dx, dy) = (out[0] - ox, out[1] - oy);
    narrow_clip(out, sp, mp, mask.is_some(), dx, dy).unwrap_or(empty)
}

fn narrow_clip(
    out: Wide,
    sp: Point,
    mp: Point,
    masked: bool,
    dx: i64,
    dy: i64,
) -> Option<Clipped> {
    let r = Rect {
        min: Point::new(narrow(out[0])?, narrow(out[1])?),
        max: Point::new(narrow(out[2])?, narrow(out[3])?),
    };
    let sp = Point::new(
        narrow(i64::from(sp.x) + dx)?,
        narrow(i64::from(sp.y) + dy)?,
    );
    // Without a mask `mp` is never read.
    let (mx, my) = (i64::from(mp.x) + dx, i64::from(mp.y) + dy);
    let mp = if masked {
        Point::new(narrow(mx)?, narrow(my)?)
    } else {
        Point::new(saturate(mx), saturate(my))
    };
    Some(Clipped { r, sp, mp })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
