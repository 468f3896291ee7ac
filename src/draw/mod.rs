//! Porter-Duff compositing entry points and fast-path dispatch.
//!
//! Every call clips the target rectangle against all participating buffers, then either runs
//! a specialized loop for a known `(destination, source, mask, op)` layout combination or falls
//! back to the per-pixel [`generic`] loop. Results are bit-identical either way.

pub(crate) mod fast;
pub(crate) mod generic;

use crate::{
    buffer::{Image, ImageMut},
    foundation::geom::{Clipped, Point, Rect, clip_and_shift},
    foundation::math::M,
};

/// A Porter-Duff compositing operator.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    /// `(src in mask) over dst`.
    #[default]
    Over,
    /// `src in mask`, discarding the destination.
    Src,
}

/// Composite `src` over `dst` inside `r`, with `sp` in `src` aligned to `r.min`.
///
/// Equivalent to [`draw_mask`] with no mask and [`Op::Over`].
pub fn draw<D, S>(dst: &mut D, r: Rect, src: &S, sp: Point)
where
    D: ImageMut + ?Sized,
    S: Image + ?Sized,
{
    draw_mask(dst, r, src, sp, None, Point::ZERO, Op::Over);
}

/// Replace the rectangle `r` of `dst` with the composition of `src` (aligned at `sp`) through
/// `mask` (aligned at `mp`) using `op`. A `None` mask is fully opaque.
///
/// Pixels outside `dst.bounds()` and outside the translated source/mask bounds are never read
/// or written. Calls mutating the same destination must be serialized by the caller.
pub fn draw_mask<D, S>(
    dst: &mut D,
    r: Rect,
    src: &S,
    sp: Point,
    mask: Option<&dyn Image>,
    mp: Point,
    op: Op,
) where
    D: ImageMut + ?Sized,
    S: Image + ?Sized,
{
    let Clipped { r, sp, mp } = clip_and_shift(
        dst.bounds(),
        r,
        src.bounds(),
        sp,
        mask.map(|m| m.bounds()),
        mp,
    );
    if r.is_empty() {
        tracing::trace!("clipped rectangle is empty");
        return;
    }

    if let Some(rgba) = dst.as_rgba_mut()
        && let Some(path) = fast::select(op, src.kind(), mask.map(|m| m.kind()))
    {
        tracing::trace!(path = path.name(), ?r, "draw fast path");
        path.run(rgba, r, sp, mp);
        return;
    }

    tracing::trace!(?r, ?op, "draw generic");
    generic::composite(dst, r, sp, mask, mp, op, false, |_, x, y| src.at(x, y));
}

/// Composite a region of `dst` onto itself: the source is `dst`, aligned at `sp`.
///
/// Overlapping source and destination regions produce the same result as copying the
/// source region to a temporary buffer first.
pub fn draw_within<D>(dst: &mut D, r: Rect, sp: Point, op: Op)
where
    D: ImageMut + ?Sized,
{
    draw_mask_within(dst, r, sp, None, Point::ZERO, op);
}

/// Masked variant of [`draw_within`].
pub fn draw_mask_within<D>(
    dst: &mut D,
    r: Rect,
    sp: Point,
    mask: Option<&dyn Image>,
    mp: Point,
    op: Op,
) where
    D: ImageMut + ?Sized,
{
    let bounds = dst.bounds();
    let Clipped { r, sp, mp } =
        clip_and_shift(bounds, r, bounds, sp, mask.map(|m| m.bounds()), mp);
    if r.is_empty() {
        tracing::trace!("clipped rectangle is empty");
        return;
    }

    if mask.is_none()
        && let Some(rgba) = dst.as_rgba_mut()
    {
        tracing::trace!(?r, ?op, "draw fast path (in place)");
        match op {
            Op::Over => fast::copy_over(rgba, r, None, sp),
            Op::Src => fast::copy_src(rgba, r, None, sp),
        }
        return;
    }

    let backward = r.overlaps(r.add(sp - r.min)) && runs_backward(r, sp);
    tracing::trace!(?r, ?op, backward, "draw generic (in place)");
    generic::composite(dst, r, sp, mask, mp, op, backward, |d, x, y| d.at(x, y));
}

/// Traversal direction for a source at `sp` feeding the rectangle `r` of the same buffer.
///
/// A source above the destination, or on the same row and to its left, moves pixels down or
/// right, so the sweep must start from the far corner (bottom-right) to consume every source
/// pixel before it is overwritten. The same flag governs both axes.
pub(crate) fn runs_backward(r: Rect, sp: Point) -> bool {
    sp.y < r.min.y || (sp.y == r.min.y && sp.x < r.min.x)
}

/// Porter-Duff "over" for one 16-bit channel: `(d * a + s * ma) / M`.
#[inline]
pub(crate) fn over_channel(d: u32, a: u32, s: u32, ma: u32) -> u32 {
    ((u64::from(d) * u64::from(a) + u64::from(s) * u64::from(ma)) / u64::from(M)) as u32
}

/// Destination weight for "over" with source alpha `sa` at coverage `ma`.
#[inline]
pub(crate) fn over_weight(sa: u32, ma: u32) -> u32 {
    M - sa * ma / M
}

#[cfg(test)]
#[path = "../../tests/unit/draw/dispatch.rs"]
mod tests;
