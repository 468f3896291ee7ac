//! Specialized loops for a packed premultiplied RGBA8 destination.
//!
//! Each loop computes exactly what [`super::generic::composite`] would for the same inputs;
//! they only avoid per-pixel dynamic dispatch and 16-bit round trips through `Color`.

use crate::{
    buffer::{AlphaImage, Kind, NrgbaImage, RgbaImage, SubsampleRatio, YCbCrImage},
    color::model::Color,
    color::ycbcr::ycbcr_to_rgb,
    draw::{Op, over_channel, over_weight, runs_backward},
    foundation::geom::{Point, Rect},
    foundation::math::{M, narrow16, widen8},
};

/// A matched fast path together with the concrete source/mask it reads.
#[derive(Clone, Copy, Debug)]
pub(crate) enum FastPath<'a> {
    FillOver(Color),
    FillSrc(Color),
    CopyOver(&'a RgbaImage),
    CopySrc(&'a RgbaImage),
    NrgbaOver(&'a NrgbaImage),
    NrgbaSrc(&'a NrgbaImage),
    YCbCr(&'a YCbCrImage),
    GlyphOver(Color, &'a AlphaImage),
}

/// Pick the fast path for an RGBA8 destination, most specific combination first.
///
/// Matching looks only at layouts, mask presence and `op`, never at pixel values.
pub(crate) fn select<'a>(op: Op, src: Kind<'a>, mask: Option<Kind<'a>>) -> Option<FastPath<'a>> {
    match (op, mask, src) {
        (Op::Over, None, Kind::Uniform(u)) => Some(FastPath::FillOver(u.color)),
        (Op::Over, None, Kind::Rgba(s)) => Some(FastPath::CopyOver(s)),
        (Op::Over, None, Kind::Nrgba(s)) => Some(FastPath::NrgbaOver(s)),
        (Op::Over, Some(Kind::Alpha(m)), Kind::Uniform(u)) => {
            Some(FastPath::GlyphOver(u.color, m))
        }
        (Op::Src, None, Kind::Uniform(u)) => Some(FastPath::FillSrc(u.color)),
        (Op::Src, None, Kind::Rgba(s)) => Some(FastPath::CopySrc(s)),
        (Op::Src, None, Kind::Nrgba(s)) => Some(FastPath::NrgbaSrc(s)),
        // Opaque sources make Over and Src identical without a mask.
        (_, None, Kind::YCbCr(s)) => Some(FastPath::YCbCr(s)),
        _ => None,
    }
}

impl FastPath<'_> {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::FillOver(_) => "fill_over",
            Self::FillSrc(_) => "fill_src",
            Self::CopyOver(_) => "copy_over",
            Self::CopySrc(_) => "copy_src",
            Self::NrgbaOver(_) => "nrgba_over",
            Self::NrgbaSrc(_) => "nrgba_src",
            Self::YCbCr(_) => "ycbcr",
            Self::GlyphOver(..) => "glyph_over",
        }
    }

    /// Run on an already clipped, non-empty `r`.
    pub(crate) fn run(self, dst: &mut RgbaImage, r: Rect, sp: Point, mp: Point) {
        match self {
            Self::FillOver(c) => fill_over(dst, r, c),
            Self::FillSrc(c) => fill_src(dst, r, c),
            Self::CopyOver(src) => copy_over(dst, r, Some(src), sp),
            Self::CopySrc(src) => copy_src(dst, r, Some(src), sp),
            Self::NrgbaOver(src) => nrgba_over(dst, r, src, sp),
            Self::NrgbaSrc(src) => nrgba_src(dst, r, src, sp),
            Self::YCbCr(src) => ycbcr(dst, r, src, sp),
            Self::GlyphOver(c, mask) => glyph_over(dst, r, c, mask, mp),
        }
    }
}

/// Blend 16-bit source channels at full coverage into 8-bit premultiplied destination bytes.
#[inline]
fn over_px(d: &mut [u8], [sr, sg, sb, sa]: [u32; 4]) {
    let a = over_weight(sa, M);
    d[0] = narrow16(over_channel(widen8(d[0]), a, sr, M));
    d[1] = narrow16(over_channel(widen8(d[1]), a, sg, M));
    d[2] = narrow16(over_channel(widen8(d[2]), a, sb, M));
    d[3] = narrow16(over_channel(widen8(d[3]), a, sa, M));
}

fn fill_over(dst: &mut RgbaImage, r: Rect, c: Color) {
    let s = c.channels();
    let len = r.dx() as usize * 4;
    for y in r.min.y..r.max.y {
        let i0 = dst.pix_offset(r.min.x, y);
        for d in dst.pix[i0..i0 + len].chunks_exact_mut(4) {
            over_px(d, s);
        }
    }
}

fn fill_src(dst: &mut RgbaImage, r: Rect, c: Color) {
    let px = c.to_rgba8();
    let len = r.dx() as usize * 4;
    let first = dst.pix_offset(r.min.x, r.min.y);
    for d in dst.pix[first..first + len].chunks_exact_mut(4) {
        d.copy_from_slice(&px);
    }
    for y in r.min.y + 1..r.max.y {
        let i0 = dst.pix_offset(r.min.x, y);
        dst.pix.copy_within(first..first + len, i0);
    }
}

/// Offset and stride of `sp` in `src`, or in `dst` itself when `src` is `None`.
fn source_origin(dst: &RgbaImage, src: Option<&RgbaImage>, sp: Point) -> (usize, usize) {
    let s = src.unwrap_or(dst);
    (s.pix_offset(sp.x, sp.y), s.stride)
}

/// Premultiplied RGBA8 over RGBA8. With `src` of `None` the source is `dst` itself, and rows and
/// columns are swept in whichever direction keeps unread source pixels intact.
pub(crate) fn copy_over(dst: &mut RgbaImage, r: Rect, src: Option<&RgbaImage>, sp: Point) {
    let (s0, s_stride) = source_origin(dst, src, sp);
    let d0 = dst.pix_offset(r.min.x, r.min.y);
    let d_stride = dst.stride;
    let (w, h) = (r.dx() as usize, r.dy() as usize);
    let backward = runs_backward(r, sp);

    for j in 0..h {
        let oy = if backward { h - 1 - j } else { j };
        let (d_row, s_row) = (d0 + oy * d_stride, s0 + oy * s_stride);
        for i in 0..w {
            let ox = if backward { w - 1 - i } else { i };
            let (di, si) = (d_row + ox * 4, s_row + ox * 4);
            let spix = match src {
                Some(s) => &s.pix,
                None => &dst.pix,
            };
            let s = [
                widen8(spix[si]),
                widen8(spix[si + 1]),
                widen8(spix[si + 2]),
                widen8(spix[si + 3]),
            ];
            over_px(&mut dst.pix[di..di + 4], s);
        }
    }
}

/// Row copy of premultiplied RGBA8. Rows are processed bottom-up when the source starts above
/// the destination; within a row the overlap-safe `copy_within` handles any direction.
pub(crate) fn copy_src(dst: &mut RgbaImage, r: Rect, src: Option<&RgbaImage>, sp: Point) {
    let (s0, s_stride) = source_origin(dst, src, sp);
    let d0 = dst.pix_offset(r.min.x, r.min.y);
    let d_stride = dst.stride;
    let (len, h) = (r.dx() as usize * 4, r.dy() as usize);
    let bottom_up = r.min.y > sp.y;

    for j in 0..h {
        let oy = if bottom_up { h - 1 - j } else { j };
        let (d, s) = (d0 + oy * d_stride, s0 + oy * s_stride);
        match src {
            Some(src) => dst.pix[d..d + len].copy_from_slice(&src.pix[s..s + len]),
            None => dst.pix.copy_within(s..s + len, d),
        }
    }
}

/// Straight-alpha bytes to premultiplied 16-bit channels, matching [`Color::from_nrgba8`].
#[inline]
fn premultiply(p: &[u8]) -> [u32; 4] {
    let sa = u32::from(p[3]);
    [
        widen8(p[0]) * sa / 0xff,
        widen8(p[1]) * sa / 0xff,
        widen8(p[2]) * sa / 0xff,
        widen8(p[3]),
    ]
}

fn nrgba_over(dst: &mut RgbaImage, r: Rect, src: &NrgbaImage, sp: Point) {
    let len = r.dx() as usize * 4;
    for (y, sy) in (r.min.y..r.max.y).zip(sp.y..) {
        let di = dst.pix_offset(r.min.x, y);
        let si = src.pix_offset(sp.x, sy);
        let spix = &src.pix[si..si + len];
        for (d, s) in dst.pix[di..di + len]
            .chunks_exact_mut(4)
            .zip(spix.chunks_exact(4))
        {
            over_px(d, premultiply(s));
        }
    }
}

fn nrgba_src(dst: &mut RgbaImage, r: Rect, src: &NrgbaImage, sp: Point) {
    let len = r.dx() as usize * 4;
    for (y, sy) in (r.min.y..r.max.y).zip(sp.y..) {
        let di = dst.pix_offset(r.min.x, y);
        let si = src.pix_offset(sp.x, sy);
        let spix = &src.pix[si..si + len];
        for (d, s) in dst.pix[di..di + len]
            .chunks_exact_mut(4)
            .zip(spix.chunks_exact(4))
        {
            let [r, g, b, a] = premultiply(s);
            d.copy_from_slice(&[narrow16(r), narrow16(g), narrow16(b), narrow16(a)]);
        }
    }
}

fn glyph_over(dst: &mut RgbaImage, r: Rect, c: Color, mask: &AlphaImage, mp: Point) {
    let [cr, cg, cb, ca] = c.channels();
    let len = r.dx() as usize * 4;
    for (y, my) in (r.min.y..r.max.y).zip(mp.y..) {
        let di = dst.pix_offset(r.min.x, y);
        let mi = mask.pix_offset(mp.x, my);
        let mpix = &mask.pix[mi..mi + r.dx() as usize];
        for (d, &m) in dst.pix[di..di + len].chunks_exact_mut(4).zip(mpix) {
            if m == 0 {
                continue;
            }
            let ma = widen8(m);
            let a = over_weight(ca, ma);
            d[0] = narrow16(over_channel(widen8(d[0]), a, cr, ma));
            d[1] = narrow16(over_channel(widen8(d[1]), a, cg, ma));
            d[2] = narrow16(over_channel(widen8(d[2]), a, cb, ma));
            d[3] = narrow16(over_channel(widen8(d[3]), a, ca, ma));
        }
    }
}

fn ycbcr(dst: &mut RgbaImage, r: Rect, src: &YCbCrImage, sp: Point) {
    let min = src.rect.min;
    let cs = src.c_stride;
    match src.ratio {
        SubsampleRatio::R444 => ycbcr_rows(dst, r, src, sp, |x, y| {
            (y - min.y) as usize * cs + (x - min.x) as usize
        }),
        SubsampleRatio::R422 => ycbcr_rows(dst, r, src, sp, |x, y| {
            (y - min.y) as usize * cs + ((x >> 1) - (min.x >> 1)) as usize
        }),
        SubsampleRatio::R420 => ycbcr_rows(dst, r, src, sp, |x, y| {
            ((y >> 1) - (min.y >> 1)) as usize * cs + ((x >> 1) - (min.x >> 1)) as usize
        }),
    }
}

/// Decode loop shared by all ratios; `chroma` maps a source coordinate to its chroma index.
#[inline]
fn ycbcr_rows(
    dst: &mut RgbaImage,
    r: Rect,
    src: &YCbCrImage,
    sp: Point,
    chroma: impl Fn(i32, i32) -> usize,
) {
    let len = r.dx() as usize * 4;
    for (y, sy) in (r.min.y..r.max.y).zip(sp.y..) {
        let di = dst.pix_offset(r.min.x, y);
        let yi = src.y_offset(sp.x, sy);
        let luma = &src.y[yi..yi + r.dx() as usize];
        for ((d, &yy), sx) in dst.pix[di..di + len]
            .chunks_exact_mut(4)
            .zip(luma)
            .zip(sp.x..)
        {
            let ci = chroma(sx, sy);
            let (rr, gg, bb) = ycbcr_to_rgb(yy, src.cb[ci], src.cr[ci]);
            d.copy_from_slice(&[rr, gg, bb, 0xff]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/fast.rs"]
mod tests;
