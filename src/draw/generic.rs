use crate::{
    buffer::{Image, ImageMut},
    color::model::Color,
    draw::{Op, over_channel, over_weight},
    foundation::geom::{Point, Rect},
    foundation::math::M,
};

/// Per-pixel compositing through [`Image::at`] and [`ImageMut::set`].
///
/// `src_at` reads source pixels given the destination, which lets the same loop serve an
/// independent source and a source that is the destination itself. With `backward` set, rows
/// run bottom-up and columns right-to-left.
#[allow(clippy::too_many_arguments)]
pub(crate) fn composite<D, F>(
    dst: &mut D,
    r: Rect,
    sp: Point,
    mask: Option<&dyn Image>,
    mp: Point,
    op: Op,
    backward: bool,
    src_at: F,
) where
    D: ImageMut + ?Sized,
    F: Fn(&D, i32, i32) -> Color,
{
    let (w, h) = (r.dx(), r.dy());
    for j in 0..h {
        let oy = if backward { h - 1 - j } else { j };
        let (y, sy, my) = (r.min.y + oy, sp.y + oy, mp.y + oy);
        for i in 0..w {
            let ox = if backward { w - 1 - i } else { i };
            let (x, sx, mx) = (r.min.x + ox, sp.x + ox, mp.x + ox);

            let ma = match mask {
                Some(m) => u32::from(m.at(mx, my).a),
                None => M,
            };
            match (ma, op) {
                (0, Op::Over) => {}
                (0, Op::Src) => dst.set(x, y, Color::TRANSPARENT),
                (M, Op::Src) => {
                    let s = src_at(dst, sx, sy);
                    dst.set(x, y, s);
                }
                _ => {
                    let [sr, sg, sb, sa] = src_at(dst, sx, sy).channels();
                    let out = match op {
                        Op::Over => {
                            let [dr, dg, db, da] = dst.at(x, y).channels();
                            let a = over_weight(sa, ma);
                            Color::from_u32(
                                over_channel(dr, a, sr, ma),
                                over_channel(dg, a, sg, ma),
                                over_channel(db, a, sb, ma),
                                over_channel(da, a, sa, ma),
                            )
                        }
                        Op::Src => Color::from_u32(
                            sr * ma / M,
                            sg * ma / M,
                            sb * ma / M,
                            sa * ma / M,
                        ),
                    };
                    dst.set(x, y, out);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/generic.rs"]
mod tests;
