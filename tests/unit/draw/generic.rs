use super::*;
use crate::buffer::{AlphaImage, Rgba64Image, Uniform};

fn ramp(rect: Rect) -> Rgba64Image {
    let mut img = Rgba64Image::new(rect);
    for y in rect.min.y..rect.max.y {
        for x in rect.min.x..rect.max.x {
            let a = (0x1000 * (x + 1) + 0x300 * y) as u16;
            img.set(x, y, Color::new(a / 2, a / 3, a / 5, a));
        }
    }
    img
}

fn half_mask(rect: Rect) -> AlphaImage {
    let mut m = AlphaImage::new(rect);
    for y in rect.min.y..rect.max.y {
        for x in rect.min.x..rect.max.x {
            m.set_alpha(x, y, if (x + y) % 2 == 0 { 0 } else { 0x80 });
        }
    }
    m
}

#[test]
fn zero_coverage_over_keeps_and_src_clears() {
    let rect = Rect::new(0, 0, 4, 4);
    let mask = AlphaImage::new(rect);
    let src = Uniform::new(Color::OPAQUE);

    let mut over = ramp(rect);
    let before = over.clone();
    composite(&mut over, rect, Point::ZERO, Some(&mask), Point::ZERO, Op::Over, false, |_, x, y| {
        src.at(x, y)
    });
    assert_eq!(over, before);

    let mut cleared = ramp(rect);
    composite(&mut cleared, rect, Point::ZERO, Some(&mask), Point::ZERO, Op::Src, false, |_, x, y| {
        src.at(x, y)
    });
    assert!(cleared.pix().iter().all(|&v| v == 0));
}

#[test]
fn partial_coverage_src_scales_source() {
    let rect = Rect::new(0, 0, 2, 1);
    let mut mask = AlphaImage::new(rect);
    mask.set_alpha(0, 0, 0x80);
    mask.set_alpha(1, 0, 0xff);
    let c = Color::new(0x4000, 0x2000, 0x1000, 0x8000);
    let mut dst = ramp(rect);
    composite(&mut dst, rect, Point::ZERO, Some(&mask), Point::ZERO, Op::Src, false, |_, _, _| c);
    let ma = 0x8080u32;
    assert_eq!(
        dst.at(0, 0),
        Color::from_u32(0x4000 * ma / M, 0x2000 * ma / M, 0x1000 * ma / M, 0x8000 * ma / M)
    );
    assert_eq!(dst.at(1, 0), c);
}

#[test]
fn in_place_backward_matches_copy_through_temporary() {
    let rect = Rect::new(0, 0, 6, 5);
    let mask = half_mask(rect);
    for op in [Op::Over, Op::Src] {
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (-1, -1), (1, -1)] {
            let r = Rect::new(1, 1, 5, 4);
            let sp = Point::new(r.min.x - dx, r.min.y - dy);

            let original = ramp(rect);
            let mut expected = original.clone();
            composite(&mut expected, r, sp, Some(&mask), Point::ZERO, op, false, |_, x, y| {
                original.at(x, y)
            });

            let mut actual = original.clone();
            let backward = crate::draw::runs_backward(r, sp);
            composite(&mut actual, r, sp, Some(&mask), Point::ZERO, op, backward, |d, x, y| {
                d.at(x, y)
            });
            assert_eq!(actual, expected, "op {op:?} shift ({dx},{dy})");
        }
    }
}
