use super::*;
use crate::{
    buffer::{AlphaImage, RgbaImage, Rgba64Image, Uniform},
    color::model::Color,
};

const RED: Color = Color::new(0xffff, 0, 0, 0xffff);
const BLUE: Color = Color::new(0, 0, 0xffff, 0xffff);

#[test]
fn backward_when_source_is_above_or_left_on_same_row() {
    let r = Rect::new(2, 2, 5, 5);
    assert!(runs_backward(r, Point::new(9, 1)));
    assert!(runs_backward(r, Point::new(1, 2)));
    assert!(!runs_backward(r, Point::new(2, 2)));
    assert!(!runs_backward(r, Point::new(3, 2)));
    assert!(!runs_backward(r, Point::new(0, 3)));
}

#[test]
fn fill_src_touches_only_the_interior() {
    let mut dst = RgbaImage::new(Rect::new(0, 0, 4, 4));
    draw_mask(
        &mut dst,
        Rect::new(1, 1, 3, 3),
        &Uniform::new(RED),
        Point::ZERO,
        None,
        Point::ZERO,
        Op::Src,
    );
    for y in 0..4 {
        for x in 0..4 {
            let inside = (1..3).contains(&x) && (1..3).contains(&y);
            let want = if inside { RED } else { Color::TRANSPARENT };
            assert_eq!(dst.at(x, y), want, "pixel ({x},{y})");
        }
    }
}

#[test]
fn opaque_over_replaces_every_pixel() {
    let mut dst = RgbaImage::new(Rect::new(0, 0, 4, 4));
    dst.fill(BLUE);
    draw(&mut dst, Rect::new(0, 0, 4, 4), &Uniform::new(RED), Point::ZERO);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(dst.at(x, y), RED);
        }
    }
}

#[test]
fn disjoint_rectangle_is_a_no_op() {
    let mut dst = RgbaImage::new(Rect::new(0, 0, 4, 4));
    dst.fill(BLUE);
    let before = dst.clone();
    draw_mask(
        &mut dst,
        Rect::new(10, 10, 20, 20),
        &Uniform::new(RED),
        Point::ZERO,
        None,
        Point::ZERO,
        Op::Src,
    );
    assert_eq!(dst, before);
}

#[test]
fn source_offset_beyond_i32_draws_nothing() {
    let mut dst = RgbaImage::new(Rect::new(-20, 0, 0, 1));
    dst.fill(BLUE);
    let before = dst.clone();
    let mut src = RgbaImage::new(Rect::new(2_147_483_640, 0, i32::MAX, 1));
    src.fill(RED);
    for op in [Op::Src, Op::Over] {
        draw_mask(
            &mut dst,
            Rect::new(-10, 0, 0, 1),
            &src,
            Point::new(i32::MAX, 0),
            None,
            Point::ZERO,
            op,
        );
    }
    assert_eq!(dst, before);
}

#[test]
fn mask_bounds_clip_the_draw() {
    let mut dst = RgbaImage::new(Rect::new(0, 0, 4, 4));
    let mut mask = AlphaImage::new(Rect::new(0, 0, 2, 2));
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        mask.set_alpha(x, y, 0xff);
    }
    draw_mask(
        &mut dst,
        Rect::new(0, 0, 4, 4),
        &Uniform::new(RED),
        Point::ZERO,
        Some(&mask),
        Point::ZERO,
        Op::Src,
    );
    assert_eq!(dst.at(1, 1), RED);
    assert_eq!(dst.at(2, 2), Color::TRANSPARENT);
}

#[test]
fn unknown_destination_takes_the_generic_path() {
    let mut dst = Rgba64Image::new(Rect::new(0, 0, 2, 2));
    let half = Color::new(0x8000, 0, 0, 0x8000);
    draw(&mut dst, Rect::new(0, 0, 2, 2), &Uniform::new(half), Point::ZERO);
    assert_eq!(dst.at(1, 1), half);
    // A second pass blends onto the first at full 16-bit precision.
    draw(&mut dst, Rect::new(0, 0, 2, 2), &Uniform::new(half), Point::ZERO);
    let a = over_weight(0x8000, M);
    assert_eq!(
        u32::from(dst.at(0, 0).a),
        over_channel(0x8000, a, 0x8000, M)
    );
}

#[test]
fn over_channel_extremes() {
    assert_eq!(over_channel(0x1234, M, 0, 0), 0x1234);
    assert_eq!(over_channel(0x1234, 0, 0xffff, M), 0xffff);
    assert_eq!(over_weight(M, M), 0);
    assert_eq!(over_weight(0, M), M);
}

#[test]
fn op_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Op::Src).unwrap(), "\"src\"");
    let op: Op = serde_json::from_str("\"over\"").unwrap();
    assert_eq!(op, Op::Over);
}
