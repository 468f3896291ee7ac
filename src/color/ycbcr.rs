//! JFIF YCbCr <-> RGB conversion in 16.16 fixed point.
//!
//! ```text
//! R = Y' + 1.40200 * (Cr - 128)
//! G = Y' - 0.34414 * (Cb - 128) - 0.71414 * (Cr - 128)
//! B = Y' + 1.77200 * (Cb - 128)
//! ```

fn clamp8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Convert a luma/chroma triple to RGB.
pub fn ycbcr_to_rgb(y: u8, cb: u8, cr: u8) -> (u8, u8, u8) {
    let yy1 = (i32::from(y) << 16) + (1 << 15);
    let cb1 = i32::from(cb) - 128;
    let cr1 = i32::from(cr) - 128;
    let r = (yy1 + 91881 * cr1) >> 16;
    let g = (yy1 - 22554 * cb1 - 46802 * cr1) >> 16;
    let b = (yy1 + 116130 * cb1) >> 16;
    (clamp8(r), clamp8(g), clamp8(b))
}

/// Convert RGB to a luma/chroma triple.
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let (r1, g1, b1) = (i32::from(r), i32::from(g), i32::from(b));
    let yy = (19595 * r1 + 38470 * g1 + 7471 * b1 + (1 << 15)) >> 16;
    let cb = (-11056 * r1 - 21712 * g1 + 32768 * b1 + (257 << 15)) >> 16;
    let cr = (32768 * r1 - 27440 * g1 - 5328 * b1 + (257 << 15)) >> 16;
    (clamp8(yy), clamp8(cb), clamp8(cr))
}

#[cfg(test)]
#[path = "../../tests/unit/color/ycbcr.rs"]
mod tests;
