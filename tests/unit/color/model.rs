use super::*;

#[test]
fn try_new_rejects_channels_above_alpha() {
    assert!(Color::try_new(10, 10, 10, 10).is_ok());
    let err = Color::try_new(11, 0, 0, 10).unwrap_err();
    assert!(err.to_string().contains("must not exceed alpha"));
}

#[test]
fn rgba8_widening_is_exact() {
    assert_eq!(
        Color::from_rgba8(0xff, 0x80, 0, 0xff),
        Color::new(0xffff, 0x8080, 0, 0xffff)
    );
    assert_eq!(Color::from_rgba8(1, 2, 3, 4).to_rgba8(), [1, 2, 3, 4]);
}

#[test]
fn nrgba8_premultiplies() {
    let c = Color::from_nrgba8(0xff, 0x80, 0, 0x80);
    assert_eq!(c.a, 0x8080);
    assert_eq!(u32::from(c.r), 0xffff * 0x80 / 0xff);
    assert!(c.is_premultiplied());
    assert_eq!(Color::from_nrgba8(200, 100, 50, 0), Color::TRANSPARENT);
}

#[test]
fn nrgba8_round_trips_when_opaque() {
    let c = Color::from_nrgba8(12, 34, 56, 0xff);
    assert_eq!(c.to_nrgba8(), [12, 34, 56, 0xff]);
}

#[test]
fn to_nrgba8_unpremultiplies() {
    let c = Color::from_rgba8(0x40, 0x20, 0, 0x80);
    let [r, g, b, a] = c.to_nrgba8();
    assert_eq!(a, 0x80);
    assert_eq!(b, 0);
    assert_eq!(r, 0x7f);
    assert_eq!(g, 0x3f);
    assert_eq!(Color::TRANSPARENT.to_nrgba8(), [0, 0, 0, 0]);
}

#[test]
fn alpha8_fills_every_channel() {
    assert_eq!(Color::from_alpha8(0xff), Color::OPAQUE);
    assert_eq!(Color::from_alpha8(0), Color::TRANSPARENT);
}

#[test]
fn ycbcr_is_opaque() {
    assert_eq!(Color::from_ycbcr(0, 128, 128), Color::new(0, 0, 0, 0xffff));
    assert_eq!(Color::from_ycbcr(255, 128, 128), Color::OPAQUE);
}
