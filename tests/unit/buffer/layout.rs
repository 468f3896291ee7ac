use super::*;

#[test]
fn layout_accepts_exact_storage() {
    let rect = Rect::new(0, 0, 3, 2);
    assert_eq!(check_layout(rect, 12, 4, 24).unwrap(), 24);
    // The last row does not need stride padding.
    assert_eq!(check_layout(rect, 16, 4, 28).unwrap(), 28);
}

#[test]
fn layout_rejects_short_stride_and_short_storage() {
    let rect = Rect::new(0, 0, 3, 2);
    assert!(matches!(
        check_layout(rect, 11, 4, 100),
        Err(DrawError::Layout(_))
    ));
    assert!(matches!(
        check_layout(rect, 12, 4, 23),
        Err(DrawError::Layout(_))
    ));
}

#[test]
fn empty_rect_needs_no_storage() {
    assert_eq!(check_layout(Rect::ZERO, 0, 4, 0).unwrap(), 0);
}

#[test]
fn offsets_are_relative_to_rect_min() {
    let rect = Rect::new(10, 20, 14, 22);
    assert_eq!(interleaved_offset(rect, 16, 4, 10, 20), 0);
    assert_eq!(interleaved_offset(rect, 16, 4, 13, 21), 16 + 12);
}
