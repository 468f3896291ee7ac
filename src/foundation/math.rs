/// Maximum value of a 16-bit color channel.
pub(crate) const M: u32 = 0xffff;

/// Widen an 8-bit channel onto the full 16-bit range (`0xff -> 0xffff`) without branching.
#[inline]
pub(crate) fn widen8(v: u8) -> u32 {
    u32::from(v) * 0x101
}

/// Narrow a 16-bit working value back to 8 bits by truncation.
#[inline]
pub(crate) fn narrow16(v: u32) -> u8 {
    (v >> 8) as u8
}
