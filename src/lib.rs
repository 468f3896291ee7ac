//! Wavyte draw is a Porter-Duff raster compositor in the style of classic windowing-system
//! draw primitives.
//!
//! A single call composites a source image, optionally through a coverage mask, into a
//! rectangle of a destination image using one of two operators:
//!
//! - [`Op::Over`]: `(src in mask) over dst`
//! - [`Op::Src`]: `src in mask`, discarding what was in `dst`
//!
//! # Call overview
//!
//! 1. **Clip**: the rectangle is intersected with the destination, source and mask bounds, and
//!    the source/mask points move with it ([`clip_and_shift`]).
//! 2. **Dispatch**: when the destination is an [`RgbaImage`] and the source/mask layouts and
//!    operator form a known combination, a specialized loop runs.
//! 3. **Generic**: otherwise every pixel goes through [`Image::at`] / [`ImageMut::set`] with
//!    16-bit premultiplied arithmetic.
//!
//! Both routes produce bit-identical results. Compositing a buffer onto itself goes through
//! [`draw_within`] / [`draw_mask_within`], which pick a traversal order that never overwrites a
//! source pixel before reading it.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total**: compositing never fails; non-overlapping inputs are a no-op.
//! - **Stateless**: no allocation beyond the caller's buffers, no state across calls.
//! - **Premultiplied** 16-bit working colors ([`Color`]) regardless of storage layout.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod buffer;
mod color;
mod draw;
mod foundation;
mod job;

pub use buffer::{
    AlphaImage, Image, ImageMut, Kind, NrgbaImage, Rgba64Image, RgbaImage, SubsampleRatio,
    Uniform, YCbCrImage,
};
pub use color::model::Color;
pub use color::ycbcr::{rgb_to_ycbcr, ycbcr_to_rgb};
pub use draw::{Op, draw, draw_mask, draw_mask_within, draw_within};
pub use foundation::error::{DrawError, DrawResult};
pub use foundation::geom::{Clipped, Point, Rect, clip_and_shift};
pub use job::loader::{AssetLoader, FsAssetLoader};
pub use job::model::{Canvas, DrawJob, DrawStep, JobAsset, SourceRef};
