use std::collections::BTreeMap;

use crate::{
    draw::Op,
    foundation::error::{DrawError, DrawResult},
    foundation::geom::{Point, Rect},
};

/// Output canvas dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A batch of compositing steps applied to a fresh canvas.
///
/// Jobs are plain data and round-trip through Serde (JSON). Execution is performed by
/// [`DrawJob::execute`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct DrawJob {
    /// Output canvas, anchored at the origin.
    pub canvas: Canvas,
    /// Straight-alpha RGBA8 fill applied before the first step; transparent when absent.
    #[serde(default)]
    pub clear: Option<[u8; 4]>,
    /// Asset table keyed by user-facing names.
    #[serde(default)]
    pub assets: BTreeMap<String, JobAsset>,
    /// Steps, applied in order.
    #[serde(default)]
    pub steps: Vec<DrawStep>,
}

/// An input referenced by steps.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JobAsset {
    /// A straight-alpha raster file, relative to the job file.
    Image {
        /// Relative path.
        source: String,
    },
    /// A raster file whose luma is used as coverage.
    Mask {
        /// Relative path.
        source: String,
    },
    /// A straight-alpha solid color.
    Color {
        /// Straight-alpha RGBA8.
        rgba: [u8; 4],
    },
}

/// Where a step reads its source pixels from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceRef {
    /// A named asset.
    Asset(String),
    /// The canvas itself, as composited so far.
    Canvas,
}

/// One compositing call.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DrawStep {
    /// Source pixels.
    pub src: SourceRef,
    /// Destination rectangle on the canvas.
    pub rect: Rect,
    /// Source point aligned with `rect.min`.
    #[serde(default)]
    pub sp: Point,
    /// Optional coverage asset key.
    #[serde(default)]
    pub mask: Option<String>,
    /// Mask point aligned with `rect.min`.
    #[serde(default)]
    pub mp: Point,
    /// Compositing operator.
    #[serde(default)]
    pub op: Op,
}

impl DrawJob {
    /// Check structural validity: canvas size, asset sources and step references.
    pub fn validate(&self) -> DrawResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(DrawError::validation("canvas width/height must be > 0"));
        }
        if i32::try_from(self.canvas.width).is_err() || i32::try_from(self.canvas.height).is_err()
        {
            return Err(DrawError::validation(
                "canvas width/height must fit in a signed 32-bit coordinate",
            ));
        }

        for (key, asset) in &self.assets {
            match asset {
                JobAsset::Image { source } | JobAsset::Mask { source } => {
                    validate_rel_source(source, &format!("assets.{key}.source"))?;
                }
                JobAsset::Color { .. } => {}
            }
        }

        for (idx, step) in self.steps.iter().enumerate() {
            if let SourceRef::Asset(key) = &step.src
                && !self.assets.contains_key(key)
            {
                return Err(DrawError::validation(format!(
                    "step {idx} references missing asset key '{key}'"
                )));
            }
            if let Some(key) = &step.mask {
                match self.assets.get(key) {
                    None => {
                        return Err(DrawError::validation(format!(
                            "step {idx} references missing mask key '{key}'"
                        )));
                    }
                    Some(JobAsset::Image { .. }) => {
                        return Err(DrawError::validation(format!(
                            "step {idx} uses image asset '{key}' as a mask"
                        )));
                    }
                    Some(JobAsset::Mask { .. } | JobAsset::Color { .. }) => {}
                }
            }
        }
        Ok(())
    }

    /// The canvas rectangle.
    pub fn canvas_rect(&self) -> Rect {
        Rect::from_size(self.canvas.width, self.canvas.height)
    }
}

fn validate_rel_source(source: &str, field: &str) -> DrawResult<()> {
    if source.trim().is_empty() {
        return Err(DrawError::validation(format!("{field} must be non-empty")));
    }
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(DrawError::validation(format!(
            "{field} must be a relative path"
        )));
    }
    if s.split('/').any(|part| part == "..") {
        return Err(DrawError::validation(format!(
            "{field} must not contain '..'"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/job/model.rs"]
mod tests;
