use std::collections::BTreeMap;

use crate::{
    buffer::{AlphaImage, Image, NrgbaImage, RgbaImage, Uniform},
    color::model::Color,
    draw::{draw_mask, draw_mask_within},
    foundation::error::{DrawError, DrawResult},
    job::loader::AssetLoader,
    job::model::{DrawJob, JobAsset, SourceRef},
};

enum Prepared {
    Image(NrgbaImage),
    Mask(AlphaImage),
    Color(Uniform),
}

impl Prepared {
    fn as_image(&self) -> &dyn Image {
        match self {
            Self::Image(img) => img,
            Self::Mask(img) => img,
            Self::Color(u) => u,
        }
    }
}

impl DrawJob {
    /// Validate, load every asset once, and apply the steps to a fresh canvas.
    #[tracing::instrument(skip(self, loader), fields(steps = self.steps.len()))]
    pub fn execute(&self, loader: &mut dyn AssetLoader) -> DrawResult<RgbaImage> {
        self.validate()?;

        let mut prepared = BTreeMap::new();
        for (key, asset) in &self.assets {
            let p = match asset {
                JobAsset::Image { source } => Prepared::Image(loader.load_image(source)?),
                JobAsset::Mask { source } => Prepared::Mask(loader.load_mask(source)?),
                JobAsset::Color { rgba: [r, g, b, a] } => {
                    Prepared::Color(Uniform::new(Color::from_nrgba8(*r, *g, *b, *a)))
                }
            };
            prepared.insert(key.as_str(), p);
        }
        let lookup = |key: &str| {
            prepared
                .get(key)
                .map(Prepared::as_image)
                .ok_or_else(|| DrawError::asset(format!("asset '{key}' was not prepared")))
        };

        let mut canvas = RgbaImage::new(self.canvas_rect());
        if let Some([r, g, b, a]) = self.clear {
            canvas.fill(Color::from_nrgba8(r, g, b, a));
        }

        for (idx, step) in self.steps.iter().enumerate() {
            tracing::debug!(idx, rect = ?step.rect, op = ?step.op, "draw step");
            let mask = step.mask.as_deref().map(lookup).transpose()?;
            match &step.src {
                SourceRef::Asset(key) => {
                    let src = lookup(key)?;
                    draw_mask(&mut canvas, step.rect, src, step.sp, mask, step.mp, step.op);
                }
                SourceRef::Canvas => {
                    draw_mask_within(&mut canvas, step.rect, step.sp, mask, step.mp, step.op);
                }
            }
        }
        Ok(canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/job/exec.rs"]
mod tests;
