use super::*;
use crate::{
    draw::Op,
    foundation::geom::{Point, Rect},
    job::model::{Canvas, DrawStep},
};

struct MemLoader {
    image: NrgbaImage,
    mask: AlphaImage,
    loads: usize,
}

impl AssetLoader for MemLoader {
    fn load_image(&mut self, _source: &str) -> DrawResult<NrgbaImage> {
        self.loads += 1;
        Ok(self.image.clone())
    }

    fn load_mask(&mut self, _source: &str) -> DrawResult<AlphaImage> {
        self.loads += 1;
        Ok(self.mask.clone())
    }
}

fn loader() -> MemLoader {
    let mut image = NrgbaImage::new(Rect::new(0, 0, 2, 2));
    for y in 0..2 {
        for x in 0..2 {
            image.set_nrgba8(x, y, [0, 0xff, 0, 0xff]);
        }
    }
    let mut mask = AlphaImage::new(Rect::new(0, 0, 2, 2));
    mask.set_alpha(0, 0, 0xff);
    MemLoader {
        image,
        mask,
        loads: 0,
    }
}

fn step(src: SourceRef, rect: Rect) -> DrawStep {
    DrawStep {
        src,
        rect,
        sp: Point::ZERO,
        mask: None,
        mp: Point::ZERO,
        op: Op::Over,
    }
}

#[test]
fn steps_apply_in_order_and_assets_load_once() {
    let mut assets = BTreeMap::new();
    assets.insert(
        "green".to_string(),
        JobAsset::Image {
            source: "g.png".to_string(),
        },
    );
    assets.insert(
        "corner".to_string(),
        JobAsset::Mask {
            source: "m.png".to_string(),
        },
    );
    assets.insert("red".to_string(), JobAsset::Color { rgba: [255, 0, 0, 255] });

    let mut masked = step(SourceRef::Asset("red".to_string()), Rect::new(0, 0, 2, 2));
    masked.mask = Some("corner".to_string());
    let mut shifted = step(SourceRef::Canvas, Rect::new(2, 0, 4, 2));
    shifted.op = Op::Src;

    let job = DrawJob {
        canvas: Canvas {
            width: 4,
            height: 2,
        },
        clear: Some([0, 0, 0, 255]),
        assets,
        steps: vec![
            step(SourceRef::Asset("green".to_string()), Rect::new(0, 0, 2, 2)),
            masked,
            shifted,
        ],
    };

    let mut l = loader();
    let out = job.execute(&mut l).unwrap();
    assert_eq!(l.loads, 2);

    let red = Color::from_rgba8(0xff, 0, 0, 0xff);
    let green = Color::from_rgba8(0, 0xff, 0, 0xff);
    assert_eq!(out.at(0, 0), red);
    assert_eq!(out.at(1, 0), green);
    assert_eq!(out.at(1, 1), green);
    // The canvas-sourced step copied the left half onto the right half.
    assert_eq!(out.at(2, 0), red);
    assert_eq!(out.at(3, 1), green);
}

#[test]
fn invalid_job_fails_before_loading() {
    let job = DrawJob {
        canvas: Canvas {
            width: 0,
            height: 2,
        },
        clear: None,
        assets: BTreeMap::new(),
        steps: Vec::new(),
    };
    let mut l = loader();
    assert!(matches!(job.execute(&mut l), Err(DrawError::Validation(_))));
    assert_eq!(l.loads, 0);
}
