use super::*;

fn job() -> DrawJob {
    let mut assets = BTreeMap::new();
    assets.insert(
        "logo".to_string(),
        JobAsset::Image {
            source: "img/logo.png".to_string(),
        },
    );
    assets.insert(
        "soft".to_string(),
        JobAsset::Mask {
            source: "img/soft.png".to_string(),
        },
    );
    DrawJob {
        canvas: Canvas {
            width: 8,
            height: 8,
        },
        clear: None,
        assets,
        steps: vec![DrawStep {
            src: SourceRef::Asset("logo".to_string()),
            rect: Rect::new(0, 0, 4, 4),
            sp: Point::ZERO,
            mask: Some("soft".to_string()),
            mp: Point::ZERO,
            op: Op::Over,
        }],
    }
}

#[test]
fn valid_job_passes() {
    job().validate().unwrap();
}

#[test]
fn zero_canvas_is_rejected() {
    let mut j = job();
    j.canvas.width = 0;
    assert!(j.validate().unwrap_err().to_string().contains("canvas"));
}

#[test]
fn missing_keys_are_rejected() {
    let mut j = job();
    j.steps[0].src = SourceRef::Asset("nope".to_string());
    assert!(j.validate().unwrap_err().to_string().contains("missing asset key 'nope'"));

    let mut j = job();
    j.steps[0].mask = Some("gone".to_string());
    assert!(j.validate().unwrap_err().to_string().contains("missing mask key 'gone'"));
}

#[test]
fn image_assets_cannot_be_masks() {
    let mut j = job();
    j.steps[0].mask = Some("logo".to_string());
    assert!(j.validate().unwrap_err().to_string().contains("as a mask"));
}

#[test]
fn sources_must_be_relative_and_contained() {
    for bad in ["", "  ", "/etc/passwd", "a/../../b", "..\\x"] {
        let mut j = job();
        j.assets.insert(
            "logo".to_string(),
            JobAsset::Image {
                source: bad.to_string(),
            },
        );
        assert!(j.validate().is_err(), "accepted {bad:?}");
    }
}

#[test]
fn json_defaults_fill_optional_fields() {
    let s = r#"{
        "canvas": {"width": 4, "height": 2},
        "assets": {"red": {"kind": "color", "rgba": [255, 0, 0, 255]}},
        "steps": [
            {"src": {"asset": "red"}, "rect": {"min": {"x": 0, "y": 0}, "max": {"x": 2, "y": 2}}},
            {"src": "canvas", "rect": {"min": {"x": 2, "y": 0}, "max": {"x": 4, "y": 2}}, "op": "src"}
        ]
    }"#;
    let j: DrawJob = serde_json::from_str(s).unwrap();
    j.validate().unwrap();
    assert_eq!(j.clear, None);
    assert_eq!(j.steps[0].op, Op::Over);
    assert_eq!(j.steps[0].sp, Point::ZERO);
    assert_eq!(j.steps[1].src, SourceRef::Canvas);
    assert_eq!(j.steps[1].op, Op::Src);
}
