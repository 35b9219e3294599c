use std::sync::Arc;

use super::*;
use crate::assets::fonts::{FontFace, FontRole, FontSet};

fn any_font_set() -> Option<FontSet> {
    let set = FontSet::resolve_default();
    set.face().is_some().then_some(set)
}

#[test]
fn rejects_non_positive_size_before_touching_font() {
    let face = FontFace {
        family: "Nothing".to_string(),
        data: Arc::new(vec![0u8; 8]),
        index: 0,
    };
    let mut engine = TextLayoutEngine::new();
    let err = engine
        .layout_plain(
            "x",
            SizedFont {
                face: &face,
                size_px: 0.0,
            },
            Rgb8::gray(255),
        )
        .err()
        .expect("expected layout_plain to fail");
    assert!(matches!(err, OgError::Validation(_)));
}

#[test]
fn garbage_font_bytes_fail_registration() {
    let face = FontFace {
        family: "Nothing".to_string(),
        data: Arc::new(vec![0u8; 8]),
        index: 0,
    };
    let mut engine = TextLayoutEngine::new();
    let err = engine
        .layout_plain(
            "x",
            SizedFont {
                face: &face,
                size_px: 12.0,
            },
            Rgb8::gray(255),
        )
        .err()
        .expect("expected layout_plain to fail");
    assert!(matches!(err, OgError::Font(_)));
}

#[test]
fn longer_text_is_wider_with_advancing_glyphs() {
    let Some(set) = any_font_set() else {
        return;
    };
    let font = set.font(FontRole::Title).unwrap();
    let mut engine = TextLayoutEngine::new();

    let short = engine
        .layout_plain("Admin", font, Rgb8::gray(255))
        .unwrap();
    let long = engine
        .layout_plain("LobstaCloud Admin dashboard", font, Rgb8::gray(255))
        .unwrap();
    assert!(short.width() > 0.0);
    assert!(long.width() > short.width());

    let anchor = Point::new(600.0, 360.0);
    for layout in [&short, &long] {
        let origin = center_anchor_origin(layout, anchor);
        let cx = origin.x + f64::from(layout.width()) / 2.0;
        let cy = origin.y + f64::from(layout.height()) / 2.0;
        assert!((cx - anchor.x).abs() < 1e-6);
        assert!((cy - anchor.y).abs() < 1e-6);
    }

    // Glyphs sit on the baseline and advance across the line.
    let mut glyphs = Vec::new();
    for line in long.lines() {
        for item in line.items() {
            if let parley::layout::PositionedLayoutItem::GlyphRun(run) = item {
                glyphs.extend(run.positioned_glyphs().map(|g| (g.x, g.y)));
            }
        }
    }
    assert!(glyphs.len() > 10);
    assert!(glyphs.windows(2).all(|w| w[1].0 > w[0].0));
    assert!(glyphs.last().unwrap().0 > long.width() / 2.0);
    assert!(glyphs.iter().all(|&(_, y)| y > 0.0 && y < long.height()));
}

#[test]
fn face_registers_once_per_engine() {
    let Some(set) = any_font_set() else {
        return;
    };
    let mut engine = TextLayoutEngine::new();
    for role in FontRole::ALL {
        engine
            .layout_plain("og", set.font(role).unwrap(), Rgb8::gray(255))
            .unwrap();
    }
    assert_eq!(engine.families.len(), 1);
}
