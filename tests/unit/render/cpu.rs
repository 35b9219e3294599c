use super::*;
use crate::{
    assets::color::Palette,
    render::plan::{CONTENT_BOX, CardText, card_plan, gradient_color},
};

fn sample_text() -> CardText {
    CardText {
        title: "LobstaCloud Admin".to_string(),
        subtitle: "Admin dashboard".to_string(),
        emoji: "\u{2699}\u{fe0f}".to_string(),
        domain: "admin.redlobsta.com".to_string(),
    }
}

fn render_with(fonts: &FontSet, text: &CardText) -> FrameRgba {
    let mut backend = CpuBackend::new();
    backend
        .render(Canvas::OG, &card_plan(text), fonts)
        .unwrap()
}

fn fallback_fonts() -> FontSet {
    FontSet::resolve(&["/definitely/not/here.ttf"], 10.0)
}

#[test]
fn frame_has_fixed_size_and_is_opaque() {
    let frame = render_with(&fallback_fonts(), &sample_text());
    assert_eq!(frame.width, 1200);
    assert_eq!(frame.height, 630);
    assert_eq!(frame.data.len(), 1200 * 630 * 4);
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn accent_bar_covers_rows_0_to_7() {
    let frame = render_with(&fallback_fonts(), &sample_text());
    for y in 0..8 {
        for x in 0..1200 {
            assert_eq!(frame.pixel(x, y), Some(Palette::ACCENT), "({x}, {y})");
        }
    }
    assert_eq!(frame.pixel(10, 8), Some(Palette::BACKGROUND));
    assert_eq!(frame.pixel(1195, 8), Some(Palette::BACKGROUND));
}

#[test]
fn background_outside_content_box() {
    let frame = render_with(&fallback_fonts(), &sample_text());
    assert_eq!(frame.pixel(10, 300), Some(Palette::BACKGROUND));
    assert_eq!(frame.pixel(1190, 300), Some(Palette::BACKGROUND));
    assert_eq!(frame.pixel(600, 620), Some(Palette::BACKGROUND));
    assert_eq!(frame.pixel(600, 40), Some(Palette::BACKGROUND));
}

#[test]
fn gradient_columns_away_from_text() {
    let frame = render_with(&fallback_fonts(), &sample_text());
    for x in [60u32, 100, 200, 1000, 1100, 1140] {
        for y in [60u32, 100, 300, 570] {
            assert_eq!(frame.pixel(x, y), Some(gradient_color(x)), "({x}, {y})");
        }
    }
}

#[test]
fn border_is_drawn_inside_content_box() {
    let frame = render_with(&fallback_fonts(), &sample_text());
    let close = |x: u32, y: u32| {
        let px = frame.pixel(x, y).unwrap();
        let want = Palette::ACCENT;
        px.r.abs_diff(want.r) <= 2 && px.g.abs_diff(want.g) <= 2 && px.b.abs_diff(want.b) <= 2
    };
    assert!(close(600, 50));
    assert!(close(600, 51));
    assert!(close(600, 579));
    assert!(close(600, 580));
    assert!(close(50, 300));
    assert!(close(1150, 300));

    assert_eq!(frame.pixel(600, 52), Some(gradient_color(600)));
    assert_eq!(frame.pixel(52, 300), Some(gradient_color(52)));
    assert_eq!(frame.pixel(600, 49), Some(Palette::BACKGROUND));
}

#[test]
fn rounded_corner_leaves_box_corner_unpainted() {
    let frame = render_with(&fallback_fonts(), &sample_text());
    // The square corner pixel sits outside the radius-20 arc.
    assert_ne!(frame.pixel(50, 50), Some(Palette::ACCENT));
    assert_ne!(frame.pixel(1150, 580), Some(Palette::ACCENT));
}

#[test]
fn rendering_is_deterministic() {
    let fonts = FontSet::resolve_default();
    let a = render_with(&fonts, &sample_text());
    let b = render_with(&fonts, &sample_text());
    assert_eq!(a.data, b.data);
}

/// Painted pixels matching `is_ink` inside a band of rows, as `(x0, y0, x1, y1)` inclusive.
fn ink_box(
    frame: &FrameRgba,
    rows: std::ops::Range<u32>,
    is_ink: impl Fn(Rgb8) -> bool,
) -> Option<(u32, u32, u32, u32)> {
    let mut found: Option<(u32, u32, u32, u32)> = None;
    for y in rows {
        // Skip the border rings and their anti-aliased edge.
        for x in CONTENT_BOX.x0 + 4..=CONTENT_BOX.x1 - 4 {
            if !frame.pixel(x, y).is_some_and(&is_ink) {
                continue;
            }
            found = Some(match found {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }
    found
}

fn is_white(px: Rgb8) -> bool {
    px.r >= 200 && px.g >= 200 && px.b >= 200
}

fn is_accent(px: Rgb8) -> bool {
    px.r >= 150 && px.g <= 110 && px.b <= 110
}

fn assert_centered_on(ink: (u32, u32, u32, u32), anchor: (f64, f64), slack_y: f64) {
    let (x0, y0, x1, y1) = ink;
    let cx = f64::from(x0 + x1) / 2.0;
    let cy = f64::from(y0 + y1) / 2.0;
    assert!((cx - anchor.0).abs() <= 4.0, "ink {ink:?} not centered on x={}", anchor.0);
    assert!((cy - anchor.1).abs() <= slack_y, "ink {ink:?} not centered on y={}", anchor.1);
    assert!(CONTENT_BOX.contains(x0, y0) && CONTENT_BOX.contains(x1, y1));
}

#[test]
fn labels_are_centered_on_their_anchors() {
    let fonts = FontSet::resolve_default();
    if fonts.is_fallback() {
        return;
    }
    let frame = render_with(&fonts, &sample_text());

    let title = ink_box(&frame, 290..420, is_white).unwrap();
    assert_centered_on(title, (600.0, 360.0), 8.0);
    // Seventeen glyphs at 72 px span far more than one glyph cell.
    assert!(title.2 - title.0 > 500, "title ink {title:?}");

    let domain = ink_box(&frame, 510..575, is_accent).unwrap();
    assert_centered_on(domain, (600.0, 540.0), 6.0);
    assert!(domain.2 - domain.0 > 150, "domain ink {domain:?}");

    // The gear sits on its anchor row; its cluster may carry a trailing selector advance.
    let emoji = ink_box(&frame, 120..290, is_accent).unwrap();
    let emoji_cy = f64::from(emoji.1 + emoji.3) / 2.0;
    assert!((emoji_cy - 200.0).abs() <= 12.0, "emoji ink {emoji:?}");
}

#[test]
fn longer_labels_paint_wider_ink() {
    let fonts = FontSet::resolve_default();
    if fonts.is_fallback() {
        return;
    }
    let short = render_with(&fonts, &sample_text());
    let long = render_with(
        &fonts,
        &CardText {
            title: "LobstaCloud Admin Pro".to_string(),
            domain: "admin.console.redlobsta.com".to_string(),
            ..sample_text()
        },
    );

    let width = |ink: (u32, u32, u32, u32)| ink.2 - ink.0;
    let short_title = ink_box(&short, 290..420, is_white).unwrap();
    let long_title = ink_box(&long, 290..420, is_white).unwrap();
    assert!(width(long_title) > width(short_title) + 100);
    assert_centered_on(long_title, (600.0, 360.0), 8.0);

    let short_domain = ink_box(&short, 510..575, is_accent).unwrap();
    let long_domain = ink_box(&long, 510..575, is_accent).unwrap();
    assert!(width(long_domain) > width(short_domain) + 40);
    assert_centered_on(long_domain, (600.0, 540.0), 6.0);
}

#[test]
fn empty_strings_still_render() {
    let text = CardText {
        title: String::new(),
        subtitle: String::new(),
        emoji: String::new(),
        domain: String::new(),
    };
    let frame = render_with(&FontSet::resolve_default(), &text);
    assert_eq!(frame.pixel(600, 360), Some(gradient_color(600)));
}

#[test]
fn rgb_readback_drops_alpha() {
    let frame = FrameRgba {
        width: 2,
        height: 1,
        data: vec![1, 2, 3, 255, 4, 5, 6, 255],
    };
    assert_eq!(frame.to_rgb8(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(frame.pixel(1, 0), Some(Rgb8::new(4, 5, 6)));
    assert_eq!(frame.pixel(2, 0), None);
}
