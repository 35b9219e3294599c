use crate::{
    assets::{
        color::{Palette, Rgb8},
        fonts::FontRole,
    },
    foundation::core::{Canvas, PixelBox, Point, Rect},
};

/// Rows covered by the accent bar, `[0, ACCENT_BAR_ROWS)`.
pub const ACCENT_BAR_ROWS: u32 = 8;

/// Inclusive content box where the gradient and border live.
pub const CONTENT_BOX: PixelBox = PixelBox {
    x0: 50,
    y0: 50,
    x1: 1150,
    y1: 580,
};

/// Gradient columns, `[GRADIENT_COLUMNS.start, GRADIENT_COLUMNS.end)`.
///
/// 1101 columns interpolated over a span of 1100, so the last column reaches exactly 42.
pub const GRADIENT_COLUMNS: std::ops::Range<u32> = 50..1151;

const GRADIENT_SPAN: u32 = 1100;
const GRADIENT_START: u32 = 26;
const GRADIENT_RISE: u32 = 16;

/// Border corner radius in pixels.
pub const BORDER_RADIUS: f64 = 20.0;
/// Border stroke width in pixels, drawn inside [`CONTENT_BOX`].
pub const BORDER_WIDTH: f64 = 2.0;

/// Luminance of gradient column `column`, truncated.
///
/// Columns left of the gradient clamp to the start value.
pub fn gradient_value(column: u32) -> u8 {
    let offset = column.saturating_sub(GRADIENT_COLUMNS.start);
    // Integer division truncates exactly like the float formula for non-negative offsets.
    let v = GRADIENT_START + GRADIENT_RISE * offset / GRADIENT_SPAN;
    v.min(u32::from(u8::MAX)) as u8
}

/// Color of gradient column `column`: `(v, v, v + 10)`.
pub fn gradient_color(column: u32) -> Rgb8 {
    let v = gradient_value(column);
    Rgb8::new(v, v, v.saturating_add(10))
}

/// The four strings printed on the card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardText {
    /// Headline.
    pub title: String,
    /// Line under the headline.
    pub subtitle: String,
    /// Large glyph above the headline.
    pub emoji: String,
    /// Domain label at the bottom.
    pub domain: String,
}

/// A single paint operation, in canvas pixel space.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Opaque axis-aligned fill.
    FillRect {
        /// Covered rectangle.
        rect: Rect,
        /// Fill color.
        color: Rgb8,
    },
    /// Rounded outline, no fill.
    StrokeRoundedRect {
        /// Stroke center line.
        rect: Rect,
        /// Corner radius of the center line.
        radius: f64,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Rgb8,
    },
    /// Center-anchored single-line text.
    Text {
        /// Text to shape.
        text: String,
        /// Which font of the set to use.
        role: FontRole,
        /// Center of the laid-out text box.
        anchor: Point,
        /// Fill color.
        color: Rgb8,
    },
}

/// Anchor and color for each text role. Fixed; never depends on the strings.
pub fn text_slot(role: FontRole) -> (Point, Rgb8) {
    match role {
        FontRole::Emoji => (Point::new(600.0, 200.0), Palette::ACCENT),
        FontRole::Title => (Point::new(600.0, 360.0), Palette::FOREGROUND),
        FontRole::Subtitle => (Point::new(600.0, 450.0), Palette::SECONDARY),
        FontRole::Small => (Point::new(600.0, 540.0), Palette::DOMAIN),
    }
}

/// Build the paint list for one card, back to front.
pub fn card_plan(text: &CardText) -> Vec<DrawOp> {
    let canvas = Canvas::OG;
    let mut ops = Vec::with_capacity(GRADIENT_COLUMNS.len() + 7);

    ops.push(DrawOp::FillRect {
        rect: canvas.bounds(),
        color: Palette::BACKGROUND,
    });

    ops.push(DrawOp::FillRect {
        rect: Rect::new(0.0, 0.0, f64::from(canvas.width), f64::from(ACCENT_BAR_ROWS)),
        color: Palette::ACCENT,
    });

    let rows = CONTENT_BOX.outer_rect();
    for column in GRADIENT_COLUMNS {
        let x = f64::from(column);
        ops.push(DrawOp::FillRect {
            rect: Rect::new(x, rows.y0, x + 1.0, rows.y1),
            color: gradient_color(column),
        });
    }

    ops.push(DrawOp::StrokeRoundedRect {
        rect: CONTENT_BOX.inset_stroke_rect(BORDER_WIDTH),
        radius: BORDER_RADIUS - BORDER_WIDTH / 2.0,
        width: BORDER_WIDTH,
        color: Palette::ACCENT,
    });

    for role in FontRole::ALL {
        let (anchor, color) = text_slot(role);
        let s = match role {
            FontRole::Emoji => &text.emoji,
            FontRole::Title => &text.title,
            FontRole::Subtitle => &text.subtitle,
            FontRole::Small => &text.domain,
        };
        ops.push(DrawOp::Text {
            text: s.clone(),
            role,
            anchor,
            color,
        });
    }

    ops
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
