use std::collections::HashMap;

use kurbo::Shape as _;

use crate::{
    assets::{
        color::Rgb8,
        fonts::{FontFace, FontSet},
        text::{TextLayoutEngine, center_anchor_origin},
    },
    foundation::{
        core::{Affine, BezPath, Canvas, Point, Rect, RoundedRect},
        error::{OgError, OgResult},
    },
    render::plan::DrawOp,
};

/// Tolerance used when flattening rounded corners to a path.
const PATH_TOLERANCE: f64 = 0.1;

/// A rendered frame as RGBA8 pixels.
///
/// Data is premultiplied. Every card op is opaque, so alpha is 255 throughout and the color
/// channels equal straight RGB.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Color at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some(Rgb8::new(px[0], px[1], px[2]))
    }

    /// Drop the alpha channel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&px[..3]);
        }
        out
    }
}

/// CPU raster backend powered by `vello_cpu`.
#[derive(Default)]
pub struct CpuBackend {
    text: TextLayoutEngine,
    font_cache: HashMap<(usize, u32), vello_cpu::peniko::FontData>,
}

impl CpuBackend {
    /// Create a backend with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasterize `ops` onto a fresh canvas and read the pixels back.
    pub fn render(
        &mut self,
        canvas: Canvas,
        ops: &[DrawOp],
        fonts: &FontSet,
    ) -> OgResult<FrameRgba> {
        let (w, h) = canvas.dims_u16()?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        let mut ctx = vello_cpu::RenderContext::new(w, h);

        for op in ops {
            self.draw_op(&mut ctx, op, fonts)?;
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let data = pixmap.data_as_u8_slice().to_vec();
        if data.len() != canvas.rgba8_len() {
            return Err(OgError::render("pixmap byte length mismatch"));
        }

        Ok(FrameRgba {
            width: canvas.width,
            height: canvas.height,
            data,
        })
    }

    fn draw_op(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        op: &DrawOp,
        fonts: &FontSet,
    ) -> OgResult<()> {
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::FillRect { rect, color } => {
                ctx.set_paint(color.to_cpu_color());
                ctx.fill_rect(&rect_to_cpu(*rect));
                Ok(())
            }
            DrawOp::StrokeRoundedRect {
                rect,
                radius,
                width,
                color,
            } => {
                let path = RoundedRect::from_rect(*rect, *radius).to_path(PATH_TOLERANCE);
                ctx.set_paint(color.to_cpu_color());
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                ctx.stroke_path(&bezpath_to_cpu(&path));
                Ok(())
            }
            DrawOp::Text {
                text,
                role,
                anchor,
                color,
            } => {
                let Some(font) = fonts.font(*role) else {
                    tracing::warn!(?role, "no font available, skipping text");
                    return Ok(());
                };
                let layout = match self.text.layout_plain(text, font, *color) {
                    Ok(layout) => layout,
                    Err(err) => {
                        tracing::warn!(?role, error = %err, "text layout failed, skipping text");
                        return Ok(());
                    }
                };

                let origin = center_anchor_origin(&layout, *anchor);
                let cpu_font = self.font_data_for(font.face);
                ctx.set_transform(affine_to_cpu(Affine::translate(origin.to_vec2())));

                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };

                        let brush = run.style().brush;
                        ctx.set_paint(brush.to_cpu_color());

                        let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        ctx.glyph_run(&cpu_font)
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
                Ok(())
            }
        }
    }

    fn font_data_for(&mut self, face: &FontFace) -> vello_cpu::peniko::FontData {
        let key = (face.data.len(), face.index);
        self.font_cache
            .entry(key)
            .or_insert_with(|| {
                vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(face.data.as_ref().clone()),
                    face.index,
                )
            })
            .clone()
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
