use crate::foundation::error::{OgError, OgResult};

pub use kurbo::{Affine, BezPath, Point, Rect, RoundedRect};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// The fixed Open Graph canvas (1200x630).
    pub const OG: Canvas = Canvas {
        width: 1200,
        height: 630,
    };

    /// Full-canvas rectangle in pixel space.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Dimensions narrowed to the `u16` range used by the raster backend.
    pub fn dims_u16(self) -> OgResult<(u16, u16)> {
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| OgError::validation("canvas width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| OgError::validation("canvas height exceeds u16"))?;
        Ok((w, h))
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size.
    pub fn rgba8_len(self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// Inclusive pixel box `(x0, y0)-(x1, y1)`, the way the card layout is specified.
///
/// Both corners are covered pixels, so the box spans `x1 - x0 + 1` columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelBox {
    /// Left column (inclusive).
    pub x0: u32,
    /// Top row (inclusive).
    pub y0: u32,
    /// Right column (inclusive).
    pub x1: u32,
    /// Bottom row (inclusive).
    pub y1: u32,
}

impl PixelBox {
    /// Covered area as a continuous rectangle (`x1 + 1`, `y1 + 1` exclusive edges).
    pub fn outer_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1) + 1.0,
            f64::from(self.y1) + 1.0,
        )
    }

    /// Center line of an inside stroke of `width` pixels along this box.
    ///
    /// The stroke covers exactly the outermost `width` pixel rings of the box.
    pub fn inset_stroke_rect(self, width: f64) -> Rect {
        self.outer_rect().inset(-width / 2.0)
    }

    /// Return `true` when the pixel `(x, y)` lies inside the box.
    pub fn contains(self, x: u32, y: u32) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
