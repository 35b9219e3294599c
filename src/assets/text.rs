use std::collections::HashMap;

use crate::{
    assets::{color::Rgb8, fonts::SizedFont},
    foundation::{
        core::Point,
        error::{OgError, OgResult},
    },
};

/// Stateful helper for building Parley text layouts from raw font bytes.
///
/// Only fonts registered through [`TextLayoutEngine::layout_plain`] are visible to shaping, so
/// glyph selection does not depend on what else is installed on the machine.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgb8>,
    families: HashMap<(String, usize, u32), String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayoutEngine")
            .field("registered_families", &self.families.len())
            .finish_non_exhaustive()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    /// Shape and lay out a single line of text.
    pub fn layout_plain(
        &mut self,
        text: &str,
        font: SizedFont<'_>,
        brush: Rgb8,
    ) -> OgResult<parley::Layout<Rgb8>> {
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(OgError::validation("text size_px must be finite and > 0"));
        }

        let family_name = self.register(font)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgb8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Register the face once per engine and return its family name.
    fn register(&mut self, font: SizedFont<'_>) -> OgResult<String> {
        let key = (
            font.face.family.clone(),
            font.face.data.len(),
            font.face.index,
        );
        if let Some(name) = self.families.get(&key) {
            return Ok(name.clone());
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.face.data.as_ref().clone()),
            None,
        );
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| OgError::font("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| OgError::font("registered font family has no name"))?
            .to_string();

        self.families.insert(key, family_name.clone());
        Ok(family_name)
    }
}

/// Top-left origin that puts the center of `layout`'s box on `anchor`.
pub fn center_anchor_origin(layout: &parley::Layout<Rgb8>, anchor: Point) -> Point {
    Point::new(
        anchor.x - f64::from(layout.width()) / 2.0,
        anchor.y - f64::from(layout.height()) / 2.0,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
