use std::path::{Path, PathBuf};

use crate::{
    assets::fonts::{DEFAULT_FALLBACK_SIZE_PX, DEFAULT_FONT_CANDIDATES, FontSet},
    encode::image_file::{OutputFormat, write_frame},
    foundation::{core::Canvas, error::OgResult},
    render::{
        cpu::{CpuBackend, FrameRgba},
        plan::{CardText, card_plan},
    },
};

/// Everything one card needs: where to write it and what it says.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    /// Output file path.
    pub output: PathBuf,
    /// Strings printed on the card.
    pub text: CardText,
    /// Output raster format.
    pub format: OutputFormat,
}

impl RenderRequest {
    /// Build a request with the format inferred from `output`'s extension.
    pub fn new(
        output: impl Into<PathBuf>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        emoji: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            output: output.into(),
            text: CardText {
                title: title.into(),
                subtitle: subtitle.into(),
                emoji: emoji.into(),
                domain: domain.into(),
            },
            format: OutputFormat::Infer,
        }
    }

    /// Override the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Options for [`ImageComposer`].
#[derive(Clone, Debug)]
pub struct ComposerOpts {
    /// Font files probed in order; the first existing one supplies every role.
    pub font_candidates: Vec<PathBuf>,
    /// Size used for every role once resolution falls back to the default face.
    pub fallback_size_px: f32,
}

impl Default for ComposerOpts {
    fn default() -> Self {
        Self {
            font_candidates: DEFAULT_FONT_CANDIDATES.iter().map(|&p| PathBuf::from(p)).collect(),
            fallback_size_px: DEFAULT_FALLBACK_SIZE_PX,
        }
    }
}

/// Renders preview cards and writes them to disk.
///
/// Pipeline per call:
/// 1. resolve fonts once ([`FontSet::resolve`], never fails)
/// 2. build the paint list ([`card_plan`])
/// 3. rasterize ([`CpuBackend::render`])
/// 4. encode and write ([`write_frame`])
#[derive(Clone, Debug, Default)]
pub struct ImageComposer {
    opts: ComposerOpts,
}

impl ImageComposer {
    /// Create a composer with `opts`.
    pub fn new(opts: ComposerOpts) -> Self {
        Self { opts }
    }

    /// Resolve the font set the way [`ImageComposer::compose`] does.
    pub fn resolve_fonts(&self) -> FontSet {
        FontSet::resolve(self.opts.font_candidates.as_slice(), self.opts.fallback_size_px)
    }

    /// Render the card in memory without writing it.
    pub fn render(&self, text: &CardText) -> OgResult<FrameRgba> {
        let fonts = self.resolve_fonts();
        render_with_fonts(text, &fonts)
    }

    /// Render `request` and write it to `request.output`. Returns the written path.
    #[tracing::instrument(skip(self, request), fields(output = %request.output.display()))]
    pub fn compose(&self, request: &RenderRequest) -> OgResult<PathBuf> {
        let frame = self.render(&request.text)?;
        write_frame(&frame, &request.output, request.format)?;
        tracing::info!(
            width = frame.width,
            height = frame.height,
            "wrote preview image"
        );
        Ok(request.output.clone())
    }
}

/// Rasterize `text` with an already-resolved font set.
pub fn render_with_fonts(text: &CardText, fonts: &FontSet) -> OgResult<FrameRgba> {
    let ops = card_plan(text);
    let mut backend = CpuBackend::new();
    backend.render(Canvas::OG, &ops, fonts)
}

/// Compose one card with default options.
pub fn compose(
    output: impl AsRef<Path>,
    title: &str,
    subtitle: &str,
    emoji: &str,
    domain: &str,
) -> OgResult<PathBuf> {
    let request = RenderRequest::new(output.as_ref(), title, subtitle, emoji, domain);
    ImageComposer::default().compose(&request)
}

#[cfg(test)]
#[path = "../tests/unit/composer.rs"]
mod tests;
