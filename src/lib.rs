//! og-composer renders a fixed-layout Open Graph preview image.
//!
//! One call produces one 1200x630 raster:
//!
//! - background, accent bar and horizontal gradient
//! - rounded accent border around the content box
//! - four center-anchored labels (emoji, title, subtitle, domain)
//!
//! Fonts come from a fixed fallback chain ([`DEFAULT_FONT_CANDIDATES`]) and degrade to one default
//! face when none can be loaded. Font problems never fail a call; write failures do.
//!
//! ```no_run
//! og_composer::compose(
//!     "og-image.png",
//!     "LobstaCloud Admin",
//!     "Admin dashboard",
//!     "\u{2699}\u{fe0f}",
//!     "admin.redlobsta.com",
//! )?;
//! # Ok::<(), og_composer::OgError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composer;
mod encode;
mod foundation;
mod render;

pub use crate::assets::color::{Palette, Rgb8};
pub use crate::assets::fonts::{
    DEFAULT_FALLBACK_SIZE_PX, DEFAULT_FONT_CANDIDATES, DEFAULT_SANS_FAMILIES, FontFace, FontOrigin,
    FontRole, FontSet, SizedFont,
};
pub use crate::assets::text::{TextLayoutEngine, center_anchor_origin};
pub use crate::composer::{ComposerOpts, ImageComposer, RenderRequest, compose, render_with_fonts};
pub use crate::encode::image_file::{OutputFormat, write_frame};
pub use crate::foundation::core::{Canvas, PixelBox, Point, Rect};
pub use crate::foundation::error::{OgError, OgResult};
pub use crate::render::cpu::{CpuBackend, FrameRgba};
pub use crate::render::plan::{
    ACCENT_BAR_ROWS, BORDER_RADIUS, BORDER_WIDTH, CONTENT_BOX, CardText, DrawOp,
    GRADIENT_COLUMNS, card_plan, gradient_color, gradient_value, text_slot,
};
