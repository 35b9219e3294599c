use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use usvg::fontdb;

use crate::foundation::error::{OgError, OgResult};

/// Font files probed, in order, before falling back to the default face.
pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];

/// Sans families tried, in order, for the default face before the generic sans-serif query.
pub const DEFAULT_SANS_FAMILIES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
    "Helvetica",
];

/// Size used for every role once resolution has fallen back to the default face.
pub const DEFAULT_FALLBACK_SIZE_PX: f32 = 10.0;

/// The four text roles on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontRole {
    /// Main headline.
    Title,
    /// Line under the title.
    Subtitle,
    /// Domain label.
    Small,
    /// The large glyph above the title.
    Emoji,
}

impl FontRole {
    /// All roles in paint order.
    pub const ALL: [FontRole; 4] = [
        FontRole::Emoji,
        FontRole::Title,
        FontRole::Subtitle,
        FontRole::Small,
    ];

    /// Pixel size when the font came from a candidate file.
    pub fn resolved_size_px(self) -> f32 {
        match self {
            FontRole::Title => 72.0,
            FontRole::Subtitle => 32.0,
            FontRole::Small => 24.0,
            FontRole::Emoji => 120.0,
        }
    }
}

/// Raw font bytes plus the face index inside them.
#[derive(Clone, Debug)]
pub struct FontFace {
    /// Family name read from the font tables.
    pub family: String,
    /// Whole font file.
    pub data: Arc<Vec<u8>>,
    /// Face index within `data` (non-zero for collections).
    pub index: u32,
}

/// Where the faces of a [`FontSet`] came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    /// First existing candidate path.
    Candidate(PathBuf),
    /// Platform sans-serif face from the system font database.
    SystemDefault,
    /// Nothing could be loaded; text is skipped.
    Unavailable,
}

/// A face at a concrete pixel size.
#[derive(Clone, Copy, Debug)]
pub struct SizedFont<'a> {
    /// Shared face.
    pub face: &'a FontFace,
    /// Em size in pixels.
    pub size_px: f32,
}

/// The resolved fonts for one card.
///
/// All four roles share one face, so a set is never a mix of candidate and default fonts.
#[derive(Clone, Debug)]
pub struct FontSet {
    origin: FontOrigin,
    face: Option<Arc<FontFace>>,
    fallback_size_px: f32,
}

impl FontSet {
    /// Probe `candidates` in order and build the set. Never fails.
    ///
    /// The first path that exists wins. If reading or parsing it fails, the whole set falls back
    /// to the default face; later candidates are not tried.
    pub fn resolve<P: AsRef<Path>>(candidates: &[P], fallback_size_px: f32) -> Self {
        let fallback_size_px = sanitize_size(fallback_size_px);

        let first_existing = candidates.iter().map(AsRef::<Path>::as_ref).find(|p| {
            let exists = p.exists();
            tracing::debug!(path = %p.display(), exists, "probe font candidate");
            exists
        });

        if let Some(path) = first_existing {
            match load_font_file(path) {
                Ok(face) => {
                    tracing::debug!(
                        path = %path.display(),
                        family = %face.family,
                        "resolved font"
                    );
                    return Self {
                        origin: FontOrigin::Candidate(path.to_path_buf()),
                        face: Some(Arc::new(face)),
                        fallback_size_px,
                    };
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "font load failed, using default font"
                    );
                }
            }
        } else {
            tracing::warn!("no font candidate exists, using default font");
        }

        Self::system_default(fallback_size_px)
    }

    /// Resolve against [`DEFAULT_FONT_CANDIDATES`].
    pub fn resolve_default() -> Self {
        Self::resolve(DEFAULT_FONT_CANDIDATES, DEFAULT_FALLBACK_SIZE_PX)
    }

    /// Build a fallback set around the platform's sans-serif face.
    pub fn system_default(fallback_size_px: f32) -> Self {
        let fallback_size_px = sanitize_size(fallback_size_px);
        match load_system_sans() {
            Ok(face) => {
                tracing::debug!(family = %face.family, "using system default font");
                Self {
                    origin: FontOrigin::SystemDefault,
                    face: Some(Arc::new(face)),
                    fallback_size_px,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "no default font available, text will be skipped");
                Self {
                    origin: FontOrigin::Unavailable,
                    face: None,
                    fallback_size_px,
                }
            }
        }
    }

    /// Where the faces came from.
    pub fn origin(&self) -> &FontOrigin {
        &self.origin
    }

    /// `true` when the set is using the default face (or none at all).
    pub fn is_fallback(&self) -> bool {
        !matches!(self.origin, FontOrigin::Candidate(_))
    }

    /// The shared face, if any.
    pub fn face(&self) -> Option<&FontFace> {
        self.face.as_deref()
    }

    /// Pixel size for `role`. Uniform across roles after fallback.
    pub fn size_px(&self, role: FontRole) -> f32 {
        if self.is_fallback() {
            self.fallback_size_px
        } else {
            role.resolved_size_px()
        }
    }

    /// Face and size for `role`, or `None` when no font could be loaded.
    pub fn font(&self, role: FontRole) -> Option<SizedFont<'_>> {
        self.face().map(|face| SizedFont {
            face,
            size_px: self.size_px(role),
        })
    }
}

fn sanitize_size(size_px: f32) -> f32 {
    if size_px.is_finite() && size_px > 0.0 {
        size_px
    } else {
        DEFAULT_FALLBACK_SIZE_PX
    }
}

/// Read a font file and check that it contains at least one parseable face.
pub(crate) fn load_font_file(path: &Path) -> OgResult<FontFace> {
    let bytes = std::fs::read(path)
        .map_err(|e| OgError::font(format!("read '{}': {e}", path.display())))?;
    face_from_bytes(bytes)
}

pub(crate) fn face_from_bytes(bytes: Vec<u8>) -> OgResult<FontFace> {
    let data = Arc::new(bytes);
    let mut db = fontdb::Database::new();
    db.load_font_source(fontdb::Source::Binary(data.clone()));

    let info = db
        .faces()
        .next()
        .ok_or_else(|| OgError::font("no parseable font face in data"))?;
    let family = info
        .families
        .first()
        .map(|(name, _)| name.clone())
        .ok_or_else(|| OgError::font("font face has no family name"))?;

    Ok(FontFace {
        family,
        data,
        index: info.index,
    })
}

fn load_system_sans() -> OgResult<FontFace> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let id = default_face_id(&db)
        .ok_or_else(|| OgError::font("system font database is empty"))?;

    let family = db
        .face(id)
        .and_then(|f| f.families.first().map(|(name, _)| name.clone()))
        .ok_or_else(|| OgError::font("default face has no family name"))?;
    let (data, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| OgError::font("default face data unavailable"))?;

    Ok(FontFace {
        family,
        data: Arc::new(data),
        index,
    })
}

/// Pick the default face: a named sans family, then the generic sans-serif, then any face.
pub(crate) fn default_face_id(db: &fontdb::Database) -> Option<fontdb::ID> {
    let named = DEFAULT_SANS_FAMILIES
        .iter()
        .map(|&name| fontdb::Family::Name(name))
        .chain(std::iter::once(fontdb::Family::SansSerif));
    for family in named {
        let query = fontdb::Query {
            families: &[family],
            ..fontdb::Query::default()
        };
        if let Some(id) = db.query(&query) {
            return Some(id);
        }
    }

    let face = db.faces().next()?;
    tracing::warn!(
        family = face.families.first().map(|(name, _)| name.as_str()).unwrap_or(""),
        "no sans-serif face installed, using first system face"
    );
    Some(face.id)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
