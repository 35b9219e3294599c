use std::path::PathBuf;

/// Convenience result alias used across the crate.
pub type OgResult<T> = Result<T, OgError>;

/// Error type for composing and writing a preview image.
///
/// Font problems never show up here for callers of [`crate::compose`]: they are absorbed by
/// [`crate::FontSet::resolve`]. The `Font` variant is only produced by the lower-level
/// [`crate::TextLayoutEngine`].
#[derive(thiserror::Error, Debug)]
pub enum OgError {
    /// Invalid caller input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font loading or registration failure.
    #[error("font error: {0}")]
    Font(String),

    /// Rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// Output format selection or encoder failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem failure while writing the output.
    #[error("io error writing '{}': {source}", path.display())]
    Io {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

impl OgError {
    /// Build an [`OgError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`OgError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build an [`OgError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`OgError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`OgError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Return `true` for filesystem write failures.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
