use std::path::Path;

use crate::{
    foundation::error::{OgError, OgResult},
    render::cpu::FrameRgba,
};

/// Raster format of the written file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Pick the format from the path's extension; unknown extensions are an error.
    #[default]
    Infer,
    /// Lossless PNG.
    Png,
    /// Baseline JPEG.
    Jpeg,
    /// Uncompressed BMP.
    Bmp,
    /// TIFF.
    Tiff,
}

impl OutputFormat {
    /// Resolve to a concrete `image` format for `path`.
    pub fn resolve(self, path: &Path) -> OgResult<image::ImageFormat> {
        let fmt = match self {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Bmp => image::ImageFormat::Bmp,
            OutputFormat::Tiff => image::ImageFormat::Tiff,
            OutputFormat::Infer => {
                let inferred = image::ImageFormat::from_path(path).map_err(|_| {
                    OgError::encode(format!(
                        "cannot infer image format from '{}'",
                        path.display()
                    ))
                })?;
                return Self::supported(inferred).ok_or_else(|| {
                    OgError::encode(format!(
                        "unsupported output format {inferred:?} for '{}'",
                        path.display()
                    ))
                });
            }
        };
        Ok(fmt)
    }

    fn supported(fmt: image::ImageFormat) -> Option<image::ImageFormat> {
        match fmt {
            image::ImageFormat::Png
            | image::ImageFormat::Jpeg
            | image::ImageFormat::Bmp
            | image::ImageFormat::Tiff => Some(fmt),
            _ => None,
        }
    }
}

/// Encode `frame` as RGB8 and write it to `path`.
///
/// Parent directories are not created. A failure while writing may leave a truncated file.
pub fn write_frame(frame: &FrameRgba, path: &Path, format: OutputFormat) -> OgResult<()> {
    let fmt = format.resolve(path)?;

    let rgb = frame.to_rgb8();
    let img = image::RgbImage::from_raw(frame.width, frame.height, rgb)
        .ok_or_else(|| OgError::encode("frame byte length does not match dimensions"))?;

    img.save_with_format(path, fmt).map_err(|e| match e {
        image::ImageError::IoError(source) => OgError::io(path, source),
        other => OgError::encode(format!("write '{}': {other}", path.display())),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/image_file.rs"]
mod tests;
