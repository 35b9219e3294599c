//! Render the admin preview card as PNG and JPEG with logging enabled.
//!
//! `cargo run --example render_og_image -- [out_dir]`

use std::path::PathBuf;

use anyhow::Context as _;
use og_composer::{ImageComposer, OutputFormat, RenderRequest};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target").join("og_demo"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let composer = ImageComposer::default();
    let fonts = composer.resolve_fonts();
    eprintln!("font origin: {:?}", fonts.origin());
    if let Some(face) = fonts.face() {
        eprintln!("font family: {}", face.family);
    }

    for (name, format) in [
        ("og-image.png", OutputFormat::Infer),
        ("og-image.jpg", OutputFormat::Jpeg),
    ] {
        let request = RenderRequest::new(
            out_dir.join(name),
            "LobstaCloud Admin",
            "Admin dashboard",
            "\u{2699}\u{fe0f}",
            "admin.redlobsta.com",
        )
        .with_format(format);

        let written = composer.compose(&request)?;
        println!("Created {}", written.display());
    }

    Ok(())
}
