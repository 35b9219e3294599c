use anyhow::Context as _;

const OUTPUT: &str = "og-image.png";

fn main() -> anyhow::Result<()> {
    let request = og_composer::RenderRequest::new(
        OUTPUT,
        "LobstaCloud Admin",
        "Admin dashboard",
        "\u{2699}\u{fe0f}",
        "admin.redlobsta.com",
    );

    let written = og_composer::ImageComposer::default()
        .compose(&request)
        .with_context(|| format!("compose '{OUTPUT}'"))?;

    println!("Created {}", written.display());
    Ok(())
}
