/// Opaque 8-bit sRGB color.
///
/// Also used as the Parley text brush, so it satisfies Parley's `Brush` bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same value on all three channels.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Channels as an array, the layout `image::Rgb` uses.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub(crate) fn to_cpu_color(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

/// Fixed card palette.
pub struct Palette;

impl Palette {
    /// `#0a0a0a`
    pub const BACKGROUND: Rgb8 = Rgb8::gray(0x0a);
    /// `#FF2D2D`, used for the top bar, the border, the emoji and the domain label.
    pub const ACCENT: Rgb8 = Rgb8::new(0xff, 0x2d, 0x2d);
    /// `#ffffff`
    pub const FOREGROUND: Rgb8 = Rgb8::gray(0xff);
    /// `#a0a0a0`
    pub const SECONDARY: Rgb8 = Rgb8::gray(0xa0);
    /// The domain label shares the accent red.
    pub const DOMAIN: Rgb8 = Self::ACCENT;
}
