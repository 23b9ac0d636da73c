use image::{DynamicImage, GenericImageView, Luma, LumaA, Rgb, Rgba};
use std::fmt;

/// Canonical 8-bit-per-channel RGBA sample, used for reporting only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Pixel representations that can be normalised to [`Color`]
pub trait CanonicalColor {
    fn to_canonical(&self) -> Color;
}

/// RGBA sample whose colour channels are already multiplied by alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Premultiplied(pub Rgba<u8>);

pub fn to_canonical_color<P: CanonicalColor>(sample: P) -> Color {
    sample.to_canonical()
}

fn narrow16(v: u16) -> u8 {
    ((u32::from(v) * 255 + 32_767) / 65_535) as u8
}

fn narrowf(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn unpremultiply(channel: u8, alpha: u8) -> u8 {
    if alpha == 0 {
        return 0;
    }
    let a = u32::from(alpha);
    ((u32::from(channel) * 255 + a / 2) / a).min(255) as u8
}

impl CanonicalColor for Rgba<u8> {
    fn to_canonical(&self) -> Color {
        Color::new(self[0], self[1], self[2], self[3])
    }
}

impl CanonicalColor for Rgb<u8> {
    fn to_canonical(&self) -> Color {
        Color::new(self[0], self[1], self[2], u8::MAX)
    }
}

impl CanonicalColor for Luma<u8> {
    fn to_canonical(&self) -> Color {
        Color::new(self[0], self[0], self[0], u8::MAX)
    }
}

impl CanonicalColor for LumaA<u8> {
    fn to_canonical(&self) -> Color {
        Color::new(self[0], self[0], self[0], self[1])
    }
}

impl CanonicalColor for Rgba<u16> {
    fn to_canonical(&self) -> Color {
        Color::new(
            narrow16(self[0]),
            narrow16(self[1]),
            narrow16(self[2]),
            narrow16(self[3]),
        )
    }
}

impl CanonicalColor for Rgb<u16> {
    fn to_canonical(&self) -> Color {
        Color::new(narrow16(self[0]), narrow16(self[1]), narrow16(self[2]), u8::MAX)
    }
}

impl CanonicalColor for Luma<u16> {
    fn to_canonical(&self) -> Color {
        let v = narrow16(self[0]);
        Color::new(v, v, v, u8::MAX)
    }
}

impl CanonicalColor for LumaA<u16> {
    fn to_canonical(&self) -> Color {
        let v = narrow16(self[0]);
        Color::new(v, v, v, narrow16(self[1]))
    }
}

impl CanonicalColor for Rgba<f32> {
    fn to_canonical(&self) -> Color {
        Color::new(
            narrowf(self[0]),
            narrowf(self[1]),
            narrowf(self[2]),
            narrowf(self[3]),
        )
    }
}

impl CanonicalColor for Rgb<f32> {
    fn to_canonical(&self) -> Color {
        Color::new(narrowf(self[0]), narrowf(self[1]), narrowf(self[2]), u8::MAX)
    }
}

impl CanonicalColor for Premultiplied {
    fn to_canonical(&self) -> Color {
        let Rgba([r, g, b, a]) = self.0;
        Color::new(
            unpremultiply(r, a),
            unpremultiply(g, a),
            unpremultiply(b, a),
            a,
        )
    }
}

/// Canonical colour of the pixel at `(x, y)`, read in the buffer's native layout
pub fn sample_canonical(image: &DynamicImage, x: u32, y: u32) -> Option<Color> {
    if x >= image.width() || y >= image.height() {
        return None;
    }

    let color = match image {
        DynamicImage::ImageLuma8(buf) => buf.get_pixel(x, y).to_canonical(),
        DynamicImage::ImageLumaA8(buf) => buf.get_pixel(x, y).to_canonical(),
        DynamicImage::ImageRgb8(buf) => buf.get_pixel(x, y).to_canonical(),
        DynamicImage::ImageRgba8(buf) => buf.get_pixel(x, y).to_canonical(),
        DynamicImage::ImageLuma16(buf) => buf.get_pixel(x, y).to_canonical(),
        DynamicImage::ImageLumaA16(buf) => buf.get_pixel(x, y).to_canonical(),
        DynamicImage::ImageRgb16(buf) => buf.get_pixel(x, y).to_canonical(),
        DynamicImage::ImageRgba16(buf) => buf.get_pixel(x, y).to_canonical(),
        DynamicImage::ImageRgb32F(buf) => buf.get_pixel(x, y).to_canonical(),
        DynamicImage::ImageRgba32F(buf) => buf.get_pixel(x, y).to_canonical(),
        other => other.get_pixel(x, y).to_canonical(),
    };

    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, RgbImage};

    #[test]
    fn opaque_formats_get_full_alpha() {
        assert_eq!(to_canonical_color(Rgb([1u8, 2, 3])), Color::new(1, 2, 3, 255));
        assert_eq!(to_canonical_color(Luma([9u8])), Color::new(9, 9, 9, 255));
        assert_eq!(to_canonical_color(LumaA([9u8, 7])), Color::new(9, 9, 9, 7));
    }

    #[test]
    fn wide_channels_are_narrowed() {
        assert_eq!(
            to_canonical_color(Rgba([0u16, 65_535, 32_896, 65_535])),
            Color::new(0, 255, 128, 255)
        );
        assert_eq!(
            to_canonical_color(Rgb([0.0f32, 1.0, 2.0])),
            Color::new(0, 255, 255, 255)
        );
    }

    #[test]
    fn premultiplied_alpha_is_undone() {
        assert_eq!(
            to_canonical_color(Premultiplied(Rgba([64, 32, 0, 128]))),
            Color::new(128, 64, 0, 128)
        );
        assert_eq!(
            to_canonical_color(Premultiplied(Rgba([10, 10, 10, 0]))),
            Color::new(0, 0, 0, 0)
        );
    }

    #[test]
    fn hex_rendering() {
        assert_eq!(Color::new(255, 0, 16, 255).to_string(), "#ff0010ff");
    }

    #[test]
    fn samples_native_buffers() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([5, 6, 7])));
        assert_eq!(sample_canonical(&rgb, 1, 1), Some(Color::new(5, 6, 7, 255)));
        assert_eq!(sample_canonical(&rgb, 2, 0), None);

        let wide: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_pixel(1, 1, Luma([65_535]));
        assert_eq!(
            sample_canonical(&DynamicImage::ImageLuma16(wide), 0, 0),
            Some(Color::new(255, 255, 255, 255))
        );
    }
}
