mod color;
mod grayscale;
mod loader;

pub use color::{sample_canonical, to_canonical_color, CanonicalColor, Color, Premultiplied};
pub use grayscale::{luma, to_grayscale, IntensityMap};
pub use loader::{load_image, PixelBuffer};
