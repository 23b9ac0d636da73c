use image::DynamicImage;
use ndarray::{s, Array2, ArrayView2};

/// Single-channel intensity map, indexed `[row, column]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityMap {
    data: Array2<u8>,
}

impl IntensityMap {
    /// Build a map by evaluating `f(x, y)` for every pixel
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> u8,
    {
        let data = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
            f(x as u32, y as u32)
        });
        Self { data }
    }

    pub fn width(&self) -> u32 {
        self.data.ncols() as u32
    }

    pub fn height(&self) -> u32 {
        self.data.nrows() as u32
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.data.get((y as usize, x as usize)).copied()
    }

    /// Borrow a `width`x`height` window at `(x, y)`
    ///
    /// Returns `None` when any part of the window falls outside the map.
    pub fn window(&self, x: u32, y: u32, width: u32, height: u32) -> Option<ArrayView2<'_, u8>> {
        let x_end = x.checked_add(width)?;
        let y_end = y.checked_add(height)?;
        if x_end > self.width() || y_end > self.height() {
            return None;
        }

        Some(
            self.data
                .slice(s![y as usize..y_end as usize, x as usize..x_end as usize]),
        )
    }
}

/// Perceptual luma for one RGB sample
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let r = r as f32;
    let g = g as f32;
    let b = b as f32;

    (0.299 * r + 0.587 * g + 0.114 * b).round().clamp(0.0, 255.0) as u8
}

/// Convert a decoded image to an intensity map of the same dimensions
pub fn to_grayscale(image: &DynamicImage) -> IntensityMap {
    let _span = tracing::debug_span!("grayscale").entered();

    let rgb = image.to_rgb8();
    IntensityMap::from_fn(rgb.width(), rgb.height(), |x, y| {
        let pixel = rgb.get_pixel(x, y);
        luma(pixel[0], pixel[1], pixel[2])
    })
}
