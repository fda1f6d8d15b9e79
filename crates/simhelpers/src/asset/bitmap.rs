use std::fmt;
use std::rc::Rc;

use image::RgbaImage;

use crate::coords::Vec2;

/// Decoded image with its native pixel dimensions.
///
/// Cheap to clone; pixels are shared.
#[derive(Clone)]
pub struct ImageAsset {
    pixels: Rc<RgbaImage>,
}

impl ImageAsset {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels: Rc::new(pixels) }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Native size in pixels.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    /// Native width over height; `None` for an empty image.
    pub fn ratio(&self) -> Option<f32> {
        (self.width() > 0 && self.height() > 0).then(|| self.width() as f32 / self.height() as f32)
    }

    /// Alpha of the pixel at column `x`, row `y` (row 0 on top); `0` outside
    /// the image.
    pub fn alpha_at(&self, x: i64, y: i64) -> u8 {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return 0;
        }
        self.pixels.get_pixel(x as u32, y as u32).0[3]
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl PartialEq for ImageAsset {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAsset")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn alpha_lookup_and_bounds() {
        let img = RgbaImage::from_fn(2, 1, |x, _| Rgba([0, 0, 0, if x == 0 { 255 } else { 0 }]));
        let asset = ImageAsset::new(img);
        assert_eq!(asset.alpha_at(0, 0), 255);
        assert_eq!(asset.alpha_at(1, 0), 0);
        assert_eq!(asset.alpha_at(-1, 0), 0);
        assert_eq!(asset.alpha_at(0, 1), 0);
    }

    #[test]
    fn ratio_of_empty_image_is_none() {
        assert_eq!(ImageAsset::new(RgbaImage::new(0, 0)).ratio(), None);
        assert_eq!(ImageAsset::new(RgbaImage::new(30, 20)).ratio(), Some(1.5));
    }
}
