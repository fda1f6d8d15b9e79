/// Pixel extent of a surface, container or window.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height, or `None` for a degenerate viewport.
    #[inline]
    pub fn ratio(self) -> Option<f32> {
        self.is_valid().then(|| self.width / self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_landscape_viewport() {
        assert_eq!(Viewport::new(800.0, 400.0).ratio(), Some(2.0));
    }

    #[test]
    fn ratio_of_degenerate_viewport_is_none() {
        assert_eq!(Viewport::new(800.0, 0.0).ratio(), None);
        assert_eq!(Viewport::new(f32::NAN, 10.0).ratio(), None);
    }
}
