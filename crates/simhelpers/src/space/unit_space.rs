use crate::coords::{Transform, Vec2, Viewport};

/// Explicitly requested world size in units.
///
/// At most these two values are given; whatever is missing is derived from
/// the aspect ratio, or from the pixel bounds when both are missing.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct WorldDims {
    pub w: Option<f32>,
    pub h: Option<f32>,
}

impl WorldDims {
    /// Zero, negative and non-finite values mean "derive this axis".
    pub fn new(w: Option<f32>, h: Option<f32>) -> Self {
        let keep = |v: Option<f32>| v.filter(|v| v.is_finite() && *v > 0.0);
        Self { w: keep(w), h: keep(h) }
    }

    /// Both axes given: their ratio overrides every other source.
    pub fn forced_ratio(self) -> Option<f32> {
        match (self.w, self.h) {
            (Some(w), Some(h)) => Some(w / h),
            _ => None,
        }
    }
}

/// Which pixel bound limits the rendered world.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Binding {
    /// The world spans the full bound width; `px_per_unit = max_w / w`.
    Width,
    /// The world spans the full bound height; `px_per_unit = max_h / h`.
    Height,
}

/// Mapping between unit space and pixel space for one layout.
///
/// Unit space has its origin at `min_units`, bottom-left, +Y up. Pixel space
/// has its origin top-left, +Y down. The rendered world keeps its aspect
/// ratio and never exceeds `max_px` on either axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UnitSpace {
    min_units: Vec2,
    dims: Vec2,
    max_px: Viewport,
    ratio: f32,
    binding: Binding,
    px_per_unit: f32,
    size_px: Viewport,
}

impl UnitSpace {
    /// Lays out a world of `dims` (missing axes derived from `ratio`) inside
    /// `max_px`.
    ///
    /// The binding axis is found by comparing `max_w` with `ratio * max_h`:
    /// strictly greater means height-bound, anything else (a tie included)
    /// is width-bound.
    pub fn compute(dims: WorldDims, ratio: f32, max_px: Viewport, min_units: Vec2) -> Self {
        let size = Self::dimensions_for(dims, ratio, max_px);
        let binding = if max_px.width > ratio * max_px.height {
            Binding::Height
        } else {
            Binding::Width
        };

        let ppu = match binding {
            Binding::Width => max_px.width / size.x,
            Binding::Height => max_px.height / size.y,
        };
        let ppu = if ppu.is_finite() && ppu > 0.0 { ppu } else { 0.0 };

        // The binding axis reports the bound itself so it matches exactly.
        let size_px = match binding {
            Binding::Width => Viewport::new(max_px.width, size.y * ppu),
            Binding::Height => Viewport::new(size.x * ppu, max_px.height),
        };

        Self { min_units, dims: size, max_px, ratio, binding, px_per_unit: ppu, size_px }
    }

    /// World size in units for the given inputs.
    pub fn dimensions_for(dims: WorldDims, ratio: f32, max_px: Viewport) -> Vec2 {
        let w = dims.w.or_else(|| dims.h.map(|h| h * ratio)).unwrap_or(max_px.width);
        let h = dims.h.or_else(|| dims.w.map(|w| w / ratio)).unwrap_or(max_px.height);
        Vec2::new(w, h)
    }

    #[inline]
    pub fn px_per_unit(&self) -> f32 {
        self.px_per_unit
    }

    #[inline]
    pub fn binding(&self) -> Binding {
        self.binding
    }

    /// World size in units.
    #[inline]
    pub fn dimensions(&self) -> Vec2 {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.dims.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.dims.y
    }

    #[inline]
    pub fn min_units(&self) -> Vec2 {
        self.min_units
    }

    #[inline]
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    #[inline]
    pub fn max_px(&self) -> Viewport {
        self.max_px
    }

    /// Rendered world size in pixels.
    #[inline]
    pub fn size_px(&self) -> Viewport {
        self.size_px
    }

    /// Unit space → pixel space: scale `(ppu, -ppu)` about `min_units`, then
    /// move the origin to the bottom of the rendered area.
    pub fn container_transform(&self) -> Transform {
        Transform::translate(Vec2::new(0.0, self.size_px.height))
            * Transform::scale(self.px_per_unit, -self.px_per_unit)
            * Transform::translate(-self.min_units)
    }

    #[inline]
    pub fn unit_to_px(&self, p: Vec2) -> Vec2 {
        self.container_transform().apply(p)
    }

    /// Pixel space → unit space. A collapsed layout maps everything to
    /// `min_units`.
    pub fn px_to_unit(&self, p: Vec2) -> Vec2 {
        if self.px_per_unit == 0.0 {
            return self.min_units;
        }
        Vec2::new(
            p.x / self.px_per_unit + self.min_units.x,
            (self.size_px.height - p.y) / self.px_per_unit + self.min_units.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(w: Option<f32>, h: Option<f32>, ratio: f32, max_w: f32, max_h: f32) -> UnitSpace {
        UnitSpace::compute(WorldDims::new(w, h), ratio, Viewport::new(max_w, max_h), Vec2::zero())
    }

    #[test]
    fn derived_height_on_exact_ratio_tie_is_width_bound() {
        let s = space(Some(100.0), Some(0.0), 2.0, 800.0, 400.0);
        assert_eq!(s.dimensions(), Vec2::new(100.0, 50.0));
        assert_eq!(s.binding(), Binding::Width);
        assert_eq!(s.px_per_unit(), 8.0);
        assert_eq!(s.size_px(), Viewport::new(800.0, 400.0));
    }

    #[test]
    fn wide_bounds_are_height_bound() {
        let s = space(Some(100.0), Some(100.0), 1.0, 800.0, 400.0);
        assert_eq!(s.binding(), Binding::Height);
        assert_eq!(s.px_per_unit(), 4.0);
        assert_eq!(s.size_px(), Viewport::new(400.0, 400.0));
    }

    #[test]
    fn derived_width_from_height() {
        let s = space(None, Some(200.0), 1.5, 1000.0, 1000.0);
        assert_eq!(s.dimensions(), Vec2::new(300.0, 200.0));
        assert_eq!(s.binding(), Binding::Width);
    }

    #[test]
    fn no_explicit_dims_fall_back_to_pixel_bounds() {
        let s = space(None, None, 16.0 / 9.0, 640.0, 480.0);
        assert_eq!(s.dimensions(), Vec2::new(640.0, 480.0));
        assert_eq!(s.px_per_unit(), 1.0);
        assert_eq!(s.size_px(), Viewport::new(640.0, 480.0));
    }

    #[test]
    fn rendered_size_never_exceeds_bounds() {
        let bounds = [(800.0, 400.0), (333.0, 777.0), (1920.0, 1080.0), (1.0, 1.0)];
        let dims = [(100.0, 50.0), (3.0, 7.0), (12.5, 12.5), (1000.0, 1.0)];
        for (max_w, max_h) in bounds {
            for (w, h) in dims {
                let s = space(Some(w), Some(h), w / h, max_w, max_h);
                let px = s.size_px();
                assert!(px.width <= max_w * (1.0 + 1e-6), "{w}x{h} in {max_w}x{max_h}: {px:?}");
                assert!(px.height <= max_h * (1.0 + 1e-6), "{w}x{h} in {max_w}x{max_h}: {px:?}");
                match s.binding() {
                    Binding::Width => assert_eq!(px.width, max_w),
                    Binding::Height => assert_eq!(px.height, max_h),
                }
            }
        }
    }

    #[test]
    fn explicit_ratio_ignores_viewport_shape() {
        for (max_w, max_h) in [(100.0, 900.0), (900.0, 100.0)] {
            let s = space(Some(40.0), Some(10.0), 4.0, max_w, max_h);
            assert_eq!(s.dimensions(), Vec2::new(40.0, 10.0));
            let px = s.size_px();
            assert!((px.width / px.height - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn origin_maps_to_bottom_left() {
        let s = UnitSpace::compute(
            WorldDims::new(Some(100.0), None),
            2.0,
            Viewport::new(800.0, 400.0),
            Vec2::new(-10.0, 5.0),
        );
        assert_eq!(s.unit_to_px(Vec2::new(-10.0, 5.0)), Vec2::new(0.0, 400.0));
        assert_eq!(s.unit_to_px(Vec2::new(90.0, 55.0)), Vec2::new(800.0, 0.0));
    }

    #[test]
    fn px_to_unit_inverts_unit_to_px() {
        let s = UnitSpace::compute(
            WorldDims::new(None, Some(200.0)),
            1.25,
            Viewport::new(1024.0, 700.0),
            Vec2::new(3.0, -4.0),
        );
        let p = Vec2::new(42.0, 17.5);
        let back = s.px_to_unit(s.unit_to_px(p));
        assert!((back.x - p.x).abs() < 1e-3 && (back.y - p.y).abs() < 1e-3);
    }

    #[test]
    fn degenerate_bounds_collapse_to_zero_scale() {
        let s = space(Some(10.0), None, 1.0, 0.0, 0.0);
        assert_eq!(s.px_per_unit(), 0.0);
        assert_eq!(s.px_to_unit(Vec2::new(5.0, 5.0)), Vec2::zero());
    }
}
