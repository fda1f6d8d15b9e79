use super::Vec2;

/// Axis-aligned rectangle given by origin and size.
///
/// Used for node-local bounds during hit-testing, so the y direction depends on
/// the node's local space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Smallest rect containing both points.
    #[inline]
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        Rect::new(a.x, a.y, b.x - a.x, b.y - a.y).normalized()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Grows the rect by `d` on every side.
    #[inline]
    pub fn inflate(self, d: f32) -> Self {
        let r = self.normalized();
        Rect::new(r.origin.x - d, r.origin.y - d, r.size.x + 2.0 * d, r.size.y + 2.0 * d)
    }

    /// Closed containment: [min, max].
    ///
    /// Closed on both ends so thin shapes (a horizontal line has zero height)
    /// can still be hit.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x <= (r.origin.x + r.size.x)
            && p.y <= (r.origin.y + r.size.y)
    }
}
