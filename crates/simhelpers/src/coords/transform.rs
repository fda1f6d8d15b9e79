use core::ops::Mul;

use super::Vec2;

/// 2D affine transform.
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
///
/// Composition follows matrix order: `(p * q).apply(v) == p.apply(q.apply(v))`,
/// so the right-hand transform runs first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[inline]
    pub const fn translate(t: Vec2) -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: t.x, f: t.y }
    }

    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self { a: sx, b: 0.0, c: 0.0, d: sy, e: 0.0, f: 0.0 }
    }

    /// Counter-clockwise rotation in a y-up space.
    #[inline]
    pub fn rotate(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self { a: c, b: s, c: -s, d: c, e: 0.0, f: 0.0 }
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    #[inline]
    pub fn determinant(self) -> f32 {
        self.a * self.d - self.b * self.c
    }

    /// Returns the inverse transform, or `None` when the transform collapses
    /// an axis (zero scale).
    pub fn inverse(self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;
        Some(Self {
            a: self.d * inv,
            b: -self.b * inv,
            c: -self.c * inv,
            d: self.a * inv,
            e: (self.c * self.f - self.d * self.e) * inv,
            f: (self.b * self.e - self.a * self.f) * inv,
        })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform {
    type Output = Transform;

    #[inline]
    fn mul(self, r: Transform) -> Transform {
        Transform {
            a: self.a * r.a + self.c * r.b,
            b: self.b * r.a + self.d * r.b,
            c: self.a * r.c + self.c * r.d,
            d: self.b * r.c + self.d * r.d,
            e: self.a * r.e + self.c * r.f + self.e,
            f: self.b * r.e + self.d * r.f + self.f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn composition_applies_right_hand_first() {
        let t = Transform::translate(Vec2::new(10.0, 0.0)) * Transform::scale(2.0, 2.0);
        assert_eq!(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 2.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = Transform::rotate(core::f32::consts::FRAC_PI_2).apply(Vec2::new(1.0, 0.0));
        assert!(close(p, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn inverse_round_trips_a_composite() {
        let t = Transform::translate(Vec2::new(0.0, 400.0))
            * Transform::scale(8.0, -8.0)
            * Transform::rotate(0.3);
        let inv = t.inverse().unwrap();
        let p = Vec2::new(3.0, -7.5);
        assert!(close(inv.apply(t.apply(p)), p));
    }

    #[test]
    fn inverse_of_collapsed_axis_is_none() {
        assert!(Transform::scale(0.0, 1.0).inverse().is_none());
    }
}
