use core::any::Any;

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{NodeContent, Primitive};
use crate::surface::RenderSurface;
use crate::world::World;

use super::{DrawCtx, Drawable, DrawableState, ForcedSize, Handle};

/// Construction parameters for a [`Circle`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleParams {
    pub x: f32,
    pub y: f32,
    /// Radius in units.
    pub r: f32,
    pub color: Color,
    pub alpha: f32,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, r: 1.0, color: Color::from_rgb_u32(0xaabbcc), alpha: 1.0 }
    }
}

/// Filled disc centred on `(x, y)`.
///
/// Its forced size is always `2r` square, so the default centre anchor puts
/// the disc's middle on the position.
#[derive(Debug)]
pub struct Circle {
    state: DrawableState,
    r: f32,
    color: Color,
}

impl Circle {
    pub fn new(params: CircleParams) -> Self {
        let r = if params.r > 0.0 { params.r } else { 1.0 };
        let forced = ForcedSize::new(Some(2.0 * r), Some(2.0 * r));
        let mut circle = Self {
            state: DrawableState::new(params.x, params.y, 0.0, Vec2::new(0.5, 0.5), params.alpha, forced),
            r,
            color: params.color,
        };
        circle.regenerate();
        circle
    }

    /// Creates a circle and adds it to `world`.
    pub fn spawn<S: RenderSurface>(world: &mut World<S>, params: CircleParams) -> Handle<Circle> {
        world.add(Circle::new(params))
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.r
    }

    /// Changes the radius; non-positive values are ignored.
    pub fn set_radius(&mut self, r: f32) {
        if !(r.is_finite() && r > 0.0) {
            log::warn!("ignoring circle radius {r}");
            return;
        }
        self.r = r;
        self.state.set_forced(ForcedSize::new(Some(2.0 * r), Some(2.0 * r)));
        self.regenerate();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let disc = Primitive::Disc { center: Vec2::splat(self.r), radius: self.r, color: self.color };
        self.state.node_mut().content = NodeContent::Graphics(vec![disc]);
        let anchor = self.state.anchor();
        self.set_anchor(anchor);
    }
}

impl Drawable for Circle {
    fn state(&self) -> &DrawableState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DrawableState {
        &mut self.state
    }

    fn draw(&mut self, _ctx: &DrawCtx<'_>) {
        self.state.sync_node();
        self.regenerate();
    }

    fn on_resize(&mut self, _ctx: &DrawCtx<'_>) {
        self.regenerate();
    }

    fn local_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 2.0 * self.r, 2.0 * self.r)
    }

    fn hit_test(&self, local: Vec2) -> bool {
        (local - Vec2::splat(self.r)).length() <= self.r
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
