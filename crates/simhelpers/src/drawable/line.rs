use core::any::Any;

use crate::coords::{Rect, Vec2};
use crate::error::SimError;
use crate::paint::Color;
use crate::scene::{NodeContent, Primitive};
use crate::surface::RenderSurface;
use crate::world::World;

use super::{DrawCtx, Drawable, DrawableState, ForcedSize, Handle};

/// Construction parameters for a [`Line`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineParams {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
    /// Stroke width in units.
    pub thickness: f32,
    pub alpha: f32,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            from: Vec2::zero(),
            to: Vec2::zero(),
            color: Color::from_rgb_u32(0x112233),
            thickness: 3.0,
            alpha: 1.0,
        }
    }
}

impl LineParams {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to, ..Self::default() }
    }
}

/// Straight segment between two unit-space points.
///
/// The node sits at `from` and strokes towards `to`; geometry is rebuilt on
/// every draw.
#[derive(Debug)]
pub struct Line {
    state: DrawableState,
    pub from: Vec2,
    pub to: Vec2,
    pub thickness: f32,
    color: Color,
    px_per_unit: f32,
}

impl Line {
    pub fn new(params: LineParams) -> Self {
        let thickness = if params.thickness > 0.0 { params.thickness } else { 3.0 };
        let mut line = Self {
            state: DrawableState::new(
                params.from.x,
                params.from.y,
                0.0,
                Vec2::zero(),
                params.alpha,
                ForcedSize::default(),
            ),
            from: params.from,
            to: params.to,
            thickness,
            color: params.color,
            px_per_unit: 0.0,
        };
        line.regenerate();
        line
    }

    /// Creates a line and adds it to `world`.
    pub fn spawn<S: RenderSurface>(world: &mut World<S>, params: LineParams) -> Handle<Line> {
        world.add(Line::new(params))
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Changes the stroke color; the geometry is rebuilt immediately.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.regenerate();
    }

    fn delta(&self) -> Vec2 {
        self.to - self.from
    }

    fn regenerate(&mut self) {
        let stroke = Primitive::Stroke {
            from: Vec2::zero(),
            to: self.delta(),
            width_px: self.thickness * self.px_per_unit,
            color: self.color,
        };
        self.state.node_mut().content = NodeContent::Graphics(vec![stroke]);
    }
}

impl Drawable for Line {
    fn state(&self) -> &DrawableState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DrawableState {
        &mut self.state
    }

    fn draw(&mut self, ctx: &DrawCtx<'_>) {
        self.state.x = self.from.x;
        self.state.y = self.from.y;
        self.state.sync_node();
        self.px_per_unit = ctx.px_per_unit();
        self.regenerate();
    }

    fn on_resize(&mut self, ctx: &DrawCtx<'_>) {
        self.px_per_unit = ctx.px_per_unit();
        self.regenerate();
    }

    /// Horizontal extent; zero for a vertical line.
    fn width(&self) -> Result<f32, SimError> {
        Ok(self.delta().x.abs())
    }

    fn height(&self) -> Result<f32, SimError> {
        Ok(self.delta().y.abs())
    }

    fn local_bounds(&self) -> Rect {
        Rect::from_points(Vec2::zero(), self.delta()).inflate(self.thickness / 2.0)
    }

    fn hit_test(&self, local: Vec2) -> bool {
        distance_to_segment(local, Vec2::zero(), self.delta()) <= self.thickness / 2.0
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len2 = ab.dot(ab);
    if len2 == 0.0 {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;
    use crate::space::{UnitSpace, WorldDims};

    fn space() -> UnitSpace {
        // 10 px per unit.
        UnitSpace::compute(WorldDims::new(Some(40.0), Some(40.0)), 1.0, Viewport::new(400.0, 400.0), Vec2::zero())
    }

    fn strokes(line: &Line) -> Vec<Primitive> {
        match &line.state().node().content {
            NodeContent::Graphics(p) => p.clone(),
            other => panic!("expected graphics, got {other:?}"),
        }
    }

    #[test]
    fn defaults_follow_the_helpers() {
        let p = LineParams::default();
        assert_eq!(p.thickness, 3.0);
        assert_eq!(p.color, Color::from_rgb_u32(0x112233));
    }

    #[test]
    fn draw_places_node_at_from_and_scales_stroke() {
        let space = space();
        let mut line = Line::new(LineParams { thickness: 0.5, ..LineParams::new(Vec2::new(2.0, 3.0), Vec2::new(5.0, 7.0)) });
        line.draw(&DrawCtx { space: &space });

        assert_eq!(line.state().node().position, Vec2::new(2.0, 3.0));
        let Primitive::Stroke { from, to, width_px, .. } = &strokes(&line)[0] else { panic!("expected stroke") };
        assert_eq!(*from, Vec2::zero());
        assert_eq!(*to, Vec2::new(3.0, 4.0));
        assert_eq!(*width_px, 5.0);
    }

    #[test]
    fn moved_endpoint_is_picked_up_on_next_draw() {
        let space = space();
        let ctx = DrawCtx { space: &space };
        let mut line = Line::new(LineParams::new(Vec2::zero(), Vec2::new(1.0, 0.0)));
        line.draw(&ctx);
        line.to = Vec2::new(0.0, 9.0);
        line.draw(&ctx);
        let Primitive::Stroke { to, .. } = &strokes(&line)[0] else { panic!("expected stroke") };
        assert_eq!(*to, Vec2::new(0.0, 9.0));
    }

    #[test]
    fn dimensions_are_absolute_deltas() {
        let line = Line::new(LineParams::new(Vec2::new(5.0, 1.0), Vec2::new(2.0, 1.0)));
        assert_eq!(line.width(), Ok(3.0));
        assert_eq!(line.height(), Ok(0.0));
    }

    #[test]
    fn set_color_regenerates() {
        let mut line = Line::new(LineParams::new(Vec2::zero(), Vec2::new(1.0, 1.0)));
        let red = Color::from_rgb_u32(0xff0000);
        line.set_color(red);
        let Primitive::Stroke { color, .. } = &strokes(&line)[0] else { panic!("expected stroke") };
        assert_eq!(*color, red);
    }

    #[test]
    fn hit_test_uses_stroke_distance() {
        let line = Line::new(LineParams { thickness: 1.0, ..LineParams::new(Vec2::zero(), Vec2::new(10.0, 0.0)) });
        assert!(line.hit_test(Vec2::new(5.0, 0.4)));
        assert!(!line.hit_test(Vec2::new(5.0, 0.6)));
        assert!(line.local_bounds().contains(Vec2::new(5.0, 0.4)));
    }
}
