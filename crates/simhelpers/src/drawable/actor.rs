use core::any::Any;

use crate::asset::ImageAsset;
use crate::coords::{Rect, Vec2};
use crate::error::SimError;
use crate::scene::NodeContent;
use crate::surface::RenderSurface;
use crate::world::World;

use super::{DrawCtx, Drawable, DrawableState, ForcedSize, Handle};

/// Construction parameters for an [`Actor`].
#[derive(Debug, Clone, PartialEq)]
pub struct ActorParams {
    /// Image identifier, resolved by the world's asset loader.
    pub img: String,
    pub x: f32,
    pub y: f32,
    /// Forced width in units. With only `w` the height follows the image ratio.
    pub w: Option<f32>,
    /// Forced height in units. With only `h` the width follows the image ratio.
    pub h: Option<f32>,
    pub rotation: f32,
    pub anchor: Vec2,
    pub alpha: f32,
    pub autorotate: bool,
}

impl Default for ActorParams {
    fn default() -> Self {
        Self {
            img: String::new(),
            x: 0.0,
            y: 0.0,
            w: None,
            h: None,
            rotation: 0.0,
            anchor: Vec2::new(0.5, 0.5),
            alpha: 1.0,
            autorotate: true,
        }
    }
}

impl ActorParams {
    pub fn new(img: impl Into<String>) -> Self {
        Self { img: img.into(), ..Self::default() }
    }
}

/// Image-backed drawable with a velocity.
///
/// The visual node's local space is the image's native pixel grid (+Y up);
/// `node.scale` carries it to the rendered unit size. Until the image has
/// loaded the actor paints nothing and only forced dimensions are known.
#[derive(Debug)]
pub struct Actor {
    state: DrawableState,
    pub vx: f32,
    pub vy: f32,
    /// Render the heading of the velocity instead of `rotation` while moving.
    pub autorotate: bool,
    img: String,
    source: String,
    texture: Option<ImageAsset>,
    rendered: Vec2,
}

impl Actor {
    /// Builds an actor loading `source` (the resolved form of `params.img`).
    pub fn new(params: ActorParams, source: impl Into<String>) -> Self {
        let forced = ForcedSize::new(params.w, params.h);
        let mut actor = Self {
            state: DrawableState::new(params.x, params.y, params.rotation, params.anchor, params.alpha, forced),
            vx: 0.0,
            vy: 0.0,
            autorotate: params.autorotate,
            img: params.img,
            source: source.into(),
            texture: None,
            rendered: Vec2::zero(),
        };
        actor.layout();
        actor
    }

    /// Creates an actor and adds it to `world`.
    pub fn spawn<S: RenderSurface>(world: &mut World<S>, params: ActorParams) -> Handle<Actor> {
        let source = world.resolve_asset(&params.img);
        world.add(Actor::new(params, source))
    }

    /// Image identifier as given.
    pub fn img(&self) -> &str {
        &self.img
    }

    /// Resolved image source.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn texture(&self) -> Option<&ImageAsset> {
        self.texture.as_ref()
    }

    /// Replaces the forced size and relays out the sprite.
    pub fn resize(&mut self, w: Option<f32>, h: Option<f32>) {
        self.state.set_forced(ForcedSize::new(w, h));
        self.layout();
    }

    /// Rotation applied by the last draw.
    pub fn rendered_rotation(&self) -> f32 {
        self.state.node().rotation
    }

    /// Rendered size in units, as of the last layout.
    pub fn rendered_size(&self) -> Vec2 {
        self.rendered
    }

    fn layout(&mut self) {
        let forced = self.state.forced();
        let Some(texture) = &self.texture else {
            self.rendered = Vec2::new(forced.w.unwrap_or(0.0), forced.h.unwrap_or(0.0));
            let anchor = self.state.anchor();
            self.set_anchor(anchor);
            return;
        };

        let native = texture.size();
        let ratio = texture.ratio().unwrap_or(1.0);
        let mut rendered = native;
        if let Some(w) = forced.w {
            rendered = Vec2::new(w, w / ratio);
        }
        if let Some(h) = forced.h {
            // Both forced: the image may be distorted.
            let w = if forced.w.is_some() { rendered.x } else { h * ratio };
            rendered = Vec2::new(w, h);
        }
        self.rendered = rendered;

        let node = self.state.node_mut();
        node.scale = Vec2::new(
            if native.x > 0.0 { rendered.x / native.x } else { 1.0 },
            if native.y > 0.0 { rendered.y / native.y } else { 1.0 },
        );
        let anchor = self.state.anchor();
        self.set_anchor(anchor);
    }
}

impl Drawable for Actor {
    fn state(&self) -> &DrawableState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DrawableState {
        &mut self.state
    }

    fn draw(&mut self, _ctx: &DrawCtx<'_>) {
        self.state.sync_node();
        if self.autorotate && !(self.vx == 0.0 && self.vy == 0.0) {
            self.state.node_mut().rotation = Vec2::new(self.vx, self.vy).angle();
        }
    }

    fn on_resize(&mut self, _ctx: &DrawCtx<'_>) {
        self.layout();
    }

    fn resolution(&self) -> Vec2 {
        match &self.texture {
            Some(t) if self.rendered.x > 0.0 && self.rendered.y > 0.0 => {
                let native = t.size();
                Vec2::new(native.x / self.rendered.x, native.y / self.rendered.y)
            }
            _ => Vec2::splat(1.0),
        }
    }

    fn width(&self) -> Result<f32, SimError> {
        match (self.state.forced().w, &self.texture) {
            (Some(w), _) => Ok(w),
            (None, Some(_)) => Ok(self.rendered.x),
            (None, None) => Err(SimError::NoDimension),
        }
    }

    fn height(&self) -> Result<f32, SimError> {
        match (self.state.forced().h, &self.texture) {
            (Some(h), _) => Ok(h),
            (None, Some(_)) => Ok(self.rendered.y),
            (None, None) => Err(SimError::NoDimension),
        }
    }

    fn local_bounds(&self) -> Rect {
        match &self.texture {
            Some(t) => Rect::new(0.0, 0.0, t.size().x, t.size().y),
            None => Rect::default(),
        }
    }

    /// Only opaque pixels are hit.
    fn hit_test(&self, local: Vec2) -> bool {
        let Some(texture) = &self.texture else {
            return false;
        };
        let row = texture.size().y - local.y;
        texture.alpha_at(local.x.floor() as i64, row.floor() as i64) > 0
    }

    fn pending_asset(&self) -> Option<&str> {
        match self.texture {
            None => Some(self.source.as_str()),
            Some(_) => None,
        }
    }

    fn asset_loaded(&mut self, asset: ImageAsset, _ctx: &DrawCtx<'_>) {
        log::debug!("actor image {} loaded ({}x{})", self.source, asset.width(), asset.height());
        self.state.node_mut().content =
            NodeContent::Sprite { source: self.source.clone(), native_size: asset.size() };
        self.texture = Some(asset);
        self.layout();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;
    use crate::coords::Viewport;
    use crate::space::{UnitSpace, WorldDims};

    fn space() -> UnitSpace {
        UnitSpace::compute(WorldDims::new(Some(100.0), None), 1.0, Viewport::new(400.0, 400.0), Vec2::zero())
    }

    /// 40x20 image whose left half is opaque.
    fn half_opaque() -> ImageAsset {
        ImageAsset::new(RgbaImage::from_fn(40, 20, |x, _| Rgba([255, 0, 0, if x < 20 { 255 } else { 0 }])))
    }

    fn loaded(params: ActorParams) -> Actor {
        let space = space();
        let mut actor = Actor::new(params, "plane.png");
        actor.asset_loaded(half_opaque(), &DrawCtx { space: &space });
        actor
    }

    #[test]
    fn unloaded_actor_has_no_dimension() {
        let actor = Actor::new(ActorParams::new("plane.png"), "plane.png");
        assert_eq!(actor.width(), Err(SimError::NoDimension));
        assert_eq!(actor.pending_asset(), Some("plane.png"));
    }

    #[test]
    fn forced_width_is_known_before_load() {
        let actor = Actor::new(ActorParams { w: Some(8.0), ..ActorParams::new("a") }, "a");
        assert_eq!(actor.width(), Ok(8.0));
        assert_eq!(actor.height(), Err(SimError::NoDimension));
    }

    #[test]
    fn forced_width_keeps_image_ratio() {
        let actor = loaded(ActorParams { w: Some(10.0), ..ActorParams::new("a") });
        assert_eq!(actor.rendered_size(), Vec2::new(10.0, 5.0));
        assert_eq!(actor.height(), Ok(5.0));
        assert_eq!(actor.state().node().scale, Vec2::new(0.25, 0.25));
    }

    #[test]
    fn forced_height_derives_width() {
        let actor = loaded(ActorParams { h: Some(4.0), ..ActorParams::new("a") });
        assert_eq!(actor.rendered_size(), Vec2::new(8.0, 4.0));
    }

    #[test]
    fn both_forced_may_distort() {
        let actor = loaded(ActorParams { w: Some(3.0), h: Some(3.0), ..ActorParams::new("a") });
        assert_eq!(actor.rendered_size(), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn unforced_actor_uses_native_size() {
        let actor = loaded(ActorParams::new("a"));
        assert_eq!(actor.width(), Ok(40.0));
        assert_eq!(actor.resolution(), Vec2::splat(1.0));
    }

    #[test]
    fn anchor_pivot_is_in_native_pixels() {
        let actor = loaded(ActorParams { w: Some(10.0), ..ActorParams::new("a") });
        // Centre of a 40x20 image regardless of its rendered size.
        assert_eq!(actor.state().node().pivot, Vec2::new(20.0, 10.0));
        assert_eq!(actor.resolution(), Vec2::new(4.0, 4.0));
    }

    #[test]
    fn autorotate_overrides_rendered_rotation_only() {
        let space = space();
        let ctx = DrawCtx { space: &space };
        let mut actor = loaded(ActorParams { rotation: 1.0, ..ActorParams::new("a") });
        actor.vx = 0.0;
        actor.vy = 2.0;
        actor.draw(&ctx);
        assert!((actor.rendered_rotation() - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(actor.state().rotation, 1.0);

        actor.vy = 0.0;
        actor.draw(&ctx);
        assert_eq!(actor.rendered_rotation(), 1.0);
    }

    #[test]
    fn autorotate_off_keeps_stored_rotation() {
        let space = space();
        let mut actor = loaded(ActorParams { rotation: 0.5, autorotate: false, ..ActorParams::new("a") });
        actor.vx = 3.0;
        actor.draw(&DrawCtx { space: &space });
        assert_eq!(actor.rendered_rotation(), 0.5);
    }

    #[test]
    fn hit_test_samples_alpha() {
        let actor = loaded(ActorParams::new("a"));
        assert!(actor.hit_test(Vec2::new(5.0, 10.0)));
        assert!(!actor.hit_test(Vec2::new(30.0, 10.0)));
    }

    #[test]
    fn resize_relayouts_loaded_sprite() {
        let mut actor = loaded(ActorParams::new("a"));
        actor.resize(Some(20.0), None);
        assert_eq!(actor.rendered_size(), Vec2::new(20.0, 10.0));
        assert_eq!(actor.state().node().pivot, Vec2::new(20.0, 10.0));
    }
}
