//! Scene entities anchored in unit space.
//!
//! Each variant (`Actor`, `Line`, `Circle`) is an independent type implementing
//! the [`Drawable`] capability trait; the world stores them as trait objects and
//! hands callers typed [`Handle`]s.
//!
//! Drawables only ever store and mutate unit-space state. Converting to pixels
//! is the world's job, done once per render through its container transform.

mod actor;
mod circle;
mod line;

pub use actor::{Actor, ActorParams};
pub use circle::{Circle, CircleParams};
pub use line::{Line, LineParams};

use core::any::Any;
use core::fmt;
use core::marker::PhantomData;

use crate::asset::ImageAsset;
use crate::coords::{Rect, Vec2};
use crate::error::SimError;
use crate::scene::VisualNode;
use crate::space::UnitSpace;

/// Identity of a drawable within its world.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DrawableId(u64);

impl DrawableId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DrawableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Typed reference to a drawable owned by a world.
pub struct Handle<T> {
    id: DrawableId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub(crate) fn new(id: DrawableId) -> Self {
        Self { id, _marker: PhantomData }
    }

    #[inline]
    pub fn id(&self) -> DrawableId {
        self.id
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Handle<T> {}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({})", self.id)
    }
}

/// Explicit size in units. Unset axes fall back to the asset (actors) or
/// stay unknown.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ForcedSize {
    pub w: Option<f32>,
    pub h: Option<f32>,
}

impl ForcedSize {
    /// Zero, negative and non-finite values mean "not forced".
    pub fn new(w: Option<f32>, h: Option<f32>) -> Self {
        let keep = |v: Option<f32>| v.filter(|v| v.is_finite() && *v > 0.0);
        Self { w: keep(w), h: keep(h) }
    }
}

/// State shared by every drawable.
#[derive(Debug, Clone)]
pub struct DrawableState {
    pub x: f32,
    pub y: f32,
    /// Stored rotation in radians. Actors may render a different heading.
    pub rotation: f32,
    pub alpha: f32,
    anchor: Vec2,
    forced: ForcedSize,
    node: VisualNode,
}

impl DrawableState {
    pub(crate) fn new(x: f32, y: f32, rotation: f32, anchor: Vec2, alpha: f32, forced: ForcedSize) -> Self {
        Self { x, y, rotation, alpha, anchor, forced, node: VisualNode::default() }
    }

    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    #[inline]
    pub fn forced(&self) -> ForcedSize {
        self.forced
    }

    /// The retained visual as of the last draw.
    #[inline]
    pub fn node(&self) -> &VisualNode {
        &self.node
    }

    pub(crate) fn node_mut(&mut self) -> &mut VisualNode {
        &mut self.node
    }

    pub(crate) fn set_forced(&mut self, forced: ForcedSize) {
        self.forced = forced;
    }

    /// Copies position, rotation and alpha onto the visual node.
    pub(crate) fn sync_node(&mut self) {
        self.node.position = Vec2::new(self.x, self.y);
        self.node.rotation = self.rotation;
        self.node.alpha = self.alpha;
    }
}

/// Per-draw context handed out by the world.
#[derive(Debug, Copy, Clone)]
pub struct DrawCtx<'a> {
    pub space: &'a UnitSpace,
}

impl DrawCtx<'_> {
    #[inline]
    pub fn px_per_unit(&self) -> f32 {
        self.space.px_per_unit()
    }
}

/// Capability set every scene entity implements.
pub trait Drawable: Any {
    fn state(&self) -> &DrawableState;

    fn state_mut(&mut self) -> &mut DrawableState;

    /// Refreshes the visual node from unit-space state. Called once per frame.
    fn draw(&mut self, ctx: &DrawCtx<'_>);

    /// Rebuilds size-dependent visuals after a relayout or a size change.
    fn on_resize(&mut self, ctx: &DrawCtx<'_>);

    /// Ratio between the node's local grid and its rendered unit size.
    fn resolution(&self) -> Vec2 {
        Vec2::splat(1.0)
    }

    /// Width in units.
    fn width(&self) -> Result<f32, SimError> {
        self.state().forced.w.ok_or(SimError::NoDimension)
    }

    /// Height in units.
    fn height(&self) -> Result<f32, SimError> {
        self.state().forced.h.ok_or(SimError::NoDimension)
    }

    /// Node-local pivot for a normalized anchor.
    ///
    /// Unknown dimensions count as zero until an asset arrives.
    fn anchor_pivot(&self, anchor: Vec2) -> Vec2 {
        let res = self.resolution();
        let w = self.width().unwrap_or(0.0);
        let h = self.height().unwrap_or(0.0);
        Vec2::new(res.x * anchor.x * w, res.y * anchor.y * h)
    }

    /// Stores `anchor` and moves the node's pivot accordingly.
    fn set_anchor(&mut self, anchor: Vec2) {
        let pivot = self.anchor_pivot(anchor);
        let state = self.state_mut();
        state.anchor = anchor;
        state.node.pivot = pivot;
    }

    /// Bounding box in node-local coordinates.
    fn local_bounds(&self) -> Rect;

    /// Precise hit test at a node-local point already inside `local_bounds`.
    fn hit_test(&self, local: Vec2) -> bool;

    /// Image this drawable still waits for, if any.
    fn pending_asset(&self) -> Option<&str> {
        None
    }

    /// Delivers a finished image load.
    fn asset_loaded(&mut self, asset: ImageAsset, ctx: &DrawCtx<'_>) {
        let _ = (asset, ctx);
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
