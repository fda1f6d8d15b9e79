//! Worlds: a unit space, the drawables living in it, and the collaborators
//! that show them.
//!
//! A [`World`] owns everything it draws. Drawables are added by value and
//! addressed afterwards through typed [`Handle`]s; the background image and
//! the axis overlay are owned directly. Every render flattens the layered
//! scene tree into one pixel-space draw list for the surface.
//!
//! Work is split across submodules:
//! - `graph`: ordered drawable membership and the not-yet-ready queue
//! - `layout`: resize handling, aspect discovery, background, axis
//! - `frame`: per-frame update, tickers and rendering
//! - `pointer`: click handlers and pointer dispatch
//! - `scope`: closure-scoped constructors

mod config;
mod frame;
mod graph;
mod layout;
mod pointer;
mod scope;

pub use config::WorldConfig;
pub use frame::Ticker;
pub use pointer::{ClickEvent, ClickHandler};
pub use scope::WorldScope;

use std::collections::HashMap;

use crate::asset::{AssetKey, AssetLoader};
use crate::axis::AxisOverlay;
use crate::coords::{Vec2, Viewport};
use crate::drawable::{DrawCtx, Drawable, DrawableId, Handle};
use crate::error::SimError;
use crate::input::Measurement;
use crate::scene::{DrawList, NodeKey, SceneTree, ZIndex};
use crate::space::{AspectResolver, UnitSpace, WorldDims};
use crate::store::KeyValueStore;
use crate::surface::{ready_channel, ReadySignal, RenderSurface, SurfaceConfig};
use crate::time::FrameClock;

use self::graph::SceneGraph;
use self::layout::Background;

/// Collaborators a world talks to.
pub struct Host<S> {
    pub surface: S,
    pub loader: Box<dyn AssetLoader>,
    pub store: Box<dyn KeyValueStore>,
}

impl<S: RenderSurface> Host<S> {
    pub fn new(
        surface: S,
        loader: impl AssetLoader + 'static,
        store: impl KeyValueStore + 'static,
    ) -> Self {
        Self { surface, loader: Box::new(loader), store: Box::new(store) }
    }
}

/// A unit-space world rendered onto a surface.
pub struct World<S: RenderSurface> {
    config: WorldConfig,
    dims: WorldDims,
    fixed_max_px: Option<Viewport>,
    max_px: Viewport,
    measurement: Measurement,
    resolver: AspectResolver,
    cached_ratio: Option<f32>,
    space: UnitSpace,

    surface: S,
    loader: Box<dyn AssetLoader>,
    store: Box<dyn KeyValueStore>,
    ready: ReadySignal,

    graph: SceneGraph,
    tree: SceneTree,
    background: Option<Background>,
    axis: Option<AxisOverlay>,

    tickers: Vec<Ticker<S>>,
    handlers: HashMap<DrawableId, ClickHandler<S>>,
    clock: FrameClock,
    list: DrawList,
}

impl<S: RenderSurface> World<S> {
    /// Creates a world, initializes its surface and starts loading the
    /// background image.
    ///
    /// The layout uses the cached aspect ratio of the background image when
    /// the store has one, so it is right before the image arrives.
    pub fn new(config: WorldConfig, host: Host<S>, measurement: Measurement) -> Self {
        let Host { mut surface, mut loader, store } = host;

        let dims = WorldDims::new(config.w, config.h);
        let fixed_max_px = config.max_px.filter(|v| v.is_valid());
        let max_px = fixed_max_px.unwrap_or_else(|| measurement.max_px());
        let resolver = AspectResolver::new(&config.namespace, config.background_img.as_deref());
        let cached_ratio = resolver.load_cached(&*store);
        let ratio = resolver.resolve(dims, cached_ratio, measurement.viewport);
        let space = UnitSpace::compute(dims, ratio, max_px, config.min_units);

        let (notifier, ready) = ready_channel();
        let surface_config =
            SurfaceConfig { background: config.background_color, antialias: config.antialias };
        surface.initialize(&surface_config, notifier);

        let mut tree = SceneTree::new();
        let background = config.background_img.as_deref().filter(|img| !img.is_empty()).map(|img| {
            let source = loader.resolve(img);
            loader.request(AssetKey::Background, &source);
            tree.attach(ZIndex::BACKGROUND, NodeKey::Background);
            Background::new(source)
        });

        let mut world = Self {
            config,
            dims,
            fixed_max_px,
            max_px,
            measurement,
            resolver,
            cached_ratio,
            space,
            surface,
            loader,
            store,
            ready,
            graph: SceneGraph::default(),
            tree,
            background,
            axis: None,
            tickers: Vec::new(),
            handlers: HashMap::new(),
            clock: FrameClock::new(),
            list: DrawList::new(),
        };
        world.relayout();
        world.render();
        log::debug!(
            "world created: {}x{} units, cached ratio {:?}",
            world.space.width(),
            world.space.height(),
            world.cached_ratio
        );
        world
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Pixels per unit of the current layout.
    #[inline]
    pub fn px_per_unit(&self) -> f32 {
        self.space.px_per_unit()
    }

    /// Aspect ratio the current layout was computed with.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.space.ratio()
    }

    /// World width in units.
    #[inline]
    pub fn w(&self) -> f32 {
        self.space.width()
    }

    /// World height in units.
    #[inline]
    pub fn h(&self) -> f32 {
        self.space.height()
    }

    #[inline]
    pub fn space(&self) -> &UnitSpace {
        &self.space
    }

    #[inline]
    pub fn min_units(&self) -> Vec2 {
        self.config.min_units
    }

    #[inline]
    pub fn unit(&self) -> &str {
        &self.config.unit
    }

    // ── collaborators ─────────────────────────────────────────────────────

    /// Readiness of the surface. Clones observe the same transition.
    pub fn ready(&self) -> ReadySignal {
        self.ready.clone()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.is_ready()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        &*self.store
    }

    /// Maps an image identifier to what the loader will fetch.
    pub fn resolve_asset(&self, img: &str) -> String {
        self.loader.resolve(img)
    }

    // ── scene graph ───────────────────────────────────────────────────────

    /// Adds a drawable on top of the existing ones and renders.
    ///
    /// Before the surface is ready the drawable is queued; queued drawables
    /// join the scene in FIFO order once readiness is observed.
    pub fn add<T: Drawable>(&mut self, drawable: T) -> Handle<T> {
        let id = self.graph.next_id();
        let boxed: Box<dyn Drawable> = Box::new(drawable);
        if self.poll_ready() {
            self.attach(id, boxed);
            self.render();
        } else {
            log::debug!("surface not ready; queueing drawable {id}");
            self.graph.enqueue(id, boxed);
        }
        Handle::new(id)
    }

    /// Removes a drawable, keeping the order of the others.
    ///
    /// Fails with [`SimError::NotInScene`] for drawables that were already
    /// removed; nothing changes in that case.
    pub fn remove<T: Drawable>(&mut self, handle: Handle<T>) -> Result<(), SimError> {
        self.remove_id(handle.id())
    }

    pub fn remove_id(&mut self, id: DrawableId) -> Result<(), SimError> {
        if self.graph.remove(id).is_none() {
            log::warn!("remove: drawable {id} is not in the scene");
            return Err(SimError::NotInScene(id));
        }
        self.tree.detach(NodeKey::Drawable(id));
        self.handlers.remove(&id);
        self.render();
        Ok(())
    }

    pub fn get<T: Drawable>(&self, handle: Handle<T>) -> Option<&T> {
        self.graph.get(handle)
    }

    pub fn get_mut<T: Drawable>(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.graph.get_mut(handle)
    }

    pub fn drawable(&self, id: DrawableId) -> Option<&dyn Drawable> {
        self.graph.get_dyn(id)
    }

    /// Whether `id` is attached to the scene (queued drawables are not).
    pub fn contains(&self, id: DrawableId) -> bool {
        self.graph.is_member(id)
    }

    /// Attached drawables in paint order.
    pub fn scene_order(&self) -> Vec<DrawableId> {
        self.graph.ids().collect()
    }

    /// Number of attached drawables.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.len() == 0
    }

    /// Drawables waiting for the surface.
    pub fn queued(&self) -> usize {
        self.graph.queued_len()
    }

    /// Layered membership of every visual node.
    pub fn tree(&self) -> &SceneTree {
        &self.tree
    }

    /// Flushes the queue once the surface is ready. Returns readiness.
    fn poll_ready(&mut self) -> bool {
        if !self.ready.is_ready() {
            return false;
        }
        while let Some((id, drawable)) = self.graph.pop_queued() {
            self.attach(id, drawable);
        }
        true
    }

    fn attach(&mut self, id: DrawableId, mut drawable: Box<dyn Drawable>) {
        let ctx = DrawCtx { space: &self.space };
        drawable.on_resize(&ctx);
        drawable.draw(&ctx);
        if let Some(source) = drawable.pending_asset() {
            self.loader.request(AssetKey::Drawable(id), source);
        }
        self.graph.push(id, drawable);
        self.tree.attach(ZIndex::DRAWABLES, NodeKey::Drawable(id));
    }
}
