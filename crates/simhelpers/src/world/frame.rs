use crate::asset::{AssetEvent, AssetKey};
use crate::drawable::DrawCtx;
use crate::error::SimError;
use crate::scene::NodeKey;
use crate::surface::RenderSurface;

use super::World;

/// Per-frame callback receiving the world and the frame delta in seconds.
pub type Ticker<S> = Box<dyn FnMut(&mut World<S>, f32)>;

impl<S: RenderSurface> World<S> {
    /// Registers a per-frame callback. Tickers run in registration order,
    /// before the draw pass of the same frame.
    pub fn add_ticker(&mut self, ticker: impl FnMut(&mut World<S>, f32) + 'static) {
        self.tickers.push(Box::new(ticker));
    }

    /// Runs one frame timed by the world's clock. Does nothing until the
    /// surface is ready.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if !self.poll_ready() {
            return Ok(());
        }
        let time = self.clock.tick();
        self.advance(time.dt)
    }

    /// Runs one frame with an explicit delta: tickers, then [`update`](Self::update).
    pub fn advance(&mut self, dt: f32) -> Result<(), SimError> {
        if !self.poll_ready() {
            return Ok(());
        }
        let mut tickers = std::mem::take(&mut self.tickers);
        for ticker in tickers.iter_mut() {
            ticker(self, dt);
        }
        // Tickers registered while running go after the existing ones.
        tickers.append(&mut self.tickers);
        self.tickers = tickers;

        self.update()
    }

    /// Delivers finished image loads, draws every drawable in insertion order
    /// and renders once.
    ///
    /// A failed load is reported after the frame has been rendered; the
    /// affected drawable keeps waiting without a visual.
    pub fn update(&mut self) -> Result<(), SimError> {
        if !self.poll_ready() {
            return Ok(());
        }

        let mut failure = None;
        for event in self.loader.poll() {
            if let Err(err) = self.deliver(event) {
                log::warn!("{err}");
                failure.get_or_insert(err);
            }
        }

        let ctx = DrawCtx { space: &self.space };
        self.graph.draw_all(&ctx);
        self.render();

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Flattens the scene tree into pixel space and presents it.
    pub fn render(&mut self) {
        if !self.poll_ready() {
            return;
        }
        self.list.clear();
        let container = self.space.container_transform();
        let ppu = self.space.px_per_unit();

        for (z, key) in self.tree.iter() {
            let node = match key {
                NodeKey::Background => self.background.as_ref().map(|b| &b.node),
                NodeKey::Axis => self.axis.as_ref().map(|a| a.node()),
                NodeKey::Drawable(id) => self.graph.get_dyn(id).map(|d| d.state().node()),
            };
            if let Some(node) = node {
                node.emit(z, container, ppu, &mut self.list);
            }
        }
        self.surface.present(&mut self.list);
    }

    fn deliver(&mut self, event: AssetEvent) -> Result<(), SimError> {
        match event.key {
            AssetKey::Background => {
                self.background_loaded(event.result?);
            }
            AssetKey::Drawable(id) => {
                if !self.graph.is_member(id) {
                    log::debug!("ignoring {} for drawable {id}: no longer in the scene", event.source);
                    return Ok(());
                }
                let asset = event.result?;
                let ctx = DrawCtx { space: &self.space };
                if let Some(drawable) = self.graph.get_dyn_mut(id) {
                    drawable.asset_loaded(asset, &ctx);
                }
            }
        }
        Ok(())
    }
}
