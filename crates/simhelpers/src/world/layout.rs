use crate::asset::ImageAsset;
use crate::axis::{AxisConfig, AxisOverlay};
use crate::drawable::DrawCtx;
use crate::input::Measurement;
use crate::scene::{NodeContent, NodeKey, VisualNode, ZIndex};
use crate::space::{UnitSpace, WorldDims};
use crate::surface::RenderSurface;

use super::World;

/// Background image stretched over the whole world.
pub(super) struct Background {
    pub(super) source: String,
    pub(super) texture: Option<ImageAsset>,
    pub(super) node: VisualNode,
}

impl Background {
    pub(super) fn new(source: String) -> Self {
        Self { source, texture: None, node: VisualNode::default() }
    }

    fn layout(&mut self, space: &UnitSpace) {
        self.node.position = space.min_units();
        let Some(texture) = &self.texture else {
            return;
        };
        let native = texture.size();
        let dims = space.dimensions();
        if native.x > 0.0 && native.y > 0.0 {
            self.node.scale.x = dims.x / native.x;
            self.node.scale.y = dims.y / native.y;
        }
        self.node.content = NodeContent::Sprite { source: self.source.clone(), native_size: native };
    }
}

impl<S: RenderSurface> World<S> {
    /// Recomputes the unit space and everything derived from it: surface
    /// size, background, axis labels and drawable geometry.
    pub(super) fn relayout(&mut self) {
        let ratio = self.resolver.resolve(self.dims, self.cached_ratio, self.measurement.viewport);
        self.space = UnitSpace::compute(self.dims, ratio, self.max_px, self.config.min_units);
        self.surface.resize(self.space.size_px());

        if let Some(background) = &mut self.background {
            background.layout(&self.space);
        }
        if let Some(axis) = &mut self.axis {
            axis.regenerate(&self.space, &self.config.unit);
        }
        let ctx = DrawCtx { space: &self.space };
        self.graph.resize_all(&ctx);

        log::debug!(
            "relayout: {}x{} units, ratio {}, {} px/unit ({:?}-bound)",
            self.space.width(),
            self.space.height(),
            ratio,
            self.space.px_per_unit(),
            self.space.binding()
        );
    }

    /// Reacts to a host size change and renders.
    ///
    /// Without fixed pixel bounds the new bounds are the narrower of viewport
    /// and container by the viewport height. Safe to call any number of
    /// times, with or without drawables.
    pub fn handle_resize(&mut self, measurement: Measurement) {
        self.measurement = measurement;
        if self.fixed_max_px.is_none() {
            self.max_px = measurement.max_px();
        }
        self.relayout();
        self.render();
    }

    /// Sets the explicit world width in units. Non-positive values unset it.
    pub fn set_w(&mut self, w: f32) {
        self.dims = WorldDims::new(Some(w), self.dims.h);
        self.relayout();
        self.render();
    }

    /// Sets the explicit world height in units. Non-positive values unset it.
    pub fn set_h(&mut self, h: f32) {
        self.dims = WorldDims::new(self.dims.w, Some(h));
        self.relayout();
        self.render();
    }

    /// Shows tick labels along the left and bottom edges. Calling it again
    /// replaces the configuration.
    pub fn create_axis(&mut self, config: AxisConfig) {
        let mut axis = AxisOverlay::new(config);
        axis.regenerate(&self.space, &self.config.unit);
        self.axis = Some(axis);
        self.tree.attach(ZIndex::AXIS, NodeKey::Axis);
        self.render();
    }

    pub fn axis(&self) -> Option<&AxisOverlay> {
        self.axis.as_ref()
    }

    /// Resolved background source, if the world has one.
    pub fn background_source(&self) -> Option<&str> {
        self.background.as_ref().map(|b| b.source.as_str())
    }

    /// Installs the loaded background, records its ratio and relays out.
    pub(super) fn background_loaded(&mut self, asset: ImageAsset) {
        let Some(background) = &mut self.background else {
            return;
        };
        log::debug!("background {} loaded ({}x{})", background.source, asset.width(), asset.height());
        let ratio = asset.ratio();
        background.texture = Some(asset);

        if let Some(ratio) = ratio {
            match self.resolver.persist(&mut *self.store, self.dims, ratio) {
                Ok(true) => self.cached_ratio = Some(ratio),
                Ok(false) => {}
                Err(err) => {
                    log::warn!("could not persist aspect ratio: {err}");
                    self.cached_ratio = Some(ratio);
                }
            }
        }
        self.relayout();
    }
}
