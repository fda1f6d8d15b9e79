//! Render surface collaborator.
//!
//! The world never paints pixels itself. It keeps the scene tree in unit
//! space, flattens it into a pixel-space [`DrawList`] and hands that to a
//! [`RenderSurface`]. Surfaces may finish initializing asynchronously and say
//! so through the [`ReadyNotifier`] they receive.

mod ready;
mod recording;

pub use ready::{ready_channel, ReadyNotifier, ReadySignal};
pub use recording::RecordingSurface;

use crate::coords::Viewport;
use crate::paint::Color;
use crate::scene::DrawList;

/// Creation parameters for a surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceConfig {
    pub background: Color,
    pub antialias: bool,
}

/// Something that can show a frame.
pub trait RenderSurface {
    /// Called once by the world right after construction. The surface must
    /// call `ready.notify()` when scene mutation may begin, now or later.
    fn initialize(&mut self, config: &SurfaceConfig, ready: ReadyNotifier);

    /// Sets the drawable pixel size.
    fn resize(&mut self, size: Viewport);

    fn size(&self) -> Viewport;

    /// Shows one frame. Items are consumed in paint order.
    fn present(&mut self, list: &mut DrawList);
}
