use crate::coords::Viewport;
use crate::scene::{DrawItem, DrawList};

use super::{ReadyNotifier, RenderSurface, SurfaceConfig};

/// Surface that remembers the last presented frame instead of drawing it.
///
/// Used by tests and the headless demo. Readiness is immediate by default;
/// [`deferred`](Self::deferred) holds it back until
/// [`finish_init`](Self::finish_init).
#[derive(Debug, Default)]
pub struct RecordingSurface {
    config: Option<SurfaceConfig>,
    size: Viewport,
    frames: u64,
    last: Vec<DrawItem>,
    deferred: bool,
    pending: Option<ReadyNotifier>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose initialization completes only on `finish_init`.
    pub fn deferred() -> Self {
        Self { deferred: true, ..Self::default() }
    }

    /// Completes a deferred initialization. Returns `false` if there was
    /// nothing pending.
    pub fn finish_init(&mut self) -> bool {
        match self.pending.take() {
            Some(ready) => {
                ready.notify();
                true
            }
            None => false,
        }
    }

    pub fn config(&self) -> Option<&SurfaceConfig> {
        self.config.as_ref()
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Items of the last presented frame, in paint order.
    pub fn last_frame(&self) -> &[DrawItem] {
        &self.last
    }
}

impl RenderSurface for RecordingSurface {
    fn initialize(&mut self, config: &SurfaceConfig, ready: ReadyNotifier) {
        self.config = Some(*config);
        if self.deferred {
            self.pending = Some(ready);
        } else {
            ready.notify();
        }
    }

    fn resize(&mut self, size: Viewport) {
        self.size = size;
    }

    fn size(&self) -> Viewport {
        self.size
    }

    fn present(&mut self, list: &mut DrawList) {
        self.last = list.iter_in_paint_order().cloned().collect();
        self.frames += 1;
    }
}
