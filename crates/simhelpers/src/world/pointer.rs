use crate::coords::Vec2;
use crate::drawable::{Drawable, DrawableId, Handle};
use crate::error::SimError;
use crate::input::{HostEvent, PointerButtonEvent};
use crate::surface::RenderSurface;

use super::World;

/// A click that reached a handler.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClickEvent {
    pub target: DrawableId,
    /// Click position in unit space.
    pub unit: Vec2,
    /// Click position in surface pixels.
    pub px: Vec2,
}

pub type ClickHandler<S> = Box<dyn FnMut(&mut World<S>, ClickEvent)>;

impl<S: RenderSurface> World<S> {
    /// Registers the click handler of a drawable, replacing any previous one.
    pub fn on_click<T: Drawable>(
        &mut self,
        handle: Handle<T>,
        handler: impl FnMut(&mut World<S>, ClickEvent) + 'static,
    ) -> Result<(), SimError> {
        let id = handle.id();
        if !(self.graph.is_member(id) || self.graph.is_queued(id)) {
            return Err(SimError::NotInScene(id));
        }
        self.handlers.insert(id, Box::new(handler));
        Ok(())
    }

    /// Routes a pointer press to the topmost drawable with a click handler
    /// whose bounds contain it. The handler fires only if the drawable's own
    /// hit test passes (opaque pixel, stroke, disc).
    ///
    /// Returns the drawable whose handler ran.
    pub fn dispatch_pointer(&mut self, event: &PointerButtonEvent) -> Option<DrawableId> {
        if !event.is_click() {
            return None;
        }
        let px = event.position();
        let unit = self.space.px_to_unit(px);
        let (id, local) = self.pick(unit)?;

        let hit = self.graph.get_dyn(id).is_some_and(|d| d.hit_test(local));
        if !hit {
            log::debug!("click at {unit:?} missed drawable {id}");
            return None;
        }

        let mut handler = self.handlers.remove(&id)?;
        handler(self, ClickEvent { target: id, unit, px });
        // The handler may have removed its drawable or installed a new handler.
        if self.graph.is_member(id) {
            self.handlers.entry(id).or_insert(handler);
        }
        Some(id)
    }

    /// Applies a host event. Returns the drawable whose click handler ran.
    pub fn handle_event(&mut self, event: &HostEvent) -> Option<DrawableId> {
        match event {
            HostEvent::Resized(measurement) => {
                self.handle_resize(*measurement);
                None
            }
            HostEvent::PointerButton(button) => self.dispatch_pointer(button),
            HostEvent::PointerMoved(_) | HostEvent::PointerLeft => None,
        }
    }

    fn pick(&self, unit: Vec2) -> Option<(DrawableId, Vec2)> {
        self.graph
            .ids()
            .rev()
            .filter(|id| self.handlers.contains_key(id))
            .find_map(|id| {
                let drawable = self.graph.get_dyn(id)?;
                let local = drawable.state().node().local_transform().inverse()?.apply(unit);
                drawable.local_bounds().contains(local).then_some((id, local))
            })
    }
}
