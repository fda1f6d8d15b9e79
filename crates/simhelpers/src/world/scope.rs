use core::ops::{Deref, DerefMut};

use crate::drawable::{Actor, ActorParams, Circle, CircleParams, Handle, Line, LineParams};
use crate::surface::RenderSurface;

use super::World;

/// A world made implicit for a block of construction code.
///
/// Derefs to the world, so every world operation stays available.
pub struct WorldScope<'w, S: RenderSurface> {
    world: &'w mut World<S>,
}

impl<S: RenderSurface> WorldScope<'_, S> {
    pub fn actor(&mut self, params: ActorParams) -> Handle<Actor> {
        Actor::spawn(&mut *self.world, params)
    }

    pub fn line(&mut self, params: LineParams) -> Handle<Line> {
        Line::spawn(&mut *self.world, params)
    }

    pub fn circle(&mut self, params: CircleParams) -> Handle<Circle> {
        Circle::spawn(&mut *self.world, params)
    }
}

impl<S: RenderSurface> Deref for WorldScope<'_, S> {
    type Target = World<S>;

    fn deref(&self) -> &World<S> {
        &*self.world
    }
}

impl<S: RenderSurface> DerefMut for WorldScope<'_, S> {
    fn deref_mut(&mut self) -> &mut World<S> {
        &mut *self.world
    }
}

impl<S: RenderSurface> World<S> {
    /// Runs `f` with this world as the target of drawable constructors.
    pub fn scope<R>(&mut self, f: impl FnOnce(&mut WorldScope<'_, S>) -> R) -> R {
        f(&mut WorldScope { world: self })
    }
}
