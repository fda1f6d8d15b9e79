use std::collections::VecDeque;

use crate::drawable::{DrawCtx, Drawable, DrawableId, Handle};

/// Ordered drawable membership of one world.
///
/// Members are kept in insertion order, which is also their paint order.
/// Drawables added before the surface is ready wait in a FIFO queue; they
/// can be looked up but are not members yet.
#[derive(Default)]
pub(crate) struct SceneGraph {
    members: Vec<(DrawableId, Box<dyn Drawable>)>,
    queued: VecDeque<(DrawableId, Box<dyn Drawable>)>,
    next_id: u64,
}

impl SceneGraph {
    pub(crate) fn next_id(&mut self) -> DrawableId {
        self.next_id += 1;
        DrawableId::new(self.next_id)
    }

    pub(crate) fn push(&mut self, id: DrawableId, drawable: Box<dyn Drawable>) {
        self.members.push((id, drawable));
    }

    pub(crate) fn enqueue(&mut self, id: DrawableId, drawable: Box<dyn Drawable>) {
        self.queued.push_back((id, drawable));
    }

    pub(crate) fn pop_queued(&mut self) -> Option<(DrawableId, Box<dyn Drawable>)> {
        self.queued.pop_front()
    }

    pub(crate) fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Removes a member or a queued drawable, keeping everyone else's order.
    pub(crate) fn remove(&mut self, id: DrawableId) -> Option<Box<dyn Drawable>> {
        if let Some(i) = self.members.iter().position(|(m, _)| *m == id) {
            return Some(self.members.remove(i).1);
        }
        let i = self.queued.iter().position(|(q, _)| *q == id)?;
        self.queued.remove(i).map(|(_, d)| d)
    }

    pub(crate) fn is_member(&self, id: DrawableId) -> bool {
        self.members.iter().any(|(m, _)| *m == id)
    }

    pub(crate) fn is_queued(&self, id: DrawableId) -> bool {
        self.queued.iter().any(|(q, _)| *q == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    pub(crate) fn ids(&self) -> impl DoubleEndedIterator<Item = DrawableId> + '_ {
        self.members.iter().map(|(id, _)| *id)
    }

    pub(crate) fn get_dyn(&self, id: DrawableId) -> Option<&dyn Drawable> {
        for (m, d) in self.members.iter().chain(self.queued.iter()) {
            if *m == id {
                return Some(&**d);
            }
        }
        None
    }

    pub(crate) fn get_dyn_mut(&mut self, id: DrawableId) -> Option<&mut dyn Drawable> {
        for (m, d) in self.members.iter_mut().chain(self.queued.iter_mut()) {
            if *m == id {
                return Some(&mut **d);
            }
        }
        None
    }

    pub(crate) fn get<T: Drawable>(&self, handle: Handle<T>) -> Option<&T> {
        self.get_dyn(handle.id())?.as_any().downcast_ref::<T>()
    }

    pub(crate) fn get_mut<T: Drawable>(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.get_dyn_mut(handle.id())?.as_any_mut().downcast_mut::<T>()
    }

    /// Draws every member in insertion order.
    pub(crate) fn draw_all(&mut self, ctx: &DrawCtx<'_>) {
        for (_, d) in &mut self.members {
            d.draw(ctx);
        }
    }

    /// Relays out every member, queued ones included.
    pub(crate) fn resize_all(&mut self, ctx: &DrawCtx<'_>) {
        for (_, d) in self.members.iter_mut().chain(self.queued.iter_mut()) {
            d.on_resize(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::drawable::{Circle, CircleParams, Line, LineParams};

    fn circle(x: f32) -> Box<dyn Drawable> {
        Box::new(Circle::new(CircleParams { x, ..CircleParams::default() }))
    }

    #[test]
    fn remove_keeps_order_of_others() {
        let mut g = SceneGraph::default();
        let ids: Vec<_> = (0..4).map(|_| g.next_id()).collect();
        for (i, id) in ids.iter().enumerate() {
            g.push(*id, circle(i as f32));
        }
        assert!(g.remove(ids[1]).is_some());
        assert_eq!(g.ids().collect::<Vec<_>>(), vec![ids[0], ids[2], ids[3]]);
        assert!(g.remove(ids[1]).is_none());
    }

    #[test]
    fn typed_lookup_checks_the_variant() {
        let mut g = SceneGraph::default();
        let id = g.next_id();
        g.push(id, circle(3.0));
        assert_eq!(g.get(Handle::<Circle>::new(id)).map(|c| c.state().x), Some(3.0));
        assert!(g.get(Handle::<Line>::new(id)).is_none());
    }

    #[test]
    fn queued_drawables_are_found_but_not_members() {
        let mut g = SceneGraph::default();
        let id = g.next_id();
        g.enqueue(id, Box::new(Line::new(LineParams::new(Vec2::zero(), Vec2::new(1.0, 1.0)))));
        assert!(!g.is_member(id));
        assert!(g.is_queued(id));
        assert!(g.get(Handle::<Line>::new(id)).is_some());
        let (popped, _) = g.pop_queued().unwrap();
        assert_eq!(popped, id);
        assert_eq!(g.queued_len(), 0);
    }
}
