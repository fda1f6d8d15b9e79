use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one rendered frame.
///
/// The world rebuilds it from the scene tree on every render and hands it to
/// the [`RenderSurface`](crate::surface::RenderSurface).
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command on layer `z`.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn paint_order_sorts_layers_then_insertion() {
        let mut list = DrawList::new();
        let white = Color::from_rgb_u32(0xffffff);
        list.push_circle(ZIndex::DRAWABLES, Vec2::new(1.0, 1.0), 1.0, white);
        list.push_circle(ZIndex::BACKGROUND, Vec2::new(2.0, 2.0), 1.0, white);
        list.push_circle(ZIndex::DRAWABLES, Vec2::new(3.0, 3.0), 1.0, white);

        let centers: Vec<f32> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Circle(c) => c.center.x,
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        assert_eq!(centers, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn clear_resets_insertion_counter() {
        let mut list = DrawList::new();
        list.push_circle(ZIndex::AXIS, Vec2::zero(), 1.0, Color::transparent());
        list.clear();
        assert!(list.is_empty());
        list.push_circle(ZIndex::AXIS, Vec2::zero(), 1.0, Color::transparent());
        assert_eq!(list.items()[0].key.order, 0);
    }
}
