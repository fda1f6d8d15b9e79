use crate::drawable::DrawableId;

use super::{SortKey, ZIndex};

/// Identity of a node attached to the scene tree.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NodeKey {
    Background,
    Axis,
    Drawable(DrawableId),
}

/// Layered membership of visual nodes.
///
/// The tree only records which nodes are attached and in which order; the
/// nodes themselves live with their owners (world background, axis overlay,
/// drawables). Entries are kept sorted in paint order.
#[derive(Debug, Default)]
pub struct SceneTree {
    entries: Vec<(SortKey, NodeKey)>,
    next_order: u32,
}

impl SceneTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `key` on layer `z`, on top of that layer's existing nodes.
    ///
    /// Returns `false` if the node is already attached.
    pub fn attach(&mut self, z: ZIndex, key: NodeKey) -> bool {
        if self.contains(key) {
            return false;
        }
        let sort = SortKey::new(z, self.next_order);
        self.next_order = self.next_order.wrapping_add(1);
        let at = self.entries.partition_point(|(k, _)| *k < sort);
        self.entries.insert(at, (sort, key));
        true
    }

    /// Detaches `key`; returns `false` if it was not attached.
    pub fn detach(&mut self, key: NodeKey) -> bool {
        match self.entries.iter().position(|(_, k)| *k == key) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.entries.iter().any(|(_, k)| *k == key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attached nodes back-to-front, with their layer.
    pub fn iter(&self) -> impl Iterator<Item = (ZIndex, NodeKey)> + '_ {
        self.entries.iter().map(|(k, n)| (k.z, *n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(n: u64) -> NodeKey {
        NodeKey::Drawable(DrawableId::new(n))
    }

    #[test]
    fn lower_layers_paint_first_regardless_of_attach_order() {
        let mut tree = SceneTree::new();
        tree.attach(ZIndex::DRAWABLES, d(1));
        tree.attach(ZIndex::AXIS, NodeKey::Axis);
        tree.attach(ZIndex::BACKGROUND, NodeKey::Background);
        tree.attach(ZIndex::DRAWABLES, d(2));

        let order: Vec<NodeKey> = tree.iter().map(|(_, k)| k).collect();
        assert_eq!(order, vec![NodeKey::Background, NodeKey::Axis, d(1), d(2)]);
    }

    #[test]
    fn detach_keeps_remaining_order() {
        let mut tree = SceneTree::new();
        for n in 1..=3 {
            tree.attach(ZIndex::DRAWABLES, d(n));
        }
        assert!(tree.detach(d(2)));
        assert!(!tree.detach(d(2)));
        let order: Vec<NodeKey> = tree.iter().map(|(_, k)| k).collect();
        assert_eq!(order, vec![d(1), d(3)]);
    }

    #[test]
    fn attach_twice_is_rejected() {
        let mut tree = SceneTree::new();
        assert!(tree.attach(ZIndex::AXIS, NodeKey::Axis));
        assert!(!tree.attach(ZIndex::AXIS, NodeKey::Axis));
        assert_eq!(tree.len(), 1);
    }
}
