use core::cmp::Ordering;

/// Paint layer of a scene-tree node or draw item.
///
/// Higher values appear on top of lower values. The world uses three fixed
/// layers; within a layer, insertion order decides.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Background image, stretched over the whole world.
    pub const BACKGROUND: ZIndex = ZIndex(0);
    /// Axis labels.
    pub const AXIS: ZIndex = ZIndex(1);
    /// Actors, lines and circles.
    pub const DRAWABLES: ZIndex = ZIndex(2);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Stable paint-order key.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.z.cmp(&other.z).then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_beats_insertion_order() {
        let early_top = SortKey::new(ZIndex::DRAWABLES, 0);
        let late_bottom = SortKey::new(ZIndex::BACKGROUND, 9);
        assert!(late_bottom < early_top);
    }

    #[test]
    fn insertion_order_breaks_ties() {
        assert!(SortKey::new(ZIndex::AXIS, 1) < SortKey::new(ZIndex::AXIS, 2));
    }
}
