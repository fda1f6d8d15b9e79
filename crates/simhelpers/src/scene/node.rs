use crate::coords::{Transform, Vec2};
use crate::paint::Color;

use super::{DrawList, ZIndex};

/// Retained visual of one scene-tree entry, expressed in unit space.
///
/// The node's local transform is
/// `translate(position) * rotate(rotation) * scale(scale) * translate(-pivot)`;
/// the world's container transform then carries it to pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    /// Pivot in node-local coordinates (before `scale`).
    pub pivot: Vec2,
    pub alpha: f32,
    pub content: NodeContent,
}

/// What a node paints.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NodeContent {
    /// Nothing yet (e.g. an image that has not finished loading).
    #[default]
    Empty,
    /// Image whose local space is its native pixel grid, +Y up.
    Sprite { source: String, native_size: Vec2 },
    /// Vector geometry in local units.
    Graphics(Vec<Primitive>),
    /// Text labels in local units.
    Labels(Vec<Label>),
}

/// Vector primitive in node-local units.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Segment whose stroke width is already in pixels.
    Stroke { from: Vec2, to: Vec2, width_px: f32, color: Color },
    Disc { center: Vec2, radius: f32, color: Color },
}

/// Text anchored at a unit-space point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Vec2,
    pub anchor: Vec2,
    /// Font size in units.
    pub font_size: f32,
    pub color: Color,
}

impl Default for VisualNode {
    fn default() -> Self {
        Self {
            position: Vec2::zero(),
            rotation: 0.0,
            scale: Vec2::splat(1.0),
            pivot: Vec2::zero(),
            alpha: 1.0,
            content: NodeContent::Empty,
        }
    }
}

impl VisualNode {
    pub fn local_transform(&self) -> Transform {
        Transform::translate(self.position)
            * Transform::rotate(self.rotation)
            * Transform::scale(self.scale.x, self.scale.y)
            * Transform::translate(-self.pivot)
    }

    /// Records this node's content into `list`, mapped through `container`
    /// (unit space → pixels) at `px_per_unit`.
    pub fn emit(&self, z: ZIndex, container: Transform, px_per_unit: f32, list: &mut DrawList) {
        let to_px = container * self.local_transform();
        match &self.content {
            NodeContent::Empty => {}
            NodeContent::Sprite { source, native_size } => {
                // Image rows grow downwards; the node's local space grows upwards.
                let flip = Transform { a: 1.0, b: 0.0, c: 0.0, d: -1.0, e: 0.0, f: native_size.y };
                list.push_sprite(z, source.as_str(), *native_size, to_px * flip, self.alpha);
            }
            NodeContent::Graphics(primitives) => {
                for p in primitives {
                    match p {
                        Primitive::Stroke { from, to, width_px, color } => list.push_line(
                            z,
                            to_px.apply(*from),
                            to_px.apply(*to),
                            *width_px,
                            color.with_alpha(self.alpha),
                        ),
                        Primitive::Disc { center, radius, color } => list.push_circle(
                            z,
                            to_px.apply(*center),
                            radius * px_per_unit * self.scale.x.abs(),
                            color.with_alpha(self.alpha),
                        ),
                    }
                }
            }
            NodeContent::Labels(labels) => {
                for l in labels {
                    list.push_text(
                        z,
                        l.text.as_str(),
                        l.font_size * px_per_unit,
                        l.color.with_alpha(self.alpha),
                        to_px.apply(l.position),
                        l.anchor,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    #[test]
    fn pivot_is_subtracted_before_rotation() {
        let node = VisualNode {
            position: Vec2::new(10.0, 0.0),
            rotation: core::f32::consts::PI,
            pivot: Vec2::new(1.0, 0.0),
            ..VisualNode::default()
        };
        let p = node.local_transform().apply(Vec2::new(1.0, 0.0));
        assert!((p.x - 10.0).abs() < 1e-5 && p.y.abs() < 1e-5);
    }

    #[test]
    fn sprite_flip_keeps_top_row_on_top() {
        let node = VisualNode {
            content: NodeContent::Sprite { source: "a.png".into(), native_size: Vec2::new(4.0, 2.0) },
            ..VisualNode::default()
        };
        // Unit space with y up, mapped onto a 10 px high surface.
        let container = Transform::translate(Vec2::new(0.0, 10.0)) * Transform::scale(1.0, -1.0);
        let mut list = DrawList::new();
        node.emit(ZIndex::DRAWABLES, container, 1.0, &mut list);

        let DrawCmd::Sprite(s) = &list.items()[0].cmd else { panic!("expected sprite") };
        // Image row 0 sits at local y = 2, i.e. 8 px from the top.
        assert_eq!(s.transform.apply(Vec2::zero()), Vec2::new(0.0, 8.0));
        assert_eq!(s.transform.apply(Vec2::new(0.0, 2.0)), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn empty_node_records_nothing() {
        let mut list = DrawList::new();
        VisualNode::default().emit(ZIndex::DRAWABLES, Transform::IDENTITY, 1.0, &mut list);
        assert!(list.is_empty());
    }
}
