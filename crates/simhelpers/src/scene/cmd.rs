use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::sprite::SpriteCmd;
use crate::scene::shapes::text::TextCmd;

/// Surface-agnostic draw command, already in pixel space.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - emit it from a `NodeContent` variant in `scene::node`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Sprite(SpriteCmd),
    Line(LineCmd),
    Circle(CircleCmd),
    Text(TextCmd),
}
