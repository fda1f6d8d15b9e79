use crate::coords::{Transform, Vec2};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Image draw payload.
///
/// `transform` maps image pixels (origin top-left, +Y down, extent
/// `native_size`) onto surface pixels, rotation and anchoring included.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCmd {
    /// Resolved image URL; surfaces look textures up by it.
    pub source: String,
    pub native_size: Vec2,
    pub transform: Transform,
    pub alpha: f32,
}

impl DrawList {
    /// Records an image draw.
    #[inline]
    pub fn push_sprite(
        &mut self,
        z: ZIndex,
        source: impl Into<String>,
        native_size: Vec2,
        transform: Transform,
        alpha: f32,
    ) {
        self.push(z, DrawCmd::Sprite(SpriteCmd {
            source: source.into(),
            native_size,
            transform,
            alpha,
        }));
    }
}
