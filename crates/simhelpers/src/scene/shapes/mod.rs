pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod sprite;
pub(crate) mod text;

pub use circle::CircleCmd;
pub use line::LineCmd;
pub use sprite::SpriteCmd;
pub use text::TextCmd;
