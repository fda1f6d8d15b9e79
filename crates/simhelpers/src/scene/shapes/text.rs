use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font size in pixels.
    pub size: f32,
    pub color: Color,
    /// Anchor point in pixels.
    pub origin: Vec2,
    /// Normalized point of the text box placed at `origin`
    /// (`(0.5, 1.0)` centers the text above the origin).
    pub anchor: Vec2,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        size: f32,
        color: Color,
        origin: Vec2,
        anchor: Vec2,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            size,
            color,
            origin,
            anchor,
        }));
    }
}
