use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroked segment in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke width in pixels.
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn length(&self) -> f32 {
        (self.to - self.from).length()
    }
}

impl DrawList {
    /// Records a stroked segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, width, color }));
    }
}
