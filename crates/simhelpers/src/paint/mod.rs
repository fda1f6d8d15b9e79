//! Color model shared by drawables, the axis overlay and render surfaces.

mod color;

pub use color::Color;
