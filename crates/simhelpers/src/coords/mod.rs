//! Geometry types shared by the unit space, the scene tree and the draw list.
//!
//! Two spaces are in play:
//! - unit space: origin bottom-left of the world, +X right, +Y up
//! - pixel space: origin top-left of the surface, +X right, +Y down
//!
//! [`Transform`] carries values from one to the other.

mod rect;
mod transform;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
pub use viewport::Viewport;
