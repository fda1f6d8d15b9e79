//! Unit-space math: world dimensions, pixel scaling and aspect-ratio resolution.

mod aspect;
mod unit_space;

pub use aspect::{AspectResolver, DEFAULT_NAMESPACE};
pub use unit_space::{Binding, UnitSpace, WorldDims};
