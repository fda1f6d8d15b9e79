//! simhelpers: unit-space worlds for small physics demos.
//!
//! A [`World`](world::World) maps an abstract unit space (arbitrary origin,
//! aspect ratio and scale, +Y up) onto the pixels of a render surface, keeps
//! that mapping consistent across resizes and background-image aspect
//! discovery, and redraws its actors, lines and circles every frame.
//!
//! Rendering, image decoding and persistence are collaborators behind
//! traits (`surface`, `asset`, `store`); in-memory versions ship for tests
//! and headless runs.

pub mod asset;
pub mod axis;
pub mod coords;
pub mod drawable;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod space;
pub mod store;
pub mod surface;
pub mod time;
pub mod world;

mod error;

pub use error::SimError;
