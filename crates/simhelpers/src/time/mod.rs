//! Frame timing for world tickers.
//!
//! `World::tick` samples a [`FrameClock`]; `World::advance` bypasses it with
//! an explicit delta.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
