//! Host input events.
//!
//! The public event types carry no winit types. `platform::winit` translates
//! window events into [`HostEvent`]s; `World::handle_event` consumes them.

pub mod platform;

mod state;
mod types;

pub use state::PointerState;
pub use types::{ButtonState, HostEvent, Measurement, MouseButton, PointerButtonEvent, PointerMoveEvent};
