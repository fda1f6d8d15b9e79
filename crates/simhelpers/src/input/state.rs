use std::collections::HashSet;

use super::types::{ButtonState, HostEvent, MouseButton, PointerButtonEvent, PointerMoveEvent};

/// Pointer state tracked across host events.
///
/// Platform adapters use it to stamp button events with the last cursor
/// position, since window systems report presses without coordinates.
#[derive(Debug, Default)]
pub struct PointerState {
    /// Pointer position in logical pixels.
    pub position: Option<(f32, f32)>,
    pub buttons_down: HashSet<MouseButton>,
}

impl PointerState {
    pub fn apply(&mut self, event: &HostEvent) {
        match event {
            HostEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.position = Some((*x, *y));
            }
            HostEvent::PointerLeft => {
                self.position = None;
            }
            HostEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.position = Some((*x, *y));
                match state {
                    ButtonState::Pressed => {
                        self.buttons_down.insert(*button);
                    }
                    ButtonState::Released => {
                        self.buttons_down.remove(button);
                    }
                }
            }
            HostEvent::Resized(_) => {}
        }
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}
