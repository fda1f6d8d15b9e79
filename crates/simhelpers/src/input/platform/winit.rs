use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};

use crate::coords::Viewport;
use crate::input::{
    ButtonState, HostEvent, Measurement, MouseButton, PointerButtonEvent, PointerMoveEvent, PointerState,
};

/// Translates a winit `WindowEvent` into a [`HostEvent`].
///
/// `scale_factor` converts physical pixels to logical ones. Button presses are
/// stamped with the position tracked in `pointer`. Returns `None` for events
/// worlds do not consume (keyboard included).
pub fn translate_window_event(
    event: &WindowEvent,
    scale_factor: f64,
    pointer: &PointerState,
) -> Option<HostEvent> {
    match event {
        WindowEvent::Resized(size) => {
            Some(HostEvent::Resized(Measurement::viewport(to_logical_size(*size, scale_factor))))
        }

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_position(*position, scale_factor);
            Some(HostEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::CursorLeft { .. } => Some(HostEvent::PointerLeft),

        WindowEvent::MouseInput { state, button, .. } => {
            // winit reports presses without coordinates.
            let (x, y) = pointer.position?;
            let state = match state {
                ElementState::Pressed => ButtonState::Pressed,
                ElementState::Released => ButtonState::Released,
            };
            Some(HostEvent::PointerButton(PointerButtonEvent { button: map_mouse_button(*button), state, x, y }))
        }

        _ => None,
    }
}

fn to_logical_size(size: PhysicalSize<u32>, scale: f64) -> Viewport {
    let logical = size.to_logical::<f64>(scale);
    Viewport::new(logical.width as f32, logical.height as f32)
}

fn to_logical_position(pos: PhysicalPosition<f64>, scale: f64) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale);
    (logical.x as f32, logical.y as f32)
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_is_reported_in_logical_pixels() {
        let ev = WindowEvent::Resized(PhysicalSize::new(1600, 900));
        let out = translate_window_event(&ev, 2.0, &PointerState::default());
        assert_eq!(out, Some(HostEvent::Resized(Measurement::viewport(Viewport::new(800.0, 450.0)))));
    }

    #[test]
    fn unrelated_events_are_dropped() {
        let ev = WindowEvent::Focused(true);
        assert_eq!(translate_window_event(&ev, 1.0, &PointerState::default()), None);
    }

    #[test]
    fn buttons_map_one_to_one() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(7)), MouseButton::Other(7));
    }
}
