use crate::coords::{Vec2, Viewport};

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl MouseButton {
    /// The button that triggers click handlers.
    #[inline]
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Pointer move in surface pixels (logical, y down).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button change at a surface pixel (logical, y down).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: ButtonState,
    pub x: f32,
    pub y: f32,
}

impl PointerButtonEvent {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Primary button going down.
    #[inline]
    pub fn is_click(&self) -> bool {
        self.button.is_primary() && self.state == ButtonState::Pressed
    }
}

/// Host layout measurement feeding the resize controller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Measurement {
    /// Visible viewport in logical pixels.
    pub viewport: Viewport,
    /// Width of the element hosting the surface, when the host knows it.
    pub container_width: Option<f32>,
}

impl Measurement {
    #[inline]
    pub const fn viewport(viewport: Viewport) -> Self {
        Self { viewport, container_width: None }
    }

    /// Pixel bounds available to the world: the narrower of viewport and
    /// container, by the viewport height.
    pub fn max_px(&self) -> Viewport {
        let w = match self.container_width {
            Some(c) if c.is_finite() && c >= 0.0 => self.viewport.width.min(c),
            _ => self.viewport.width,
        };
        Viewport::new(w, self.viewport.height)
    }
}

/// Events a host forwards to a world.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Resized(Measurement),
    PointerMoved(PointerMoveEvent),
    PointerLeft,
    PointerButton(PointerButtonEvent),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_narrows_the_bounds() {
        let m = Measurement { viewport: Viewport::new(1200.0, 800.0), container_width: Some(900.0) };
        assert_eq!(m.max_px(), Viewport::new(900.0, 800.0));
    }

    #[test]
    fn wider_container_is_capped_by_viewport() {
        let m = Measurement { viewport: Viewport::new(600.0, 800.0), container_width: Some(900.0) };
        assert_eq!(m.max_px(), Viewport::new(600.0, 800.0));
        assert_eq!(Measurement::viewport(Viewport::new(5.0, 6.0)).max_px(), Viewport::new(5.0, 6.0));
    }

    #[test]
    fn only_primary_press_is_a_click() {
        let ev = |button, state| PointerButtonEvent { button, state, x: 0.0, y: 0.0 };
        assert!(ev(MouseButton::Left, ButtonState::Pressed).is_click());
        assert!(!ev(MouseButton::Left, ButtonState::Released).is_click());
        assert!(!ev(MouseButton::Right, ButtonState::Pressed).is_click());
    }
}
