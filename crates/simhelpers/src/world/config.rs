use crate::coords::{Vec2, Viewport};
use crate::paint::Color;
use crate::space::DEFAULT_NAMESPACE;

/// World construction parameters.
///
/// Unset or unusable dimensions are derived: a single explicit axis derives
/// the other from the aspect ratio, none at all spans the pixel bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    /// Appended to every axis label, e.g. `"m"`.
    pub unit: String,
    pub w: Option<f32>,
    pub h: Option<f32>,
    /// Unit-space coordinate of the bottom-left corner.
    pub min_units: Vec2,
    /// Fixed pixel bounds. When set, host resizes no longer change them.
    pub max_px: Option<Viewport>,
    /// Background image identifier, stretched over the whole world.
    pub background_img: Option<String>,
    pub background_color: Color,
    /// Prefix of the persisted aspect-ratio key.
    pub namespace: String,
    pub antialias: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            unit: String::new(),
            w: None,
            h: None,
            min_units: Vec2::zero(),
            max_px: None,
            background_img: None,
            background_color: Color::from_srgb_u8(0x11, 0x11, 0x11, 0xff),
            namespace: DEFAULT_NAMESPACE.to_string(),
            antialias: true,
        }
    }
}

impl WorldConfig {
    /// Background color from a CSS string; unparsable input keeps the
    /// current color.
    pub fn with_background_color(mut self, css: &str) -> Self {
        match Color::parse(css) {
            Some(color) => self.background_color = color,
            None => log::warn!("ignoring unparsable background color {css:?}"),
        }
        self
    }
}
