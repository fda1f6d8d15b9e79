/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates an opaque color from a `0xRRGGBB` literal, the form shape colors
    /// are usually written in.
    #[inline]
    pub fn from_rgb_u32(rgb: u32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        Self::from_srgb_u8(r, g, b, 255)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Scales the color's opacity by `alpha` (clamped to `[0, 1]`).
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let k = alpha.clamp(0.0, 1.0);
        Self { r: self.r * k, g: self.g * k, b: self.b * k, a: self.a * k }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Parses a CSS-style color: `#rgb`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)` with `a` in `[0, 1]`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(body) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<&str> = body.split(',').map(str::trim).collect();
            let [r, g, b, a] = parts.as_slice() else { return None };
            let a: f32 = a.parse().ok()?;
            return Some(Self::from_straight(
                channel(r)? as f32 / 255.0,
                channel(g)? as f32 / 255.0,
                channel(b)? as f32 / 255.0,
                a,
            ));
        }
        if let Some(body) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<&str> = body.split(',').map(str::trim).collect();
            let [r, g, b] = parts.as_slice() else { return None };
            return Some(Self::from_srgb_u8(channel(r)?, channel(g)?, channel(b)?, 255));
        }
        None
    }
}

fn channel(s: &str) -> Option<u8> {
    s.parse().ok()
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::from_srgb_u8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
        6 => Some(Color::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(Color::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_expands_nibbles() {
        assert_eq!(Color::parse("#111"), Some(Color::from_srgb_u8(0x11, 0x11, 0x11, 255)));
    }

    #[test]
    fn long_hex_with_alpha() {
        let c = Color::parse("#ff000080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
        assert!((c.r - c.a).abs() < 1e-6);
    }

    #[test]
    fn rgb_and_rgba_functions() {
        assert_eq!(Color::parse("rgb(255, 255, 255)"), Some(Color::from_srgb_u8(255, 255, 255, 255)));
        let c = Color::parse("rgba(0, 0, 255, 0.5)").unwrap();
        assert_eq!((c.r, c.g, c.a), (0.0, 0.0, 0.5));
        assert!((c.b - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(Color::parse("#12"), None);
        assert_eq!(Color::parse("#zzz"), None);
        assert_eq!(Color::parse("rgb(1, 2)"), None);
        assert_eq!(Color::parse("red"), None);
    }

    #[test]
    fn rgb_u32_matches_hex_string() {
        assert_eq!(Color::from_rgb_u32(0x112233), Color::parse("#112233").unwrap());
    }

    #[test]
    fn with_alpha_keeps_premultiplication() {
        let c = Color::from_rgb_u32(0xffffff).with_alpha(0.25);
        assert_eq!(c, Color::from_straight(1.0, 1.0, 1.0, 0.25));
    }
}
