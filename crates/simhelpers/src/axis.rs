//! Axis labels along the left and bottom edges of a world.
//!
//! The overlay is rebuilt from scratch on every resize; there is no diffing.

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Label, NodeContent, VisualNode};
use crate::space::UnitSpace;

/// Minimum distance between a label and the world edge, in steps.
const EDGE_EPSILON: f32 = 0.1;

/// Gap between y labels and the left edge, in pixels.
const Y_LABEL_OFFSET_PX: f32 = 8.0;

/// Gap between x labels and the bottom edge, in pixels.
const X_LABEL_OFFSET_PX: f32 = 2.0;

/// Upper bound on labels per axis.
const MAX_LABELS_PER_AXIS: usize = 1000;

/// Upper bound on label precision.
const MAX_LABEL_DECIMALS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    /// Label spacing in units. `None` derives a power of ten from the world width.
    pub step: Option<f32>,
    pub color: Color,
    /// Only label the x axis.
    pub only_x: bool,
    /// Only label the y axis.
    pub only_y: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            step: None,
            color: Color::from_rgb_u32(0x444444),
            only_x: false,
            only_y: false,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
}

/// One generated tick label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub axis: Axis,
    pub value: f32,
    pub text: String,
}

/// Tick-label overlay bound to a world.
#[derive(Debug)]
pub struct AxisOverlay {
    config: AxisConfig,
    labels: Vec<AxisLabel>,
    node: VisualNode,
}

impl AxisOverlay {
    pub fn new(config: AxisConfig) -> Self {
        Self { config, labels: Vec::new(), node: VisualNode::default() }
    }

    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    pub fn labels(&self) -> &[AxisLabel] {
        &self.labels
    }

    pub(crate) fn node(&self) -> &VisualNode {
        &self.node
    }

    /// Step in use for `space`.
    pub fn step_for(&self, space: &UnitSpace) -> f32 {
        self.config
            .step
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or_else(|| default_step(space.width()))
    }

    /// Discards all labels and rebuilds them for `space`. `unit` is appended
    /// to every label text.
    pub fn regenerate(&mut self, space: &UnitSpace, unit: &str) {
        self.labels.clear();

        let step = self.step_for(space);
        let ppu = space.px_per_unit();
        let min = space.min_units();
        let dims = space.dimensions();
        let font_size = dims.x / 40.0;
        let (off_x, off_y) = if ppu > 0.0 {
            (Y_LABEL_OFFSET_PX / ppu, X_LABEL_OFFSET_PX / ppu)
        } else {
            (0.0, 0.0)
        };

        let mut nodes = Vec::new();
        let mut add = |axis: Axis, value: f32, labels: &mut Vec<AxisLabel>| {
            let text = format_label(value, step, unit);
            let (position, anchor) = match axis {
                Axis::X => (Vec2::new(value, min.y + off_y), Vec2::new(0.5, 1.0)),
                Axis::Y => (Vec2::new(min.x + off_x, value), Vec2::new(0.0, 0.5)),
            };
            nodes.push(Label { text: text.clone(), position, anchor, font_size, color: self.config.color });
            labels.push(AxisLabel { axis, value, text });
        };

        if !self.config.only_x {
            for v in tick_values(min.y, dims.y, step) {
                add(Axis::Y, v, &mut self.labels);
            }
        }
        if !self.config.only_y {
            for v in tick_values(min.x, dims.x, step) {
                add(Axis::X, v, &mut self.labels);
            }
        }

        self.node.content = NodeContent::Labels(nodes);
        log::debug!("axis regenerated: {} labels, step {step}", self.labels.len());
    }
}

/// Power of ten below `ceil(width) - 1` (e.g. 10 for a 100 unit world).
///
/// Worlds narrower than two units use the power of ten below the width itself.
pub fn default_step(width: f32) -> f32 {
    let base = width.ceil() - 1.0;
    let base = if base > 0.0 { base } else { width };
    if !(base.is_finite() && base > 0.0) {
        return 1.0;
    }
    10f32.powf(base.log10().floor())
}

/// Multiples of `step` strictly inside `(min, min + extent)`, keeping
/// `0.1 * step` away from both ends.
pub fn tick_values(min: f32, extent: f32, step: f32) -> Vec<f32> {
    if !(step.is_finite() && step > 0.0 && min.is_finite() && extent.is_finite()) {
        return Vec::new();
    }
    let first = (min + EDGE_EPSILON * step) / step;
    let first = first.ceil();
    let end = min + extent - EDGE_EPSILON * step;

    let mut out = Vec::new();
    for k in 0..MAX_LABELS_PER_AXIS {
        let v = (first + k as f32) * step;
        if v >= end {
            return out;
        }
        out.push(v);
    }
    log::warn!("axis step {step} too small for extent {extent}; labels truncated");
    out
}

fn format_label(value: f32, step: f32, unit: &str) -> String {
    let decimals = step_decimals(step);
    // No "-0" label at the origin.
    let value = if value == 0.0 { 0.0 } else { value };
    let mut number = format!("{value:.decimals$}");
    if number.contains('.') {
        number.truncate(number.trim_end_matches('0').trim_end_matches('.').len());
    }
    format!("{number} {unit}").trim_end().to_string()
}

/// Fewest decimals that represent `step` exactly (within f32 noise), so every
/// multiple of it prints unrounded.
fn step_decimals(step: f32) -> usize {
    let mut scaled = step.abs() as f64;
    for decimals in 0..MAX_LABEL_DECIMALS {
        if (scaled - scaled.round()).abs() <= 1e-4 * scaled {
            return decimals;
        }
        scaled *= 10.0;
    }
    MAX_LABEL_DECIMALS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;
    use crate::space::WorldDims;

    fn world(w: f32, h: f32, min: Vec2) -> UnitSpace {
        UnitSpace::compute(WorldDims::new(Some(w), Some(h)), w / h, Viewport::new(800.0, 800.0), min)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-5 * b.abs().max(1.0)
    }

    #[test]
    fn default_step_is_power_of_ten() {
        assert!(approx(default_step(100.0), 10.0));
        assert!(approx(default_step(1000.0), 100.0));
        assert!(approx(default_step(12.0), 10.0));
        assert!(approx(default_step(5.0), 1.0));
        assert!(approx(default_step(0.5), 0.1));
    }

    #[test]
    fn ticks_skip_both_edges() {
        assert_eq!(tick_values(0.0, 100.0, 50.0), vec![50.0]);
        assert_eq!(tick_values(0.0, 30.0, 10.0), vec![10.0, 20.0]);
    }

    #[test]
    fn ticks_follow_negative_origin() {
        assert_eq!(tick_values(-25.0, 50.0, 10.0), vec![-20.0, -10.0, 0.0, 10.0, 20.0]);
    }

    #[test]
    fn ticks_with_invalid_step_are_empty() {
        assert!(tick_values(0.0, 10.0, 0.0).is_empty());
        assert!(tick_values(0.0, 10.0, f32::NAN).is_empty());
    }

    #[test]
    fn regenerate_labels_both_axes_with_unit() {
        let mut axis = AxisOverlay::new(AxisConfig { step: Some(50.0), ..AxisConfig::default() });
        axis.regenerate(&world(200.0, 100.0, Vec2::zero()), "m");

        let y: Vec<&str> = axis.labels().iter().filter(|l| l.axis == Axis::Y).map(|l| l.text.as_str()).collect();
        let x: Vec<&str> = axis.labels().iter().filter(|l| l.axis == Axis::X).map(|l| l.text.as_str()).collect();
        assert_eq!(y, vec!["50 m"]);
        assert_eq!(x, vec!["50 m", "100 m", "150 m"]);
    }

    #[test]
    fn only_flags_suppress_the_other_axis() {
        let space = world(100.0, 100.0, Vec2::zero());
        let mut axis = AxisOverlay::new(AxisConfig { only_x: true, ..AxisConfig::default() });
        axis.regenerate(&space, "");
        assert!(axis.labels().iter().all(|l| l.axis == Axis::X));
        assert_eq!(axis.labels().len(), 9);

        let mut axis = AxisOverlay::new(AxisConfig { only_y: true, ..AxisConfig::default() });
        axis.regenerate(&space, "");
        assert!(axis.labels().iter().all(|l| l.axis == Axis::Y));
    }

    #[test]
    fn regenerate_replaces_previous_labels() {
        let mut axis = AxisOverlay::new(AxisConfig::default());
        axis.regenerate(&world(100.0, 100.0, Vec2::zero()), "m");
        let before = axis.labels().len();
        axis.regenerate(&world(100.0, 100.0, Vec2::zero()), "m");
        assert_eq!(axis.labels().len(), before);
        let NodeContent::Labels(nodes) = &axis.node().content else { panic!("expected labels") };
        assert_eq!(nodes.len(), before);
    }

    #[test]
    fn fractional_steps_keep_decimals() {
        assert_eq!(format_label(0.30000001, 0.1, "s"), "0.3 s");
        assert_eq!(format_label(20.0, 10.0, ""), "20");
        assert_eq!(format_label(-0.0, 0.5, "m"), "0 m");
    }

    #[test]
    fn steps_between_powers_of_ten_print_exact_values() {
        let texts = |step: f32, size: f32| -> Vec<(f32, String)> {
            let mut axis = AxisOverlay::new(AxisConfig { step: Some(step), only_x: true, ..AxisConfig::default() });
            axis.regenerate(&world(size, size, Vec2::zero()), "m");
            axis.labels().iter().map(|l| (l.value, l.text.clone())).collect()
        };
        assert_eq!(
            texts(2.5, 10.0),
            vec![(2.5, "2.5 m".to_string()), (5.0, "5 m".to_string()), (7.5, "7.5 m".to_string())]
        );
        assert_eq!(
            texts(0.25, 1.0),
            vec![(0.25, "0.25 m".to_string()), (0.5, "0.5 m".to_string()), (0.75, "0.75 m".to_string())]
        );
    }

    #[test]
    fn step_decimals_follow_significant_digits() {
        assert_eq!(step_decimals(50.0), 0);
        assert_eq!(step_decimals(0.1), 1);
        assert_eq!(step_decimals(2.5), 1);
        assert_eq!(step_decimals(0.25), 2);
        assert_eq!(step_decimals(0.125), 3);
        assert_eq!(step_decimals(0.0001), 4);
    }
}
