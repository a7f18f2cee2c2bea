//! Draw-rectangle layout and stroke-cap sweep corrections.
//!
//! Round and square caps extend past the arc's endpoints by half the stroke
//! width. Near a full circle the head cap can overlap the tail, and in gradient
//! mode the overlap shows as a hard color seam. The adjuster shrinks the sweep
//! range by the angle one cap subtends, and always keeps at least one degree
//! visible so the arc never blinks out at its minimum.
use glam::Vec2;
use spindle_ui::PxRect;

use crate::config::{ProgressConfig, StrokeCap};

/// Smallest sweep kept visible for capped strokes, in degrees.
pub const MIN_VISIBLE_SWEEP: f32 = 1.0;

/// A float rectangle given by its edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArcRect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl ArcRect {
    /// Creates a rectangle from its edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Radius of the arc's center line.
    pub fn radius(&self) -> f32 {
        self.width() / 2.0
    }
}

/// Sweep range and draw rectangle derived from the bounds and configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdjustedGeometry {
    /// Minimum sweep after cap correction, in degrees.
    pub adjusted_min_sweep_angle: f32,
    /// Maximum sweep after cap correction, in degrees.
    pub adjusted_max_sweep_angle: f32,
    /// Square, centered, stroke-inset rectangle the arc is drawn in.
    pub draw_rect: ArcRect,
}

impl AdjustedGeometry {
    /// Lays out the draw rectangle for `bounds` and corrects the sweep range.
    pub fn compute(config: &ProgressConfig, bounds: PxRect) -> Self {
        let draw_rect = draw_rect_for_bounds(bounds, config.stroke_width_px(), config.size_px());
        let (adjusted_min_sweep_angle, adjusted_max_sweep_angle) = adjust_sweep_angles(
            config.min_sweep_angle(),
            config.max_sweep_angle(),
            config.stroke_width_px(),
            config.stroke_cap(),
            config.gradient(),
            draw_rect,
        );
        Self {
            adjusted_min_sweep_angle,
            adjusted_max_sweep_angle,
            draw_rect,
        }
    }
}

/// Insets `bounds` by half the stroke so the stroke stays inside, caps the
/// side at `size_px` when non-zero, and trims the longer side so the result
/// is a centered square.
pub fn draw_rect_for_bounds(bounds: PxRect, stroke_width_px: f32, size_px: u32) -> ArcRect {
    let half_stroke = stroke_width_px / 2.0;
    let left = bounds.left().to_f32() + half_stroke;
    let top = bounds.top().to_f32() + half_stroke;
    let right = bounds.right().to_f32() - half_stroke;
    let bottom = bounds.bottom().to_f32() - half_stroke;

    let width = right - left;
    let height = bottom - top;
    let mut side = width.min(height);
    if size_px > 0 {
        side = side.min(size_px as f32);
    }
    let side = side.max(0.0);

    let trim_width = (width - side) / 2.0;
    let trim_height = (height - side) / 2.0;
    ArcRect::new(
        left + trim_width,
        top + trim_height,
        right - trim_width,
        bottom - trim_height,
    )
}

/// Angle in degrees subtended by one stroke width on a circle of `radius`.
///
/// Returns `None` when the radius or stroke width cannot produce a finite
/// angle.
pub fn stroke_width_angle(stroke_width_px: f32, radius: f32) -> Option<f32> {
    if !(radius.is_finite() && radius > 0.0 && stroke_width_px.is_finite()) {
        return None;
    }
    Some((stroke_width_px / 2.0).atan2(radius).to_degrees() * 2.0)
}

/// Corrects the configured sweep range for the stroke cap.
///
/// Returns `(adjusted_min, adjusted_max)`. Butt caps are left untouched.
pub fn adjust_sweep_angles(
    min_sweep_angle: f32,
    max_sweep_angle: f32,
    stroke_width_px: f32,
    stroke_cap: StrokeCap,
    gradient: bool,
    draw_rect: ArcRect,
) -> (f32, f32) {
    if stroke_cap == StrokeCap::Butt {
        return (min_sweep_angle, max_sweep_angle);
    }

    let mut adjusted_min = min_sweep_angle;
    let mut adjusted_max = max_sweep_angle;

    if gradient {
        if let Some(cap_angle) = stroke_width_angle(stroke_width_px, draw_rect.radius()) {
            if max_sweep_angle + min_sweep_angle + cap_angle > 360.0 {
                // Head and tail caps would meet: pull both ends in by one cap.
                adjusted_min = min_sweep_angle + cap_angle;
                adjusted_max = max_sweep_angle - cap_angle;
            }
            // Shorter arcs would let the two caps overlap.
            if min_sweep_angle < cap_angle * 2.0 {
                adjusted_min = cap_angle * 2.0;
            }
        }
    }

    let adjusted_min = adjusted_min.max(MIN_VISIBLE_SWEEP).min(360.0);
    // Large caps on a narrow range can push min past max.
    let adjusted_max = adjusted_max.clamp(adjusted_min, 360.0);
    (adjusted_min, adjusted_max)
}

#[cfg(test)]
mod tests {
    use spindle_ui::{Color, Px};

    use super::*;
    use crate::config::ProgressArgs;

    fn square_rect(side: f32) -> ArcRect {
        ArcRect::new(0.0, 0.0, side, side)
    }

    #[test]
    fn test_butt_cap_is_not_adjusted() {
        let (min, max) =
            adjust_sweep_angles(0.0, 360.0, 20.0, StrokeCap::Butt, true, square_rect(100.0));
        assert_eq!((min, max), (0.0, 360.0));
    }

    #[test]
    fn test_round_cap_without_gradient_keeps_configured_range() {
        let config = ProgressArgs::default()
            .min_sweep_angle(25.0)
            .max_sweep_angle(335.0)
            .stroke_cap(StrokeCap::Round)
            .stroke_width_px(8.0)
            .build(&Color::BLACK)
            .expect("valid configuration");
        let geometry =
            AdjustedGeometry::compute(&config, PxRect::new(Px(0), Px(0), Px(100), Px(100)));
        assert_eq!(geometry.adjusted_min_sweep_angle, 25.0);
        assert_eq!(geometry.adjusted_max_sweep_angle, 335.0);
    }

    #[test]
    fn test_gradient_near_full_circle_shrinks_range_by_one_cap() {
        let (min, max) =
            adjust_sweep_angles(30.0, 340.0, 8.0, StrokeCap::Round, true, square_rect(100.0));
        let cap_angle = 4.0_f32.atan2(50.0).to_degrees() * 2.0;
        assert!(min > cap_angle * 2.0);
        assert!((min - (30.0 + cap_angle)).abs() < 1e-4, "min = {min}");
        assert!((max - (340.0 - cap_angle)).abs() < 1e-4, "max = {max}");
    }

    #[test]
    fn test_small_min_is_raised_to_two_caps_after_shrink() {
        let (min, max) =
            adjust_sweep_angles(10.0, 350.0, 20.0, StrokeCap::Round, true, square_rect(100.0));
        let cap_angle = 10.0_f32.atan2(50.0).to_degrees() * 2.0;
        assert!((cap_angle - 22.62).abs() < 0.01);
        assert!((min - cap_angle * 2.0).abs() < 1e-4, "min = {min}");
        assert!((min - 45.24).abs() < 0.05);
        assert!((max - (350.0 - cap_angle)).abs() < 1e-4, "max = {max}");
        assert!((max - 327.38).abs() < 0.05);
    }

    #[test]
    fn test_full_range_keeps_caps_apart() {
        let (min, max) =
            adjust_sweep_angles(0.0, 360.0, 20.0, StrokeCap::Round, true, square_rect(100.0));
        let cap_angle = 10.0_f32.atan2(50.0).to_degrees() * 2.0;
        assert!(min >= cap_angle * 2.0 - 1e-4, "min {min} < two caps {}", cap_angle * 2.0);
        assert!((max - (360.0 - cap_angle)).abs() < 1e-4, "max = {max}");
    }

    #[test]
    fn test_gradient_small_min_is_raised_to_two_caps() {
        let (min, max) =
            adjust_sweep_angles(5.0, 200.0, 20.0, StrokeCap::Square, true, square_rect(100.0));
        let cap_angle = 10.0_f32.atan2(50.0).to_degrees() * 2.0;
        assert!((min - cap_angle * 2.0).abs() < 1e-4);
        assert_eq!(max, 200.0);
    }

    #[test]
    fn test_capped_min_is_at_least_one_degree() {
        const RANGES: [(f32, f32); 5] = [
            (0.0, 0.0),
            (0.0, 360.0),
            (0.5, 10.0),
            (180.0, 180.0),
            (360.0, 360.0),
        ];
        for cap in [StrokeCap::Round, StrokeCap::Square] {
            for gradient in [false, true] {
                for (min, max) in RANGES {
                    for side in [0.0, 3.0, 100.0] {
                        let (adjusted_min, adjusted_max) =
                            adjust_sweep_angles(min, max, 8.0, cap, gradient, square_rect(side));
                        assert!(adjusted_min >= 1.0, "{cap:?} {gradient} {min} {max} {side}");
                        assert!(adjusted_min <= adjusted_max);
                        assert!(adjusted_max <= 360.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_degenerate_radius_yields_finite_angles() {
        assert_eq!(stroke_width_angle(8.0, 0.0), None);
        assert_eq!(stroke_width_angle(8.0, -4.0), None);
        assert_eq!(stroke_width_angle(f32::NAN, 10.0), None);

        let (min, max) =
            adjust_sweep_angles(10.0, 350.0, 8.0, StrokeCap::Round, true, square_rect(0.0));
        assert!(min.is_finite() && max.is_finite());
        assert_eq!((min, max), (10.0, 350.0));
    }

    #[test]
    fn test_draw_rect_is_inset_square_and_centered() {
        let rect = draw_rect_for_bounds(PxRect::new(Px(0), Px(0), Px(200), Px(100)), 10.0, 0);
        assert_eq!(rect, ArcRect::new(55.0, 5.0, 145.0, 95.0));
        assert_eq!(rect.width(), rect.height());
        assert_eq!(rect.center(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_draw_rect_respects_size_cap() {
        let rect = draw_rect_for_bounds(PxRect::new(Px(0), Px(0), Px(200), Px(100)), 0.0, 72);
        assert_eq!(rect.width(), 72.0);
        assert_eq!(rect.height(), 72.0);
        assert_eq!(rect.center(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_draw_rect_collapses_when_stroke_exceeds_bounds() {
        let rect = draw_rect_for_bounds(PxRect::new(Px(0), Px(0), Px(10), Px(10)), 30.0, 0);
        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.center(), Vec2::new(5.0, 5.0));
    }
}
