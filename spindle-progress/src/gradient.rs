//! Sweep-gradient paint spanning only the visible arc.
//!
//! A sweep gradient assigns a color to every angle around a center. Only the
//! visible arc is ever stroked, so the color stops are packed into the arc's
//! span and the gradient is rotated so stop `0.0` sits in the middle of the
//! hidden gap behind the arc's tail.
use glam::{Affine2, Vec2};
use smallvec::SmallVec;
use spindle_ui::Color;

/// One color stop of a sweep gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Stop color.
    pub color: Color,
    /// Position in `[0.0, 1.0]` of a full turn, before rotation.
    pub position: f32,
}

/// An angular gradient around `center`, rotated by `rotation_degrees`.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepGradient {
    /// Center of the gradient.
    pub center: Vec2,
    /// Stops in increasing position order. The first is at `0.0` and the last
    /// at `1.0`.
    pub stops: SmallVec<[GradientStop; 8]>,
    /// Clockwise rotation of the whole gradient, in degrees.
    pub rotation_degrees: f32,
}

impl SweepGradient {
    /// Stop colors in order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.stops.iter().map(|stop| stop.color)
    }

    /// Stop positions in order.
    pub fn positions(&self) -> impl Iterator<Item = f32> + '_ {
        self.stops.iter().map(|stop| stop.position)
    }

    /// Transform from gradient space to drawing space: a rotation about the
    /// center.
    pub fn local_transform(&self) -> Affine2 {
        Affine2::from_translation(self.center)
            * Affine2::from_angle(self.rotation_degrees.to_radians())
            * Affine2::from_translation(-self.center)
    }

    /// Samples the gradient at a drawing-space angle in degrees.
    pub fn color_at(&self, angle_degrees: f32) -> Color {
        let position = (angle_degrees - self.rotation_degrees).rem_euclid(360.0) / 360.0;
        let Some(first) = self.stops.first() else {
            return Color::TRANSPARENT;
        };
        if position <= first.position {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if position <= to.position {
                let span = to.position - from.position;
                let t = if span > 0.0 {
                    (position - from.position) / span
                } else {
                    1.0
                };
                return lerp_color(from.color, to.color, t);
            }
        }
        self.stops.last().map_or(first.color, |stop| stop.color)
    }
}

fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    Color::new(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        from.a + (to.a - from.a) * t,
    )
}

/// Builds the sweep gradient for an arc from `start_angle` spanning
/// `sweep_angle` degrees.
///
/// `colors` are head-first and must not be empty. The returned gradient has
/// `colors.len() + 2` stops: the first and last colors are repeated at
/// positions `0.0` and `1.0` so the interior stops keep even spacing.
pub fn build_sweep_gradient(
    colors: &[Color],
    center: Vec2,
    start_angle: f32,
    sweep_angle: f32,
) -> SweepGradient {
    let non_sweep_offset = (360.0 - sweep_angle) / 2.0;
    let mut stops = SmallVec::with_capacity(colors.len() + 2);

    if let (Some(&first), Some(&last)) = (colors.first(), colors.last()) {
        let degrees_per_color = sweep_angle / colors.len() as f32;
        stops.push(GradientStop {
            color: first,
            position: 0.0,
        });
        stops.extend(colors.iter().enumerate().map(|(i, &color)| GradientStop {
            color,
            position: (degrees_per_color * (i as f32 + 0.5) + non_sweep_offset) / 360.0,
        }));
        stops.push(GradientStop {
            color: last,
            position: 1.0,
        });
    }

    SweepGradient {
        center,
        stops,
        rotation_degrees: start_angle + sweep_angle + non_sweep_offset,
    }
}
