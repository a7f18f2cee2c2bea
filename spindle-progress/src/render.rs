//! Turns animation state into one stroked-arc draw command per frame.
use spindle_ui::Color;

use crate::{
    animation::{AnimationState, SweepPhase},
    config::{StrokeCap, normalize_degree},
    geometry::ArcRect,
    gradient::SweepGradient,
};

/// How the drawable blends with what is beneath it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// Some pixels are partially transparent.
    Translucent,
}

/// Color transform applied to the paint after alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorFilter {
    /// Replaces the color channels, keeping coverage. The result's alpha is
    /// the paint alpha times the tint alpha.
    Tint(Color),
    /// Multiplies every channel by the given color.
    Modulate(Color),
}

impl ColorFilter {
    /// Filters one color.
    pub fn apply(self, color: Color) -> Color {
        match self {
            ColorFilter::Tint(tint) => tint.with_alpha(tint.a * color.a),
            ColorFilter::Modulate(factor) => Color::new(
                color.r * factor.r,
                color.g * factor.g,
                color.b * factor.b,
                color.a * factor.a,
            ),
        }
    }
}

/// Paint used to stroke the arc.
#[derive(Clone, Debug, PartialEq)]
pub enum ArcPaint {
    /// One flat color.
    Solid(Color),
    /// A sweep gradient around the draw rectangle's center.
    SweepGradient(SweepGradient),
}

impl ArcPaint {
    fn map_colors(&mut self, mut f: impl FnMut(Color) -> Color) {
        match self {
            ArcPaint::Solid(color) => *color = f(*color),
            ArcPaint::SweepGradient(gradient) => {
                for stop in gradient.stops.iter_mut() {
                    stop.color = f(stop.color);
                }
            }
        }
    }
}

/// Draw command for a stroked circular arc. The arc is never filled.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcDrawCommand {
    /// Square rectangle the arc's circle is inscribed in.
    pub rect: ArcRect,
    /// Start angle in degrees, where 0° is at 3 o'clock.
    pub start_angle_degrees: f32,
    /// Sweep angle in degrees, in the clockwise direction.
    pub sweep_angle_degrees: f32,
    /// Stroke width in physical pixels.
    pub stroke_width_px: f32,
    /// Stroke cap applied to arc ends.
    pub cap: StrokeCap,
    /// Stroke paint.
    pub paint: ArcPaint,
}

impl ArcDrawCommand {
    /// Scales the paint's alpha by `opacity`.
    pub fn apply_opacity(&mut self, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        self.paint
            .map_colors(|color| color.with_alpha(color.a * opacity));
    }

    /// Runs every paint color through `filter`.
    pub fn apply_color_filter(&mut self, filter: ColorFilter) {
        self.paint.map_colors(|color| filter.apply(color));
    }
}

/// Receives the arcs a drawable paints.
pub trait ArcCanvas {
    /// Strokes one arc.
    fn draw_arc(&mut self, command: &ArcDrawCommand);
}

impl ArcCanvas for Vec<ArcDrawCommand> {
    fn draw_arc(&mut self, command: &ArcDrawCommand) {
        self.push(command.clone());
    }
}

/// Start and sweep of the arc for one frame, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameArc {
    /// Start angle.
    pub start_angle: f32,
    /// Sweep angle.
    pub sweep_angle: f32,
}

/// Combines the animation values into the arc to paint.
///
/// Returns `None` while stopped.
pub fn frame_arc(
    state: &AnimationState,
    sweep_enabled: bool,
    adjusted_max: f32,
) -> Option<FrameArc> {
    if !state.running {
        return None;
    }

    let mut start_angle = state.current_rotation - state.current_rotation_offset;
    let mut sweep_angle = if sweep_enabled {
        state.current_sweep_angle
    } else {
        adjusted_max
    };

    if sweep_enabled {
        // A disappearing arc is anchored at its head and shrinks from the tail.
        if state.sweep_phase == SweepPhase::Disappearing {
            start_angle += 360.0 - sweep_angle;
        }
        start_angle = normalize_degree(start_angle);
    }

    if state.current_end_ratio < 1.0 {
        let retracted = sweep_angle * state.current_end_ratio;
        start_angle = normalize_degree(start_angle + (sweep_angle - retracted));
        sweep_angle = retracted;
    }

    Some(FrameArc {
        start_angle,
        sweep_angle,
    })
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::gradient::build_sweep_gradient;

    fn running(rotation: f32, offset: f32, sweep: f32) -> AnimationState {
        AnimationState {
            current_rotation: rotation,
            current_rotation_offset: offset,
            current_sweep_angle: sweep,
            running: true,
            ..AnimationState::default()
        }
    }

    #[test]
    fn test_stopped_paints_nothing() {
        assert_eq!(frame_arc(&AnimationState::default(), true, 335.0), None);
    }

    #[test]
    fn test_appearing_starts_at_rotation_minus_offset() {
        let arc = frame_arc(&running(100.0, 30.0, 90.0), true, 335.0).expect("running");
        assert_eq!(arc, FrameArc { start_angle: 70.0, sweep_angle: 90.0 });
    }

    #[test]
    fn test_disappearing_reverses_direction() {
        let state = AnimationState {
            sweep_phase: SweepPhase::Disappearing,
            ..running(100.0, 30.0, 90.0)
        };
        let arc = frame_arc(&state, true, 335.0).expect("running");
        // 70 + (360 - 90) wraps to 340.
        assert_eq!(arc.start_angle, 340.0);
        assert_eq!(arc.sweep_angle, 90.0);
    }

    #[test]
    fn test_negative_start_is_normalized() {
        let arc = frame_arc(&running(10.0, 50.0, 90.0), true, 335.0).expect("running");
        assert_eq!(arc.start_angle, 320.0);
    }

    #[test]
    fn test_sweep_disabled_uses_adjusted_max() {
        let arc = frame_arc(&running(400.0, 0.0, 12.0), false, 300.0).expect("running");
        assert_eq!(arc.sweep_angle, 300.0);
        assert_eq!(arc.start_angle, 400.0);
    }

    #[test]
    fn test_end_ratio_shrinks_from_trailing_edge() {
        let state = AnimationState {
            current_end_ratio: 0.25,
            ..running(100.0, 0.0, 200.0)
        };
        let arc = frame_arc(&state, true, 335.0).expect("running");
        assert_eq!(arc.sweep_angle, 50.0);
        // The head stays put: start + sweep is unchanged.
        assert_eq!(arc.start_angle, 250.0);
        assert_eq!(arc.start_angle + arc.sweep_angle, 300.0);
    }

    #[test]
    fn test_opacity_and_filter_apply_to_every_paint_color() {
        let gradient = build_sweep_gradient(&[Color::RED, Color::BLUE], Vec2::ZERO, 0.0, 180.0);
        let mut command = ArcDrawCommand {
            rect: ArcRect::new(0.0, 0.0, 10.0, 10.0),
            start_angle_degrees: 0.0,
            sweep_angle_degrees: 180.0,
            stroke_width_px: 2.0,
            cap: StrokeCap::Round,
            paint: ArcPaint::SweepGradient(gradient),
        };
        command.apply_opacity(0.5);
        command.apply_color_filter(ColorFilter::Tint(Color::GREEN));

        let ArcPaint::SweepGradient(gradient) = &command.paint else {
            panic!("paint kind changed");
        };
        for color in gradient.colors() {
            assert_eq!(color, Color::GREEN.with_alpha(0.5));
        }
    }

    #[test]
    fn test_modulate_multiplies_channels() {
        let filtered = ColorFilter::Modulate(Color::new(0.5, 1.0, 0.0, 1.0)).apply(Color::WHITE);
        assert_eq!(filtered, Color::new(0.5, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_vec_canvas_records_commands() {
        let mut canvas: Vec<ArcDrawCommand> = Vec::new();
        let command = ArcDrawCommand {
            rect: ArcRect::default(),
            start_angle_degrees: 10.0,
            sweep_angle_degrees: 20.0,
            stroke_width_px: 1.0,
            cap: StrokeCap::Butt,
            paint: ArcPaint::Solid(Color::BLACK),
        };
        canvas.draw_arc(&command);
        assert_eq!(canvas, vec![command]);
    }
}
