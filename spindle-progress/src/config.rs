//! Resolved, immutable configuration for the progress drawable.
//!
//! ## Usage
//!
//! Describe the indicator with [`ProgressArgs`], then validate it once with
//! [`ProgressArgs::build`]:
//!
//! ```
//! use spindle_progress::config::{ProgressArgs, StrokeCap};
//! use spindle_ui::Color;
//!
//! let config = ProgressArgs::default()
//!     .gradient(Color::RED, Color::BLUE, [])
//!     .stroke_width_px(8.0)
//!     .stroke_cap(StrokeCap::Round)
//!     .build(&Color::BLACK)
//!     .expect("valid configuration");
//! assert!(config.gradient());
//! // Gradient colors are stored head-first.
//! assert_eq!(config.colors(), &[Color::BLUE, Color::RED]);
//! ```
use std::time::Duration;

use derive_setters::Setters;
use spindle_ui::Color;
use thiserror::Error;

/// Shape drawn at both ends of the stroked arc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat ends flush with the arc's endpoints.
    Butt,
    /// Half-circle ends that extend past the endpoints.
    #[default]
    Round,
    /// Square ends that extend past the endpoints.
    Square,
}

impl StrokeCap {
    /// Maps the integer cap codes used by style sheets: `1` is round, `2` is
    /// square, anything else is butt.
    pub fn from_style_code(code: i32) -> Self {
        match code {
            1 => StrokeCap::Round,
            2 => StrokeCap::Square,
            _ => StrokeCap::Butt,
        }
    }
}

/// Defaults used when an argument is not specified.
pub struct ProgressIndicatorDefaults;

impl ProgressIndicatorDefaults {
    /// Time for one full revolution at speed `1.0`.
    pub const ROTATION_DURATION: Duration = Duration::from_millis(3000);
    /// Time for one sweep half-cycle at speed `1.0`.
    pub const SWEEP_DURATION: Duration = Duration::from_millis(1200);
    /// Smallest visible sweep, in degrees.
    pub const MIN_SWEEP_ANGLE: f32 = 25.0;
    /// Largest visible sweep, in degrees.
    pub const MAX_SWEEP_ANGLE: f32 = 335.0;
}

/// Resolves the host's default indicator color.
///
/// Consulted only when [`ProgressArgs`] carries no explicit colors.
pub trait ThemeColors {
    /// The theme's primary color.
    fn primary(&self) -> Color;
}

impl ThemeColors for Color {
    fn primary(&self) -> Color {
        *self
    }
}

/// Colors requested for the arc.
#[derive(Clone, Debug, PartialEq)]
pub enum ProgressColors {
    /// One flat color.
    Solid(Color),
    /// A sweep gradient, listed tail-first as the user reads it.
    Gradient(Vec<Color>),
}

/// Errors returned by [`ProgressArgs::build`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A gradient was requested with no colors.
    #[error("gradient requires at least one color")]
    EmptyGradient,
    /// An angle argument was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFiniteAngle {
        /// Argument name.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// After clamping, the minimum sweep exceeds the maximum sweep.
    #[error("min sweep angle {min} is greater than max sweep angle {max}")]
    InvertedSweepRange {
        /// Clamped minimum sweep.
        min: f32,
        /// Clamped maximum sweep.
        max: f32,
    },
    /// A speed multiplier was zero, negative or not finite.
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidSpeed {
        /// Argument name.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// A base duration was zero.
    #[error("{name} must be longer than zero")]
    ZeroDuration {
        /// Argument name.
        name: &'static str,
    },
    /// The stroke width was negative or not finite.
    #[error("stroke width must be a non-negative finite number, got {0}")]
    InvalidStrokeWidth(f32),
}

/// Clamps a sweep angle into `[0, 360]` degrees.
pub fn clamp_sweep_angle(angle: f32) -> f32 {
    angle.clamp(0.0, 360.0)
}

/// Wraps a degree value into `[0, 360)`.
///
/// The result differs from the input by an exact multiple of 360.
pub fn normalize_degree(degree: f32) -> f32 {
    let wrapped = degree.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Reverses a gradient so its last color becomes the head of the stroke.
pub fn head_first_colors(colors: &[Color]) -> Vec<Color> {
    colors.iter().rev().copied().collect()
}

/// Arguments describing an indeterminate circular progress indicator.
///
/// Every field has a default; see [`ProgressIndicatorDefaults`].
#[derive(Clone, Debug, Setters)]
pub struct ProgressArgs {
    /// Whether the arc rotates around the circle.
    pub rotation: bool,
    /// Whether the arc grows and shrinks.
    pub sweep: bool,
    /// Base duration of one revolution.
    pub rotation_duration: Duration,
    /// Base duration of one sweep half-cycle.
    pub sweep_duration: Duration,
    /// Rotation speed multiplier.
    pub rotation_speed: f32,
    /// Sweep speed multiplier.
    pub sweep_speed: f32,
    /// Smallest sweep in degrees, clamped to `[0, 360]`.
    pub min_sweep_angle: f32,
    /// Largest sweep in degrees, clamped to `[0, 360]`.
    pub max_sweep_angle: f32,
    /// Angle the arc starts at, wrapped into `[0, 360)`.
    pub start_at_degree: f32,
    /// Stroke width in physical pixels.
    pub stroke_width_px: f32,
    /// Stroke cap for both arc ends.
    pub stroke_cap: StrokeCap,
    /// Arc colors; the theme's primary color is used when omitted.
    #[setters(strip_option)]
    pub colors: Option<ProgressColors>,
    /// Upper bound on the drawn circle's diameter in pixels, `0` for none.
    pub size_px: u32,
}

impl Default for ProgressArgs {
    fn default() -> Self {
        Self {
            rotation: true,
            sweep: true,
            rotation_duration: ProgressIndicatorDefaults::ROTATION_DURATION,
            sweep_duration: ProgressIndicatorDefaults::SWEEP_DURATION,
            rotation_speed: 1.0,
            sweep_speed: 1.0,
            min_sweep_angle: ProgressIndicatorDefaults::MIN_SWEEP_ANGLE,
            max_sweep_angle: ProgressIndicatorDefaults::MAX_SWEEP_ANGLE,
            start_at_degree: 0.0,
            stroke_width_px: 0.0,
            stroke_cap: StrokeCap::default(),
            colors: None,
            size_px: 0,
        }
    }
}

impl ProgressArgs {
    /// Paints the arc with one flat color.
    pub fn color(self, color: Color) -> Self {
        self.colors(ProgressColors::Solid(color))
    }

    /// Paints the arc with a sweep gradient of at least two colors.
    pub fn gradient(
        self,
        first: Color,
        second: Color,
        others: impl IntoIterator<Item = Color>,
    ) -> Self {
        let colors = [first, second].into_iter().chain(others).collect();
        self.colors(ProgressColors::Gradient(colors))
    }

    /// Validates the arguments and resolves them into a [`ProgressConfig`].
    pub fn build(self, theme: &dyn ThemeColors) -> Result<ProgressConfig, ConfigError> {
        let min_sweep_angle =
            clamp_sweep_angle(finite_angle("min_sweep_angle", self.min_sweep_angle)?);
        let max_sweep_angle =
            clamp_sweep_angle(finite_angle("max_sweep_angle", self.max_sweep_angle)?);
        if min_sweep_angle > max_sweep_angle {
            return Err(ConfigError::InvertedSweepRange {
                min: min_sweep_angle,
                max: max_sweep_angle,
            });
        }
        let start_at_degree =
            normalize_degree(finite_angle("start_at_degree", self.start_at_degree)?);

        let rotation_speed = positive_speed("rotation_speed", self.rotation_speed)?;
        let sweep_speed = positive_speed("sweep_speed", self.sweep_speed)?;
        let rotation_duration = non_zero_duration("rotation_duration", self.rotation_duration)?;
        let sweep_duration = non_zero_duration("sweep_duration", self.sweep_duration)?;

        if !self.stroke_width_px.is_finite() || self.stroke_width_px < 0.0 {
            return Err(ConfigError::InvalidStrokeWidth(self.stroke_width_px));
        }

        let (colors, gradient) = match self.colors {
            None => (vec![theme.primary()], false),
            Some(ProgressColors::Solid(color)) => (vec![color], false),
            Some(ProgressColors::Gradient(colors)) => match colors.len() {
                0 => return Err(ConfigError::EmptyGradient),
                1 => (colors, false),
                _ => (head_first_colors(&colors), true),
            },
        };

        Ok(ProgressConfig {
            colors,
            gradient,
            rotation: self.rotation,
            sweep: self.sweep,
            rotation_duration,
            sweep_duration,
            rotation_speed,
            sweep_speed,
            min_sweep_angle,
            max_sweep_angle,
            start_at_degree,
            stroke_width_px: self.stroke_width_px,
            stroke_cap: self.stroke_cap,
            size_px: self.size_px,
        })
    }
}

fn finite_angle(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFiniteAngle { name, value })
    }
}

fn positive_speed(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidSpeed { name, value })
    }
}

fn non_zero_duration(name: &'static str, value: Duration) -> Result<Duration, ConfigError> {
    if value.is_zero() {
        Err(ConfigError::ZeroDuration { name })
    } else {
        Ok(value)
    }
}

/// Validated drawing parameters. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressConfig {
    colors: Vec<Color>,
    gradient: bool,
    rotation: bool,
    sweep: bool,
    rotation_duration: Duration,
    sweep_duration: Duration,
    rotation_speed: f32,
    sweep_speed: f32,
    min_sweep_angle: f32,
    max_sweep_angle: f32,
    start_at_degree: f32,
    stroke_width_px: f32,
    stroke_cap: StrokeCap,
    size_px: u32,
}

impl ProgressConfig {
    /// Arc colors. In gradient mode the head of the stroke comes first.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The flat paint color. `build` never leaves the color list empty.
    pub fn primary_color(&self) -> Color {
        self.colors.first().copied().unwrap_or(Color::TRANSPARENT)
    }

    /// Whether the arc is painted with a sweep gradient.
    pub fn gradient(&self) -> bool {
        self.gradient
    }

    /// Whether the rotation animation runs.
    pub fn rotation(&self) -> bool {
        self.rotation
    }

    /// Whether the sweep animation runs.
    pub fn sweep(&self) -> bool {
        self.sweep
    }

    /// Base rotation duration, before the speed multiplier.
    pub fn rotation_duration(&self) -> Duration {
        self.rotation_duration
    }

    /// Base sweep duration, before the speed multiplier.
    pub fn sweep_duration(&self) -> Duration {
        self.sweep_duration
    }

    /// Rotation speed multiplier.
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Sweep speed multiplier.
    pub fn sweep_speed(&self) -> f32 {
        self.sweep_speed
    }

    /// Configured minimum sweep, in degrees.
    pub fn min_sweep_angle(&self) -> f32 {
        self.min_sweep_angle
    }

    /// Configured maximum sweep, in degrees.
    pub fn max_sweep_angle(&self) -> f32 {
        self.max_sweep_angle
    }

    /// Starting rotation, in `[0, 360)` degrees.
    pub fn start_at_degree(&self) -> f32 {
        self.start_at_degree
    }

    /// Stroke width in physical pixels.
    pub fn stroke_width_px(&self) -> f32 {
        self.stroke_width_px
    }

    /// Stroke cap.
    pub fn stroke_cap(&self) -> StrokeCap {
        self.stroke_cap
    }

    /// Diameter cap in pixels, `0` for none.
    pub fn size_px(&self) -> u32 {
        self.size_px
    }

    /// Real duration of one revolution: base duration divided by speed.
    pub fn effective_rotation_duration(&self) -> Duration {
        scale_duration(self.rotation_duration, 1.0 / self.rotation_speed as f64)
    }

    /// Real duration of one sweep half-cycle: base duration divided by speed.
    pub fn effective_sweep_duration(&self) -> Duration {
        scale_duration(self.sweep_duration, 1.0 / self.sweep_speed as f64)
    }

    /// Duration of the progressive-stop retraction for the given visible
    /// sweep. Longer arcs take longer to retract.
    pub fn end_duration(&self, current_sweep_angle: f32) -> Duration {
        let factor = (1.0 + current_sweep_angle as f64 / 360.0) / self.sweep_speed as f64;
        scale_duration(self.sweep_duration, factor)
    }
}

// Scales in whole nanoseconds so exact factors give exact durations.
fn scale_duration(duration: Duration, factor: f64) -> Duration {
    Duration::from_nanos((duration.as_nanos() as f64 * factor).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(args: ProgressArgs) -> ProgressConfig {
        args.build(&Color::BLACK).expect("valid configuration")
    }

    #[test]
    fn test_defaults() {
        let config = build(ProgressArgs::default());
        assert!(config.rotation());
        assert!(config.sweep());
        assert_eq!(config.min_sweep_angle(), 25.0);
        assert_eq!(config.max_sweep_angle(), 335.0);
        assert_eq!(config.stroke_cap(), StrokeCap::Round);
        assert_eq!(config.effective_rotation_duration(), Duration::from_millis(3000));
        assert_eq!(config.effective_sweep_duration(), Duration::from_millis(1200));
    }

    #[test]
    fn test_theme_color_used_without_explicit_colors() {
        let config = build(ProgressArgs::default());
        assert_eq!(config.colors(), &[Color::BLACK]);
        assert_eq!(config.primary_color(), Color::BLACK);
        assert!(!config.gradient());
    }

    #[test]
    fn test_primary_color_is_the_gradient_head() {
        let config =
            build(ProgressArgs::default().gradient(Color::RED, Color::GREEN, [Color::BLUE]));
        assert_eq!(config.primary_color(), config.colors()[0]);
        assert_eq!(config.primary_color(), Color::BLUE);

        let single = build(ProgressArgs::default().colors(ProgressColors::Gradient(vec![
            Color::GREEN,
        ])));
        assert_eq!(single.primary_color(), Color::GREEN);
    }

    #[test]
    fn test_gradient_is_reversed_head_first() {
        let config =
            build(ProgressArgs::default().gradient(Color::RED, Color::GREEN, [Color::BLUE]));
        assert!(config.gradient());
        assert_eq!(config.colors(), &[Color::BLUE, Color::GREEN, Color::RED]);
    }

    #[test]
    fn test_single_color_gradient_is_solid() {
        let config = build(
            ProgressArgs::default().colors(ProgressColors::Gradient(vec![Color::RED])),
        );
        assert!(!config.gradient());
        assert_eq!(config.colors(), &[Color::RED]);
    }

    #[test]
    fn test_solid_color_is_not_gradient() {
        let config = build(ProgressArgs::default().color(Color::GREEN));
        assert!(!config.gradient());
        assert_eq!(config.colors(), &[Color::GREEN]);
    }

    #[test]
    fn test_sweep_angles_are_clamped() {
        let config = build(
            ProgressArgs::default()
                .min_sweep_angle(-20.0)
                .max_sweep_angle(500.0),
        );
        assert_eq!(config.min_sweep_angle(), 0.0);
        assert_eq!(config.max_sweep_angle(), 360.0);
    }

    #[test]
    fn test_start_degree_wraps_by_multiples_of_360() {
        for raw in [-725.0_f32, -360.0, -90.0, -0.5, 0.0, 359.0, 360.0, 450.0, 1234.5] {
            let normalized = normalize_degree(raw);
            assert!((0.0..360.0).contains(&normalized), "{raw} -> {normalized}");
            let turns = (raw - normalized) / 360.0;
            assert!((turns - turns.round()).abs() < 1e-4, "{raw} -> {normalized}");
        }
        assert_eq!(normalize_degree(-90.0), 270.0);
        assert_eq!(normalize_degree(450.0), 90.0);

        let config = build(ProgressArgs::default().start_at_degree(-90.0));
        assert_eq!(config.start_at_degree(), 270.0);
    }

    #[test]
    fn test_invalid_arguments_are_rejected() {
        let err = ProgressArgs::default()
            .colors(ProgressColors::Gradient(Vec::new()))
            .build(&Color::BLACK);
        assert_eq!(err, Err(ConfigError::EmptyGradient));

        let err = ProgressArgs::default().sweep_speed(0.0).build(&Color::BLACK);
        assert!(matches!(err, Err(ConfigError::InvalidSpeed { name: "sweep_speed", .. })));

        let err = ProgressArgs::default().rotation_speed(f32::NAN).build(&Color::BLACK);
        assert!(matches!(err, Err(ConfigError::InvalidSpeed { name: "rotation_speed", .. })));

        let err = ProgressArgs::default()
            .sweep_duration(Duration::ZERO)
            .build(&Color::BLACK);
        assert_eq!(err, Err(ConfigError::ZeroDuration { name: "sweep_duration" }));

        let err = ProgressArgs::default()
            .min_sweep_angle(300.0)
            .max_sweep_angle(100.0)
            .build(&Color::BLACK);
        assert_eq!(err, Err(ConfigError::InvertedSweepRange { min: 300.0, max: 100.0 }));

        let err = ProgressArgs::default().stroke_width_px(-1.0).build(&Color::BLACK);
        assert_eq!(err, Err(ConfigError::InvalidStrokeWidth(-1.0)));

        let err = ProgressArgs::default()
            .start_at_degree(f32::INFINITY)
            .build(&Color::BLACK);
        assert!(matches!(err, Err(ConfigError::NonFiniteAngle { name: "start_at_degree", .. })));
    }

    #[test]
    fn test_speed_scales_durations() {
        let config = build(ProgressArgs::default().rotation_speed(2.0).sweep_speed(0.5));
        assert_eq!(config.effective_rotation_duration(), Duration::from_millis(1500));
        assert_eq!(config.effective_sweep_duration(), Duration::from_millis(2400));
    }

    #[test]
    fn test_end_duration_scales_with_visible_sweep() {
        let config = build(ProgressArgs::default());
        assert_eq!(config.end_duration(0.0), Duration::from_millis(1200));
        assert_eq!(config.end_duration(180.0), Duration::from_millis(1800));
    }

    #[test]
    fn test_stroke_cap_style_codes() {
        assert_eq!(StrokeCap::from_style_code(0), StrokeCap::Butt);
        assert_eq!(StrokeCap::from_style_code(1), StrokeCap::Round);
        assert_eq!(StrokeCap::from_style_code(2), StrokeCap::Square);
        assert_eq!(StrokeCap::from_style_code(9), StrokeCap::Butt);
    }
}
