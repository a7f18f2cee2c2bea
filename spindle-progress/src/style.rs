//! Style-sheet attributes for the progress indicator.
//!
//! A [`ProgressStyle`] carries attribute values as a layout or theme file
//! would spell them: color strings, a stroke width in [`Dp`], an integer cap
//! code. [`ProgressStyle::resolve`] turns them into [`ProgressArgs`].
//!
//! Malformed color strings never fail resolution. They are logged and the
//! theme's primary color is used instead.
use derive_setters::Setters;
use spindle_ui::{Color, ColorParseError, Dp};
use tracing::error;

use crate::config::{ProgressArgs, ProgressColors, StrokeCap};

/// Raw style attributes of a progress indicator.
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct ProgressStyle {
    /// Arc color, e.g. `"#3F51B5"`. Ignored when `gradient_colors` is set.
    #[setters(strip_option, into)]
    pub color: Option<String>,
    /// Gradient colors in tail-to-head order. A single entry means a solid
    /// arc.
    #[setters(strip_option)]
    pub gradient_colors: Option<Vec<String>>,
    /// Sweep speed multiplier.
    pub sweep_speed: f32,
    /// Rotation speed multiplier.
    pub rotation_speed: f32,
    /// Smallest sweep, in degrees.
    pub min_sweep_angle: f32,
    /// Largest sweep, in degrees.
    pub max_sweep_angle: f32,
    /// Starting rotation, in degrees.
    pub start_angle: f32,
    /// Whether the arc grows and shrinks.
    pub sweep: bool,
    /// Stroke width.
    pub stroke_width: Dp,
    /// Cap code: `1` round, `2` square, anything else butt.
    pub stroke_cap: i32,
    /// Diameter cap in pixels.
    pub size_px: u32,
}

impl Default for ProgressStyle {
    fn default() -> Self {
        Self {
            color: None,
            gradient_colors: None,
            sweep_speed: 1.0,
            rotation_speed: 1.0,
            min_sweep_angle: 0.0,
            max_sweep_angle: 360.0,
            start_angle: 0.0,
            sweep: true,
            stroke_width: Dp(8.0),
            stroke_cap: 0,
            size_px: 72,
        }
    }
}

impl ProgressStyle {
    /// Resolves the attributes into builder arguments.
    ///
    /// The stroke width is converted to whole physical pixels with the
    /// current scale factor.
    pub fn resolve(&self) -> ProgressArgs {
        let args = ProgressArgs::default()
            .sweep_speed(self.sweep_speed)
            .rotation_speed(self.rotation_speed)
            .min_sweep_angle(self.min_sweep_angle)
            .max_sweep_angle(self.max_sweep_angle)
            .start_at_degree(self.start_angle)
            .sweep(self.sweep)
            .stroke_width_px(self.stroke_width.to_px().to_f32())
            .stroke_cap(StrokeCap::from_style_code(self.stroke_cap))
            .size_px(self.size_px);

        match self.resolve_colors() {
            Ok(Some(colors)) => args.colors(colors),
            Ok(None) => args,
            Err(err) => {
                error!("Invalid color code: {err}");
                args
            }
        }
    }

    fn resolve_colors(&self) -> Result<Option<ProgressColors>, ColorParseError> {
        if let Some(gradient) = &self.gradient_colors {
            let colors = gradient
                .iter()
                .map(|color| color.parse::<Color>())
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(match colors.as_slice() {
                [] => None,
                [color] => Some(ProgressColors::Solid(*color)),
                _ => Some(ProgressColors::Gradient(colors)),
            });
        }
        self.color
            .as_deref()
            .map(|color| color.parse().map(ProgressColors::Solid))
            .transpose()
    }
}
