//! An indeterminate circular progress drawable.
//!
//! The arc rotates around its circle while its sweep grows and shrinks, and
//! can be painted with a flat color or a sweep gradient that follows the arc.
//! A progressive stop retracts the arc before stopping.
//!
//! The crate does no rendering and owns no clock. The embedding toolkit
//! implements [`FrameHost`] to schedule frames, calls
//! [`ProgressDrawable::tick`] when they arrive, and receives one
//! [`ArcDrawCommand`] per frame through an [`ArcCanvas`].
//!
//! # Configuration
//!
//! ```
//! use spindle_progress::{ProgressArgs, StrokeCap};
//! use spindle_ui::Color;
//!
//! let config = ProgressArgs::default()
//!     .gradient(Color::RED, Color::BLUE, [Color::GREEN])
//!     .stroke_width_px(12.0)
//!     .stroke_cap(StrokeCap::Round)
//!     .sweep_speed(1.5)
//!     .build(&Color::BLACK)
//!     .expect("valid configuration");
//! assert!(config.gradient());
//! ```
//!
//! Style sheets that spell attributes as strings go through
//! [`ProgressStyle`] first.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod config;
pub mod drawable;
pub mod easing;
pub mod geometry;
pub mod gradient;
pub mod host;
pub mod render;
pub mod style;

pub use crate::{
    animation::{AnimationState, StopCallback, SweepPhase},
    config::{
        ConfigError, ProgressArgs, ProgressColors, ProgressConfig, ProgressIndicatorDefaults,
        StrokeCap, ThemeColors,
    },
    drawable::ProgressDrawable,
    geometry::{AdjustedGeometry, ArcRect},
    gradient::{GradientStop, SweepGradient},
    host::{FRAME_INTERVAL, FrameHost},
    render::{ArcCanvas, ArcDrawCommand, ArcPaint, ColorFilter, PixelFormat},
    style::ProgressStyle,
};
