//! Foundation primitives shared by spindle components.
//!
//! # Units
//!
//! Lengths come in two flavors: [`Dp`] (density-independent pixels) for
//! values authored by people, and [`Px`] (physical pixels) for values handed
//! to a renderer. Conversion goes through a process-wide scale factor.
//!
//! ```
//! use spindle_ui::{Dp, Px};
//!
//! let stroke = Dp(8.0);
//! let stroke_px: Px = stroke.to_px();
//! # let _ = stroke_px;
//! ```
//!
//! # Colors
//!
//! [`Color`] stores linear RGBA as `f32`s and can be parsed from the color
//! strings style sheets usually carry.
//!
//! ```
//! use spindle_ui::Color;
//!
//! let accent: Color = "#3F51B5".parse().expect("valid color");
//! assert_eq!(accent.a, 1.0);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod dp;
pub mod px;

pub use crate::{
    color::{Color, ColorParseError},
    dp::Dp,
    px::{Px, PxRect},
};
