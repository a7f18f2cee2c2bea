//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] type for lengths that should look the same
//! physical size regardless of the display's pixel density, such as stroke
//! widths authored in a style sheet.
//!
//! ## Scale Factor
//!
//! The conversion between dp and physical pixels is controlled by a global
//! scale factor stored in [`SCALE_FACTOR`]. Hosts set it once from the display
//! density with [`set_scale_factor`] and update it when the density changes.
//! When it was never set, conversions use `1.0`.
//!
//! ## Usage
//!
//! ```
//! use spindle_ui::Dp;
//!
//! let stroke = Dp(8.0);
//! let pixels = stroke.to_pixels_f32();
//! # let _ = pixels;
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::Px;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// The scale factor represents how many physical pixels correspond to one dp:
/// - `1.0`: 1 dp = 1 pixel (baseline density)
/// - `2.0`: 1 dp = 2 pixels (high density)
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets or updates the global scale factor.
pub fn set_scale_factor(scale_factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(scale_factor));
    *lock.write() = scale_factor;
}

/// Returns the current global scale factor, `1.0` when unset.
pub fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels (dp).
///
/// A `Dp` wraps a single `f64` and is converted to physical pixels with the
/// global [`SCALE_FACTOR`] when a renderer needs a pixel-precise length.
///
/// ```
/// use spindle_ui::Dp;
///
/// const STROKE: Dp = Dp::new(4.0);
/// let doubled = Dp(STROKE.0 * 2.0);
/// # let _ = doubled;
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Creates a new `Dp` instance with the specified value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts this dp value to physical pixels as an `f64`.
    pub fn to_pixels_f64(&self) -> f64 {
        self.0 * scale_factor()
    }

    /// Converts this dp value to physical pixels as an `f32`.
    ///
    /// Converting from `f64` to `f32` may lose precision for very large
    /// values; use [`to_pixels_f64`](Self::to_pixels_f64) when it matters.
    pub fn to_pixels_f32(&self) -> f32 {
        self.to_pixels_f64() as f32
    }

    /// Converts this `Dp` value to a truncated [`Px`] value.
    pub fn to_px(&self) -> Px {
        Px::from_f32(self.to_pixels_f32())
    }
}
