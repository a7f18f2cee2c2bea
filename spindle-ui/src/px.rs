//! Physical pixel values and rectangles.
//!
//! Physical pixels correspond directly to screen pixels. The origin is the
//! top-left corner, X grows to the right and Y grows downward.
//!
//! ```
//! use spindle_ui::px::{Px, PxRect};
//!
//! let bounds = PxRect::new(Px(0), Px(0), Px(100), Px(60));
//! assert_eq!(bounds.right(), Px(100));
//! assert!(!bounds.is_empty());
//! ```

use std::ops::Add;

/// A physical pixel coordinate value.
///
/// Negative values are allowed for off-screen positions.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Converts to an `f32`.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an `f32`, truncating toward zero.
    pub fn from_f32(value: f32) -> Self {
        Px(value as i32)
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

/// A rectangle in physical pixel space, given by its top-left corner and
/// size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: Px,
    /// The y-coordinate of the top-left corner
    pub y: Px,
    /// The width of the rectangle
    pub width: Px,
    /// The height of the rectangle
    pub height: Px,
}

impl PxRect {
    /// A zero rectangle (0×0 at position (0, 0)).
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle from position and size.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge.
    pub fn left(&self) -> Px {
        self.x
    }

    /// Top edge.
    pub fn top(&self) -> Px {
        self.y
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> Px {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> Px {
        self.y + self.height
    }

    /// Returns `true` when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width.0 <= 0 || self.height.0 <= 0
    }
}
