//! Easing curves used by the indicator animations.

/// Maps linear animation progress to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Identity mapping.
    #[default]
    Linear,
    /// Material "fast out, slow in" curve, cubic bezier `(0.4, 0.0, 0.2, 1.0)`.
    FastOutSlowIn,
}

impl Easing {
    /// Applies the curve. Input is clamped to `[0.0, 1.0]`.
    pub fn apply(self, progress: f32) -> f32 {
        let progress = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => progress,
            Easing::FastOutSlowIn => cubic_bezier_easing(progress, 0.4, 0.0, 0.2, 1.0),
        }
    }
}

fn cubic_bezier(t: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    let u = 1.0 - t;
    (u * u * u * a) + (3.0 * u * u * t * b) + (3.0 * u * t * t * c) + (t * t * t * d)
}

fn cubic_bezier_easing(progress: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Endpoints are exact so completed animations land on their target value.
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    let x = progress;
    let mut lo = 0.0;
    let mut hi = 1.0;
    let mut t = x;

    for _ in 0..16 {
        let mid = (lo + hi) * 0.5;
        let mid_x = cubic_bezier(mid, 0.0, x1, x2, 1.0);
        if mid_x < x {
            lo = mid;
        } else {
            hi = mid;
        }
        t = mid;
    }

    cubic_bezier(t, 0.0, y1, y2, 1.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::FastOutSlowIn] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn test_fast_out_slow_in_is_monotonic_and_front_loaded() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = Easing::FastOutSlowIn.apply(step as f32 / 100.0);
            assert!(value + 1e-4 >= previous, "curve went backwards at {step}");
            previous = value;
        }
        // The curve decelerates: past the midpoint in time it is well past
        // the midpoint in value.
        assert!(Easing::FastOutSlowIn.apply(0.5) > 0.7);
    }
}
