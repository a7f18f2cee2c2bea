use crate::easing::Easing;

use super::AnimationState;

/// The two halves of one sweep cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SweepPhase {
    /// The arc grows toward the maximum sweep.
    #[default]
    Appearing,
    /// The arc shrinks toward the minimum sweep.
    Disappearing,
}

impl SweepPhase {
    /// Easing curve for this phase.
    pub fn easing(self) -> Easing {
        Easing::FastOutSlowIn
    }

    /// The phase that follows this one.
    pub fn next(self) -> Self {
        match self {
            SweepPhase::Appearing => SweepPhase::Disappearing,
            SweepPhase::Disappearing => SweepPhase::Appearing,
        }
    }

    /// Sweep angle for eased progress `value` within this phase.
    ///
    /// The very first appearing phase grows from zero instead of from `min`.
    pub fn sweep_angle(self, value: f32, first_sweep: bool, min: f32, max: f32) -> f32 {
        match self {
            SweepPhase::Appearing if first_sweep => value * max,
            SweepPhase::Appearing => min + value * (max - min),
            SweepPhase::Disappearing => max - value * (max - min),
        }
    }

    /// Applies the side effects of this phase finishing naturally and moves
    /// `state` into the next phase.
    ///
    /// The rotation offset advances by the angle the tail travelled, so the
    /// gap left by the shrinking or growing arc keeps moving forward.
    pub(crate) fn complete(self, state: &mut AnimationState, min: f32, max: f32) {
        match self {
            SweepPhase::Appearing => {
                state.first_sweep = false;
                state.current_rotation_offset += 360.0 - max;
                if state.current_rotation_offset > 360.0 {
                    state.current_rotation_offset -= 360.0;
                }
            }
            SweepPhase::Disappearing => {
                state.current_rotation_offset += min;
            }
        }
        state.sweep_phase = self.next();
    }
}
