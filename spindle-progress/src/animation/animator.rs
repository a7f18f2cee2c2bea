use std::time::{Duration, Instant};

use crate::easing::Easing;

/// How often an [`Animator`] runs before it finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    /// Runs once and reports completion.
    Once,
    /// Restarts from zero forever, never completing.
    Infinite,
}

/// Progress of an [`Animator`] at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Linear progress in `[0.0, 1.0]`.
    pub fraction: f32,
    /// Progress after easing.
    pub value: f32,
    /// When the animation completed, if it completed at or before the sampled
    /// instant. The animator is stopped once this is reported.
    pub finished_at: Option<Instant>,
}

/// A time-driven `0.0 → 1.0` progression.
///
/// The animator holds no clock. Callers pass the current instant to
/// [`Animator::start`] and [`Animator::sample`].
#[derive(Clone, Debug)]
pub struct Animator {
    duration: Duration,
    easing: Easing,
    repeat: Repeat,
    started_at: Option<Instant>,
}

impl Animator {
    /// Shortest allowed duration.
    pub const MIN_DURATION: Duration = Duration::from_millis(1);

    /// Creates a stopped animator. Durations below [`Self::MIN_DURATION`] are
    /// raised to it.
    pub fn new(duration: Duration, easing: Easing, repeat: Repeat) -> Self {
        Self {
            duration: duration.max(Self::MIN_DURATION),
            easing,
            repeat,
            started_at: None,
        }
    }

    /// Starts, or restarts, the animation at `now`.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Stops the animation without completing it. Returns whether it was
    /// running.
    pub fn cancel(&mut self) -> bool {
        self.started_at.take().is_some()
    }

    /// Whether the animation has been started and has not finished or been
    /// cancelled.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Length of one run.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Changes the length of the next run.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration.max(Self::MIN_DURATION);
    }

    /// Samples progress at `now`. Returns `None` when not running.
    ///
    /// A one-shot animation that has reached its end reports `fraction` 1,
    /// sets `finished_at` and stops itself.
    pub fn sample(&mut self, now: Instant) -> Option<Sample> {
        let started_at = self.started_at?;
        let elapsed = now.saturating_duration_since(started_at);

        let fraction: f64 = match self.repeat {
            Repeat::Infinite => {
                let period = self.duration.as_nanos();
                (elapsed.as_nanos() % period) as f64 / period as f64
            }
            Repeat::Once if elapsed >= self.duration => {
                self.started_at = None;
                return Some(Sample {
                    fraction: 1.0,
                    value: self.easing.apply(1.0),
                    finished_at: Some(started_at + self.duration),
                });
            }
            Repeat::Once => elapsed.as_nanos() as f64 / self.duration.as_nanos() as f64,
        };
        let fraction = fraction as f32;

        Some(Sample {
            fraction,
            value: self.easing.apply(fraction),
            finished_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_finishes_at_exact_end() {
        let t0 = Instant::now();
        let mut animator = Animator::new(Duration::from_millis(100), Easing::Linear, Repeat::Once);
        assert_eq!(animator.sample(t0), None);

        animator.start(t0);
        let start = animator.sample(t0).expect("running");
        assert_eq!(start.fraction, 0.0);
        assert_eq!(start.finished_at, None);

        let half = animator.sample(t0 + Duration::from_millis(50)).expect("running");
        assert_eq!(half.fraction, 0.5);

        let late = animator.sample(t0 + Duration::from_millis(130)).expect("finishing");
        assert_eq!(late.fraction, 1.0);
        assert_eq!(late.finished_at, Some(t0 + Duration::from_millis(100)));
        assert!(!animator.is_running());
        assert_eq!(animator.sample(t0 + Duration::from_millis(140)), None);
    }

    #[test]
    fn test_infinite_wraps_and_never_finishes() {
        let t0 = Instant::now();
        let mut animator =
            Animator::new(Duration::from_millis(400), Easing::Linear, Repeat::Infinite);
        animator.start(t0);

        let sample = animator.sample(t0 + Duration::from_millis(1300)).expect("running");
        assert_eq!(sample.fraction, 0.25);
        assert_eq!(sample.finished_at, None);
        assert!(animator.is_running());
    }

    #[test]
    fn test_cancel_reports_whether_running() {
        let mut animator = Animator::new(Duration::from_millis(10), Easing::Linear, Repeat::Once);
        assert!(!animator.cancel());
        animator.start(Instant::now());
        assert!(animator.cancel());
        assert!(!animator.is_running());
    }

    #[test]
    fn test_zero_duration_is_raised_to_minimum() {
        let mut animator = Animator::new(Duration::ZERO, Easing::Linear, Repeat::Infinite);
        assert_eq!(animator.duration(), Animator::MIN_DURATION);
        animator.set_duration(Duration::ZERO);
        assert_eq!(animator.duration(), Animator::MIN_DURATION);
    }

    #[test]
    fn test_easing_is_applied_to_value() {
        let t0 = Instant::now();
        let mut animator =
            Animator::new(Duration::from_millis(100), Easing::FastOutSlowIn, Repeat::Once);
        animator.start(t0);
        let sample = animator.sample(t0 + Duration::from_millis(50)).expect("running");
        assert_eq!(sample.fraction, 0.5);
        assert!(sample.value > sample.fraction);
    }
}
