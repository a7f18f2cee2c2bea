//! Time-driven animation state for the progress arc.
//!
//! Four progressions drive the arc:
//!
//! - rotation, a linear `0 → 360` turn repeating forever;
//! - the sweep cycle, alternating between [`SweepPhase::Appearing`] and
//!   [`SweepPhase::Disappearing`];
//! - the end ratio, a linear `1 → 0` retraction used by a progressive stop.
//!
//! The engine owns no clock and schedules nothing. Every entry point takes the
//! current [`Instant`], which keeps runs deterministic when the instants are
//! simulated.
mod animator;
mod sweep;

use std::time::Instant;

pub use animator::{Animator, Repeat, Sample};
pub use sweep::SweepPhase;
use tracing::debug;

use crate::{config::ProgressConfig, easing::Easing, geometry::AdjustedGeometry};

/// Upper bound on sweep transitions replayed in one tick. A host that stalls
/// for longer restarts the current phase at the tick instant.
const MAX_CATCH_UP_TRANSITIONS: usize = 64;

/// Callback invoked once a progressive stop completes.
pub type StopCallback = Box<dyn FnOnce()>;

/// Values the frame renderer reads. Mutated only by [`AnimationEngine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Visible sweep, in degrees.
    pub current_sweep_angle: f32,
    /// Rotation of the arc, in degrees.
    pub current_rotation: f32,
    /// Accumulated correction subtracted from the rotation, in degrees.
    pub current_rotation_offset: f32,
    /// Fraction of the arc still visible during a progressive stop.
    pub current_end_ratio: f32,
    /// Current half of the sweep cycle.
    pub sweep_phase: SweepPhase,
    /// Whether the first appearing phase since the last reset is running.
    pub first_sweep: bool,
    /// Whether the drawable is started.
    pub running: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            current_sweep_angle: 0.0,
            current_rotation: 0.0,
            current_rotation_offset: 0.0,
            current_end_ratio: 1.0,
            sweep_phase: SweepPhase::Appearing,
            first_sweep: true,
            running: false,
        }
    }
}

/// Result of [`AnimationEngine::tick`].
pub enum TickOutcome {
    /// No animation is active. Nothing needs another frame.
    Idle,
    /// At least one animation is active and wants another frame.
    Animating,
    /// A progressive stop completed on this tick and the engine is stopped.
    /// The caller invokes the callback.
    Stopped(Option<StopCallback>),
}

/// Result of [`AnimationEngine::progressive_stop`].
pub enum ProgressiveStop {
    /// Not running, or a progressive stop is already in flight. The callback
    /// was dropped.
    Ignored,
    /// Sweep is disabled, so the engine stopped at once. The caller invokes
    /// the callback.
    Stopped(StopCallback),
    /// The end animation started.
    Retracting,
}

/// Drives [`AnimationState`] from the rotation, sweep and end animators.
pub struct AnimationEngine {
    state: AnimationState,
    rotation: Animator,
    sweep: Animator,
    end: Animator,
    on_stop: Option<StopCallback>,
}

impl AnimationEngine {
    /// Creates a stopped engine in its reset state.
    pub fn new(config: &ProgressConfig, geometry: &AdjustedGeometry) -> Self {
        let mut engine = Self {
            state: AnimationState::default(),
            rotation: Animator::new(
                config.effective_rotation_duration(),
                Easing::Linear,
                Repeat::Infinite,
            ),
            sweep: Animator::new(
                config.effective_sweep_duration(),
                SweepPhase::Appearing.easing(),
                Repeat::Once,
            ),
            end: Animator::new(config.end_duration(0.0), Easing::Linear, Repeat::Once),
            on_stop: None,
        };
        engine.reset(config, geometry);
        engine
    }

    /// Current animation values.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Whether any animator is active.
    pub fn is_animating(&self) -> bool {
        self.rotation.is_running() || self.sweep.is_running() || self.end.is_running()
    }

    /// Whether a progressive stop is retracting the arc.
    pub fn is_stopping(&self) -> bool {
        self.end.is_running()
    }

    /// Starts, or restarts, every enabled animation at `now` and samples
    /// their first frame.
    pub fn start(&mut self, now: Instant, config: &ProgressConfig, geometry: &AdjustedGeometry) {
        self.state.running = true;
        self.reset(config, geometry);
        if config.rotation() {
            self.rotation.start(now);
        }
        if config.sweep() {
            self.sweep.start(now);
        }
        debug!(
            rotation = config.rotation(),
            sweep = config.sweep(),
            "progress animation started"
        );
        self.advance(now, config, geometry);
    }

    /// Stops every animation and restores the reset state. Safe to call when
    /// already stopped.
    pub fn stop(&mut self, config: &ProgressConfig, geometry: &AdjustedGeometry) {
        let was_running = self.state.running;
        self.state.running = false;
        self.reset(config, geometry);
        if was_running {
            debug!("progress animation stopped");
        }
    }

    /// Begins retracting the arc, stopping once it has vanished.
    pub fn progressive_stop(
        &mut self,
        now: Instant,
        on_stop: StopCallback,
        config: &ProgressConfig,
        geometry: &AdjustedGeometry,
    ) -> ProgressiveStop {
        if !self.state.running || self.end.is_running() {
            return ProgressiveStop::Ignored;
        }
        if !config.sweep() {
            self.stop(config, geometry);
            return ProgressiveStop::Stopped(on_stop);
        }

        self.end
            .set_duration(config.end_duration(self.state.current_sweep_angle));
        self.end.start(now);
        self.on_stop = Some(on_stop);
        debug!(duration = ?self.end.duration(), "progressive stop started");
        ProgressiveStop::Retracting
    }

    /// Cancels an in-flight progressive stop. The arc returns to full length,
    /// the engine keeps running and the stop callback is dropped uninvoked.
    ///
    /// Returns whether a progressive stop was cancelled.
    pub fn cancel_progressive_stop(&mut self) -> bool {
        if !self.end.cancel() {
            return false;
        }
        self.state.current_end_ratio = 1.0;
        self.on_stop = None;
        debug!("progressive stop cancelled");
        true
    }

    /// Advances every active animation to `now`.
    pub fn tick(
        &mut self,
        now: Instant,
        config: &ProgressConfig,
        geometry: &AdjustedGeometry,
    ) -> TickOutcome {
        if !self.state.running {
            return TickOutcome::Idle;
        }
        if let Some(stopped) = self.advance(now, config, geometry) {
            return stopped;
        }
        if self.is_animating() {
            TickOutcome::Animating
        } else {
            TickOutcome::Idle
        }
    }

    /// Re-fits the current sweep after the sweep range changed.
    pub fn update_geometry(&mut self, config: &ProgressConfig, geometry: &AdjustedGeometry) {
        let max = geometry.adjusted_max_sweep_angle;
        self.state.current_sweep_angle = if config.sweep() {
            self.state.current_sweep_angle.min(max)
        } else {
            max
        };
    }

    fn reset(&mut self, config: &ProgressConfig, geometry: &AdjustedGeometry) {
        self.state.sweep_phase = SweepPhase::Appearing;
        self.state.first_sweep = true;
        self.state.current_end_ratio = 1.0;
        self.state.current_rotation = config.start_at_degree();
        self.state.current_rotation_offset = 0.0;
        if !config.sweep() {
            self.state.current_sweep_angle = geometry.adjusted_max_sweep_angle;
        }

        self.end.cancel();
        self.on_stop = None;
        self.rotation.cancel();
        self.sweep.cancel();
    }

    // Returns `Some` only when a progressive stop completed.
    fn advance(
        &mut self,
        now: Instant,
        config: &ProgressConfig,
        geometry: &AdjustedGeometry,
    ) -> Option<TickOutcome> {
        if let Some(sample) = self.rotation.sample(now) {
            self.state.current_rotation = config.start_at_degree() + sample.value * 360.0;
        }

        self.advance_sweep(now, geometry);

        let sample = self.end.sample(now)?;
        self.state.current_end_ratio = 1.0 - sample.value;
        if sample.finished_at.is_none() {
            return None;
        }

        let on_stop = self.on_stop.take();
        self.stop(config, geometry);
        debug!("progressive stop finished");
        Some(TickOutcome::Stopped(on_stop))
    }

    fn advance_sweep(&mut self, now: Instant, geometry: &AdjustedGeometry) {
        let min = geometry.adjusted_min_sweep_angle;
        let max = geometry.adjusted_max_sweep_angle;
        let mut transitions = 0;

        while let Some(sample) = self.sweep.sample(now) {
            let phase = self.state.sweep_phase;
            self.state.current_sweep_angle =
                phase.sweep_angle(sample.value, self.state.first_sweep, min, max);

            let Some(finished_at) = sample.finished_at else {
                break;
            };
            phase.complete(&mut self.state, min, max);
            transitions += 1;
            // Chain from the completion instant so late ticks stay in phase.
            if transitions < MAX_CATCH_UP_TRANSITIONS {
                self.sweep.start(finished_at);
            } else {
                self.sweep.start(now);
            }
        }
    }
}
