//! The indeterminate circular progress drawable.
//!
//! [`ProgressDrawable`] ties the pieces together: it owns the validated
//! configuration, recomputes [`AdjustedGeometry`] on bounds changes, drives
//! the [`AnimationEngine`] from host ticks, and paints the current frame into
//! an [`ArcCanvas`].
//!
//! ## Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use spindle_progress::{ArcDrawCommand, FrameHost, ProgressArgs, ProgressDrawable};
//! use spindle_ui::{Color, Px, PxRect};
//!
//! #[derive(Default)]
//! struct Host {
//!     next_frame: Option<Instant>,
//! }
//!
//! impl FrameHost for Host {
//!     fn request_redraw(&mut self) {}
//!     fn schedule_frame(&mut self, at: Instant) {
//!         self.next_frame = Some(at);
//!     }
//!     fn unschedule_frame(&mut self) {
//!         self.next_frame = None;
//!     }
//! }
//!
//! let config = ProgressArgs::default()
//!     .stroke_width_px(8.0)
//!     .build(&Color::BLACK)
//!     .expect("valid configuration");
//! let mut drawable = ProgressDrawable::new(config, Host::default());
//! drawable.set_bounds(PxRect::new(Px(0), Px(0), Px(96), Px(96)));
//!
//! let t0 = Instant::now();
//! drawable.start(t0);
//! drawable.tick(t0 + Duration::from_millis(16));
//!
//! let mut arcs: Vec<ArcDrawCommand> = Vec::new();
//! drawable.draw(&mut arcs);
//! assert_eq!(arcs.len(), 1);
//! assert!(drawable.host().next_frame.is_some());
//! ```
use std::time::Instant;

use spindle_ui::PxRect;
use tracing::{debug, warn};

use crate::{
    animation::{AnimationEngine, AnimationState, ProgressiveStop, TickOutcome},
    config::ProgressConfig,
    geometry::AdjustedGeometry,
    gradient::{SweepGradient, build_sweep_gradient},
    host::{FRAME_INTERVAL, FrameHost},
    render::{ArcCanvas, ArcDrawCommand, ArcPaint, ColorFilter, PixelFormat, frame_arc},
};

/// An animated, indeterminate circular progress arc.
pub struct ProgressDrawable<H: FrameHost> {
    config: ProgressConfig,
    bounds: PxRect,
    geometry: AdjustedGeometry,
    engine: AnimationEngine,
    alpha: u8,
    color_filter: Option<ColorFilter>,
    shader: Option<SweepGradient>,
    host: H,
}

impl<H: FrameHost> ProgressDrawable<H> {
    /// Creates a stopped drawable with empty bounds.
    pub fn new(config: ProgressConfig, host: H) -> Self {
        let bounds = PxRect::ZERO;
        let geometry = AdjustedGeometry::compute(&config, bounds);
        let engine = AnimationEngine::new(&config, &geometry);
        Self {
            config,
            bounds,
            geometry,
            engine,
            alpha: u8::MAX,
            color_filter: None,
            shader: None,
            host,
        }
    }

    /// Starts animating from the reset state. Restarts if already running.
    pub fn start(&mut self, now: Instant) {
        self.engine.start(now, &self.config, &self.geometry);
        self.schedule_after(now);
        self.host.request_redraw();
    }

    /// Stops at once and clears the arc.
    pub fn stop(&mut self) {
        self.engine.stop(&self.config, &self.geometry);
        self.host.unschedule_frame();
        self.host.request_redraw();
    }

    /// Retracts the arc, then stops and calls `on_stop`.
    ///
    /// Ignored when stopped or already stopping; `on_stop` is then dropped
    /// without being called. With sweep disabled the drawable stops at once
    /// and `on_stop` is called before this returns.
    pub fn progressive_stop(&mut self, now: Instant, on_stop: impl FnOnce() + 'static) {
        match self
            .engine
            .progressive_stop(now, Box::new(on_stop), &self.config, &self.geometry)
        {
            ProgressiveStop::Ignored => {
                debug!("progressive stop ignored");
            }
            ProgressiveStop::Stopped(on_stop) => {
                self.host.unschedule_frame();
                self.host.request_redraw();
                on_stop();
            }
            ProgressiveStop::Retracting => {
                self.schedule_after(now);
            }
        }
    }

    /// Cancels a progressive stop in flight. The drawable keeps running and
    /// the stop callback is never called.
    pub fn cancel_progressive_stop(&mut self) {
        if self.engine.cancel_progressive_stop() {
            self.host.request_redraw();
        }
    }

    /// Whether the drawable is started.
    pub fn is_running(&self) -> bool {
        self.engine.state().running
    }

    /// Animation frame callback. Advances the animations to `now`.
    pub fn tick(&mut self, now: Instant) {
        match self.engine.tick(now, &self.config, &self.geometry) {
            TickOutcome::Animating => {
                self.schedule_after(now);
                self.host.request_redraw();
            }
            TickOutcome::Idle => {
                self.host.unschedule_frame();
            }
            TickOutcome::Stopped(on_stop) => {
                self.host.unschedule_frame();
                self.host.request_redraw();
                if let Some(on_stop) = on_stop {
                    on_stop();
                }
            }
        }
    }

    /// Paints the current frame. Paints nothing while stopped.
    pub fn draw(&mut self, canvas: &mut dyn ArcCanvas) {
        let Some(arc) = frame_arc(
            self.engine.state(),
            self.config.sweep(),
            self.geometry.adjusted_max_sweep_angle,
        ) else {
            return;
        };

        let paint = if self.config.gradient() {
            let shader = self.build_shader(arc.start_angle, arc.sweep_angle);
            self.shader = Some(shader.clone());
            ArcPaint::SweepGradient(shader)
        } else {
            ArcPaint::Solid(self.config.primary_color())
        };

        let mut command = ArcDrawCommand {
            rect: self.geometry.draw_rect,
            start_angle_degrees: arc.start_angle,
            sweep_angle_degrees: arc.sweep_angle,
            stroke_width_px: self.config.stroke_width_px(),
            cap: self.config.stroke_cap(),
            paint,
        };
        command.apply_opacity(self.alpha as f32 / u8::MAX as f32);
        if let Some(filter) = self.color_filter {
            command.apply_color_filter(filter);
        }
        canvas.draw_arc(&command);
    }

    /// Lays the arc out inside `bounds` and recomputes the sweep range.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_bounds(&mut self, bounds: PxRect) {
        self.bounds = bounds;
        self.geometry = AdjustedGeometry::compute(&self.config, bounds);
        if bounds.is_empty() {
            warn!("bounds are empty, the arc will not be visible");
        } else if self.geometry.draw_rect.radius() <= 0.0 {
            warn!(
                stroke_width_px = self.config.stroke_width_px(),
                "bounds leave no room for the arc"
            );
        }
        self.engine.update_geometry(&self.config, &self.geometry);

        if self.config.gradient() {
            let state = self.engine.state();
            self.shader =
                Some(self.build_shader(state.current_rotation, state.current_sweep_angle));
        }
        debug!(
            min = self.geometry.adjusted_min_sweep_angle,
            max = self.geometry.adjusted_max_sweep_angle,
            "sweep range adjusted"
        );
        self.host.request_redraw();
    }

    /// Always [`PixelFormat::Translucent`].
    pub fn opacity(&self) -> PixelFormat {
        PixelFormat::Translucent
    }

    /// Sets the paint alpha, `255` for opaque.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
        self.host.request_redraw();
    }

    /// Current paint alpha.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Sets or clears the paint color filter.
    pub fn set_color_filter(&mut self, color_filter: Option<ColorFilter>) {
        self.color_filter = color_filter;
        self.host.request_redraw();
    }

    /// Current paint color filter.
    pub fn color_filter(&self) -> Option<ColorFilter> {
        self.color_filter
    }

    /// The configuration the drawable was built with.
    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Current bounds.
    pub fn bounds(&self) -> PxRect {
        self.bounds
    }

    /// Draw rectangle and corrected sweep range for the current bounds.
    pub fn geometry(&self) -> &AdjustedGeometry {
        &self.geometry
    }

    /// Current animation values.
    pub fn state(&self) -> &AnimationState {
        self.engine.state()
    }

    /// The last gradient built. Always `None` for a solid arc.
    pub fn shader(&self) -> Option<&SweepGradient> {
        self.shader.as_ref()
    }

    /// The host capability.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host capability, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn build_shader(&self, start_angle: f32, sweep_angle: f32) -> SweepGradient {
        build_sweep_gradient(
            self.config.colors(),
            self.geometry.draw_rect.center(),
            start_angle,
            sweep_angle,
        )
    }

    fn schedule_after(&mut self, now: Instant) {
        if self.engine.is_animating() {
            self.host.schedule_frame(now + FRAME_INTERVAL);
        } else {
            self.host.unschedule_frame();
        }
    }
}
