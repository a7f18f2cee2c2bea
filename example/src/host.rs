use std::time::Instant;

use spindle_progress::{ArcCanvas, ArcDrawCommand, ArcPaint, FrameHost};
use tracing::info;

/// A host whose clock only moves when a scheduled frame is taken.
#[derive(Debug, Default)]
pub struct SimulatedHost {
    clock: Option<Instant>,
    next_frame: Option<Instant>,
    dirty: bool,
}

impl SimulatedHost {
    /// Advances the clock to the pending frame and returns its instant.
    pub fn take_frame(&mut self) -> Option<Instant> {
        let at = self.next_frame.take()?;
        self.clock = Some(at);
        Some(at)
    }

    /// Returns whether a redraw was requested since the last call.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Instant of the last frame taken.
    pub fn clock(&self) -> Instant {
        self.clock.unwrap_or_else(Instant::now)
    }
}

impl FrameHost for SimulatedHost {
    fn request_redraw(&mut self) {
        self.dirty = true;
    }

    fn schedule_frame(&mut self, at: Instant) {
        self.next_frame = Some(at);
    }

    fn unschedule_frame(&mut self) {
        self.next_frame = None;
    }
}

/// Logs every `interval`-th arc it is asked to paint.
#[derive(Debug)]
pub struct LoggingCanvas {
    interval: usize,
    frames: usize,
}

impl LoggingCanvas {
    /// Creates a canvas that logs one arc out of every `interval`.
    pub fn every(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
        }
    }

    /// Number of arcs painted so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl ArcCanvas for LoggingCanvas {
    fn draw_arc(&mut self, command: &ArcDrawCommand) {
        if self.frames % self.interval == 0 {
            let stops = match &command.paint {
                ArcPaint::Solid(_) => 1,
                ArcPaint::SweepGradient(gradient) => gradient.stops.len(),
            };
            info!(
                frame = self.frames,
                start = format_args!("{:.1}", command.start_angle_degrees),
                sweep = format_args!("{:.1}", command.sweep_angle_degrees),
                stops,
                "arc"
            );
        }
        self.frames += 1;
    }
}
