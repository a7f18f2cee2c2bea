//! Capabilities the embedding UI toolkit provides to a drawable.
use std::time::{Duration, Instant};

/// Interval between animation frames requested from the host.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Frame scheduling and invalidation provided by the host.
///
/// The host calls [`ProgressDrawable::tick`](crate::ProgressDrawable::tick)
/// when a scheduled instant arrives, and
/// [`ProgressDrawable::draw`](crate::ProgressDrawable::draw) during its render
/// pass after a redraw was requested.
pub trait FrameHost {
    /// Marks the drawable dirty so it is painted on the next render pass.
    fn request_redraw(&mut self);

    /// Asks for a `tick` at `at`, replacing any earlier request.
    fn schedule_frame(&mut self, at: Instant);

    /// Withdraws a pending frame request, if any.
    fn unschedule_frame(&mut self);
}

impl<H: FrameHost + ?Sized> FrameHost for &mut H {
    fn request_redraw(&mut self) {
        (**self).request_redraw();
    }

    fn schedule_frame(&mut self, at: Instant) {
        (**self).schedule_frame(at);
    }

    fn unschedule_frame(&mut self) {
        (**self).unschedule_frame();
    }
}
