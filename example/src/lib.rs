//! Headless demo: a simulated host drives a gradient progress arc through a
//! few sweep cycles and a progressive stop, logging the arcs it paints.
//!
//! Run with `RUST_LOG=debug` to see the drawable's own lifecycle events.
mod host;

use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};

use spindle_progress::{ProgressDrawable, ProgressStyle};
use spindle_ui::{Color, Px, PxRect, dp};
use tracing::{error, info};

use crate::host::{LoggingCanvas, SimulatedHost};

/// How long the arc spins before the progressive stop.
const SPIN_TIME: Duration = Duration::from_secs(4);
/// Upper bound on the simulated run.
const RUN_LIMIT: Duration = Duration::from_secs(10);

/// Runs the demo.
pub fn run() {
    init_tracing();
    dp::set_scale_factor(2.0);

    let style = ProgressStyle::default()
        .gradient_colors(vec![
            "#3F51B5".to_string(),
            "teal".to_string(),
            "#FFC107".to_string(),
        ])
        .stroke_cap(1)
        .min_sweep_angle(20.0)
        .max_sweep_angle(300.0);
    let config = match style.resolve().build(&Color::BLACK) {
        Ok(config) => config,
        Err(err) => {
            error!("invalid progress configuration: {err}");
            return;
        }
    };

    let mut drawable = ProgressDrawable::new(config, SimulatedHost::default());
    drawable.set_bounds(PxRect::new(Px(0), Px(0), Px(144), Px(144)));
    info!(
        min = drawable.geometry().adjusted_min_sweep_angle,
        max = drawable.geometry().adjusted_max_sweep_angle,
        "sweep range"
    );

    let mut canvas = LoggingCanvas::every(8);
    let t0 = Instant::now();
    drawable.start(t0);

    let stopped = Rc::new(Cell::new(false));
    let mut stop_requested = false;
    while let Some(now) = drawable.host_mut().take_frame() {
        if now > t0 + RUN_LIMIT {
            error!("progressive stop did not finish in time");
            break;
        }
        if !stop_requested && now >= t0 + SPIN_TIME {
            let stopped = Rc::clone(&stopped);
            drawable.progressive_stop(now, move || {
                info!("progress stopped");
                stopped.set(true);
            });
            stop_requested = true;
        }
        drawable.tick(now);
        if drawable.host_mut().take_redraw() {
            drawable.draw(&mut canvas);
        }
    }

    info!(
        frames = canvas.frames(),
        stopped = stopped.get(),
        elapsed = ?drawable.host().clock().saturating_duration_since(t0),
        "demo finished"
    );
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,example=info,spindle_progress=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
