// Timeline service
// Pure time-window model: countdown target and pointer position for one tick

use chrono::{DateTime, Duration, Local};

use crate::models::booking::BookingWindow;
use crate::models::glance::GlanceSnapshot;
use crate::utils::date::{start_of_hour, start_of_previous_hour};

/// The rolling one-hour frame the progress pointer is scaled against.
///
/// Distinct from the booking window: it is anchored to wall-clock hour
/// boundaries and recomputed from `now` on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTimeline {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl DisplayTimeline {
    /// Width of the frame.
    pub fn span(&self) -> Duration {
        self.end - self.start
    }

    /// A frame with no positive width cannot scale a position.
    pub fn is_degenerate(&self) -> bool {
        self.span() <= Duration::zero()
    }
}

/// Compute the display timeline for `now`.
///
/// The frame runs from the top of the previous hour to the top of `now`'s own
/// hour. Note the right edge is the *current* hour's start, mirroring the
/// shipped widget: when `now` sits exactly on an hour boundary the pointer
/// reads 1.0 rather than restarting at the left edge.
pub fn display_timeline(now: DateTime<Local>) -> DisplayTimeline {
    DisplayTimeline {
        start: start_of_previous_hour(now),
        end: start_of_hour(now),
    }
}

/// Fractional offset of `now` within `timeline`, clamped to `[0, 1]`.
///
/// A degenerate timeline yields 0.0; the division is never taken against a
/// non-positive span.
pub fn pointer_position(now: DateTime<Local>, timeline: &DisplayTimeline) -> f64 {
    if timeline.is_degenerate() {
        return 0.0;
    }
    let total = timeline.span().num_milliseconds() as f64;
    let elapsed = (now - timeline.start).num_milliseconds() as f64;
    (elapsed / total).clamp(0.0, 1.0)
}

/// The instant the rendering layer counts down to.
///
/// Identity over `window.end`, kept as a named seam so surfaces query the
/// model instead of reaching into the raw window.
pub fn countdown_target(window: &BookingWindow) -> DateTime<Local> {
    window.end()
}

/// Non-negative time left until `target`, clamped to zero once passed.
pub fn remaining_until(target: DateTime<Local>, now: DateTime<Local>) -> Duration {
    (target - now).max(Duration::zero())
}

/// Compose one tick's display values from a clock reading and the booking.
pub fn glance_snapshot(now: DateTime<Local>, window: &BookingWindow) -> GlanceSnapshot {
    let timeline = display_timeline(now);
    GlanceSnapshot {
        now,
        countdown_target: countdown_target(window),
        pointer_position: pointer_position(now, &timeline),
    }
}
