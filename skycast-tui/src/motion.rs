//! Motion engine: turns a descriptor plus elapsed time into a frame offset

use std::time::Duration;

use crate::visual::{MotionKind, VisualDescriptor};

/// Sway amplitude in columns.
const SWAY_COLUMNS: f64 = 2.0;

/// How to place and style a sprite for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionFrame {
    /// Horizontal offset in columns.
    pub dx: i16,
    /// Vertical offset in rows, positive is down.
    pub dy: i16,
    pub visible: bool,
    /// Draw in bold.
    pub emphasized: bool,
}

impl MotionFrame {
    pub const STILL: Self = Self {
        dx: 0,
        dy: 0,
        visible: true,
        emphasized: false,
    };
}

impl Default for MotionFrame {
    fn default() -> Self {
        Self::STILL
    }
}

/// Position in the current cycle, in `[0, 1)`.
fn cycle_phase(elapsed: Duration, period: Duration) -> f64 {
    (elapsed.as_secs_f64() / period.as_secs_f64()).fract()
}

/// 0 at the cycle edges, 1 at mid-cycle.
fn triangle(phase: f64) -> f64 {
    1.0 - (2.0 * phase - 1.0).abs()
}

fn mid_cycle(phase: f64) -> bool {
    (0.25..0.75).contains(&phase)
}

/// Frame for `visual` after `elapsed` of animation time.
///
/// Descriptors without motion or without a period stay still.
pub fn motion_frame(visual: &VisualDescriptor, elapsed: Duration) -> MotionFrame {
    let Some(period) = visual.period.filter(|p| !p.is_zero()) else {
        return MotionFrame::STILL;
    };
    let phase = cycle_phase(elapsed, period);
    let wave = triangle(phase);

    match visual.motion {
        MotionKind::Sway => MotionFrame {
            dx: (SWAY_COLUMNS * (2.0 * wave - 1.0)).round() as i16,
            ..MotionFrame::STILL
        },
        MotionKind::Bob => MotionFrame {
            dy: wave.round() as i16,
            ..MotionFrame::STILL
        },
        MotionKind::Drift => MotionFrame {
            dy: -(wave.round() as i16),
            ..MotionFrame::STILL
        },
        MotionKind::Flicker => MotionFrame {
            visible: !mid_cycle(phase),
            ..MotionFrame::STILL
        },
        MotionKind::Pulse => MotionFrame {
            emphasized: mid_cycle(phase),
            ..MotionFrame::STILL
        },
        MotionKind::None => MotionFrame::STILL,
    }
}
