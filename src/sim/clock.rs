//! Frame clock
//!
//! Turns the host's animation-frame timestamps (milliseconds) into the
//! seconds-based `dt` that drives all motion, plus the unclamped host time
//! that drives timers.

use crate::consts::MAX_FRAME_DT;

/// Time covered by one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStep {
    /// Motion step in seconds, clamped to `[0, MAX_FRAME_DT]`
    pub dt: f32,
    /// Host-clock seconds since the previous frame (never negative)
    pub wall: f64,
}

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Seconds since the previous timestamp
    ///
    /// The first call returns 0. Results are clamped to `[0, MAX_FRAME_DT]` so a
    /// stalled tab or a clock hiccup can't fling cars across the field.
    pub fn delta(&mut self, timestamp_ms: f64) -> f32 {
        self.step(timestamp_ms).dt
    }

    /// Motion step and host-clock time since the previous timestamp
    ///
    /// Only `dt` is clamped; `wall` keeps the real gap so timers run on the
    /// host clock even when frames are slow.
    pub fn step(&mut self, timestamp_ms: f64) -> FrameStep {
        let wall = match self.last_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        FrameStep {
            dt: (wall as f32).clamp(0.0, MAX_FRAME_DT),
            wall,
        }
    }

    /// Forget the previous timestamp (next `delta` returns 0)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(12_345.0), 0.0);
    }

    #[test]
    fn test_delta_in_seconds() {
        let mut clock = FrameClock::new();
        clock.delta(1_000.0);
        let dt = clock.delta(1_016.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_clamped() {
        let mut clock = FrameClock::new();
        clock.delta(0.0);
        assert_eq!(clock.delta(5_000.0), MAX_FRAME_DT);
        // Backwards timestamps never produce negative time
        assert_eq!(clock.delta(4_000.0), 0.0);
    }

    #[test]
    fn test_step_keeps_wall_time() {
        let mut clock = FrameClock::new();
        clock.step(0.0);
        let step = clock.step(500.0);
        assert_eq!(step.dt, MAX_FRAME_DT);
        assert!((step.wall - 0.5).abs() < 1e-9);
        assert_eq!(clock.step(400.0), FrameStep::default());
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        clock.delta(100.0);
        clock.reset();
        assert_eq!(clock.delta(200.0), 0.0);
    }
}
