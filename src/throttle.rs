//! Rate limiting for live slider input.
//!
//! Timestamps are caller-supplied milliseconds (`performance.now()` on the web) so the
//! limiter works the same in wasm, native code and tests.

use crate::controls::ControlState;
use crate::error::Result;
use crate::polygon::PolygonPath;

pub const SMOOTHNESS_THROTTLE_MS: f64 = 50.0;

/// Leading and trailing edge throttle.
///
/// The first value after a quiet period is released at once; values submitted inside the
/// window are held and only the newest is released by [`Throttle::poll`] once the window ends.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval_ms: f64,
    last_emit: Option<f64>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(interval_ms: f64) -> Self {
        Throttle { interval_ms, last_emit: None, pending: None }
    }

    fn window_open(&self, now_ms: f64) -> bool {
        match self.last_emit {
            Some(last) => now_ms - last >= self.interval_ms,
            None => true,
        }
    }

    pub fn submit(&mut self, value: T, now_ms: f64) -> Option<T> {
        if self.window_open(now_ms) {
            self.last_emit = Some(now_ms);
            self.pending = None;
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        if self.pending.is_some() && self.window_open(now_ms) {
            self.last_emit = Some(now_ms);
            self.pending.take()
        } else {
            None
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Live preview state: sides and rotation apply immediately, smoothness is throttled.
#[derive(Debug, Clone)]
pub struct LivePolygon {
    controls: ControlState,
    smoothness: Throttle<f64>,
}

impl Default for LivePolygon {
    fn default() -> Self {
        LivePolygon {
            controls: ControlState::default(),
            smoothness: Throttle::new(SMOOTHNESS_THROTTLE_MS),
        }
    }
}

impl LivePolygon {
    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn set_sides(&mut self, sides: u32) {
        self.controls.set_sides(sides);
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.controls.set_rotation(rotation);
    }

    /// Returns true when the applied smoothness changed.
    pub fn set_smoothness(&mut self, smoothness: f64, now_ms: f64) -> bool {
        match self.smoothness.submit(smoothness, now_ms) {
            Some(v) => {
                self.controls.set_smoothness(v);
                true
            }
            None => false,
        }
    }

    /// Applies a held smoothness value once its window has passed.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.smoothness.poll(now_ms) {
            Some(v) => {
                self.controls.set_smoothness(v);
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Result<PolygonPath> {
        self.controls.request().generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_value_passes() {
        let mut t = Throttle::new(50.0);
        assert_eq!(t.submit(1, 0.0), Some(1));
        assert!(!t.has_pending());
    }

    #[test]
    fn values_inside_window_are_held_and_last_wins() {
        let mut t = Throttle::new(50.0);
        t.submit(1, 0.0);
        assert_eq!(t.submit(2, 10.0), None);
        assert_eq!(t.submit(3, 20.0), None);
        assert_eq!(t.poll(30.0), None);
        assert_eq!(t.poll(50.0), Some(3));
        assert_eq!(t.poll(200.0), None);
    }

    #[test]
    fn trailing_emit_restarts_window() {
        let mut t = Throttle::new(50.0);
        t.submit("a", 0.0);
        t.submit("b", 10.0);
        assert_eq!(t.poll(60.0), Some("b"));
        assert_eq!(t.submit("c", 70.0), None);
        assert_eq!(t.submit("d", 110.0), Some("d"));
    }

    #[test]
    fn live_polygon_throttles_smoothness_only() {
        let mut live = LivePolygon::default();
        assert!(live.set_smoothness(0.1, 0.0));
        assert!(!live.set_smoothness(0.9, 5.0));
        live.set_sides(4);
        live.set_rotation(0.5);
        assert_eq!(live.controls().sides(), 4);
        assert_eq!(live.controls().rotation(), 0.5);
        assert_eq!(live.controls().smoothness(), 0.1);

        assert!(live.poll(60.0));
        assert_eq!(live.controls().smoothness(), 0.9);
        assert_eq!(live.current().unwrap().sides(), 4);
    }

    #[test]
    fn throttling_does_not_change_generated_shape() {
        let mut live = LivePolygon::default();
        live.set_smoothness(0.3, 0.0);
        let direct = crate::polygon::generate(6, 0.0, 0.3).unwrap();
        assert_eq!(live.current().unwrap(), direct);
    }
}
