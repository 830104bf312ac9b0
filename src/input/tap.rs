use std::time::Duration;

use glam::DVec2;
use web_time::Instant;

use super::event::TouchPhase;

/// The one touch that may still turn into a tap.
struct Candidate {
    id: u64,
    origin: DVec2,
    started: Instant,
}

/// Recognizes single-finger taps from raw touch phases.
///
/// A tap is one touch that ends within `max_duration` of starting and
/// never strays more than `slop` pixels. A second finger, a cancellation,
/// or excess travel rules the gesture out until every finger is lifted.
pub struct TapRecognizer {
    slop: f64,
    max_duration: Duration,
    candidate: Option<Candidate>,
    active: Vec<u64>,
}

impl TapRecognizer {
    /// Create a recognizer with the given travel and duration limits.
    #[must_use]
    pub fn new(slop: f64, max_duration: Duration) -> Self {
        Self {
            slop,
            max_duration,
            candidate: None,
            active: Vec::new(),
        }
    }

    /// Feed one touch update observed at `now`. Returns the tap position
    /// when this update completes a tap.
    pub fn handle(
        &mut self,
        phase: TouchPhase,
        id: u64,
        position: DVec2,
        now: Instant,
    ) -> Option<DVec2> {
        match phase {
            TouchPhase::Started => {
                self.candidate = self.active.is_empty().then_some(Candidate {
                    id,
                    origin: position,
                    started: now,
                });
                if !self.active.contains(&id) {
                    self.active.push(id);
                }
                None
            }
            TouchPhase::Moved => {
                let strayed = self.candidate.as_ref().is_some_and(|c| {
                    c.id == id && position.distance(c.origin) > self.slop
                });
                if strayed {
                    self.candidate = None;
                }
                None
            }
            TouchPhase::Ended => {
                self.active.retain(|&a| a != id);
                let candidate = self.candidate.take()?;
                let is_tap = candidate.id == id
                    && position.distance(candidate.origin) <= self.slop
                    && now.duration_since(candidate.started)
                        <= self.max_duration;
                is_tap.then_some(position)
            }
            TouchPhase::Cancelled => {
                self.active.retain(|&a| a != id);
                self.candidate = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> TapRecognizer {
        TapRecognizer::new(10.0, Duration::from_millis(500))
    }

    #[test]
    fn quick_touch_is_a_tap() {
        let mut taps = recognizer();
        let t0 = Instant::now();
        let at = DVec2::new(50.0, 60.0);
        assert_eq!(taps.handle(TouchPhase::Started, 1, at, t0), None);
        let end = t0 + Duration::from_millis(120);
        assert_eq!(taps.handle(TouchPhase::Ended, 1, at, end), Some(at));
    }

    #[test]
    fn long_press_is_not_a_tap() {
        let mut taps = recognizer();
        let t0 = Instant::now();
        let _ = taps.handle(TouchPhase::Started, 1, DVec2::ZERO, t0);
        let end = t0 + Duration::from_millis(900);
        assert_eq!(taps.handle(TouchPhase::Ended, 1, DVec2::ZERO, end), None);
    }

    #[test]
    fn moving_beyond_slop_cancels_the_tap() {
        let mut taps = recognizer();
        let t0 = Instant::now();
        let _ = taps.handle(TouchPhase::Started, 1, DVec2::ZERO, t0);
        let _ = taps.handle(TouchPhase::Moved, 1, DVec2::new(25.0, 0.0), t0);
        let back = DVec2::new(1.0, 0.0);
        assert_eq!(taps.handle(TouchPhase::Ended, 1, back, t0), None);
    }

    #[test]
    fn second_finger_rules_out_a_tap() {
        let mut taps = recognizer();
        let t0 = Instant::now();
        let _ = taps.handle(TouchPhase::Started, 1, DVec2::ZERO, t0);
        let _ = taps.handle(TouchPhase::Started, 2, DVec2::ONE, t0);
        assert_eq!(taps.handle(TouchPhase::Ended, 2, DVec2::ONE, t0), None);
        assert_eq!(taps.handle(TouchPhase::Ended, 1, DVec2::ZERO, t0), None);

        // With all fingers lifted, a fresh touch can tap again.
        let _ = taps.handle(TouchPhase::Started, 3, DVec2::ZERO, t0);
        assert_eq!(
            taps.handle(TouchPhase::Ended, 3, DVec2::ZERO, t0),
            Some(DVec2::ZERO)
        );
    }

    #[test]
    fn cancelled_touch_never_taps() {
        let mut taps = recognizer();
        let t0 = Instant::now();
        let _ = taps.handle(TouchPhase::Started, 1, DVec2::ZERO, t0);
        assert_eq!(taps.handle(TouchPhase::Cancelled, 1, DVec2::ZERO, t0), None);
        assert_eq!(taps.handle(TouchPhase::Ended, 1, DVec2::ZERO, t0), None);
    }
}
