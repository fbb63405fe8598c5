use crate::math::ease_out_quad;

/// Duration of a hover blend, in accumulated-time units.
pub const HOVER_TWEEN_DURATION: f32 = 1.0;

/// Retargetable eased interpolation of one scalar.
///
/// `to` replaces any in-flight tween, restarting from the current eased
/// value. Overlapping enter/leave events therefore never race: the last
/// target always wins and the value stays continuous.
#[derive(Debug, Clone, Copy)]
pub struct TweenChannel {
    from: f32,
    target: f32,
    duration: f32,
    elapsed: f32,
}

impl TweenChannel {
    pub fn new(initial: f32) -> Self {
        Self {
            from: initial,
            target: initial,
            duration: HOVER_TWEEN_DURATION,
            elapsed: HOVER_TWEEN_DURATION,
        }
    }

    pub fn with_duration(initial: f32, duration: f32) -> Self {
        Self {
            from: initial,
            target: initial,
            duration,
            elapsed: duration,
        }
    }

    /// Retarget toward `target`, cancelling whatever was in flight.
    pub fn to(&mut self, target: f32) {
        self.from = self.value();
        self.target = target;
        self.elapsed = 0.0;
    }

    /// Advance by `dt` time units and return the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// Current eased value.
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.target;
        }
        let t = ease_out_quad(self.elapsed / self.duration);
        self.from + (self.target - self.from) * t
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::TIME_STEP;

    #[test]
    fn settles_at_target() {
        let mut tween = TweenChannel::new(0.0);
        tween.to(1.0);

        for _ in 0..40 {
            tween.advance(TIME_STEP);
        }
        assert_eq!(tween.value(), 1.0);
        assert!(tween.is_settled());
    }

    #[test]
    fn value_is_continuous_and_monotonic_toward_target() {
        let mut tween = TweenChannel::new(0.0);
        tween.to(1.0);

        let mut last = 0.0;
        for _ in 0..20 {
            let v = tween.advance(TIME_STEP);
            assert!(v >= last);
            assert!(v <= 1.0);
            last = v;
        }
        assert!(last > 0.9); // eased well past linear progress at t=1.0
    }

    #[test]
    fn retarget_cancels_in_flight_tween() {
        let mut tween = TweenChannel::new(0.0);
        tween.to(1.0);
        tween.advance(0.3);
        let mid = tween.value();
        assert!(mid > 0.0 && mid < 1.0);

        // Leave fires while the enter tween is still running
        tween.to(0.0);
        assert!((tween.value() - mid).abs() < 1e-6); // no jump at retarget

        for _ in 0..40 {
            tween.advance(TIME_STEP);
        }
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn enter_then_immediate_leave_converges_to_zero() {
        let mut tween = TweenChannel::new(0.0);
        tween.to(1.0);
        tween.to(0.0);

        for _ in 0..40 {
            tween.advance(TIME_STEP);
        }
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut tween = TweenChannel::with_duration(0.0, 0.0);
        tween.to(1.0);
        assert_eq!(tween.value(), 1.0);
    }
}
