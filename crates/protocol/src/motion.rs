use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Easing curve applied to motion progress.
///
/// `PowerOut(n)` is `1 - (1-t)^n`; `ExpoOut` is `1 - 2^(-10t)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    PowerOut(u8),
    ExpoOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::PowerOut(n) => 1.0 - (1.0 - t).powi(i32::from(n)),
            Easing::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Declarative enter animation for a group of render commands.
///
/// A motion describes where the group starts relative to its final
/// position and how it fades in; it never mutates the commands it wraps.
/// Renderers evaluate `progress(elapsed)` against their own clock and
/// apply the remaining offset and alpha themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    /// Starting offset from the final position.
    pub from: Point,
    /// Starting opacity in `[0, 1]`.
    pub fade_from: f64,
    /// Seconds to wait before the motion begins.
    pub delay: f64,
    /// Seconds from start to rest.
    pub duration: f64,
    pub easing: Easing,
}

impl Motion {
    /// Rise from `dy` below the final position while fading in.
    pub fn rise(dy: f64, duration: f64) -> Self {
        Self {
            from: Point::new(0.0, dy),
            fade_from: 0.0,
            delay: 0.0,
            duration,
            easing: Easing::PowerOut(3),
        }
    }

    /// Pure fade, no displacement.
    pub fn fade(duration: f64) -> Self {
        Self {
            from: Point::ZERO,
            fade_from: 0.0,
            delay: 0.0,
            duration,
            easing: Easing::PowerOut(3),
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Eased progress in `[0, 1]` for a clock reading of `elapsed` seconds.
    ///
    /// Zero-duration motions snap straight to 1 once the delay has passed.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if elapsed <= self.delay {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        let t = ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0);
        self.easing.apply(t)
    }

    /// Whether the motion has fully settled at `elapsed` seconds.
    pub fn finished(&self, elapsed: f64) -> bool {
        elapsed >= self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::PowerOut(3), Easing::ExpoOut] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?} at 1");
        }
    }

    #[test]
    fn easing_is_monotonic() {
        for easing in [Easing::Linear, Easing::PowerOut(4), Easing::ExpoOut] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(f64::from(i) / 100.0);
                assert!(v >= prev, "{easing:?} dipped at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn power_out_overshoots_linear() {
        // Ease-out curves front-load their progress.
        assert!(Easing::PowerOut(3).apply(0.5) > 0.5);
        assert!(Easing::ExpoOut.apply(0.5) > 0.5);
    }

    #[test]
    fn delay_holds_then_releases() {
        let m = Motion::rise(50.0, 1.0).with_delay(0.5);
        assert_eq!(m.progress(0.0), 0.0);
        assert_eq!(m.progress(0.5), 0.0);
        assert!(m.progress(1.0) > 0.0);
        assert!((m.progress(1.5) - 1.0).abs() < 1e-9);
        assert!(m.finished(1.5));
        assert!(!m.finished(1.4));
    }

    #[test]
    fn zero_duration_snaps() {
        let m = Motion::fade(0.0).with_delay(0.2);
        assert_eq!(m.progress(0.1), 0.0);
        assert_eq!(m.progress(0.3), 1.0);
    }
}
