// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A cubic-bézier easing curve anchored at `(0, 0)` and `(1, 1)`.
///
/// The curve is described by its two control points, the same convention as
/// CSS `cubic-bezier()` and platform path interpolators. `x1` and `x2` must
/// lie in `[0, 1]` so that progress along the time axis is monotonic.
///
/// ```rust
/// use waypost_animate::Easing;
///
/// assert_eq!(Easing::LINEAR.eval(0.25), 0.25);
/// // The navigation curve decelerates into the target.
/// assert!(Easing::SLOW_OUT_SLOW_IN.eval(0.9) > 0.9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Easing {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl Easing {
    /// The identity curve: progress maps straight to time.
    pub const LINEAR: Self = Self::cubic_bezier(0.0, 0.0, 1.0, 1.0);

    /// The state-entry curve used by navigation camera transitions: eases in
    /// gently and decelerates into the target.
    ///
    /// Matches the platform path interpolator `(0.4, 0, 0.4, 1)`.
    pub const SLOW_OUT_SLOW_IN: Self = Self::cubic_bezier(0.4, 0.0, 0.4, 1.0);

    /// Creates a curve from its two control points.
    #[must_use]
    pub const fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns `true` if this is the identity curve.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        *self == Self::LINEAR
    }

    /// Evaluates the curve at time fraction `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn eval(&self, t: f64) -> f64 {
        let x = t.clamp(0.0, 1.0);
        if self.is_linear() || x == 0.0 || x == 1.0 {
            return x;
        }
        // Invert the (monotonic) x component by bisection, then evaluate y
        // at the found parameter.
        let mut lo = 0.0_f64;
        let mut hi = 1.0_f64;
        let mut s = x;
        for _ in 0..52 {
            let sx = sample(self.x1, self.x2, s);
            if (sx - x).abs() < 1e-9 {
                break;
            }
            if sx < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        sample(self.y1, self.y2, s)
    }
}

/// One coordinate of a cubic bézier with endpoints `0` and `1` and control
/// values `a`, `b`, at parameter `s`.
fn sample(a: f64, b: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * a * s * inv * inv + 3.0 * b * s * s * inv + s * s * s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for curve in [Easing::LINEAR, Easing::SLOW_OUT_SLOW_IN] {
            assert_eq!(curve.eval(0.0), 0.0);
            assert_eq!(curve.eval(1.0), 1.0);
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::SLOW_OUT_SLOW_IN.eval(-0.5), 0.0);
        assert_eq!(Easing::SLOW_OUT_SLOW_IN.eval(1.5), 1.0);
    }

    #[test]
    fn linear_is_identity() {
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert!((Easing::LINEAR.eval(t) - t).abs() < 1e-12);
        }
    }

    #[test]
    fn slow_out_slow_in_is_monotonic_and_symmetric() {
        let curve = Easing::SLOW_OUT_SLOW_IN;
        let mut prev = 0.0;
        for i in 1..=100 {
            let t = f64::from(i) / 100.0;
            let v = curve.eval(t);
            assert!(v >= prev, "easing must be monotonic at t={t}");
            prev = v;
        }
        // Control points are mirror images, so the curve passes through the
        // midpoint.
        assert!((curve.eval(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn slow_out_slow_in_decelerates_at_end() {
        let curve = Easing::SLOW_OUT_SLOW_IN;
        assert!(curve.eval(0.1) < 0.1);
        assert!(curve.eval(0.9) > 0.9);
    }

    #[test]
    fn inversion_round_trips_x() {
        // eval solves sample_x(s) == t; spot-check against a directly sampled
        // point: for any s, eval(x(s)) == y(s).
        let curve = Easing::cubic_bezier(0.25, 0.1, 0.25, 1.0);
        for i in 1..10 {
            let s = f64::from(i) / 10.0;
            let x = sample(0.25, 0.25, s);
            let y = sample(0.1, 1.0, s);
            assert!((curve.eval(x) - y).abs() < 1e-6);
        }
    }
}
