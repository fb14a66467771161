// SPDX-License-Identifier: MPL-2.0
//! Easing curves for the tween engine.

/// Maps linear time progress onto eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// CSS-style cubic Bézier with control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Soft deceleration used by menu cards.
    pub const SMOOTH: Easing = Easing::CubicBezier(0.43, 0.13, 0.23, 0.96);

    /// Applies the curve to `t`, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                // x control points outside [0, 1] make the curve non-monotonic in time
                cubic_bezier(x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2, t)
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseOut
    }
}

const EPSILON: f32 = 1e-6;
const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;

/// One coordinate of a Bézier curve anchored at 0 and 1.
fn component(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Solves `x(t) = x` for `t`, then returns `y(t)`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = component(x1, x2, t) - x;
        if error.abs() < EPSILON {
            return component(y1, y2, t);
        }
        let slope = derivative(x1, x2, t);
        if slope.abs() < EPSILON {
            break;
        }
        t -= error / slope;
        if !(0.0..=1.0).contains(&t) {
            break;
        }
    }

    // Newton diverged or stalled on a flat segment
    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = component(x1, x2, t);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) / 2.0;
    }
    component(y1, y2, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::SMOOTH,
    ];

    #[test]
    fn curves_are_anchored_at_both_ends() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn input_outside_unit_range_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
            assert_eq!(easing.apply(f32::NAN), 0.0);
        }
    }

    #[test]
    fn smooth_curve_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = Easing::SMOOTH.apply(step as f32 / 100.0);
            assert!(value + 1e-4 >= previous, "dropped at step {step}");
            previous = value;
        }
    }

    #[test]
    fn ease_out_leads_linear_and_ease_in_lags() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn linear_bezier_matches_identity() {
        let linear = Easing::CubicBezier(0.0, 0.0, 1.0, 1.0);
        for step in 0..=10 {
            let t = step as f32 / 10.0;
            assert!((linear.apply(t) - t).abs() < 1e-3);
        }
    }
}
