//! Pure curve math — cubic bezier evaluation and easing.
//!
//! Everything here is a deterministic function of its inputs; the flight
//! evaluator builds on these to stay replayable at any timestamp.

use crate::Vec2;

/// Linear interpolation between two floats
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic bezier interpolation for a single scalar value (Bernstein basis).
pub fn cubic_bezier_scalar(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    let tt = t * t;
    let uu = u * u;
    let uuu = uu * u;
    let ttt = tt * t;
    uuu * p0 + 3.0 * uu * t * p1 + 3.0 * u * tt * p2 + ttt * p3
}

/// Four-point cubic bezier interpolation at parameter `t` in [0, 1].
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    Vec2::new(
        cubic_bezier_scalar(p0.x, p1.x, p2.x, p3.x, t),
        cubic_bezier_scalar(p0.y, p1.y, p2.y, p3.y, t),
    )
}

/// Cubic ease-in-out: slow start, slow end.
///
/// `4t³` below the midpoint, `1 - (-2t+2)³ / 2` above. Fixed points at
/// 0, 0.5 and 1, monotone on [0, 1].
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert!((lerp(0.0, 10.0, 0.0) - 0.0).abs() < 1e-6);
        assert!((lerp(0.0, 10.0, 1.0) - 10.0).abs() < 1e-6);
        assert!((lerp(0.0, 10.0, 0.5) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn bezier_hits_endpoints() {
        let p0 = Vec2::new(-140.0, 200.0);
        let p1 = Vec2::new(100.0, 80.0);
        let p2 = Vec2::new(900.0, 320.0);
        let p3 = Vec2::new(1440.0, 250.0);

        let start = cubic_bezier(p0, p1, p2, p3, 0.0);
        let end = cubic_bezier(p0, p1, p2, p3, 1.0);
        assert!((start - p0).length() < 1e-4);
        assert!((end - p3).length() < 1e-4);
    }

    #[test]
    fn bezier_midpoint_uses_bernstein_weights() {
        // At t = 0.5 the basis weights are [0.125, 0.375, 0.375, 0.125]
        let v = cubic_bezier_scalar(8.0, 16.0, 24.0, 32.0, 0.5);
        let expected = 0.125 * 8.0 + 0.375 * 16.0 + 0.375 * 24.0 + 0.125 * 32.0;
        assert!((v - expected).abs() < 1e-5);
    }

    #[test]
    fn ease_fixed_points() {
        assert!((ease_in_out_cubic(0.0) - 0.0).abs() < 1e-6);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out_cubic(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ease_is_monotone() {
        let mut prev = ease_in_out_cubic(0.0);
        for i in 1..=1000 {
            let e = ease_in_out_cubic(i as f32 / 1000.0);
            assert!(e >= prev, "easing regressed at step {i}");
            prev = e;
        }
    }

    #[test]
    fn ease_slower_than_linear_at_start() {
        // The whole point of the curve: a gentle takeoff
        assert!(ease_in_out_cubic(0.1) < 0.1);
        assert!(ease_in_out_cubic(0.9) > 0.9);
    }
}
