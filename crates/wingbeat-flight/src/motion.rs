//! Motion evaluation — a pure function of a butterfly and the current time.
//!
//! Spatial progress along the bezier follows *eased* time, not wall-clock
//! time: the curve parameter is `ease_in_out_cubic(progress)`, so flights
//! take off and land gently. A per-butterfly sinusoidal wave rides on top
//! of the curve, and yaw oscillates around a constant directional lean.

use crate::butterfly::Butterfly;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use wingbeat_core::{cubic_bezier, ease_in_out_cubic, Vec2};

/// The transform to apply to a butterfly's visual this frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec2,
    pub rotation_deg: f32,
}

/// Result of evaluating a butterfly at a timestamp
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Still flying; apply this placement and evaluate again next frame
    Airborne(Placement),
    /// Flight complete; the butterfly should be released
    Landed,
}

/// Evaluate a butterfly at `now_ms`.
///
/// Deterministic: the same `(butterfly, now_ms)` pair always yields the
/// same output, since every random parameter was fixed at spawn.
pub fn evaluate(b: &Butterfly, now_ms: f64) -> Motion {
    let t = b.progress(now_ms);
    if t >= 1.0 {
        return Motion::Landed;
    }

    let e = ease_in_out_cubic(t);
    let p = &b.path;
    let pos = cubic_bezier(p.start, p.cp1, p.cp2, p.end, e);

    let wave = (e * PI * b.wave_freq).sin() * b.wave_amp;
    let yaw = (e * 10.0).sin() * b.wobble + b.lean_deg;

    Motion::Airborne(Placement {
        position: Vec2::new(pos.x, pos.y + wave),
        rotation_deg: yaw,
    })
}
