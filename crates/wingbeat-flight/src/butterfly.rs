//! Butterfly particle state.
//!
//! Every random quantity — trajectory, palette, size, opacity, lifetime,
//! wobble and wave parameters — is drawn exactly once at spawn and stored
//! here. Per-frame evaluation never touches the RNG, which is what makes
//! re-evaluating a butterfly at the same timestamp reproducible.

use crate::config::FlightConfig;
use crate::palette::{self, Palette};
use crate::path::{self, FlightPath};
use crate::rand::FlightRng;
use wingbeat_core::{ButterflyId, Viewport};

/// How a spawn was requested; bursts live shorter lives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnKind {
    /// Periodic scheduler spawn
    Ambient,
    /// UI-triggered spawn
    Burst,
}

/// One in-flight butterfly. Immutable after spawn; only time moves it.
#[derive(Clone, Debug)]
pub struct Butterfly {
    pub id: ButterflyId,
    pub kind: SpawnKind,
    pub path: FlightPath,
    /// Render scale factor; does not affect motion
    pub size: f32,
    pub opacity: f32,
    pub palette: Palette,
    pub duration_ms: f32,
    pub spawned_at_ms: f64,
    /// Yaw oscillation amplitude in degrees, signed by travel direction
    pub wobble: f32,
    /// Vertical wave amplitude in pixels
    pub wave_amp: f32,
    /// Wave cycles over the full flight
    pub wave_freq: f32,
    /// Constant lean in the travel direction, degrees
    pub lean_deg: f32,
}

impl Butterfly {
    /// Create a butterfly with all random draws performed now
    pub fn spawn(
        kind: SpawnKind,
        config: &FlightConfig,
        viewport: Viewport,
        now_ms: f64,
        rng: &mut FlightRng,
    ) -> Self {
        let palette = palette::pick(rng);
        let size = rng.range(config.size_min, config.size_max);
        let opacity = rng.range(config.opacity_min, config.opacity_max);
        let path = path::generate(config, viewport, rng);
        let sign = path.direction.sign();

        let (dur_min, dur_max) = match kind {
            SpawnKind::Burst => (config.burst_duration_min, config.burst_duration_max),
            SpawnKind::Ambient => (config.ambient_duration_min, config.ambient_duration_max),
        };

        Self {
            id: ButterflyId::new(),
            kind,
            path,
            size,
            opacity,
            palette,
            duration_ms: rng.range(dur_min, dur_max),
            spawned_at_ms: now_ms,
            wobble: rng.range(config.wobble_min, config.wobble_max) * sign,
            wave_amp: rng.range(config.wave_amp_min, config.wave_amp_max),
            wave_freq: rng.range(config.wave_freq_min, config.wave_freq_max),
            lean_deg: config.lean_deg * sign,
        }
    }

    /// Normalized time-in-flight, clamped to [0, 1]
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let t = (now_ms - self.spawned_at_ms) / self.duration_ms as f64;
        t.clamp(0.0, 1.0) as f32
    }
}
