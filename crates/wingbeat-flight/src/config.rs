//! Flight configuration (optionally parsed from TOML) with tuned defaults.
//!
//! The defaults are the shipping values; hosts override individual keys
//! from a `[flight]` TOML table. Durations and gaps are milliseconds.

/// Probabilities and counts for UI-triggered bursts
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerConfig {
    /// Chance of one burst when the begin button is pressed
    pub begin_chance: f32,
    /// Chance of one burst when a memory tile first opens
    pub memory_chance: f32,
    /// Chance of one burst when a reason chip is first revealed
    pub reason_chance: f32,
    /// Chance of one burst when the decline button is pressed
    pub decline_chance: f32,
    /// Number of staggered bursts on accept
    pub accept_count: u32,
    /// Gap between accept bursts
    pub accept_gap_ms: f64,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            begin_chance: 0.8,
            memory_chance: 0.45,
            reason_chance: 0.55,
            decline_chance: 0.6,
            accept_count: 4,
            accept_gap_ms: 240.0,
        }
    }
}

/// Configuration for the whole flight system
#[derive(Debug, Clone, PartialEq)]
pub struct FlightConfig {
    /// Maximum number of butterflies alive at once
    pub budget: usize,
    /// Hard gate: when set, no spawn ever happens (ambient or burst)
    pub reduced_motion: bool,

    // Lifetimes
    pub burst_duration_min: f32,
    pub burst_duration_max: f32,
    pub ambient_duration_min: f32,
    pub ambient_duration_max: f32,

    // Ambient cadence
    /// Interval between periodic ambient spawn attempts
    pub cadence_ms: f64,
    /// Chance of a second ambient attempt in the same tick
    pub double_spawn_chance: f32,
    /// Staggered spawn attempts fired right after activation
    pub startup_spawns: u32,
    /// Gap between the startup attempts
    pub startup_gap_ms: f64,

    // Path geometry
    /// Fraction of viewport height flights are confined to
    pub safe_zone: f32,
    /// How far off-screen flights start
    pub start_margin: f32,
    /// How far off-screen flights end
    pub end_margin: f32,
    pub start_y_min: f32,
    pub end_y_min: f32,
    /// Horizontal control-point offset range
    pub curve_offset_min: f32,
    pub curve_offset_max: f32,
    /// Vertical control-point jitter (plus or minus)
    pub curve_jitter: f32,

    // Appearance
    pub size_min: f32,
    pub size_max: f32,
    /// Rendered size in pixels at scale 1.0
    pub base_size: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,

    // Secondary motion
    pub wobble_min: f32,
    pub wobble_max: f32,
    pub wave_amp_min: f32,
    pub wave_amp_max: f32,
    /// Wave cycles over a full flight
    pub wave_freq_min: f32,
    pub wave_freq_max: f32,
    /// Constant lean in the travel direction, degrees
    pub lean_deg: f32,

    pub triggers: TriggerConfig,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            budget: 18,
            reduced_motion: false,
            burst_duration_min: 5200.0,
            burst_duration_max: 7800.0,
            ambient_duration_min: 8800.0,
            ambient_duration_max: 15000.0,
            cadence_ms: 2100.0,
            double_spawn_chance: 0.35,
            startup_spawns: 3,
            startup_gap_ms: 650.0,
            safe_zone: 0.62,
            start_margin: 140.0,
            end_margin: 160.0,
            start_y_min: 30.0,
            end_y_min: 40.0,
            curve_offset_min: 140.0,
            curve_offset_max: 380.0,
            curve_jitter: 120.0,
            size_min: 0.55,
            size_max: 1.25,
            base_size: 54.0,
            opacity_min: 0.55,
            opacity_max: 0.95,
            wobble_min: 4.0,
            wobble_max: 10.0,
            wave_amp_min: 6.0,
            wave_amp_max: 18.0,
            wave_freq_min: 2.5,
            wave_freq_max: 4.5,
            lean_deg: 8.0,
            triggers: TriggerConfig::default(),
        }
    }
}

impl FlightConfig {
    /// Parse a FlightConfig from a TOML table, falling back to defaults
    /// for any missing key
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("budget") {
            let n = v.as_integer().unwrap_or(config.budget as i64);
            config.budget = n.max(0) as usize;
        }
        if let Some(v) = table.get("reduced_motion") {
            config.reduced_motion = v.as_bool().unwrap_or(false);
        }
        if let Some(v) = table.get("burst_duration_min") {
            config.burst_duration_min = toml_f32(v, config.burst_duration_min);
        }
        if let Some(v) = table.get("burst_duration_max") {
            config.burst_duration_max = toml_f32(v, config.burst_duration_max);
        }
        if let Some(v) = table.get("ambient_duration_min") {
            config.ambient_duration_min = toml_f32(v, config.ambient_duration_min);
        }
        if let Some(v) = table.get("ambient_duration_max") {
            config.ambient_duration_max = toml_f32(v, config.ambient_duration_max);
        }
        if let Some(v) = table.get("cadence_ms") {
            config.cadence_ms = toml_f64(v, config.cadence_ms);
        }
        if let Some(v) = table.get("double_spawn_chance") {
            config.double_spawn_chance = toml_f32(v, config.double_spawn_chance);
        }
        if let Some(v) = table.get("startup_spawns") {
            config.startup_spawns = v.as_integer().unwrap_or(3).max(0) as u32;
        }
        if let Some(v) = table.get("startup_gap_ms") {
            config.startup_gap_ms = toml_f64(v, config.startup_gap_ms);
        }
        if let Some(v) = table.get("safe_zone") {
            config.safe_zone = toml_f32(v, config.safe_zone).clamp(0.05, 1.0);
        }
        if let Some(v) = table.get("start_margin") {
            config.start_margin = toml_f32(v, config.start_margin);
        }
        if let Some(v) = table.get("end_margin") {
            config.end_margin = toml_f32(v, config.end_margin);
        }
        if let Some(v) = table.get("start_y_min") {
            config.start_y_min = toml_f32(v, config.start_y_min);
        }
        if let Some(v) = table.get("end_y_min") {
            config.end_y_min = toml_f32(v, config.end_y_min);
        }
        if let Some(v) = table.get("curve_offset_min") {
            config.curve_offset_min = toml_f32(v, config.curve_offset_min);
        }
        if let Some(v) = table.get("curve_offset_max") {
            config.curve_offset_max = toml_f32(v, config.curve_offset_max);
        }
        if let Some(v) = table.get("curve_jitter") {
            config.curve_jitter = toml_f32(v, config.curve_jitter);
        }
        if let Some(v) = table.get("size_min") {
            config.size_min = toml_f32(v, config.size_min);
        }
        if let Some(v) = table.get("size_max") {
            config.size_max = toml_f32(v, config.size_max);
        }
        if let Some(v) = table.get("base_size") {
            config.base_size = toml_f32(v, config.base_size);
        }
        if let Some(v) = table.get("opacity_min") {
            config.opacity_min = toml_f32(v, config.opacity_min);
        }
        if let Some(v) = table.get("opacity_max") {
            config.opacity_max = toml_f32(v, config.opacity_max);
        }
        if let Some(v) = table.get("wobble_min") {
            config.wobble_min = toml_f32(v, config.wobble_min);
        }
        if let Some(v) = table.get("wobble_max") {
            config.wobble_max = toml_f32(v, config.wobble_max);
        }
        if let Some(v) = table.get("wave_amp_min") {
            config.wave_amp_min = toml_f32(v, config.wave_amp_min);
        }
        if let Some(v) = table.get("wave_amp_max") {
            config.wave_amp_max = toml_f32(v, config.wave_amp_max);
        }
        if let Some(v) = table.get("wave_freq_min") {
            config.wave_freq_min = toml_f32(v, config.wave_freq_min);
        }
        if let Some(v) = table.get("wave_freq_max") {
            config.wave_freq_max = toml_f32(v, config.wave_freq_max);
        }
        if let Some(v) = table.get("lean_deg") {
            config.lean_deg = toml_f32(v, config.lean_deg);
        }

        if let Some(triggers) = table.get("triggers").and_then(|v| v.as_table()) {
            let t = &mut config.triggers;
            if let Some(v) = triggers.get("begin_chance") {
                t.begin_chance = toml_f32(v, t.begin_chance);
            }
            if let Some(v) = triggers.get("memory_chance") {
                t.memory_chance = toml_f32(v, t.memory_chance);
            }
            if let Some(v) = triggers.get("reason_chance") {
                t.reason_chance = toml_f32(v, t.reason_chance);
            }
            if let Some(v) = triggers.get("decline_chance") {
                t.decline_chance = toml_f32(v, t.decline_chance);
            }
            if let Some(v) = triggers.get("accept_count") {
                t.accept_count = v.as_integer().unwrap_or(4).max(0) as u32;
            }
            if let Some(v) = triggers.get("accept_gap_ms") {
                t.accept_gap_ms = toml_f64(v, t.accept_gap_ms);
            }
        }

        config
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}

fn toml_f64(v: &toml::Value, default: f64) -> f64 {
    v.as_float()
        .or_else(|| v.as_integer().map(|i| i as f64))
        .unwrap_or(default)
}
