//! Wingbeat Flight - ambient butterfly swarm
//!
//! Provides a budgeted swarm of decorative flight particles:
//! - Randomized off-screen-to-off-screen bezier trajectories
//! - Eased motion with a sinusoidal wave and yaw wobble
//! - Hard concurrency budget with silent drop on overflow
//! - Periodic ambient spawning plus UI-triggered bursts
//!
//! The swarm is strictly best-effort decoration: nothing here returns an
//! error to the hosting UI for a spawn that didn't happen.

pub mod butterfly;
pub mod config;
pub mod motion;
pub mod overlay;
pub mod palette;
pub mod path;
pub mod rand;
pub mod scheduler;
pub mod swarm;

use wingbeat_core::{Result, Viewport};
use wingbeat_runtime::{RuntimeSystem, UiEvent};

pub use butterfly::{Butterfly, SpawnKind};
pub use config::{FlightConfig, TriggerConfig};
pub use motion::{Motion, Placement};
pub use overlay::{NullOverlay, Overlay, RecordingOverlay, Visual};
pub use palette::Palette;
pub use path::{Direction, FlightPath};
pub use rand::FlightRng;
pub use scheduler::Scheduler;
pub use swarm::Swarm;

/// The flight system — implements RuntimeSystem for integration with the
/// host loop.
///
/// Owns the swarm, the scheduler, and the one RNG all randomness flows
/// through. Time is whatever the host's deltas add up to; the system never
/// reads a wall clock of its own.
pub struct FlightSystem {
    swarm: Swarm,
    scheduler: Scheduler,
    rng: FlightRng,
    overlay: Option<Box<dyn Overlay>>,
    viewport: Viewport,
    reduced_motion: bool,
    now_ms: f64,
}

impl FlightSystem {
    pub fn new(config: FlightConfig, viewport: Viewport, seed: u32) -> Self {
        let reduced_motion = config.reduced_motion;
        Self {
            swarm: Swarm::new(config.clone()),
            scheduler: Scheduler::new(config),
            rng: FlightRng::new(seed),
            overlay: None,
            viewport,
            reduced_motion,
            now_ms: 0.0,
        }
    }

    /// Attach the rendering surface. Until one is attached, every spawn
    /// request quietly no-ops.
    pub fn attach_overlay(&mut self, overlay: Box<dyn Overlay>) {
        self.overlay = Some(overlay);
    }

    /// Update the viewport used for future spawns (existing flights keep
    /// their paths)
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Feed a UI interaction into the burst scheduler
    pub fn handle_event(&mut self, event: UiEvent) {
        self.scheduler.handle_event(event, self.now_ms, &mut self.rng);
    }

    /// Number of butterflies currently in flight
    pub fn active_count(&self) -> usize {
        self.swarm.active_count()
    }

    pub fn spawned_total(&self) -> u64 {
        self.swarm.spawned_total()
    }

    pub fn completed_total(&self) -> u64 {
        self.swarm.completed_total()
    }

    /// Internal clock, milliseconds since initialize
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

impl RuntimeSystem for FlightSystem {
    fn initialize(&mut self) -> Result<()> {
        if self.reduced_motion {
            // All-or-nothing: the cadence never starts, and the swarm
            // rejects any burst that still arrives
            println!("[flight] Reduced motion active, swarm disabled");
            return Ok(());
        }
        self.scheduler.activate(self.now_ms);
        Ok(())
    }

    fn fixed_update(&mut self, _dt: f64) -> Result<()> {
        // Flights are purely visual — no fixed-step needed
        Ok(())
    }

    fn update(&mut self, dt: f64) -> Result<()> {
        self.now_ms += dt * 1000.0;

        // Drain the scheduler even without a surface so requests don't
        // pile up and fire all at once when one is attached
        let due = self.scheduler.due_spawns(self.now_ms, &mut self.rng);

        let Some(overlay) = self.overlay.as_deref_mut() else {
            return Ok(());
        };

        for kind in due {
            self.swarm
                .try_spawn(kind, self.viewport, self.now_ms, &mut self.rng, overlay);
        }
        self.swarm.update(self.now_ms, overlay);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "flight"
    }
}
