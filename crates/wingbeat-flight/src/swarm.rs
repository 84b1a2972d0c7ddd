//! Swarm lifecycle management.
//!
//! Owns the registry of live butterflies and the concurrency budget. Spawn
//! requests that would exceed the budget are dropped silently — that is the
//! expected steady state under a sustained spawn rate, not an error. The
//! reduced-motion gate lives here too, so no caller can bypass it.

use crate::butterfly::{Butterfly, SpawnKind};
use crate::config::FlightConfig;
use crate::motion::{self, Motion};
use crate::overlay::{Overlay, Visual};
use crate::rand::FlightRng;
use std::collections::HashMap;
use wingbeat_core::{ButterflyId, Viewport};

/// The set of live butterflies, capped at the configured budget
pub struct Swarm {
    config: FlightConfig,
    active: HashMap<ButterflyId, Butterfly>,
    spawned_total: u64,
    completed_total: u64,
}

impl Swarm {
    pub fn new(config: FlightConfig) -> Self {
        Self {
            config,
            active: HashMap::new(),
            spawned_total: 0,
            completed_total: 0,
        }
    }

    /// Number of butterflies currently in flight
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Total spawns accepted since creation
    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    /// Total flights completed since creation
    pub fn completed_total(&self) -> u64 {
        self.completed_total
    }

    /// Look up a live butterfly by handle
    pub fn get(&self, id: ButterflyId) -> Option<&Butterfly> {
        self.active.get(&id)
    }

    /// Attempt to spawn one butterfly.
    ///
    /// Returns `None` without side effects when the budget is full or
    /// reduced motion is active. On success the overlay receives the new
    /// visual node.
    pub fn try_spawn(
        &mut self,
        kind: SpawnKind,
        viewport: Viewport,
        now_ms: f64,
        rng: &mut FlightRng,
        overlay: &mut dyn Overlay,
    ) -> Option<ButterflyId> {
        if self.config.reduced_motion {
            return None;
        }
        if self.active.len() >= self.config.budget {
            return None;
        }

        let butterfly = Butterfly::spawn(kind, &self.config, viewport, now_ms, rng);
        let id = butterfly.id;
        overlay.insert(
            id,
            &Visual {
                size_px: self.config.base_size * butterfly.size,
                opacity: butterfly.opacity,
                palette: butterfly.palette,
            },
        );
        self.active.insert(id, butterfly);
        self.spawned_total += 1;
        Some(id)
    }

    /// Evaluate every live butterfly at `now_ms`, apply placements, and
    /// release the ones that have landed.
    ///
    /// Evaluation order between butterflies is unspecified; they share no
    /// state, so it cannot affect the outcome.
    pub fn update(&mut self, now_ms: f64, overlay: &mut dyn Overlay) {
        let mut landed = Vec::new();
        for (id, butterfly) in &self.active {
            match motion::evaluate(butterfly, now_ms) {
                Motion::Airborne(placement) => overlay.place(*id, &placement),
                Motion::Landed => landed.push(*id),
            }
        }
        for id in landed {
            // Removal is keyed by id, so a slot can never be released twice
            if self.active.remove(&id).is_some() {
                self.completed_total += 1;
                overlay.remove(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::RecordingOverlay;

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 720.0)
    }

    #[test]
    fn budget_caps_active_count() {
        let mut swarm = Swarm::new(FlightConfig::default());
        let mut rng = FlightRng::new(41);
        let mut overlay = RecordingOverlay::new();

        let mut accepted = 0;
        for _ in 0..25 {
            if swarm
                .try_spawn(SpawnKind::Ambient, viewport(), 0.0, &mut rng, &mut overlay)
                .is_some()
            {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 18);
        assert_eq!(swarm.active_count(), 18);
        assert_eq!(overlay.live_count(), 18);
        assert_eq!(swarm.spawned_total(), 18);
    }

    #[test]
    fn rejected_spawn_leaves_no_trace() {
        let mut config = FlightConfig::default();
        config.budget = 1;
        let mut swarm = Swarm::new(config);
        let mut rng = FlightRng::new(42);
        let mut overlay = RecordingOverlay::new();

        assert!(swarm
            .try_spawn(SpawnKind::Burst, viewport(), 0.0, &mut rng, &mut overlay)
            .is_some());
        assert!(swarm
            .try_spawn(SpawnKind::Burst, viewport(), 0.0, &mut rng, &mut overlay)
            .is_none());
        assert_eq!(swarm.active_count(), 1);
        assert_eq!(overlay.inserted, 1);
    }

    #[test]
    fn reduced_motion_blocks_every_spawn() {
        let mut config = FlightConfig::default();
        config.reduced_motion = true;
        let mut swarm = Swarm::new(config);
        let mut rng = FlightRng::new(43);
        let mut overlay = RecordingOverlay::new();

        for _ in 0..50 {
            assert!(swarm
                .try_spawn(SpawnKind::Burst, viewport(), 0.0, &mut rng, &mut overlay)
                .is_none());
            assert!(swarm
                .try_spawn(SpawnKind::Ambient, viewport(), 0.0, &mut rng, &mut overlay)
                .is_none());
        }
        assert_eq!(swarm.active_count(), 0);
        assert_eq!(overlay.inserted, 0);
    }

    #[test]
    fn landed_butterflies_release_their_slots() {
        let mut swarm = Swarm::new(FlightConfig::default());
        let mut rng = FlightRng::new(44);
        let mut overlay = RecordingOverlay::new();

        for _ in 0..18 {
            swarm.try_spawn(SpawnKind::Burst, viewport(), 0.0, &mut rng, &mut overlay);
        }
        assert_eq!(swarm.active_count(), 18);
        assert!(swarm
            .try_spawn(SpawnKind::Burst, viewport(), 0.0, &mut rng, &mut overlay)
            .is_none());

        // Bursts live at most 7800ms; everything lands by 20s
        swarm.update(20_000.0, &mut overlay);
        assert_eq!(swarm.active_count(), 0);
        assert_eq!(overlay.live_count(), 0);
        assert_eq!(swarm.completed_total(), 18);

        // Released budget is reusable
        assert!(swarm
            .try_spawn(SpawnKind::Burst, viewport(), 20_000.0, &mut rng, &mut overlay)
            .is_some());
    }

    #[test]
    fn repeated_cycles_never_go_negative() {
        let mut swarm = Swarm::new(FlightConfig::default());
        let mut rng = FlightRng::new(45);
        let mut overlay = RecordingOverlay::new();

        let mut now = 0.0;
        for _ in 0..40 {
            for _ in 0..5 {
                swarm.try_spawn(SpawnKind::Burst, viewport(), now, &mut rng, &mut overlay);
            }
            now += 30_000.0;
            swarm.update(now, &mut overlay);
            // A second sweep at the same timestamp must not double-release
            swarm.update(now, &mut overlay);
            assert_eq!(swarm.active_count(), 0);
        }
        assert_eq!(swarm.spawned_total(), swarm.completed_total());
        assert_eq!(overlay.inserted, overlay.removed);
    }

    #[test]
    fn airborne_butterflies_get_placed_each_update() {
        let mut swarm = Swarm::new(FlightConfig::default());
        let mut rng = FlightRng::new(46);
        let mut overlay = RecordingOverlay::new();

        let id = swarm
            .try_spawn(SpawnKind::Ambient, viewport(), 0.0, &mut rng, &mut overlay)
            .unwrap();
        swarm.update(100.0, &mut overlay);
        let first = *overlay.last_placement(id).expect("placement applied");
        swarm.update(2_000.0, &mut overlay);
        let second = *overlay.last_placement(id).expect("placement applied");
        assert_ne!(first, second);
    }
}
