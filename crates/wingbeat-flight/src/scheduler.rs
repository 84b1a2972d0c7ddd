//! Spawn scheduling.
//!
//! Two sources feed the swarm: the periodic ambient cadence and deferred
//! one-shot requests (the staggered ramp-up after activation, UI-triggered
//! bursts, and the multi-burst celebration). The scheduler only produces
//! spawn *requests*; the swarm's budget gate decides what actually flies.

use crate::butterfly::SpawnKind;
use crate::config::FlightConfig;
use crate::rand::FlightRng;
use wingbeat_runtime::UiEvent;

struct PendingSpawn {
    due_ms: f64,
    kind: SpawnKind,
}

/// Ambient cadence plus deferred burst queue
pub struct Scheduler {
    config: FlightConfig,
    pending: Vec<PendingSpawn>,
    /// Next cadence tick; None until activated
    next_tick_ms: Option<f64>,
}

impl Scheduler {
    pub fn new(config: FlightConfig) -> Self {
        Self {
            config,
            pending: Vec::new(),
            next_tick_ms: None,
        }
    }

    /// Whether the ambient cadence is running
    pub fn is_active(&self) -> bool {
        self.next_tick_ms.is_some()
    }

    /// Queue the staggered ramp-up attempts and arm the periodic cadence.
    ///
    /// The ramp-up avoids a visible burst discontinuity right after load.
    pub fn activate(&mut self, now_ms: f64) {
        for i in 0..self.config.startup_spawns {
            self.pending.push(PendingSpawn {
                due_ms: now_ms + i as f64 * self.config.startup_gap_ms,
                kind: SpawnKind::Ambient,
            });
        }
        self.next_tick_ms = Some(now_ms + self.config.cadence_ms);
    }

    /// Route a UI interaction into burst spawn requests
    pub fn handle_event(&mut self, event: UiEvent, now_ms: f64, rng: &mut FlightRng) {
        let triggers = self.config.triggers.clone();
        match event {
            UiEvent::Began => self.maybe_burst(now_ms, triggers.begin_chance, rng),
            UiEvent::MemoryOpened => self.maybe_burst(now_ms, triggers.memory_chance, rng),
            UiEvent::ReasonRevealed => self.maybe_burst(now_ms, triggers.reason_chance, rng),
            UiEvent::Declined => self.maybe_burst(now_ms, triggers.decline_chance, rng),
            UiEvent::Accepted => {
                for i in 0..triggers.accept_count {
                    self.pending.push(PendingSpawn {
                        due_ms: now_ms + i as f64 * triggers.accept_gap_ms,
                        kind: SpawnKind::Burst,
                    });
                }
            }
        }
    }

    fn maybe_burst(&mut self, now_ms: f64, chance: f32, rng: &mut FlightRng) {
        if rng.chance(chance) {
            self.pending.push(PendingSpawn {
                due_ms: now_ms,
                kind: SpawnKind::Burst,
            });
        }
    }

    /// Collect every spawn request due at `now_ms`.
    ///
    /// Cadence ticks that fell within the elapsed window each fire exactly
    /// once, so a long host frame doesn't drop ambient spawns.
    pub fn due_spawns(&mut self, now_ms: f64, rng: &mut FlightRng) -> Vec<SpawnKind> {
        let mut due = Vec::new();

        if let Some(mut next) = self.next_tick_ms {
            while now_ms >= next {
                due.push(SpawnKind::Ambient);
                if rng.chance(self.config.double_spawn_chance) {
                    due.push(SpawnKind::Ambient);
                }
                next += self.config.cadence_ms;
            }
            self.next_tick_ms = Some(next);
        }

        let mut i = 0;
        while i < self.pending.len() {
            if now_ms >= self.pending[i].due_ms {
                due.push(self.pending.swap_remove(i).kind);
            } else {
                i += 1;
            }
        }

        due
    }
}
