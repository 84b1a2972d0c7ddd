//! Rendering surface seam.
//!
//! The swarm never draws; it pushes visual nodes into an `Overlay` and
//! moves them with per-frame placements. Hosts supply the real surface
//! (DOM layer, canvas, terminal...). Everything stays best-effort: an
//! overlay must tolerate placements for ids it has dropped.

use crate::motion::Placement;
use crate::palette::Palette;
use std::collections::HashMap;
use wingbeat_core::ButterflyId;

/// Immutable visual attributes of one butterfly, set at insert time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visual {
    /// Rendered size in pixels
    pub size_px: f32,
    pub opacity: f32,
    pub palette: Palette,
}

/// An overlay region butterflies are rendered into
pub trait Overlay {
    /// A new butterfly appeared; create its visual node
    fn insert(&mut self, id: ButterflyId, visual: &Visual);

    /// Move/rotate an existing node
    fn place(&mut self, id: ButterflyId, placement: &Placement);

    /// A butterfly landed; destroy its node
    fn remove(&mut self, id: ButterflyId);
}

/// Overlay that discards everything (headless hosts)
pub struct NullOverlay;

impl Overlay for NullOverlay {
    fn insert(&mut self, _id: ButterflyId, _visual: &Visual) {}
    fn place(&mut self, _id: ButterflyId, _placement: &Placement) {}
    fn remove(&mut self, _id: ButterflyId) {}
}

/// Overlay that records node lifecycles and last placements, for tests
/// and headless inspection
#[derive(Default)]
pub struct RecordingOverlay {
    live: HashMap<ButterflyId, (Visual, Option<Placement>)>,
    pub inserted: usize,
    pub removed: usize,
    pub placed: usize,
}

impl RecordingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn visual(&self, id: ButterflyId) -> Option<&Visual> {
        self.live.get(&id).map(|(v, _)| v)
    }

    pub fn last_placement(&self, id: ButterflyId) -> Option<&Placement> {
        self.live.get(&id).and_then(|(_, p)| p.as_ref())
    }
}

impl Overlay for RecordingOverlay {
    fn insert(&mut self, id: ButterflyId, visual: &Visual) {
        self.inserted += 1;
        self.live.insert(id, (*visual, None));
    }

    fn place(&mut self, id: ButterflyId, placement: &Placement) {
        self.placed += 1;
        if let Some((_, slot)) = self.live.get_mut(&id) {
            *slot = Some(*placement);
        }
    }

    fn remove(&mut self, id: ButterflyId) {
        if self.live.remove(&id).is_some() {
            self.removed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wingbeat_core::{Color, Vec2};

    fn visual() -> Visual {
        Visual {
            size_px: 54.0,
            opacity: 0.8,
            palette: Palette {
                start: Color::WHITE,
                end: Color::WHITE,
            },
        }
    }

    #[test]
    fn recording_overlay_tracks_lifecycle() {
        let mut overlay = RecordingOverlay::new();
        let id = ButterflyId::new();

        overlay.insert(id, &visual());
        assert_eq!(overlay.live_count(), 1);
        assert!(overlay.last_placement(id).is_none());

        let placement = Placement {
            position: Vec2::new(10.0, 20.0),
            rotation_deg: 5.0,
        };
        overlay.place(id, &placement);
        assert_eq!(overlay.last_placement(id), Some(&placement));

        overlay.remove(id);
        assert_eq!(overlay.live_count(), 0);
        assert_eq!(overlay.inserted, 1);
        assert_eq!(overlay.removed, 1);
    }

    #[test]
    fn remove_of_unknown_id_is_a_noop() {
        let mut overlay = RecordingOverlay::new();
        overlay.remove(ButterflyId::new());
        assert_eq!(overlay.removed, 0);
    }
}
