//! Wing gradient palettes.
//!
//! A butterfly picks one gradient pair at spawn and keeps it for life.

use crate::rand::FlightRng;
use serde::{Deserialize, Serialize};
use wingbeat_core::{lerp, Color};

/// A two-stop wing gradient
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub start: Color,
    pub end: Color,
}

impl Palette {
    /// Sample the gradient at `t` in [0, 1], for renderers that need
    /// intermediate stops
    pub fn sample(&self, t: f32) -> Color {
        Color::new(
            lerp(self.start.r, self.end.r, t),
            lerp(self.start.g, self.end.g, t),
            lerp(self.start.b, self.end.b, t),
            lerp(self.start.a, self.end.a, t),
        )
    }
}

// blush->lavender, pink->sky, peach->rose, mint->sky, warm->vivid rose
const PALETTE_HEX: [(u32, u32); 5] = [
    (0xFFD1DC, 0xCAA6FF),
    (0xFFB3C6, 0xA0DCFF),
    (0xFFD6A5, 0xFF8FAB),
    (0xC7F9CC, 0xA0DCFF),
    (0xFFE6A7, 0xFF6B9A),
];

/// Pick one gradient uniformly at random
pub fn pick(rng: &mut FlightRng) -> Palette {
    let (a, b) = PALETTE_HEX[rng.pick_index(PALETTE_HEX.len())];
    Palette {
        start: Color::from_hex(a),
        end: Color::from_hex(b),
    }
}
