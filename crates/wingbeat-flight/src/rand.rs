//! Lightweight xorshift32 PRNG — the swarm's injectable randomness seam.
//!
//! Every random draw in the flight system routes through one `FlightRng`
//! owned by the host, so a fixed seed replays the exact same swarm.

pub struct FlightRng {
    state: u32,
}

impl FlightRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f64 / (u32::MAX as f64 + 1.0)) as f32
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns true with probability `p`
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }

    /// Returns a uniform index into a slice of length `len` (len must be > 0)
    pub fn pick_index(&mut self, len: usize) -> usize {
        ((self.next_f32() * len as f32) as usize).min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_range_bounds() {
        let mut rng = FlightRng::new(42);
        for _ in 0..1000 {
            let v = rng.range(0.0, 10.0);
            assert!((0.0..10.0).contains(&v));
        }
    }

    #[test]
    fn rng_same_seed_same_sequence() {
        let mut a = FlightRng::new(1234);
        let mut b = FlightRng::new(1234);
        for _ in 0..100 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn rng_zero_seed_is_usable() {
        let mut rng = FlightRng::new(0);
        let v = rng.next_f32();
        assert!((0.0..1.0).contains(&v));
    }

    #[test]
    fn chance_edges() {
        let mut rng = FlightRng::new(99);
        for _ in 0..1000 {
            assert!(!rng.chance(0.0));
        }
        for _ in 0..1000 {
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn pick_index_in_bounds() {
        let mut rng = FlightRng::new(7);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let i = rng.pick_index(5);
            assert!(i < 5);
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s), "all indices should be reachable");
    }
}
