//! Flight path generation.
//!
//! Each path runs from one off-screen edge to the other through a pair of
//! randomized control points, giving an asymmetric S-curve. Endpoints and
//! control points stay inside the vertical safe zone (the upper portion of
//! the viewport); the band below it is reserved for other decoration.

use crate::config::FlightConfig;
use crate::rand::FlightRng;
use serde::{Deserialize, Serialize};
use wingbeat_core::{Vec2, Viewport};

/// Horizontal travel direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// +1 for left-to-right travel, -1 for right-to-left
    pub fn sign(self) -> f32 {
        match self {
            Direction::LeftToRight => 1.0,
            Direction::RightToLeft => -1.0,
        }
    }
}

/// A cubic bezier trajectory, fixed for a butterfly's whole life
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightPath {
    pub start: Vec2,
    pub cp1: Vec2,
    pub cp2: Vec2,
    pub end: Vec2,
    pub direction: Direction,
}

/// Generate a random trajectory across the given viewport
pub fn generate(config: &FlightConfig, viewport: Viewport, rng: &mut FlightRng) -> FlightPath {
    let direction = if rng.chance(0.5) {
        Direction::LeftToRight
    } else {
        Direction::RightToLeft
    };
    let sign = direction.sign();
    let safe_h = viewport.height * config.safe_zone;

    let start_x = match direction {
        Direction::LeftToRight => -config.start_margin,
        Direction::RightToLeft => viewport.width + config.start_margin,
    };
    let end_x = match direction {
        Direction::LeftToRight => viewport.width + config.end_margin,
        Direction::RightToLeft => -config.end_margin,
    };

    let start = Vec2::new(start_x, rng.range(config.start_y_min, safe_h));
    let end = Vec2::new(end_x, rng.range(config.end_y_min, safe_h));

    // First control point pulls forward from the start, second pulls
    // backward from the end, producing the S-curve
    let cp1 = Vec2::new(
        start.x + sign * rng.range(config.curve_offset_min, config.curve_offset_max),
        (start.y + rng.range(-config.curve_jitter, config.curve_jitter)).clamp(0.0, safe_h),
    );
    let cp2 = Vec2::new(
        end.x - sign * rng.range(config.curve_offset_min, config.curve_offset_max),
        (end.y + rng.range(-config.curve_jitter, config.curve_jitter)).clamp(0.0, safe_h),
    );

    FlightPath {
        start,
        cp1,
        cp2,
        end,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 720.0)
    }

    #[test]
    fn endpoints_are_off_screen() {
        let config = FlightConfig::default();
        let mut rng = FlightRng::new(21);
        for _ in 0..200 {
            let path = generate(&config, viewport(), &mut rng);
            assert!(
                path.start.x < 0.0 || path.start.x > viewport().width,
                "start x {} is on screen",
                path.start.x
            );
            assert!(
                path.end.x < 0.0 || path.end.x > viewport().width,
                "end x {} is on screen",
                path.end.x
            );
        }
    }

    #[test]
    fn endpoints_cross_the_viewport() {
        // Start and end must be on opposite sides so the flight fully
        // traverses the visible area
        let config = FlightConfig::default();
        let mut rng = FlightRng::new(22);
        for _ in 0..200 {
            let path = generate(&config, viewport(), &mut rng);
            match path.direction {
                Direction::LeftToRight => {
                    assert!(path.start.x < 0.0 && path.end.x > viewport().width);
                }
                Direction::RightToLeft => {
                    assert!(path.start.x > viewport().width && path.end.x < 0.0);
                }
            }
        }
    }

    #[test]
    fn all_y_coordinates_stay_in_safe_zone() {
        let config = FlightConfig::default();
        let safe_h = viewport().height * config.safe_zone;
        let mut rng = FlightRng::new(23);
        for _ in 0..500 {
            let path = generate(&config, viewport(), &mut rng);
            for y in [path.start.y, path.cp1.y, path.cp2.y, path.end.y] {
                assert!((0.0..=safe_h).contains(&y), "y {y} outside [0, {safe_h}]");
            }
        }
    }

    #[test]
    fn control_points_bend_toward_travel() {
        let config = FlightConfig::default();
        let mut rng = FlightRng::new(24);
        for _ in 0..200 {
            let path = generate(&config, viewport(), &mut rng);
            let sign = path.direction.sign();
            let forward = (path.cp1.x - path.start.x) * sign;
            let backward = (path.end.x - path.cp2.x) * sign;
            assert!((config.curve_offset_min..=config.curve_offset_max).contains(&forward));
            assert!((config.curve_offset_min..=config.curve_offset_max).contains(&backward));
        }
    }

    #[test]
    fn both_directions_occur() {
        let config = FlightConfig::default();
        let mut rng = FlightRng::new(25);
        let mut left = 0;
        let mut right = 0;
        for _ in 0..200 {
            match generate(&config, viewport(), &mut rng).direction {
                Direction::LeftToRight => left += 1,
                Direction::RightToLeft => right += 1,
            }
        }
        assert!(left > 40 && right > 40, "left={left} right={right}");
    }
}
