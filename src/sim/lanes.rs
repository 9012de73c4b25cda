//! Lane layout and obstacle generation
//!
//! Each lane is a horizontal conveyor: every car in it shares a row, a base
//! speed and a heading. Layouts are rebuilt wholesale at the start of a game,
//! after a lost life and at every new round.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Obstacle;
use crate::consts::{OBSTACLE_HEIGHT, OBSTACLE_WIDTH};
use crate::settings::Settings;

/// Heading of every car in a lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaneDirection {
    /// Moves toward +x, re-enters from the left
    Right,
    /// Moves toward -x, re-enters from the right
    Left,
}

impl LaneDirection {
    /// +1 for `Right`, -1 for `Left`
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            LaneDirection::Right => 1.0,
            LaneDirection::Left => -1.0,
        }
    }
}

/// Static description of one lane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneSpec {
    /// Row (top edge of the cars)
    pub y: f32,
    /// Pixels per reference frame
    pub speed: f32,
    pub direction: LaneDirection,
}

impl LaneSpec {
    pub const fn new(y: f32, speed: f32, direction: LaneDirection) -> Self {
        Self {
            y,
            speed,
            direction,
        }
    }
}

/// Score-driven difficulty ramp: fewer cars per lane early on
pub fn obstacles_per_lane(score: u64, settings: &Settings) -> usize {
    let step = settings.points_per_extra_obstacle.max(1) as u64;
    let extra = (score / step) as usize;
    settings
        .base_obstacles_per_lane
        .saturating_add(extra)
        .min(settings.max_obstacles_per_lane)
}

/// Build every lane's cars, evenly spaced with equal gaps
///
/// `gap = (field_width - n * width) / (n + 1)` and car `i` starts at
/// `gap + i * (width + gap)`. The count is capped at what fits in the field,
/// so cars within a lane never start overlapping. `sprite_variants == 0`
/// leaves every car without a sprite.
pub fn generate_lanes<R: Rng>(
    lanes: &[LaneSpec],
    per_lane: usize,
    field_width: f32,
    sprite_variants: u8,
    rng: &mut R,
) -> Vec<Obstacle> {
    let fits = (field_width / OBSTACLE_WIDTH).floor().max(0.0) as usize;
    let count = per_lane.min(fits);
    let gap = (field_width - count as f32 * OBSTACLE_WIDTH) / (count as f32 + 1.0);

    let mut obstacles = Vec::with_capacity(lanes.len() * count);
    for (lane_index, lane) in lanes.iter().enumerate() {
        // One look per lane
        let sprite = (sprite_variants > 0).then(|| rng.random_range(0..sprite_variants));
        for i in 0..count {
            let x = gap + i as f32 * (OBSTACLE_WIDTH + gap);
            obstacles.push(Obstacle {
                rect: Rect::new(x, lane.y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
                speed: lane.speed,
                direction: lane.direction,
                lane: lane_index,
                sprite,
            });
        }
    }

    log::debug!(
        "Generated {} lanes with {} cars each",
        lanes.len(),
        count
    );
    obstacles
}
