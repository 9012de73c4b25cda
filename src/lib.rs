//! Lane Hopper - A lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Simulation (obstacle motion, collisions, lives/score state machine)
//! - `game`: Host-facing aggregate driven by frame timestamps and commands
//! - `settings`: Data-driven game balance
//! - `highscores`: High score persistence hook

pub mod game;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::{HighScoreStore, MemoryStore};
pub use settings::{DifficultyPreset, Settings};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    use crate::sim::{LaneDirection, LaneSpec};

    /// Reference frame rate the per-frame speed constants were tuned at
    pub const BASE_FPS: f32 = 60.0;
    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 400.0;
    /// Grid unit the player hops by
    pub const TILE_SIZE: f32 = 50.0;

    /// Player defaults - starts centered on the bottom row
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_START: Vec2 = Vec2::new(
        (FIELD_WIDTH - PLAYER_SIZE) / 2.0,
        FIELD_HEIGHT - PLAYER_SIZE - 5.0,
    );

    /// Obstacle (car) dimensions
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const OBSTACLE_HEIGHT: f32 = 40.0;

    /// Prize sits on the top row of the player's grid
    pub const PRIZE_SIZE: f32 = 40.0;
    pub const PRIZE_Y: f32 = 5.0;
    /// Left strip of the top row reserved for the lives/score HUD
    pub const HUD_MARGIN: f32 = 120.0;

    /// Cosmetic variant counts (0 = no sprites, renderer draws placeholders)
    pub const PRIZE_VARIANTS: u8 = 3;
    pub const OBSTACLE_SPRITES: u8 = 4;

    /// Road lanes, bottom to top
    pub const LANES: [LaneSpec; 5] = [
        LaneSpec::new(300.0, 2.0, LaneDirection::Right),
        LaneSpec::new(250.0, 3.0, LaneDirection::Left),
        LaneSpec::new(200.0, 2.5, LaneDirection::Right),
        LaneSpec::new(150.0, 3.5, LaneDirection::Left),
        LaneSpec::new(100.0, 2.2, LaneDirection::Right),
    ];
}
