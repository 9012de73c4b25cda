//! Game state and core simulation types
//!
//! One `GameState` owns everything the simulation mutates; the host reads it
//! back through a borrowed `Snapshot`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::lanes::{LaneDirection, generate_lanes, obstacles_per_lane};
use super::prize::place_prize;
use super::rect::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Prize just collected, waiting out the celebration before the next round
    Victory,
    /// Out of lives, waiting for restart
    GameOver,
}

/// Player orientation (cosmetic only, never used for hit-testing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Front,
    Left,
    Right,
}

/// Hop direction requested by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// One-tile displacement in screen space (y grows down)
    pub fn offset(self, tile_size: f32) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -tile_size),
            Direction::Down => Vec2::new(0.0, tile_size),
            Direction::Left => Vec2::new(-tile_size, 0.0),
            Direction::Right => Vec2::new(tile_size, 0.0),
        }
    }

    /// Orientation shown after a hop in this direction
    pub fn facing(self) -> Facing {
        match self {
            Direction::Up | Direction::Down => Facing::Front,
            Direction::Left => Facing::Left,
            Direction::Right => Facing::Right,
        }
    }
}

/// The hopping player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub facing: Facing,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(PLAYER_START.x, PLAYER_START.y, PLAYER_SIZE, PLAYER_SIZE),
            facing: Facing::Front,
        }
    }
}

impl Player {
    /// Back to the start row, facing front
    pub fn respawn(&mut self) {
        *self = Self::default();
    }

    pub fn is_at_start(&self) -> bool {
        self.rect.pos == PLAYER_START
    }
}

/// A car on a lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    /// Lane base speed in pixels per reference frame
    pub speed: f32,
    pub direction: LaneDirection,
    /// Index into the lane table
    pub lane: usize,
    /// Sprite variant, `None` = draw a placeholder box
    pub sprite: Option<u8>,
}

impl Obstacle {
    /// Move by `dt` seconds and wrap around the field edges
    ///
    /// A car whose left edge passes the right border re-enters at `-width`; one
    /// whose right edge passes the left border re-enters at `field_width`.
    pub fn advance(&mut self, dt: f32, speed_multiplier: f32, field_width: f32) {
        self.rect.pos.x +=
            self.speed * BASE_FPS * dt * speed_multiplier * self.direction.sign();

        match self.direction {
            LaneDirection::Right if self.rect.x() > field_width => {
                self.rect.pos.x = -self.rect.width();
            }
            LaneDirection::Left if self.rect.right() < 0.0 => {
                self.rect.pos.x = field_width;
            }
            _ => {}
        }
    }
}

/// The collectible goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    pub rect: Rect,
    /// Cosmetic variant, `None` = draw a placeholder box
    pub variant: Option<u8>,
}

/// Lives, score and difficulty bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub lives: u8,
    pub score: u64,
    /// Best score seen, seeded from the persistence hook
    pub high_score: u64,
    /// Multiplier applied to every car's speed
    pub difficulty: f32,
}

/// Something that happened during a tick or command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player moved one tile
    Hopped(Direction),
    /// Hit by a car with lives to spare
    LifeLost { lives_left: u8 },
    /// Hit by a car on the last life
    GameOver { score: u64 },
    /// Prize reached
    PrizeCollected { score: u64 },
    /// High score increased (persist it)
    HighScoreRaised(u64),
    /// Celebration over, fresh layout in play
    RoundStarted { round: u32 },
    /// New game started by command
    Restarted,
}

/// Deferred Victory -> Playing transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingAdvance {
    /// Host-clock time (seconds, see `GameState::elapsed`) at which the next round starts
    pub at: f64,
    /// Round the transition was scheduled in; stale if the round changed
    pub round: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Source for prize columns and sprite picks
    pub rng: Pcg32,
    pub settings: Settings,
    pub phase: GamePhase,
    pub session: Session,
    pub player: Player,
    /// Cars, stored lane by lane
    pub obstacles: Vec<Obstacle>,
    pub prize: Prize,
    /// Bumped on every new round and restart
    pub round: u32,
    /// Host-clock seconds accumulated frame by frame (unclamped, unlike `dt`)
    pub elapsed: f64,
    pub pending: Option<PendingAdvance>,
}

impl GameState {
    /// Create a fresh game in the `Playing` phase
    pub fn new(seed: u64, settings: Settings, high_score: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), seed, settings, high_score)
    }

    /// Create a fresh game drawing randomness from `rng`
    pub fn with_rng(rng: Pcg32, seed: u64, settings: Settings, high_score: u64) -> Self {
        let settings = settings.sanitized();
        let mut state = Self {
            seed,
            rng,
            session: Session {
                lives: settings.max_lives,
                score: 0,
                high_score,
                difficulty: settings.base_difficulty,
            },
            settings,
            phase: GamePhase::Playing,
            player: Player::default(),
            obstacles: Vec::new(),
            prize: Prize {
                rect: Rect::new(PLAYER_START.x, PRIZE_Y, PRIZE_SIZE, PRIZE_SIZE),
                variant: None,
            },
            round: 0,
            elapsed: 0.0,
            pending: None,
        };

        state.regenerate_obstacles();
        state.replace_prize();
        state
    }

    /// Rebuild every lane for the current score
    pub fn regenerate_obstacles(&mut self) {
        let per_lane = obstacles_per_lane(self.session.score, &self.settings);
        self.obstacles = generate_lanes(
            &LANES,
            per_lane,
            FIELD_WIDTH,
            OBSTACLE_SPRITES,
            &mut self.rng,
        );
    }

    /// Put the prize on a new random column
    pub fn replace_prize(&mut self) {
        self.prize = place_prize(
            &mut self.rng,
            FIELD_WIDTH,
            TILE_SIZE,
            HUD_MARGIN,
            PRIZE_SIZE,
            PRIZE_Y,
            PRIZE_VARIANTS,
        );
    }

    /// Number of cars currently in `lane`
    pub fn lane_count(&self, lane: usize) -> usize {
        self.obstacles.iter().filter(|o| o.lane == lane).count()
    }

    /// Borrowed view for renderers
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: &self.player,
            obstacles: &self.obstacles,
            prize: &self.prize,
            session: &self.session,
            phase: self.phase,
            round: self.round,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub prize: &'a Prize,
    pub session: &'a Session,
    pub phase: GamePhase,
    pub round: u32,
}
