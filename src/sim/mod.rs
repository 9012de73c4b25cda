//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform code:
//! - Frame time arrives as an explicit `dt`
//! - Seeded RNG only
//! - Stable iteration order (obstacles stored lane by lane)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod lanes;
pub mod prize;
pub mod rect;
pub mod state;
pub mod tick;

pub use clock::{FrameClock, FrameStep};
pub use collision::overlaps;
pub use lanes::{LaneDirection, LaneSpec, generate_lanes, obstacles_per_lane};
pub use prize::{place_prize, prize_columns};
pub use rect::Rect;
pub use state::{
    Direction, Facing, GameEvent, GamePhase, GameState, Obstacle, PendingAdvance, Player, Prize,
    Session, Snapshot,
};
pub use tick::{Command, apply_command, handle_move, handle_restart, tick, tick_timed};
