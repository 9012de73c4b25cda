//! Per-frame simulation step and input commands
//!
//! Core game loop: moves the cars, resolves collisions in lane order and
//! drives the Playing / Victory / GameOver phases.

use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::state::{Direction, GameEvent, GamePhase, GameState, PendingAdvance};
use crate::consts::*;

/// Discrete command from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Restart,
}

/// Advance the game by `dt` seconds, with host time moving by the same amount
pub fn tick(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    tick_timed(state, dt, f64::from(dt))
}

/// Advance motion by `dt` seconds and the host clock by `wall` seconds
///
/// Cars move by the clamped `dt`; the Victory delay is measured on `wall`.
/// Returns the events produced by this step. Only one collision is resolved
/// per tick: a car hit wins over the prize, and the first car in lane order
/// wins over the rest.
pub fn tick_timed(state: &mut GameState, dt: f32, wall: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.elapsed += wall.max(0.0);

    match state.phase {
        GamePhase::GameOver => return events,
        GamePhase::Victory => {
            fire_pending(state, &mut events);
            return events;
        }
        GamePhase::Playing => {}
    }

    let multiplier = state.session.difficulty;
    for obstacle in &mut state.obstacles {
        obstacle.advance(dt, multiplier, FIELD_WIDTH);
    }

    let player = state.player.rect;
    if let Some(lane) = state
        .obstacles
        .iter()
        .find(|o| overlaps(&player, &o.rect))
        .map(|o| o.lane)
    {
        log::debug!("Hit by a car in lane {}", lane);
        lose_life(state, &mut events);
    } else if overlaps(&player, &state.prize.rect) {
        collect_prize(state, &mut events);
    }

    events
}

/// Hop one tile if the game is running and the target stays on the field
///
/// Out-of-bounds hops are rejected outright rather than clamped.
pub fn handle_move(state: &mut GameState, direction: Direction) -> Option<GameEvent> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    let target = state.player.rect.translated(direction.offset(TILE_SIZE));
    if !target.within(FIELD_WIDTH, FIELD_HEIGHT) {
        log::trace!("Rejected {:?} hop at {:?}", direction, state.player.rect.pos);
        return None;
    }

    state.player.rect = target;
    state.player.facing = direction.facing();
    Some(GameEvent::Hopped(direction))
}

/// Start a new game from `GameOver` or abandon a pending `Victory`
///
/// Ignored while `Playing`. The high score survives; everything else resets.
pub fn handle_restart(state: &mut GameState) -> Option<GameEvent> {
    if state.phase == GamePhase::Playing {
        return None;
    }

    state.session.lives = state.settings.max_lives;
    state.session.score = 0;
    state.session.difficulty = state.settings.base_difficulty;
    state.player.respawn();
    // Invalidates any pending advance scheduled in the old round
    state.pending = None;
    state.round += 1;
    state.regenerate_obstacles();
    state.replace_prize();
    state.phase = GamePhase::Playing;

    log::info!("Restarted (high score {})", state.session.high_score);
    Some(GameEvent::Restarted)
}

/// Dispatch an input command
pub fn apply_command(state: &mut GameState, command: Command) -> Option<GameEvent> {
    match command {
        Command::Move(direction) => handle_move(state, direction),
        Command::Restart => handle_restart(state),
    }
}

fn lose_life(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.session.lives = state.session.lives.saturating_sub(1);

    if state.session.lives > 0 {
        state.player.respawn();
        state.regenerate_obstacles();
        log::debug!("Life lost, {} left", state.session.lives);
        events.push(GameEvent::LifeLost {
            lives_left: state.session.lives,
        });
        return;
    }

    state.phase = GamePhase::GameOver;
    raise_high_score(state, events);
    log::info!("Game over with score {}", state.session.score);
    events.push(GameEvent::GameOver {
        score: state.session.score,
    });
}

fn collect_prize(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.session.score += 1;
    log::debug!("Prize collected, score {}", state.session.score);
    events.push(GameEvent::PrizeCollected {
        score: state.session.score,
    });
    raise_high_score(state, events);

    state.phase = GamePhase::Victory;
    state.pending = Some(PendingAdvance {
        at: state.elapsed + f64::from(state.settings.victory_delay_secs),
        round: state.round,
    });
}

fn raise_high_score(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.session.score > state.session.high_score {
        state.session.high_score = state.session.score;
        events.push(GameEvent::HighScoreRaised(state.session.high_score));
    }
}

/// Start the next round once the celebration delay has elapsed
fn fire_pending(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let pending = match state.pending {
        Some(pending) if pending.round == state.round => pending,
        _ => {
            // Nothing live to wait for; still move off the collected prize
            state.pending = None;
            state.player.respawn();
            state.replace_prize();
            state.phase = GamePhase::Playing;
            return;
        }
    };

    if state.elapsed < pending.at {
        return;
    }

    state.pending = None;
    state.round += 1;
    state.player.respawn();
    state.replace_prize();
    state.session.difficulty = (state.session.difficulty + state.settings.difficulty_step)
        .min(state.settings.max_difficulty);
    state.regenerate_obstacles();
    state.phase = GamePhase::Playing;

    log::info!(
        "Round {} (difficulty x{:.2}, {} cars per lane)",
        state.round,
        state.session.difficulty,
        state.lane_count(0)
    );
    events.push(GameEvent::RoundStarted { round: state.round });
}
