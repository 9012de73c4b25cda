//! Host-facing game aggregate
//!
//! Owns the simulation state, the frame clock and the high score store. The
//! host calls `frame` once per animation frame and `handle_command` for each
//! input; both run on the same thread so no locking is involved.

use crate::highscores::HighScoreStore;
use crate::settings::{DifficultyPreset, Settings};
use crate::sim::{Command, FrameClock, GameEvent, GameState, Snapshot, apply_command, tick_timed};

/// Game instance holding all state
#[derive(Debug)]
pub struct Game<S: HighScoreStore> {
    state: GameState,
    clock: FrameClock,
    store: S,
}

impl<S: HighScoreStore> Game<S> {
    pub fn new(seed: u64, settings: Settings, store: S) -> Self {
        let high_score = store.load();
        log::info!(
            "New game (seed {}, {} preset, high score {})",
            seed,
            settings.preset.as_str(),
            high_score
        );
        Self {
            state: GameState::new(seed, settings, high_score),
            clock: FrameClock::new(),
            store,
        }
    }

    /// Advance to the given frame timestamp (milliseconds)
    ///
    /// Motion uses the clamped step; the Victory delay follows the host clock.
    pub fn frame(&mut self, timestamp_ms: f64) -> Vec<GameEvent> {
        let step = self.clock.step(timestamp_ms);
        let events = tick_timed(&mut self.state, step.dt, step.wall);
        self.persist(&events);
        events
    }

    /// Apply one input command
    pub fn handle_command(&mut self, command: Command) -> Option<GameEvent> {
        let event = apply_command(&mut self.state, command);
        self.persist(event.as_slice());
        event
    }

    /// Switch difficulty preset, persist it and start a fresh game
    ///
    /// The high score carries over.
    pub fn change_preset(&mut self, preset: DifficultyPreset) {
        let mut settings = self.state.settings.clone();
        settings.apply_preset(preset);
        settings.save();

        let seed = self.state.seed.wrapping_add(1);
        let high_score = self.state.session.high_score;
        self.state = GameState::new(seed, settings, high_score);
        log::info!("Switched to {} preset", preset.as_str());
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Restart the frame clock (e.g. after the tab was hidden)
    pub fn resync_clock(&mut self) {
        self.clock.reset();
    }

    fn persist(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::HighScoreRaised(score) = *event {
                self.store.save(score);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryStore;
    use crate::sim::{Direction, GamePhase};

    fn game() -> Game<MemoryStore> {
        let mut game = Game::new(7, Settings::default(), MemoryStore::new(2));
        game.state_mut().obstacles.clear();
        game
    }

    #[test]
    fn test_loads_high_score() {
        let game = game();
        assert_eq!(game.snapshot().session.high_score, 2);
    }

    #[test]
    fn test_first_frame_moves_nothing() {
        let mut game = Game::new(7, Settings::default(), MemoryStore::default());
        let before = game.state().obstacles.clone();
        game.frame(10_000.0);
        assert_eq!(game.state().obstacles, before);
        game.frame(10_016.0);
        assert_ne!(game.state().obstacles, before);
    }

    #[test]
    fn test_high_score_written_only_when_beaten() {
        let mut game = game();
        game.frame(0.0);

        for expected in 1..=3u64 {
            let player = game.state().player.rect;
            game.state_mut().prize.rect = player;
            game.frame(expected as f64 * 10_000.0);
            assert_eq!(game.state().session.score, expected);
            // Let the celebration run out
            for i in 1..=40 {
                game.frame(expected as f64 * 10_000.0 + i as f64 * 50.0);
            }
            game.state_mut().obstacles.clear();
            assert_eq!(game.state().phase, GamePhase::Playing);
        }

        // Scores 1 and 2 did not beat the stored 2
        assert_eq!(game.store().score, 3);
        assert_eq!(game.store().writes, 1);
    }

    #[test]
    fn test_victory_lasts_configured_time_at_low_frame_rate() {
        let mut game = game();
        let delay_ms = f64::from(game.state().settings.victory_delay_secs) * 1000.0;
        game.frame(0.0);
        let player = game.state().player.rect;
        game.state_mut().prize.rect = player;
        game.frame(500.0);
        assert_eq!(game.state().phase, GamePhase::Victory);

        // Two frames per second
        let mut now = 500.0;
        while game.state().phase == GamePhase::Victory && now < 20_000.0 {
            now += 500.0;
            game.frame(now);
        }
        let lasted = now - 500.0;
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert!(lasted >= delay_ms && lasted <= delay_ms + 500.0, "lasted {} ms", lasted);
    }

    #[test]
    fn test_change_preset_starts_fresh_game() {
        let mut game = game();
        game.state_mut().settings.victory_delay_secs = 0.5;
        game.state_mut().session.score = 5;
        game.state_mut().session.high_score = 9;

        game.change_preset(DifficultyPreset::Hard);

        let state = game.state();
        assert_eq!(state.settings.preset, DifficultyPreset::Hard);
        assert_eq!(state.session.lives, DifficultyPreset::Hard.max_lives());
        assert_eq!(state.session.score, 0);
        assert_eq!(state.session.high_score, 9);
        assert_eq!(state.settings.victory_delay_secs, 0.5);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(
            state.lane_count(0),
            DifficultyPreset::Hard.base_obstacles_per_lane()
        );
    }

    #[test]
    fn test_commands() {
        let mut game = game();
        let start = game.snapshot().player.rect.pos;
        assert_eq!(
            game.handle_command(Command::Move(Direction::Up)),
            Some(GameEvent::Hopped(Direction::Up))
        );
        assert_ne!(game.snapshot().player.rect.pos, start);
        assert_eq!(game.handle_command(Command::Restart), None);
    }

    #[test]
    fn test_resync_clock() {
        let mut game = game();
        game.frame(0.0);
        game.resync_clock();
        game.state_mut().obstacles.clear();
        let elapsed = game.state().elapsed;
        game.frame(60_000.0);
        assert_eq!(game.state().elapsed, elapsed);
    }
}
