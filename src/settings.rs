//! Game settings and balance
//!
//! Persisted separately from the high score in LocalStorage.

use serde::{Deserialize, Serialize};

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyPreset {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl DifficultyPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreset::Easy => "Easy",
            DifficultyPreset::Normal => "Normal",
            DifficultyPreset::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(DifficultyPreset::Easy),
            "normal" | "norm" => Some(DifficultyPreset::Normal),
            "hard" => Some(DifficultyPreset::Hard),
            _ => None,
        }
    }

    /// Lives at the start of a game
    pub fn max_lives(&self) -> u8 {
        match self {
            DifficultyPreset::Easy => 5,
            DifficultyPreset::Normal => 3,
            DifficultyPreset::Hard => 2,
        }
    }

    /// Speed multiplier added per round
    pub fn difficulty_step(&self) -> f32 {
        match self {
            DifficultyPreset::Easy => 0.05,
            DifficultyPreset::Normal => 0.1,
            DifficultyPreset::Hard => 0.15,
        }
    }

    /// Ceiling for the speed multiplier
    pub fn max_difficulty(&self) -> f32 {
        match self {
            DifficultyPreset::Easy => 2.0,
            DifficultyPreset::Normal => 3.0,
            DifficultyPreset::Hard => 4.0,
        }
    }

    /// Cars per lane at score 0
    pub fn base_obstacles_per_lane(&self) -> usize {
        match self {
            DifficultyPreset::Easy => 1,
            DifficultyPreset::Normal => 2,
            DifficultyPreset::Hard => 3,
        }
    }

    /// Cars per lane once the ramp tops out
    pub fn max_obstacles_per_lane(&self) -> usize {
        match self {
            DifficultyPreset::Easy => 3,
            DifficultyPreset::Normal => 4,
            DifficultyPreset::Hard => 5,
        }
    }

    /// Points needed for each extra car per lane
    pub fn points_per_extra_obstacle(&self) -> u32 {
        match self {
            DifficultyPreset::Easy => 4,
            DifficultyPreset::Normal => 3,
            DifficultyPreset::Hard => 2,
        }
    }
}

/// Game settings/balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty preset the values below were derived from
    pub preset: DifficultyPreset,

    // === Lives ===
    pub max_lives: u8,

    // === Speed ramp ===
    /// Speed multiplier at the start of a game
    pub base_difficulty: f32,
    /// Added to the multiplier after each collected prize
    pub difficulty_step: f32,
    pub max_difficulty: f32,

    // === Traffic density ramp ===
    pub base_obstacles_per_lane: usize,
    pub max_obstacles_per_lane: usize,
    pub points_per_extra_obstacle: u32,

    // === Pacing ===
    /// Celebration time between collecting a prize and the next round
    pub victory_delay_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(DifficultyPreset::Normal)
    }
}

impl Settings {
    /// Create settings from a difficulty preset
    pub fn from_preset(preset: DifficultyPreset) -> Self {
        Self {
            preset,
            max_lives: preset.max_lives(),
            base_difficulty: 1.0,
            difficulty_step: preset.difficulty_step(),
            max_difficulty: preset.max_difficulty(),
            base_obstacles_per_lane: preset.base_obstacles_per_lane(),
            max_obstacles_per_lane: preset.max_obstacles_per_lane(),
            points_per_extra_obstacle: preset.points_per_extra_obstacle(),
            victory_delay_secs: 1.5,
        }
    }

    /// Apply a difficulty preset (keeps pacing settings)
    pub fn apply_preset(&mut self, preset: DifficultyPreset) {
        let victory_delay_secs = self.victory_delay_secs;
        *self = Self::from_preset(preset);
        self.victory_delay_secs = victory_delay_secs;
    }

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(|s: Self| s.sanitized())
    }

    /// Copy with out-of-range values pulled back into range
    pub fn sanitized(&self) -> Self {
        let mut s = self.clone();

        if s.max_lives == 0 {
            log::warn!("max_lives must be at least 1, using 1");
            s.max_lives = 1;
        }
        if !(s.base_difficulty.is_finite() && s.base_difficulty > 0.0) {
            log::warn!("base_difficulty {} invalid, using 1.0", s.base_difficulty);
            s.base_difficulty = 1.0;
        }
        if !(s.difficulty_step.is_finite() && s.difficulty_step >= 0.0) {
            log::warn!("difficulty_step {} invalid, using 0", s.difficulty_step);
            s.difficulty_step = 0.0;
        }
        if !(s.max_difficulty.is_finite() && s.max_difficulty >= s.base_difficulty) {
            log::warn!(
                "max_difficulty {} below base, using {}",
                s.max_difficulty,
                s.base_difficulty
            );
            s.max_difficulty = s.base_difficulty;
        }
        if s.max_obstacles_per_lane < s.base_obstacles_per_lane {
            log::warn!(
                "max_obstacles_per_lane {} below base, using {}",
                s.max_obstacles_per_lane,
                s.base_obstacles_per_lane
            );
            s.max_obstacles_per_lane = s.base_obstacles_per_lane;
        }
        if s.points_per_extra_obstacle == 0 {
            log::warn!("points_per_extra_obstacle must be at least 1, using 1");
            s.points_per_extra_obstacle = 1;
        }
        if !(s.victory_delay_secs.is_finite() && s.victory_delay_secs >= 0.0) {
            log::warn!("victory_delay_secs {} invalid, using 0", s.victory_delay_secs);
            s.victory_delay_secs = 0.0;
        }

        s
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "lane_hopper_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = Self::from_json(&json) {
                    log::info!("Loaded {} settings from LocalStorage", settings.preset.as_str());
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        for preset in [
            DifficultyPreset::Easy,
            DifficultyPreset::Normal,
            DifficultyPreset::Hard,
        ] {
            assert_eq!(DifficultyPreset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(DifficultyPreset::from_str("NORM"), Some(DifficultyPreset::Normal));
        assert_eq!(DifficultyPreset::from_str("brutal"), None);
    }

    #[test]
    fn test_default_is_normal() {
        let s = Settings::default();
        assert_eq!(s.preset, DifficultyPreset::Normal);
        assert_eq!(s.max_lives, 3);
        assert_eq!(s.base_difficulty, 1.0);
    }

    #[test]
    fn test_apply_preset_keeps_pacing() {
        let mut s = Settings {
            victory_delay_secs: 0.25,
            ..Settings::default()
        };
        s.apply_preset(DifficultyPreset::Hard);
        assert_eq!(s.max_lives, 2);
        assert_eq!(s.victory_delay_secs, 0.25);
    }

    #[test]
    fn test_partial_json() {
        let s = Settings::from_json(r#"{"max_lives": 7, "preset": "Hard"}"#).unwrap();
        assert_eq!(s.max_lives, 7);
        assert_eq!(s.preset, DifficultyPreset::Hard);
        // Unspecified fields fall back to Normal defaults
        assert_eq!(s.max_obstacles_per_lane, 4);
    }

    #[test]
    fn test_bad_json() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_sanitized() {
        let s = Settings {
            max_lives: 0,
            base_difficulty: -1.0,
            max_difficulty: 0.5,
            base_obstacles_per_lane: 3,
            max_obstacles_per_lane: 1,
            points_per_extra_obstacle: 0,
            victory_delay_secs: f32::NAN,
            ..Settings::default()
        }
        .sanitized();

        assert_eq!(s.max_lives, 1);
        assert_eq!(s.base_difficulty, 1.0);
        assert_eq!(s.max_difficulty, 1.0);
        assert_eq!(s.max_obstacles_per_lane, 3);
        assert_eq!(s.points_per_extra_obstacle, 1);
        assert_eq!(s.victory_delay_secs, 0.0);
    }

    #[test]
    fn test_sanitized_leaves_valid_settings_alone() {
        let s = Settings::from_preset(DifficultyPreset::Easy);
        assert_eq!(s.sanitized(), s);
    }
}
