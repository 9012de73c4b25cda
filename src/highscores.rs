//! High score persistence
//!
//! A single best score, stored as a plain decimal integer in LocalStorage.

/// Read/write hook for the persisted high score
pub trait HighScoreStore {
    /// Best score from previous sessions (0 if none)
    fn load(&self) -> u64;
    /// Called whenever the high score increases
    fn save(&mut self, score: u64);
}

/// In-memory store (native builds and tests)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    pub score: u64,
    /// Number of `save` calls seen
    pub writes: u32,
}

impl MemoryStore {
    pub fn new(score: u64) -> Self {
        Self { score, writes: 0 }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.score
    }

    fn save(&mut self, score: u64) {
        self.score = score;
        self.writes += 1;
    }
}

/// Parse a stored value; anything but a non-negative integer reads as 0
pub fn parse_stored(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0)
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "lane_hopper_high_score";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn load(&self) -> u64 {
        let raw = Self::storage().and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        let score = parse_stored(raw.as_deref());
        log::info!("Loaded high score {}", score);
        score
    }

    fn save(&mut self, score: u64) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(Self::STORAGE_KEY, &score.to_string());
            log::info!("High score saved ({})", score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new(5);
        assert_eq!(store.load(), 5);
        store.save(9);
        assert_eq!(store.load(), 9);
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_parse_stored() {
        assert_eq!(parse_stored(Some("42")), 42);
        assert_eq!(parse_stored(Some(" 7\n")), 7);
        assert_eq!(parse_stored(Some("-3")), 0);
        assert_eq!(parse_stored(Some("lots")), 0);
        assert_eq!(parse_stored(None), 0);
    }
}
