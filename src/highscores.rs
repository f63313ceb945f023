//! Best-score record
//!
//! Persisted to LocalStorage on the web; native builds keep it in memory.

use serde::{Deserialize, Serialize};

/// The single best run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScore {
    /// Best score
    pub score: u64,
    /// Level reached on that run
    pub level: u32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "smash_runner_high_score";

    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score beats the record
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.score
    }

    /// Replace the record if `score` beats it. Returns true on a new best.
    pub fn record(&mut self, score: u64, level: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.score = score;
        self.level = level;
        true
    }

    /// Load the record from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(record) = serde_json::from_str::<HighScore>(&json) {
                    log::info!("Loaded high score {}", record.score);
                    return record;
                }
            }
        }

        log::info!("No high score found, starting fresh");
        Self::new()
    }

    /// Save the record to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High score saved ({})", self.score);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
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
    fn test_record_only_on_improvement() {
        let mut best = HighScore::new();
        assert!(!best.record(0, 1));
        assert!(best.record(12, 2));
        assert!(!best.record(12, 3));
        assert!(!best.record(5, 4));
        assert_eq!(best, HighScore { score: 12, level: 2 });
        assert!(best.record(13, 3));
        assert_eq!(best.level, 3);
    }

    #[test]
    fn test_json_shape() {
        let best = HighScore { score: 42, level: 3 };
        let json = serde_json::to_string(&best).unwrap();
        assert_eq!(json, r#"{"score":42,"level":3}"#);
        let back: HighScore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, best);
    }
}
