//! Local persistence: a namespaced JSON key-value store.
//!
//! Keys follow the original save layout: `rank_<TIER>_<domain>` for the
//! per-tier domains plus one `global_player_level` key. Last write wins;
//! there is no versioning and no migration. The port trait exists so the
//! engine can run against an in-memory store in tests.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::player::Rank;

/// Storage key for a per-rank domain (`status`, `habits`, `tasks`, `vices`).
pub fn domain_key(rank: Rank, domain: &str) -> String {
    format!("rank_{}_{}", rank.letter(), domain)
}

/// Highest level reached across all tiers, shared between save slots.
pub const GLOBAL_LEVEL_KEY: &str = "global_player_level";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed stored value: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Durability port. Implementations are dumb string stores; typed access
/// goes through [`save`] and [`load`].
pub trait StoragePort {
    fn save_raw(&self, key: &str, json: &str) -> Result<(), StorageError>;
    fn load_raw(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Serialize and store a value under `key`.
pub fn save<T: Serialize>(store: &dyn StoragePort, key: &str, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.save_raw(key, &json)
}

/// Load and deserialize the value under `key`, if present.
pub fn load<T: DeserializeOwned>(store: &dyn StoragePort, key: &str) -> Result<Option<T>, StorageError> {
    match store.load_raw(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn save_raw(&self, key: &str, json: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), json.to_string());
        Ok(())
    }

    fn load_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }
}

/// File-backed store: one JSON file per key under the app data directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Store rooted at the platform data dir (`<data_dir>/o-sistema`).
    pub fn in_data_dir() -> Result<Self, StorageError> {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("o-sistema");
        Self::at(dir)
    }

    pub fn at(dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StoragePort for FileStorage {
    fn save_raw(&self, key: &str, json: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), json)?;
        Ok(())
    }

    fn load_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(json) => Ok(Some(json)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerStatus;

    #[test]
    fn keys_are_namespaced_per_rank() {
        assert_eq!(domain_key(Rank::E, "habits"), "rank_E_habits");
        assert_eq!(domain_key(Rank::S, "status"), "rank_S_status");
        assert_ne!(domain_key(Rank::E, "habits"), domain_key(Rank::D, "habits"));
    }

    #[test]
    fn memory_storage_round_trips_a_status() {
        let store = MemoryStorage::new();
        let mut status = PlayerStatus::new(Rank::D);
        status.gold = 123;

        save(&store, &domain_key(Rank::D, "status"), &status).unwrap();
        let loaded: PlayerStatus = load(&store, &domain_key(Rank::D, "status"))
            .unwrap()
            .unwrap();

        assert_eq!(loaded.gold, 123);
        assert_eq!(loaded.rank, Rank::D);
    }

    #[test]
    fn missing_key_loads_as_none() {
        let store = MemoryStorage::new();
        let loaded: Option<PlayerStatus> = load(&store, "rank_E_status").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn file_storage_round_trips_and_overwrites() {
        let dir = std::env::temp_dir().join(format!("o-sistema-test-{}", std::process::id()));
        let store = FileStorage::at(dir.clone()).unwrap();

        save(&store, GLOBAL_LEVEL_KEY, &7u32).unwrap();
        save(&store, GLOBAL_LEVEL_KEY, &9u32).unwrap();
        let level: u32 = load(&store, GLOBAL_LEVEL_KEY).unwrap().unwrap();

        assert_eq!(level, 9);
        std::fs::remove_dir_all(dir).unwrap();
    }
}
