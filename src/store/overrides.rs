use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::storage::Storage;

/// Storage key for the override map. Bump the suffix when the format changes.
pub const STORAGE_KEY: &str = "kancolle_user_data_v8";

/// One of the three per-ship user flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Flag {
    NotOwned,
    LevelingDone,
    RemodelDone,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Flag::NotOwned, Flag::LevelingDone, Flag::RemodelDone];

    /// Field name in the persisted format
    pub fn key(&self) -> &'static str {
        match self {
            Flag::NotOwned => "notOwned",
            Flag::LevelingDone => "levelingDone",
            Flag::RemodelDone => "remodelDone",
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// User-set flags for one ship
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverrideEntry {
    #[serde(skip_serializing_if = "is_false")]
    pub not_owned: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub leveling_done: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub remodel_done: bool,
}

impl OverrideEntry {
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::NotOwned => self.not_owned,
            Flag::LevelingDone => self.leveling_done,
            Flag::RemodelDone => self.remodel_done,
        }
    }

    pub fn flip(&mut self, flag: Flag) {
        let field = match flag {
            Flag::NotOwned => &mut self.not_owned,
            Flag::LevelingDone => &mut self.leveling_done,
            Flag::RemodelDone => &mut self.remodel_done,
        };
        *field = !*field;
    }
}

/// Sparse map from ship id to flags. Holds no reference to catalog records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides {
    entries: BTreeMap<String, OverrideEntry>,
}

impl Overrides {
    /// Entry for `id`, or all-false defaults
    pub fn get(&self, id: &str) -> OverrideEntry {
        self.entries.get(id).copied().unwrap_or_default()
    }

    pub fn is_remodel_done(&self, id: &str) -> bool {
        self.get(id).remodel_done
    }

    /// Flip one flag, creating the entry if absent. Returns the new value.
    pub fn toggle(&mut self, id: &str, flag: Flag) -> bool {
        let entry = self.entries.entry(id.to_string()).or_default();
        entry.flip(flag);
        entry.get(flag)
    }

    /// Number of ids with an entry, including entries whose flags are all false again
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OverrideEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// Decode a persisted map. Any decode error yields an empty map.
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(overrides) => overrides,
            Err(e) => {
                debug!(error = %e, "discarding unreadable override state");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Override map bound to durable storage. Every toggle rewrites the whole map.
pub struct OverrideStore<S: Storage> {
    overrides: Overrides,
    storage: S,
    key: String,
}

impl<S: Storage> OverrideStore<S> {
    /// Load state from storage under the default key
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, STORAGE_KEY)
    }

    pub fn open_with_key(storage: S, key: &str) -> Self {
        let overrides = storage
            .read(key)
            .map(|text| Overrides::from_json(&text))
            .unwrap_or_default();

        Self {
            overrides,
            storage,
            key: key.to_string(),
        }
    }

    pub fn get(&self, id: &str) -> OverrideEntry {
        self.overrides.get(id)
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Flip a flag and persist the full map. Write failures are not reported.
    pub fn toggle(&mut self, id: &str, flag: Flag) -> bool {
        let value = self.overrides.toggle(id, flag);
        self.persist();
        value
    }

    fn persist(&mut self) {
        let result = self
            .overrides
            .to_json()
            .map_err(anyhow::Error::from)
            .and_then(|json| self.storage.write(&self.key, &json));

        if let Err(e) = result {
            debug!(key = %self.key, error = %format!("{:#}", e), "failed to persist overrides");
        }
    }
}
