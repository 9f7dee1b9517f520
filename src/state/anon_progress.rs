//! Anonymous (logged-out) study progress kept in `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visitors can work through public collections without an account. Their
//! per-level counters live in one JSON blob under [`STORAGE_KEY`]:
//!
//! ```text
//! { "<collection id>": { "levels": { "<level id>": LevelProgress } } }
//! ```
//!
//! After sign-in the host page sends [`AnonymousProgress::all_progress_for_merge`]
//! to the server's merge endpoint and calls
//! [`AnonymousProgress::clear_after_merge`] for each collection it accepted.
//!
//! ERROR HANDLING
//! ==============
//! A missing or unparseable blob reads as an empty store. Inside a readable
//! blob each collection and level is parsed on its own: malformed entries
//! are skipped on read and written back untouched, so one bad entry never
//! costs the others. Write failures are logged and swallowed so a full or
//! disabled `localStorage` never breaks a study session. Counters are stored
//! exactly as the caller provides them.

#[cfg(test)]
#[path = "anon_progress_test.rs"]
mod anon_progress_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::util::local_storage::{BrowserStorage, KeyValueStore, load_json, save_json};

/// `localStorage` key holding the whole anonymous progress blob.
pub const STORAGE_KEY: &str = "study_client_anon_progress";

pub type CollectionId = i64;
pub type LevelId = i64;

/// Stored progress, keyed by collection. Ids are JSON object keys on disk.
pub type ProgressMap = BTreeMap<CollectionId, CollectionProgress>;

/// The blob as stored, before per-entry parsing.
type RawStore = serde_json::Map<String, Value>;

const LEVELS_FIELD: &str = "levels";

/// Progress for one collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionProgress {
    #[serde(default)]
    pub levels: BTreeMap<LevelId, LevelProgress>,
}

/// Attempt counters for one level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    #[serde(default)]
    pub cards_completed: i64,
    #[serde(default)]
    pub correct_answers: i64,
    #[serde(default)]
    pub total_answers: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    /// Per-card attempt records, opaque to this store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_attempts: Option<Vec<serde_json::Value>>,
}

impl LevelProgress {
    /// Whether any counter is above zero.
    pub fn has_progress(&self) -> bool {
        self.cards_completed > 0 || self.correct_answers > 0 || self.total_answers > 0
    }
}

/// Partial update for a level. `None` leaves the stored field untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LevelProgressUpdate {
    pub cards_completed: Option<i64>,
    pub correct_answers: Option<i64>,
    pub total_answers: Option<i64>,
    /// `Some(None)` clears the completion timestamp.
    pub completed_at: Option<Option<String>>,
    pub card_attempts: Option<Vec<serde_json::Value>>,
}

impl LevelProgressUpdate {
    /// Update that sets all three counters.
    pub fn counters(cards_completed: i64, correct_answers: i64, total_answers: i64) -> Self {
        Self {
            cards_completed: Some(cards_completed),
            correct_answers: Some(correct_answers),
            total_answers: Some(total_answers),
            ..Self::default()
        }
    }

    fn apply_to(self, level: &mut LevelProgress) {
        if let Some(v) = self.cards_completed {
            level.cards_completed = v;
        }
        if let Some(v) = self.correct_answers {
            level.correct_answers = v;
        }
        if let Some(v) = self.total_answers {
            level.total_answers = v;
        }
        if let Some(v) = self.completed_at {
            level.completed_at = v;
        }
        if let Some(v) = self.card_attempts {
            level.card_attempts = Some(v);
        }
    }
}

/// One collection in the merge request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeCollection {
    pub collection_id: CollectionId,
    pub level_progress: Vec<MergeLevel>,
}

/// One level in the merge request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeLevel {
    pub level_id: LevelId,
    pub cards_completed: i64,
    pub correct_answers: i64,
    pub total_answers: i64,
}

/// Parse one stored collection, skipping levels that do not parse.
///
/// `None` when the entry has no `levels` object.
fn parse_collection(value: &Value) -> Option<CollectionProgress> {
    let levels = value.get(LEVELS_FIELD)?.as_object()?;
    let levels = levels
        .iter()
        .filter_map(|(level_id, level)| Some((level_id.parse::<LevelId>().ok()?, LevelProgress::deserialize(level).ok()?)))
        .collect();
    Some(CollectionProgress { levels })
}

/// Parse every readable collection out of the raw blob.
fn parse_store(raw: &RawStore) -> ProgressMap {
    raw.iter()
        .filter_map(|(collection_id, collection)| {
            let Ok(id) = collection_id.parse::<CollectionId>() else {
                log::debug!("skipping anonymous progress entry with id {collection_id:?}");
                return None;
            };
            Some((id, parse_collection(collection)?))
        })
        .collect()
}

/// Apply `update` to one level inside the raw blob, leaving every other
/// entry as stored. A collection or level that does not parse is replaced.
fn upsert_level(
    raw: &mut RawStore,
    collection_id: CollectionId,
    level_id: LevelId,
    update: LevelProgressUpdate,
) -> Result<(), serde_json::Error> {
    let collection_key = collection_id.to_string();
    let mut collection = match raw.remove(&collection_key) {
        Some(Value::Object(map)) => map,
        _ => RawStore::new(),
    };
    let mut levels = match collection.remove(LEVELS_FIELD) {
        Some(Value::Object(map)) => map,
        _ => RawStore::new(),
    };

    let level_key = level_id.to_string();
    let mut level = levels
        .get(&level_key)
        .and_then(|v| LevelProgress::deserialize(v).ok())
        .unwrap_or_default();
    update.apply_to(&mut level);
    levels.insert(level_key, serde_json::to_value(&level)?);

    collection.insert(LEVELS_FIELD.to_owned(), Value::Object(levels));
    raw.insert(collection_key, Value::Object(collection));
    Ok(())
}

/// Flatten stored progress into the merge shape, dropping levels with no
/// progress and collections left with no levels.
pub fn merge_payload(data: &ProgressMap) -> Vec<MergeCollection> {
    data.iter()
        .filter_map(|(&collection_id, collection)| {
            let level_progress: Vec<MergeLevel> = collection
                .levels
                .iter()
                .filter(|(_, level)| level.has_progress())
                .map(|(&level_id, level)| MergeLevel {
                    level_id,
                    cards_completed: level.cards_completed,
                    correct_answers: level.correct_answers,
                    total_answers: level.total_answers,
                })
                .collect();
            (!level_progress.is_empty()).then_some(MergeCollection {
                collection_id,
                level_progress,
            })
        })
        .collect()
}

/// Anonymous progress store over a key/value backend.
#[derive(Debug, Default)]
pub struct AnonymousProgress<S> {
    store: S,
}

/// Progress store bound to the browser's `localStorage`.
pub fn use_anonymous_progress() -> AnonymousProgress<BrowserStorage> {
    AnonymousProgress::new(BrowserStorage)
}

impl<S: KeyValueStore> AnonymousProgress<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying key/value backend.
    pub fn storage(&self) -> &S {
        &self.store
    }

    fn read_raw(&self) -> RawStore {
        load_json(&self.store, STORAGE_KEY).unwrap_or_default()
    }

    fn write_raw(&self, raw: &RawStore) {
        if let Err(e) = save_json(&self.store, STORAGE_KEY, raw) {
            log::warn!("anonymous progress write failed: {e}");
        }
    }

    /// Every readable collection; empty if the blob is absent or unparseable.
    pub fn read_all(&self) -> ProgressMap {
        parse_store(&self.read_raw())
    }

    /// All levels recorded for a collection; empty when none.
    pub fn collection_levels(&self, collection_id: CollectionId) -> BTreeMap<LevelId, LevelProgress> {
        self.read_all()
            .remove(&collection_id)
            .map(|c| c.levels)
            .unwrap_or_default()
    }

    /// One level's record, if any.
    pub fn level(&self, collection_id: CollectionId, level_id: LevelId) -> Option<LevelProgress> {
        self.collection_levels(collection_id).remove(&level_id)
    }

    /// Create or update a level, writing only the fields set in `update`.
    ///
    /// New levels start with all counters at zero.
    pub fn save_level_progress(&self, collection_id: CollectionId, level_id: LevelId, update: LevelProgressUpdate) {
        let mut raw = self.read_raw();
        match upsert_level(&mut raw, collection_id, level_id, update) {
            Ok(()) => self.write_raw(&raw),
            Err(e) => log::warn!("anonymous progress update failed: {e}"),
        }
    }

    /// Everything with progress, shaped for the server merge endpoint.
    pub fn all_progress_for_merge(&self) -> Vec<MergeCollection> {
        merge_payload(&self.read_all())
    }

    /// Drop one merged collection, or the whole store when `None`.
    pub fn clear_after_merge(&self, collection_id: Option<CollectionId>) {
        match collection_id {
            Some(id) => {
                let mut raw = self.read_raw();
                raw.remove(&id.to_string());
                self.write_raw(&raw);
            }
            None => {
                if let Err(e) = self.store.remove_item(STORAGE_KEY) {
                    log::warn!("anonymous progress clear failed: {e}");
                }
            }
        }
    }
}
