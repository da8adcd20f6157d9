//! Bounded daily progress history and its persistence.
//!
//! The history is kept as six index-aligned sequences, which is also the shape
//! written to storage under [`PROGRESS_KEY`]. Older stored histories may lack
//! the `exercises` and `durations` sequences; those are migrated once when
//! loading.

use serde::{Deserialize, Serialize};

use crate::storage::{PROGRESS_KEY, Storage, StorageError};

/// Maximum number of days kept in the history.
pub const MAX_ENTRIES: usize = 7;

/// One day's logged progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRecord {
    pub date: String,
    pub weight: f64,
    pub workout_type: String,
    pub calories_burned: u32,
    pub exercises: Vec<String>,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    Empty,
    Populated(usize),
}

/// Six parallel sequences, oldest first, never longer than [`MAX_ENTRIES`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgressHistory {
    dates: Vec<String>,
    weights: Vec<f64>,
    workouts: Vec<String>,
    calories: Vec<u32>,
    exercises: Vec<Vec<String>>,
    durations: Vec<u32>,
}

/// Layout of stored histories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// Only dates, weights, workouts and calories.
    V1,
    /// Adds per-record exercises and durations.
    V2,
}

/// Stored shape, tolerant of every layout written so far.
///
/// Weights and durations may be `null` when a form field did not parse.
#[derive(Debug, Deserialize)]
struct StoredProgress {
    #[serde(default)]
    dates: Vec<String>,
    #[serde(default)]
    weights: Vec<Option<f64>>,
    #[serde(default)]
    workouts: Vec<String>,
    #[serde(default)]
    calories: Vec<u32>,
    exercises: Option<Vec<Vec<String>>>,
    durations: Option<Vec<Option<u32>>>,
}

impl StoredProgress {
    fn version(&self) -> SchemaVersion {
        if self.exercises.is_some() && self.durations.is_some() {
            SchemaVersion::V2
        } else {
            SchemaVersion::V1
        }
    }

    /// Bring any stored layout to the current one.
    ///
    /// Sequences are aligned on their newest entries: the four core
    /// sequences are cut to the shortest one, and the per-record exercise and
    /// duration sequences are padded at the front (or cut) to match.
    fn migrate(self) -> ProgressHistory {
        let version = self.version();
        let len = self
            .dates
            .len()
            .min(self.weights.len())
            .min(self.workouts.len())
            .min(self.calories.len());

        let weights = self.weights.into_iter().map(|w| w.unwrap_or(f64::NAN));
        let durations = self
            .durations
            .unwrap_or_default()
            .into_iter()
            .map(|d| d.unwrap_or(0));

        let mut history = ProgressHistory {
            dates: keep_last(self.dates, len),
            weights: keep_last(weights.collect(), len),
            workouts: keep_last(self.workouts, len),
            calories: keep_last(self.calories, len),
            exercises: align_tail(self.exercises.unwrap_or_default(), len),
            durations: align_tail(durations.collect(), len),
        };
        history.trim();
        if version == SchemaVersion::V1 {
            log::info!(
                "Migrated stored progress from {:?} ({} records)",
                version,
                history.len()
            );
        }
        history
    }
}

fn keep_last<T>(mut values: Vec<T>, len: usize) -> Vec<T> {
    if values.len() > len {
        values.drain(..values.len() - len);
    }
    values
}

fn align_tail<T: Default + Clone>(values: Vec<T>, len: usize) -> Vec<T> {
    if values.len() >= len {
        return keep_last(values, len);
    }
    let mut padded = vec![T::default(); len - values.len()];
    padded.extend(values);
    padded
}

impl ProgressHistory {
    /// Parse a stored history, migrating older layouts.
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        let stored: StoredProgress = serde_json::from_str(data)?;
        Ok(stored.migrate())
    }

    /// Restore the history from storage. Missing or corrupt data loads empty.
    pub fn load(storage: &dyn Storage) -> Self {
        let Some(data) = storage.get_item(PROGRESS_KEY) else {
            return Self::default();
        };
        match Self::from_json(&data) {
            Ok(history) => {
                log::info!("Loaded {} progress records", history.len());
                history
            }
            Err(e) => {
                log::warn!("Discarding unreadable progress data: {e}");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Overwrite the stored history with this one.
    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        storage.set_item(PROGRESS_KEY, &self.to_json()?)
    }

    /// Append `record` and drop the oldest entries beyond [`MAX_ENTRIES`].
    pub fn push(&mut self, record: ProgressRecord) {
        self.dates.push(record.date);
        self.weights.push(record.weight);
        self.workouts.push(record.workout_type);
        self.calories.push(record.calories_burned);
        self.exercises.push(record.exercises);
        self.durations.push(record.duration_minutes);
        self.trim();
        debug_assert!(self.is_aligned());
    }

    /// Append, trim and persist in one step.
    pub fn record_progress(
        &mut self,
        record: ProgressRecord,
        storage: &mut dyn Storage,
    ) -> Result<(), StorageError> {
        log::info!("Recording progress for {}", record.date);
        self.push(record);
        self.save(storage)
    }

    // All six sequences are trimmed together or not at all.
    fn trim(&mut self) {
        if self.dates.len() <= MAX_ENTRIES {
            return;
        }
        let excess = self.dates.len() - MAX_ENTRIES;
        self.dates.drain(..excess);
        self.weights.drain(..excess);
        self.workouts.drain(..excess);
        self.calories.drain(..excess);
        self.exercises.drain(..excess);
        self.durations.drain(..excess);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn state(&self) -> HistoryState {
        if self.is_empty() {
            HistoryState::Empty
        } else {
            HistoryState::Populated(self.len())
        }
    }

    /// True when every sequence has the same length.
    pub fn is_aligned(&self) -> bool {
        let n = self.dates.len();
        self.weights.len() == n
            && self.workouts.len() == n
            && self.calories.len() == n
            && self.exercises.len() == n
            && self.durations.len() == n
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn workouts(&self) -> &[String] {
        &self.workouts
    }

    pub fn calories(&self) -> &[u32] {
        &self.calories
    }

    pub fn exercises(&self) -> &[Vec<String>] {
        &self.exercises
    }

    pub fn durations(&self) -> &[u32] {
        &self.durations
    }

    pub fn record(&self, index: usize) -> Option<ProgressRecord> {
        Some(ProgressRecord {
            date: self.dates.get(index)?.clone(),
            weight: *self.weights.get(index)?,
            workout_type: self.workouts.get(index)?.clone(),
            calories_burned: *self.calories.get(index)?,
            exercises: self.exercises.get(index)?.clone(),
            duration_minutes: *self.durations.get(index)?,
        })
    }

    /// Records oldest first.
    pub fn records(&self) -> Vec<ProgressRecord> {
        (0..self.len()).filter_map(|i| self.record(i)).collect()
    }
}
