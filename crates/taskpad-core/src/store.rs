use std::collections::{BTreeMap, BTreeSet};

use anyhow::Context;
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::task::{Task, TaskId};

/// A string key-value slot store, shaped after the browser's `localStorage`.
pub trait KvBackend {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slots: BTreeMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut backend = Self::new();
        backend.slots.insert(key.to_string(), value.to_string());
        backend
    }
}

impl KvBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The task collection, persisted as one JSON array under a single key.
#[derive(Debug, Clone)]
pub struct TaskStore<B> {
    backend: B,
    key: String,
}

impl<B: KvBackend> TaskStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Unreadable or malformed content loads as an empty collection.
    #[tracing::instrument(skip(self), fields(key = %self.key))]
    pub fn load_all(&self) -> Vec<Task> {
        let raw = match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored tasks");
                return Vec::new();
            }
            Err(error) => {
                warn!(error = %format!("{error:#}"), "failed reading stored tasks; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<Task>>>(&raw) {
            Ok(tasks) => {
                let tasks = tasks.unwrap_or_default();
                debug!(count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(error) => {
                warn!(%error, "stored tasks are malformed; treating as empty");
                Vec::new()
            }
        }
    }

    #[tracing::instrument(skip(self, tasks), fields(key = %self.key, count = tasks.len()))]
    pub fn save_all(&mut self, tasks: &[Task]) -> anyhow::Result<()> {
        let serialized = serde_json::to_string(tasks).context("failed to serialize tasks")?;
        self.backend
            .set_item(&self.key, &serialized)
            .with_context(|| format!("failed to persist tasks under `{}`", self.key))?;
        debug!("saved tasks");
        Ok(())
    }
}

/// Mints an id from the clock, bumped past every existing id so that two
/// tasks created within the same millisecond never collide. When the
/// highest stored id leaves no room above it, the smallest unused id is
/// taken instead.
pub fn next_id(tasks: &[Task], clock: &impl Clock) -> TaskId {
    let now = clock.now_millis();
    match tasks.iter().map(|task| task.id).max() {
        Some(max) if max >= now => max
            .checked_add(1)
            .unwrap_or_else(|| smallest_unused_id(tasks)),
        _ => now,
    }
}

fn smallest_unused_id(tasks: &[Task]) -> TaskId {
    let taken: BTreeSet<TaskId> = tasks.iter().map(|task| task.id).collect();
    let mut candidate = 0;
    for id in taken {
        if id != candidate {
            break;
        }
        candidate += 1;
    }
    warn!(id = candidate, "id space exhausted above stored ids; reusing a gap");
    candidate
}
