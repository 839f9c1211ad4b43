use serde::{Deserialize, Deserializer, Serialize};

/// Millisecond creation timestamp doubling as the stable identity key.
pub type TaskId = u64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,

    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

/// Older or hand-edited records may carry `null` where a value is expected.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The editable fields of a task, as bound to the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub desc: String,
    pub date: String,
}

impl Task {
    pub fn new_pending(id: TaskId, draft: &TaskDraft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            desc: draft.desc.trim().to_string(),
            date: draft.date.clone(),
            completed: false,
        }
    }

    /// Overwrites the editable fields, leaving `id` and `completed` alone.
    pub fn apply_draft(&mut self, draft: &TaskDraft) {
        self.title = draft.title.trim().to_string();
        self.desc = draft.desc.trim().to_string();
        self.date = draft.date.clone();
    }

    pub fn matches_query(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.desc.to_lowercase().contains(needle_lower)
    }
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            desc: task.desc.clone(),
            date: task.date.clone(),
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}
