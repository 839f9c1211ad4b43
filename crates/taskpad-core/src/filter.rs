use tracing::debug;

use crate::task::Task;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum StatusFilter {
  #[default]
  All,
  Completed,
  Pending
}

impl StatusFilter {
  /// Unknown selector values mean
  /// "all".
  pub fn from_selector(
    value: &str
  ) -> Self {
    match value {
      | "completed" => Self::Completed,
      | "pending" => Self::Pending,
      | _ => Self::All
    }
  }

  pub fn selector_value(
    self
  ) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Completed => "completed",
      | Self::Pending => "pending"
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Completed => {
        task.completed
      }
      | Self::Pending => !task.completed
    }
  }
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct FilterState {
  pub query:  String,
  pub status: StatusFilter
}

impl FilterState {
  pub fn matches(
    &self,
    needle_lower: &str,
    task: &Task
  ) -> bool {
    if !needle_lower.is_empty()
      && !task.matches_query(needle_lower)
    {
      return false;
    }
    self.status.matches(task)
  }
}

/// Case-insensitive substring search
/// over title and description, then the
/// status selector; both must hold.
#[tracing::instrument(skip(tasks))]
pub fn apply(
  tasks: &[Task],
  filter: &FilterState
) -> Vec<Task> {
  let needle = filter.query.to_lowercase();
  let out: Vec<Task> = tasks
    .iter()
    .filter(|task| {
      filter.matches(&needle, task)
    })
    .cloned()
    .collect();
  debug!(
    total = tasks.len(),
    visible = out.len(),
    "applied filters"
  );
  out
}
