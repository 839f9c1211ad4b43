use crate::task::{Task, TaskId};

/// One displayed list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub desc: String,
    pub date: String,
    pub completed: bool,
    pub title_struck: bool,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            desc: task.desc.clone(),
            date: task.date.clone(),
            completed: task.completed,
            title_struck: task.completed,
        }
    }
}

/// Builds the full replacement list for the given sequence, in order.
/// No placeholder row is produced for an empty sequence.
pub fn render(tasks: &[Task]) -> Vec<TaskRow> {
    tasks.iter().map(TaskRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::task::{Task, TaskDraft};

    #[test]
    fn empty_sequence_renders_nothing() {
        assert!(render(&[]).is_empty());
    }

    #[test]
    fn rows_follow_sequence_order_and_strike_completed() {
        let mut done = Task::new_pending(
            2,
            &TaskDraft {
                title: "Buy milk".to_string(),
                desc: "2%".to_string(),
                date: "2026-03-01".to_string(),
            },
        );
        done.completed = true;
        let open = Task::new_pending(
            1,
            &TaskDraft {
                title: "Call mom".to_string(),
                ..TaskDraft::default()
            },
        );

        let rows = render(&[done, open]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 2);
        assert!(rows[0].completed && rows[0].title_struck);
        assert_eq!(rows[0].desc, "2%");
        assert_eq!(rows[0].date, "2026-03-01");
        assert_eq!(rows[1].title, "Call mom");
        assert!(!rows[1].title_struck);
    }
}
