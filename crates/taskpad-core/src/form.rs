use crate::config::Labels;
use crate::task::{Task, TaskDraft, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Hidden,
    Create,
    Edit(TaskId),
}

/// Add/edit form state: visibility, bound field values and edit target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    visible: bool,
    editing: Option<TaskId>,
    draft: TaskDraft,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        match (self.visible, self.editing) {
            (false, _) => FormMode::Hidden,
            (true, Some(id)) => FormMode::Edit(id),
            (true, None) => FormMode::Create,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// The add trigger only flips visibility; fields and edit target stay.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn begin_edit(&mut self, task: &Task) {
        self.editing = Some(task.id);
        self.draft = TaskDraft::from_task(task);
        self.visible = true;
    }

    pub fn cancel(&mut self) {
        self.visible = false;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.editing = None;
        self.draft = TaskDraft::default();
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
    }

    pub fn set_desc(&mut self, value: impl Into<String>) {
        self.draft.desc = value.into();
    }

    pub fn set_date(&mut self, value: impl Into<String>) {
        self.draft.date = value.into();
    }

    pub fn heading<'a>(&self, labels: &'a Labels) -> &'a str {
        if self.editing.is_some() {
            &labels.edit_heading
        } else {
            &labels.add_heading
        }
    }

    pub fn submit_label<'a>(&self, labels: &'a Labels) -> &'a str {
        if self.editing.is_some() {
            &labels.update_button
        } else {
            &labels.save_button
        }
    }
}
