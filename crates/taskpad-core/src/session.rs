use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::ActionError;
use crate::filter::{self, FilterState, StatusFilter};
use crate::form::FormController;
use crate::render::{TaskRow, render};
use crate::reorder;
use crate::store::{KvBackend, TaskStore, next_id};
use crate::task::{Task, TaskId};

/// Everything one page holds between events: the store handle, the form,
/// the active filters, the drag in progress, the description overlay and
/// the rows currently on screen.
///
/// Every action re-reads the store before acting, so the rows never need
/// to be trusted as current.
#[derive(Debug, Clone)]
pub struct Session<B, C = SystemClock> {
    store: TaskStore<B>,
    clock: C,
    config: Config,
    form: FormController,
    filter: FilterState,
    drag: Option<TaskId>,
    overlay: Option<String>,
    rows: Vec<TaskRow>,
}

impl<B: KvBackend> Session<B> {
    pub fn open(backend: B, config: Config) -> Self {
        Self::with_clock(backend, config, SystemClock)
    }
}

impl<B: KvBackend, C: Clock> Session<B, C> {
    #[tracing::instrument(skip_all, fields(key = %config.storage_key))]
    pub fn with_clock(backend: B, config: Config, clock: C) -> Self {
        let store = TaskStore::new(backend, config.storage_key.clone());
        let mut session = Self {
            store,
            clock,
            config,
            form: FormController::new(),
            filter: FilterState::default(),
            drag: None,
            overlay: None,
            rows: Vec::new(),
        };
        let tasks = session.store.load_all();
        session.show(&tasks);
        info!(count = tasks.len(), "session opened");
        session
    }

    pub fn store(&self) -> &TaskStore<B> {
        &self.store
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.store.load_all()
    }

    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn dragging(&self) -> Option<TaskId> {
        self.drag
    }

    pub fn overlay(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    pub fn form_heading(&self) -> &str {
        self.form.heading(&self.config.labels)
    }

    pub fn form_submit_label(&self) -> &str {
        self.form.submit_label(&self.config.labels)
    }

    pub fn toggle_form(&mut self) {
        self.form.toggle();
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    /// Creates a task, or rewrites the one being edited, from the form.
    ///
    /// A blank title or a vanished edit target leaves the store and the
    /// form exactly as they were.
    #[tracing::instrument(skip(self), fields(editing = ?self.form.editing()))]
    pub fn save(&mut self) -> Result<TaskId, ActionError> {
        let draft = self.form.draft().clone();
        if !draft.has_title() {
            debug!("ignoring save with empty title");
            return Err(ActionError::EmptyTitle);
        }

        let mut tasks = self.store.load_all();
        let id = match self.form.editing() {
            Some(id) => {
                let task = tasks
                    .iter_mut()
                    .find(|t| t.id == id)
                    .ok_or(ActionError::NotFound(id))?;
                task.apply_draft(&draft);
                id
            }
            None => {
                let id = next_id(&tasks, &self.clock);
                tasks.push(Task::new_pending(id, &draft));
                id
            }
        };

        self.store.save_all(&tasks)?;
        self.form.cancel();
        self.show(&tasks);
        info!(id, count = tasks.len(), "saved task");
        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    pub fn view(&mut self, id: TaskId) -> Result<(), ActionError> {
        let task = self.find(id)?;
        let text = if task.desc.is_empty() {
            self.config.empty_description.clone()
        } else {
            task.desc
        };
        self.overlay = Some(text);
        Ok(())
    }

    pub fn close_view(&mut self) {
        self.overlay = None;
    }

    #[tracing::instrument(skip(self))]
    pub fn begin_edit(&mut self, id: TaskId) -> Result<(), ActionError> {
        let task = self.find(id)?;
        self.form.begin_edit(&task);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, id: TaskId) -> Result<(), ActionError> {
        let mut tasks = self.store.load_all();
        let idx = position(&tasks, id)?;
        tasks.remove(idx);
        self.store.save_all(&tasks)?;
        self.show(&tasks);
        info!(id, remaining = tasks.len(), "deleted task");
        Ok(())
    }

    /// Returns the new completion state.
    #[tracing::instrument(skip(self))]
    pub fn toggle_complete(&mut self, id: TaskId) -> Result<bool, ActionError> {
        let mut tasks = self.store.load_all();
        let idx = position(&tasks, id)?;
        let completed = !tasks[idx].completed;
        tasks[idx].completed = completed;
        self.store.save_all(&tasks)?;
        self.show(&tasks);
        debug!(id, completed, "toggled completion");
        Ok(completed)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.refilter();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.refilter();
    }

    /// Recomputes the visible rows from the store and the active filters.
    #[tracing::instrument(skip(self))]
    pub fn refilter(&mut self) {
        let tasks = self.store.load_all();
        self.rows = render(&filter::apply(&tasks, &self.filter));
    }

    pub fn drag_start(&mut self, id: TaskId) {
        debug!(id, "drag started");
        self.drag = Some(id);
    }

    pub fn drag_end(&mut self) {
        self.drag = None;
    }

    /// Moves the dragged task into the slot `target` occupies.
    ///
    /// `Ok(false)` when nothing is being dragged or the task was dropped
    /// on itself; the drag stays armed in both cases.
    #[tracing::instrument(skip(self), fields(dragged = ?self.drag))]
    pub fn drop_on(&mut self, target: TaskId) -> Result<bool, ActionError> {
        let Some(dragged) = self.drag else {
            return Ok(false);
        };
        if dragged == target {
            return Ok(false);
        }

        let mut tasks = self.store.load_all();
        let from = position(&tasks, dragged)?;
        let to = position(&tasks, target)?;
        reorder::move_to(&mut tasks, from, to);

        self.store.save_all(&tasks)?;
        self.show(&tasks);
        self.drag = None;
        info!(dragged, target, from, to, "reordered tasks");
        Ok(true)
    }

    fn find(&self, id: TaskId) -> Result<Task, ActionError> {
        self.store
            .load_all()
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(ActionError::NotFound(id))
    }

    fn show(&mut self, tasks: &[Task]) {
        self.rows = render(tasks);
    }
}

fn position(tasks: &[Task], id: TaskId) -> Result<usize, ActionError> {
    tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or(ActionError::NotFound(id))
}
