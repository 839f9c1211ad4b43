pub mod clock;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod reorder;
pub mod render;
pub mod session;
pub mod store;
pub mod task;

pub use config::Config;
pub use error::ActionError;
pub use filter::{FilterState, StatusFilter};
pub use form::{FormController, FormMode};
pub use render::TaskRow;
pub use session::Session;
pub use store::{KvBackend, MemoryBackend, TaskStore};
pub use task::{Task, TaskDraft, TaskId};
