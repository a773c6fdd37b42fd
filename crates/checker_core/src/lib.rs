//! Checker core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, Notice};
pub use msg::Msg;
pub use state::{
    AppState, Entry, EntryId, EntryStatus, Outcome, SessionState, SubmitError, MAX_BATCH_SIZE,
};
pub use update::{count_candidates, update};
pub use view_model::{AppViewModel, BatchStats, EntryRowView, StatusFilter};
