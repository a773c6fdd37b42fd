use std::collections::BTreeMap;

use crate::update::count_candidates;
use crate::view_model::{AppViewModel, BatchStats, EntryRowView};

pub type EntryId = u64;

/// Upper bound on the number of URLs accepted in one submission.
pub const MAX_BATCH_SIZE: usize = 100;

/// Terminal result of one verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Indexed,
    NotIndexed,
    /// A valid simulated outcome, not a system fault.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryStatus {
    #[default]
    Pending,
    Indexed,
    NotIndexed,
    Error,
}

impl EntryStatus {
    pub fn is_terminal(self) -> bool {
        self != EntryStatus::Pending
    }
}

impl From<Outcome> for EntryStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Indexed => EntryStatus::Indexed,
            Outcome::NotIndexed => EntryStatus::NotIndexed,
            Outcome::Error => EntryStatus::Error,
        }
    }
}

/// One submitted URL under verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub url: String,
    pub status: EntryStatus,
    /// Populated only when the entry resolves `Indexed`.
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// A batch is in flight; new submissions are ignored until it completes.
    Checking,
    Completed,
}

/// Validation failure for one submission attempt. No batch is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("add at least one URL to check")]
    EmptyInput,
    #[error("at most {MAX_BATCH_SIZE} URLs per check, got {submitted}")]
    TooManyEntries { submitted: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    session: SessionState,
    // Ascending 1-based ids, so iteration order == input order.
    entries: BTreeMap<EntryId, Entry>,
    last_error: Option<SubmitError>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    /// Returns the dirty flag and clears it. Used by the app layer to skip
    /// redundant renders.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let entries: Vec<EntryRowView> = self
            .entries
            .values()
            .map(|entry| EntryRowView {
                id: entry.id,
                url: entry.url.clone(),
                status: entry.status,
                title: entry.title.clone(),
            })
            .collect();

        let mut stats = BatchStats {
            total: entries.len(),
            ..BatchStats::default()
        };
        for entry in &entries {
            match entry.status {
                EntryStatus::Pending => stats.pending += 1,
                EntryStatus::Indexed => stats.indexed += 1,
                EntryStatus::NotIndexed => stats.not_indexed += 1,
                EntryStatus::Error => stats.errors += 1,
            }
        }

        let resolved = stats.total - stats.pending;
        let progress = if stats.total == 0 {
            0.0
        } else {
            resolved as f64 / stats.total as f64
        };

        AppViewModel {
            session: self.session,
            candidate_count: count_candidates(&self.input),
            entries,
            stats,
            progress,
            last_error: self.last_error,
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
        self.mark_dirty();
    }

    pub(crate) fn set_last_error(&mut self, err: SubmitError) {
        self.last_error = Some(err);
        self.mark_dirty();
    }

    /// Replaces any previous batch with fresh pending entries and moves the
    /// session to `Checking`. Returns the `(id, url)` pairs in input order.
    pub(crate) fn begin_batch(&mut self, urls: Vec<String>) -> Vec<(EntryId, String)> {
        self.entries.clear();
        self.last_error = None;
        let mut enqueued = Vec::with_capacity(urls.len());
        for (position, url) in urls.into_iter().enumerate() {
            let id = position as EntryId + 1;
            enqueued.push((id, url.clone()));
            self.entries.insert(
                id,
                Entry {
                    id,
                    url,
                    status: EntryStatus::Pending,
                    title: None,
                },
            );
        }
        self.session = SessionState::Checking;
        self.mark_dirty();
        enqueued
    }

    /// Applies the single pending-to-terminal transition for an entry.
    ///
    /// Returns false when the entry is unknown or already terminal; the
    /// transition happens at most once.
    pub(crate) fn apply_resolution(
        &mut self,
        id: EntryId,
        outcome: Outcome,
        title: Option<String>,
    ) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        if entry.status.is_terminal() {
            return false;
        }
        entry.status = outcome.into();
        entry.title = match outcome {
            Outcome::Indexed => title,
            _ => None,
        };
        self.mark_dirty();
        true
    }

    /// One-shot `Checking` -> `Completed` transition. Returns false when the
    /// session was not checking (e.g. a stray duplicate completion).
    pub(crate) fn complete_batch(&mut self) -> bool {
        if self.session != SessionState::Checking {
            return false;
        }
        self.session = SessionState::Completed;
        self.mark_dirty();
        true
    }
}
