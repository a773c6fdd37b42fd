use crate::view_model::BatchStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand a validated batch to the engine for sequential verification.
    RunBatch {
        entries: Vec<(crate::EntryId, String)>,
    },
    /// Surface a user-visible notification.
    Notify(Notice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    EmptyInput,
    TooManyEntries { submitted: usize },
    CheckCompleted { stats: BatchStats },
}
