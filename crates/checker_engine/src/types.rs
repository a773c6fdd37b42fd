use std::fmt;

pub type EntryId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictStatus {
    Indexed,
    NotIndexed,
    /// A normal simulated outcome, not an engine fault.
    Error,
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerdictStatus::Indexed => write!(f, "indexed"),
            VerdictStatus::NotIndexed => write!(f, "not indexed"),
            VerdictStatus::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: VerdictStatus,
    /// Synthetic page title, present only for `Indexed` verdicts.
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    EntryResolved {
        entry_id: EntryId,
        verdict: Verdict,
    },
    /// Emitted exactly once per batch, after the last entry resolved.
    BatchCompleted {
        total: usize,
    },
}
